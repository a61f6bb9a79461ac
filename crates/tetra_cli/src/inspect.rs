//! `tetra domain`, `tetra parse`, `tetra scalar` and `tetra not`.

use serde::Serialize;
use tetra_common::{
    logical_not, project, project_checked, Domain, Literal, Logic, LogicError, LogicResult,
    LogicVec, ScalarLiteral,
};
use tetra_diagnostics::Diagnostic;

use crate::session::Session;
use crate::{GlobalArgs, ParseArgs, ReportFormat, ScalarArgs};

/// Runs `tetra domain`.
pub fn domain(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    println!("{}", domain_summary());
    if global.verbose {
        eprintln!("   {} bit(s) of storage per element", Logic::BITS);
    }
    Ok(0)
}

fn domain_summary() -> String {
    let states: Vec<String> = Domain::states()
        .iter()
        .map(|s| s.symbol().to_string())
        .collect();
    format!("{} {{{}}}", Domain::ACTIVE, states.join(", "))
}

/// Result of `tetra parse`, printed as text or serialized as JSON.
#[derive(Debug, Serialize)]
pub struct ParseReport {
    literal: String,
    domain: Domain,
    width: u32,
    value: LogicVec,
    has_xz: bool,
    /// `None` when the vector is indeterminate and `--lossy` was not given.
    projection: Option<String>,
    signed: Option<String>,
    diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    fn to_text(&self) -> String {
        let projection = self.projection.as_deref().unwrap_or("indeterminate");
        let mut out = String::new();
        out.push_str(&format!("literal     {}\n", self.literal));
        out.push_str(&format!("width       {}\n", self.width));
        out.push_str(&format!("value       {}\n", self.value));
        out.push_str(&format!("has_xz      {}\n", self.has_xz));
        out.push_str(&format!("projection  {projection}\n"));
        if let Some(signed) = &self.signed {
            out.push_str(&format!("signed      {signed}\n"));
        }
        out
    }
}

fn build_report(args: &ParseArgs, session: &Session) -> LogicResult<ParseReport> {
    let value =
        session
            .parser
            .parse_vector(Literal::Text(&args.literal), args.width, &session.sink)?;
    let mirror = if args.lossy {
        Some(project(&value))
    } else {
        project_checked(&value)
    };

    Ok(ParseReport {
        literal: args.literal.clone(),
        domain: Domain::ACTIVE,
        width: value.width(),
        has_xz: value.has_xz(),
        projection: mirror.as_ref().map(|m| session.display.format(m)),
        signed: mirror.map(|m| m.signed().to_string()),
        value,
        diagnostics: Vec::new(),
    })
}

/// Runs `tetra parse`.
pub fn parse(args: &ParseArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let session = Session::open(global, false)?;
    let mut report = match build_report(args, &session) {
        Ok(report) => report,
        Err(e) => return Ok(session.fail(&e)),
    };

    match args.format {
        ReportFormat::Text => {
            session.flush();
            print!("{}", report.to_text());
        }
        ReportFormat::Json => {
            report.diagnostics = session.sink.take_all();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(session.exit_code())
}

/// Reads a scalar literal from the command line: an integer, `true` or `false`.
fn scalar_literal(text: &str) -> LogicResult<ScalarLiteral> {
    match text {
        "true" => Ok(ScalarLiteral::Bool(true)),
        "false" => Ok(ScalarLiteral::Bool(false)),
        _ => text
            .parse::<i64>()
            .map(ScalarLiteral::Int)
            .map_err(|_| LogicError::InvalidLiteralSyntax {
                text: text.to_string(),
                reason: "expected an integer, `true` or `false`".to_string(),
            }),
    }
}

fn eval_scalar(args: &ScalarArgs, session: &Session) -> LogicResult<Logic> {
    let literal = scalar_literal(&args.literal)?;
    session.parser.parse_scalar(literal, &session.sink)
}

/// Runs `tetra scalar`.
pub fn scalar(args: &ScalarArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let session = Session::open(global, args.strict)?;
    match eval_scalar(args, &session) {
        Ok(value) => {
            session.flush();
            println!("{value}");
            Ok(session.exit_code())
        }
        Err(e) => Ok(session.fail(&e)),
    }
}

/// Runs `tetra not`.
pub fn not(args: &ScalarArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let session = Session::open(global, args.strict)?;
    match eval_scalar(args, &session) {
        Ok(value) => {
            session.flush();
            if global.verbose {
                eprintln!("   operand {value}");
            }
            println!("{}", logical_not(value));
            Ok(session.exit_code())
        }
        Err(e) => Ok(session.fail(&e)),
    }
}
