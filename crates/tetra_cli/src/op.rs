//! `tetra op`: bitwise vector algebra on literals.

use tetra_common::{project_checked, Literal, LogicError, LogicResult, LogicVec};

use crate::session::Session;
use crate::{GlobalArgs, OpArgs, OpKind};

impl OpKind {
    fn name(self) -> &'static str {
        match self {
            OpKind::And => "and",
            OpKind::Or => "or",
            OpKind::Xor => "xor",
            OpKind::Not => "not",
        }
    }

    fn arity(self) -> usize {
        match self {
            OpKind::Not => 1,
            OpKind::And | OpKind::Or | OpKind::Xor => 2,
        }
    }
}

/// Runs `tetra op`.
pub fn run(args: &OpArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    check_arity(args)?;
    let session = Session::open(global, false)?;
    match evaluate(args, &session) {
        Ok(result) => {
            session.flush();
            println!("{result}");
            if global.verbose {
                match project_checked(&result) {
                    Some(m) => eprintln!("   = {}", session.display.format(&m)),
                    None => eprintln!("   = indeterminate"),
                }
            }
            Ok(session.exit_code())
        }
        Err(OpError::Logic(e)) => Ok(session.fail(&e)),
        Err(OpError::Arity(message)) => Err(message.into()),
    }
}

/// Failure of `tetra op`: a usage error or a failed conversion.
#[derive(Debug)]
enum OpError {
    Arity(String),
    Logic(LogicError),
}

impl From<LogicError> for OpError {
    fn from(err: LogicError) -> Self {
        OpError::Logic(err)
    }
}

fn check_arity(args: &OpArgs) -> Result<(), String> {
    if args.operands.len() != args.kind.arity() {
        return Err(arity_message(args));
    }
    Ok(())
}

fn arity_message(args: &OpArgs) -> String {
    format!(
        "`{}` takes {} operand(s), got {}",
        args.kind.name(),
        args.kind.arity(),
        args.operands.len()
    )
}

fn evaluate(args: &OpArgs, session: &Session) -> Result<LogicVec, OpError> {
    let operands = args
        .operands
        .iter()
        .map(|text| {
            session
                .parser
                .parse_vector(Literal::Text(text), args.width, &session.sink)
        })
        .collect::<LogicResult<Vec<_>>>()?;

    let result = match (args.kind, operands.as_slice()) {
        (OpKind::Not, [a]) => Ok(!a),
        (OpKind::And, [a, b]) => a.and(b),
        (OpKind::Or, [a, b]) => a.or(b),
        (OpKind::Xor, [a, b]) => a.xor(b),
        _ => return Err(OpError::Arity(arity_message(args))),
    };
    Ok(result?)
}
