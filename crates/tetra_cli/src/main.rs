//! Tetra CLI: inspect logic literals and values from the command line.
//!
//! `tetra domain` reports which logic domain the binary was built with,
//! `tetra parse` converts a literal into a vector and shows its projection,
//! `tetra scalar` and `tetra not` work on single bits, and `tetra op` applies
//! bitwise vector algebra.

#![warn(missing_docs)]

mod inspect;
mod op;
mod session;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Tetra, a two-state / four-state logic value toolkit.
#[derive(Parser, Debug)]
#[command(name = "tetra", version, about = "Tetra logic value toolkit")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `tetra.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the logic domain this binary was built with.
    Domain,
    /// Convert a literal into a vector and show its integer projection.
    Parse(ParseArgs),
    /// Convert a numeric or boolean literal into a single bit.
    Scalar(ScalarArgs),
    /// Logical NOT of a single-bit literal.
    Not(ScalarArgs),
    /// Apply bitwise algebra to vector literals.
    Op(OpArgs),
}

/// Arguments for `tetra parse`.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// The literal, e.g. `0b10xz`, `0xff`, `-3`.
    #[arg(allow_hyphen_values = true)]
    pub literal: String,

    /// Target vector width in bits.
    #[arg(short, long)]
    pub width: u32,

    /// Project even when the vector holds X or Z (X and Z read as 1).
    #[arg(long)]
    pub lossy: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for `tetra scalar` and `tetra not`.
#[derive(Parser, Debug)]
pub struct ScalarArgs {
    /// An integer, `true` or `false`.
    #[arg(allow_hyphen_values = true)]
    pub literal: String,

    /// Reject integers other than 0 and 1 instead of substituting X.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `tetra op`.
#[derive(Parser, Debug)]
pub struct OpArgs {
    /// The operation.
    #[arg(value_enum)]
    pub kind: OpKind,

    /// One operand for `not`, two for the others.
    #[arg(num_args = 1..=2, required = true)]
    pub operands: Vec<String>,

    /// Width every operand is parsed to.
    #[arg(short, long)]
    pub width: u32,
}

/// Bitwise vector operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OpKind {
    /// Element-wise AND.
    And,
    /// Element-wise OR.
    Or,
    /// Element-wise XOR.
    Xor,
    /// Element-wise complement.
    Not,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from the environment.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Output format for `tetra parse`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::env::var_os("TERM").is_some()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Domain => inspect::domain(&global),
        Command::Parse(ref args) => inspect::parse(args, &global),
        Command::Scalar(ref args) => inspect::scalar(args, &global),
        Command::Not(ref args) => inspect::not(args, &global),
        Command::Op(ref args) => op::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_domain() {
        let cli = Cli::parse_from(["tetra", "domain"]);
        assert!(matches!(cli.command, Command::Domain));
    }

    #[test]
    fn parse_parse_args() {
        let cli = Cli::parse_from(["tetra", "parse", "0b10xz", "--width", "4", "--lossy"]);
        match cli.command {
            Command::Parse(ref args) => {
                assert_eq!(args.literal, "0b10xz");
                assert_eq!(args.width, 4);
                assert!(args.lossy);
                assert_eq!(args.format, ReportFormat::Text);
            }
            _ => panic!("expected Parse command"),
        }
    }

    #[test]
    fn negative_literal_is_not_a_flag() {
        let cli = Cli::parse_from(["tetra", "parse", "-3", "-w", "4", "-f", "json"]);
        match cli.command {
            Command::Parse(ref args) => {
                assert_eq!(args.literal, "-3");
                assert_eq!(args.format, ReportFormat::Json);
            }
            _ => panic!("expected Parse command"),
        }
    }

    #[test]
    fn parse_scalar_strict() {
        let cli = Cli::parse_from(["tetra", "scalar", "5", "--strict"]);
        match cli.command {
            Command::Scalar(ref args) => {
                assert_eq!(args.literal, "5");
                assert!(args.strict);
            }
            _ => panic!("expected Scalar command"),
        }
    }

    #[test]
    fn parse_op() {
        let cli = Cli::parse_from(["tetra", "op", "xor", "0b1100", "0b1010", "-w", "4"]);
        match cli.command {
            Command::Op(ref args) => {
                assert_eq!(args.kind, OpKind::Xor);
                assert_eq!(args.operands, vec!["0b1100", "0b1010"]);
                assert_eq!(args.width, 4);
            }
            _ => panic!("expected Op command"),
        }
    }

    #[test]
    fn op_rejects_three_operands() {
        let result = Cli::try_parse_from(["tetra", "op", "and", "1", "2", "3", "-w", "4"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from([
            "tetra", "--quiet", "--color", "never", "--config", "x.toml", "domain",
        ]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(cli.config.as_deref(), Some("x.toml"));
    }
}
