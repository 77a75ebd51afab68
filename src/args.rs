mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};

use crate::report::ReportFormat;
use crate::search::Flat;

// Re-export errors
pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Enumerate the 9-point planes of the {-1, 0, 1}^4 lattice.
#[derive(Debug, Parser)]
#[command(name = "lattice-planes", version)]
pub struct PlanesCli {
    #[command(subcommand)]
    pub command: Command,
}

/// Parser for the subcommands of the lattice-planes binary using clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "run")]
    /// Enumerate every plane and write the report.
    Run(RunArgs),

    #[command(name = "check")]
    /// Check one candidate set of lattice indices.
    Check(CheckArgs),

    #[command(name = "lattice")]
    /// List the lattice points with their indices.
    Lattice,

    #[command(name = "example")]
    /// Display an example search config file.
    Example(ExampleArgs),
}

/// Arguments for the run command. Compiled with clap.
/// Anything given here replaces the value from the config file.
#[derive(Debug, Default, Args)]
pub struct RunArgs {
    #[arg(short, long = "cfg")]
    /// Path to a search config file (.json, .toml, .yaml or .yml).
    pub cfg_path: Option<String>,

    #[arg(short, long)]
    /// Exact check method (see the `example` command for the list).
    pub method: Option<String>,

    #[arg(short, long)]
    /// Stop after this many planes.
    pub limit: Option<usize>,

    #[arg(short, long = "output")]
    /// Write the report to this file instead of stdout.
    pub output_path: Option<String>,

    #[arg(short, long, value_enum)]
    /// Report format.
    pub format: Option<ReportFormat>,

    #[arg(short, long)]
    /// Do not print progress dots.
    pub quiet: bool,
}

/// Arguments for the check command. Compiled with clap.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(short, long)]
    /// Exact check method.
    pub method: Option<String>,

    #[arg(long, value_enum, default_value_t = Flat::Plane)]
    /// Kind of flat the points must lie in.
    pub flat: Flat,

    #[arg(required = true)]
    /// Strictly increasing lattice indices.
    pub indices: Vec<usize>,
}

/// Arguments for the example command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(short, long)]
    /// Method to show the config for (lists the methods if missing).
    pub method: Option<String>,

    #[arg(short, long, value_enum, default_value_t = CfgFormat::Yaml)]
    /// Config file format.
    pub format: CfgFormat,
}

/// Config file formats for the example command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CfgFormat {
    Yaml,
    Json,
    Toml,
}

/// Parse the command line arguments.
pub fn parse_cli_args() -> PlanesCli {
    PlanesCli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        PlanesCli::command().debug_assert();
    }

    #[test]
    fn run_flags() {
        let cli = PlanesCli::try_parse_from(["lattice-planes", "run", "-m", "tolerance", "-l", "5", "-f", "json", "-q"]).unwrap();
        match cli.command {
            Command::Run(run_args) => {
                assert_eq!(run_args.method.as_deref(), Some("tolerance"));
                assert_eq!(run_args.limit, Some(5));
                assert_eq!(run_args.format, Some(ReportFormat::Json));
                assert!(run_args.quiet);
                assert!(run_args.cfg_path.is_none());
            },
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn check_needs_indices() {
        assert!(PlanesCli::try_parse_from(["lattice-planes", "check"]).is_err());
        let cli = PlanesCli::try_parse_from(["lattice-planes", "check", "--flat", "line", "0", "40", "80"]).unwrap();
        match cli.command {
            Command::Check(check_args) => {
                assert_eq!(check_args.flat, Flat::Line);
                assert_eq!(check_args.indices, vec![0, 40, 80]);
            },
            other => panic!("expected check, got {:?}", other),
        }
    }
}
