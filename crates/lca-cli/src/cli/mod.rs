mod commands;
mod render;

use clap::Parser;
use lca_core::domain::LcaError;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().collect();
    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            let diagnostic = error.as_lca_error();
            eprintln!("{}", diagnostic.diagnostic_line());
            if let Some(summary_line) = diagnostic.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            diagnostic.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("saf-lca".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "saf-lca",
    about = "Life cycle assessment for DAC-to-jet Fischer-Tropsch fuel pathways"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Run the assessment for a scenario file and report the breakdowns
    Run(commands::RunArgs),
    /// Sweep electricity sources and report the sensitivity table
    Sweep(commands::SweepArgs),
    /// Write the built-in FT/DAC demonstration scenario
    DemoScenario(commands::DemoScenarioArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Run(args) => commands::run_assessment_command(args),
        CliCommand::Sweep(args) => commands::run_sweep_command(args),
        CliCommand::DemoScenario(args) => commands::run_demo_scenario_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(LcaError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<LcaError> for CliError {
    fn from(error: LcaError) -> Self {
        Self::Compute(error)
    }
}

impl CliError {
    fn as_lca_error(&self) -> LcaError {
        match self {
            Self::Usage(message) => LcaError::input_validation("INPUT.CLI_USAGE", message.clone()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => LcaError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}
