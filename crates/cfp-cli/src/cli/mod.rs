mod commands;
mod logging;

use cfp_core::domain::CfpError;
use clap::Parser;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().collect();

    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            let error = error.as_cfp_error();
            eprintln!("{}", error.diagnostic_line());
            eprintln!("{}", error.fatal_exit_line());
            error.exit_code()
        }
    }
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            logging::init(cli.verbose);
            dispatch_parsed(cli.command)
        }
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
    name = "mfcfp",
    version,
    about = "MODFLOW-CFP input writer and node budget reader"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Write the COC, CRCH and CFP input files described by a JSON model config
    Write(commands::WriteArgs),
    /// Append COC, CRCH and CFP registrations to an existing name file
    UpdateNam(commands::UpdateNamArgs),
    /// Extract one node's time/flow series from the list file
    Budget(commands::BudgetArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Write(args) => commands::run_write_command(args),
        CliCommand::UpdateNam(args) => commands::run_update_nam_command(args),
        CliCommand::Budget(args) => commands::run_budget_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(CfpError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<CfpError> for CliError {
    fn from(error: CfpError) -> Self {
        Self::Compute(error)
    }
}

impl CliError {
    fn as_cfp_error(&self) -> CfpError {
        match self {
            Self::Usage(message) => CfpError::input_validation("INPUT.CLI_USAGE", message.clone()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => CfpError::internal("SYS.CLI", format!("{error:#}")),
        }
    }
}
