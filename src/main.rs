use std::process::ExitCode;
use clap::Parser;
use codequest::errors::ErrorHandler;
use codequest::structs::cli::Cli;
use codequest::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut runner = CommandRunner::new(cli.config);
    match runner.run_command(cli.command).await {
        Ok(code) => code,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            ExitCode::FAILURE
        }
    }
}
