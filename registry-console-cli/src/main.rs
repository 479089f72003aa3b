use clap::Parser;
use registry_console_cli::cli::Cli;
use registry_console_cli::commands;
use registry_console_cli::infrastructure::{HttpTransport, TerminalDialogs};
use registry_console_cli::presentation::OutputFormat;
use registry_console_cli::{LogConfig, Result};
use registry_console_core::Console;
use std::rc::Rc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log = LogConfig::from_verbosity(cli.verbose);
    if cli.log_json {
        log = log.with_json();
    }
    log.init()?;

    let transport = HttpTransport::new(&cli.server)?;
    tracing::info!(server = %transport.base(), "Registry console starting");

    let dialogs = TerminalDialogs::stdin()
        .assume_yes(cli.yes)
        .with_credentials(cli.credentials());
    let console = Console::new(Rc::new(transport), Rc::new(dialogs));

    let format = OutputFormat::from_flag(cli.json);
    if let Some(output) = commands::execute(&console, cli.command, format).await? {
        println!("{output}");
    }

    Ok(())
}
