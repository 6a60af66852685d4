use clap::Parser;
use rabbit::cli::Cli;
use rabbit::tools::{errors, logging, macros::exit_error};
use rabbit::{AdbShell, Dispatcher};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let dispatcher = Dispatcher::new(
        AdbShell::new(cli.serial.clone()),
        cli.log_config(),
        cli.app_config(),
        cli.keywords(),
    );

    if let Err(e) = dispatcher.run().await {
        match errors::fatal_message(&e) {
            Some(stderr) => exit_error(stderr.trim_end()),
            None => exit_error(format!("{:#}", e)),
        }
    }
}
