use clap::Parser;

use deadlink::cli::{Cli, Commands};
use deadlink::fsys::{Fsys, OsFs};
use deadlink::{app, logging};

use std::io::StdinLock;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            config,
            verbose,
            quiet,
        } => {
            logging::init_logger(verbose, quiet);
            let fsys: Arc<dyn Fsys> = Arc::new(OsFs);
            // A terminal stdin means no file list was piped in
            let stdin: Option<StdinLock<'static>> = if atty::is(atty::Stream::Stdin) {
                None
            } else {
                Some(std::io::stdin().lock())
            };
            app::run_check(fsys, stdin, config.as_deref()).await
        }
        Commands::Init { dest } => app::run_init(&OsFs, &dest),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
