use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;
use yield_brochure::args::Args;
use yield_brochure::cli;
use yield_brochure::error::EXIT_USAGE;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Wrong argument counts are reported before anything else happens
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", e);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            print!("{}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match cli::run(&args, |key| std::env::var(key).ok()).await {
        Ok(saved) => {
            println!("Brochure has been saved to {}", saved.path.display());
            println!("Generated Brochure:\n{}", saved.document.body_markdown);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
