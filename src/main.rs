use std::path::PathBuf;
use std::process::ExitCode;

use book_inventory::interface::{cli, logging};

fn main() -> ExitCode {
    logging::init();

    let store_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(cli::DEFAULT_STORE_PATH));

    let stdin = std::io::stdin();
    match cli::run(&store_path, stdin.lock(), std::io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", cli::report(&e));
            ExitCode::FAILURE
        }
    }
}
