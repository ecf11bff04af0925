use crate::backend::TagList;
use crate::frontend::Frontend;
use std::io;
use std::process;

/// Builds the starting tag list from the arguments after the program name.
pub fn initial_tags(args: &[String]) -> TagList {
    TagList::from_tags(args.iter().skip(1).cloned())
}

pub fn run_cli(args: Vec<String>) -> Result<(), String> {
    let tags = initial_tags(&args);
    log::info!("starting with {} tag(s)", tags.len());

    let mut frontend = Frontend::with_tags(tags);
    let stdin = io::stdin();
    let stdout = io::stdout();
    frontend
        .run(stdin.lock(), &mut stdout.lock())
        .map_err(|e| format!("I/O error: {}", e))
}

pub fn main() {
    env_logger::Builder::from_default_env().init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(err) = run_cli(args) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
