//! Process-level setup and error reporting.

/// Route panics through the log before the default hook prints them.
pub fn init_panic_handling() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        default_hook(info);
    }));
}

/// Report a startup or runtime error and exit with code 1.
pub fn handle_error(error: anyhow::Error) {
    eprintln!();
    eprintln!("Error running fontshelf:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse and validate the command line.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    let args = crate::core::cli::CliArgs::parse();
    if let Err(message) = args.validate() {
        eprintln!("{message}");
        std::process::exit(2);
    }
    args
}
