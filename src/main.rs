use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use wordtree::cli::commands::execute_command;
use wordtree::cli::output;
use wordtree::cli::{Cli, CliError};
use wordtree::config::Settings;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let code = match run(&cli) {
        Ok(()) => wordtree::exitcode::OK,
        Err(e) => {
            output::error(&e.report());
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(Some(cwd.as_path()))?;
    if !settings.color {
        colored::control::set_override(false);
    }
    execute_command(cli, settings)
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn given_search_args_when_parsed_then_prefix_and_store_set() {
        let cli = Cli::try_parse_from(["wordtree", "-s", "/tmp/w.txt", "search", "ap"]).unwrap();
        assert_eq!(cli.store.as_deref(), Some(std::path::Path::new("/tmp/w.txt")));
        assert!(matches!(
            cli.command,
            Some(wordtree::cli::Commands::Search { ref prefix }) if prefix == "ap"
        ));
    }
}
