//! # curlview Main Entry Point
//!
//! One-shot when a command is given or stdin is piped, interactive REPL
//! otherwise.

use anyhow::Result;
use curlview::cmd_args::CommandLineArgs;
use curlview::repl::{ReplController, TerminalLineStream};
use curlview::{cmd, config};

fn init_tracing(verbose: bool) {
    #[allow(clippy::disallowed_methods)]
    let log_level = std::env::var(config::LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| "error".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        _ if verbose => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        _ => tracing::Level::ERROR,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    init_tracing(args.verbose());

    let profile_path = config::get_profile_path();
    tracing::debug!("Loading profile '{}' from '{}'", args.profile(), profile_path);
    let profile = config::load_profile(args.profile(), &profile_path)?;
    let (parse_options, format_options) = args.resolve_options(profile.as_ref());
    tracing::debug!("Options: {:?} {:?}", parse_options, format_options);

    let input = match args.command() {
        Some(command) => Some(command.to_string()),
        None if !atty::is(atty::Stream::Stdin) => Some(cmd::read_command(std::io::stdin())?),
        None => None,
    };

    if let Some(input) = input {
        return cmd::run_once(
            &input,
            args.output(),
            &parse_options,
            &format_options,
            std::io::stdout().lock(),
        );
    }

    let mut repl = ReplController::with_io_streams(
        parse_options,
        format_options,
        TerminalLineStream::new()?,
        std::io::stdout(),
    );
    repl.run()?;

    println!("Bye!");
    Ok(())
}
