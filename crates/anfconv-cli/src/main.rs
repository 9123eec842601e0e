//! anfconv - convert Boolean polynomial systems between solver formats.

mod config;
mod convert;

use anfconv_base::Error;
use anfconv_format::Format;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "anfconv")]
#[command(
    version,
    about = "Convert GF(2) polynomial systems between solver formats",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    convert: convert::ConvertArgs,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Extension table appended to the help text.
fn formats_help() -> String {
    let mut help = String::from(
        "The arguments --in and --out are mandatory.\n\
         The formats are detected by the extensions:",
    );
    for format in Format::ALL {
        let extensions = format
            .extensions()
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(", ");
        help.push_str(&format!("\n    {:<18}{extensions}", format.description()));
    }
    help
}

fn command() -> clap::Command {
    Cli::command().after_help(formats_help())
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(config::LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!("{}", command().render_help());
}

fn main() -> ExitCode {
    let parsed = command()
        .try_get_matches()
        .and_then(|matches| Cli::from_arg_matches(&matches));
    let cli = match parsed {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            println!("{}", e.render());
            print_help();
            return ExitCode::from(2);
        }
    };

    init_logging(cli.verbose);
    let config = config::CliConfig::load();

    match convert::run(&cli.convert, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<Error>() {
            Some(e) if e.wants_help() => {
                println!("{err:#}");
                print_help();
                ExitCode::from(2)
            }
            _ => {
                eprintln!("{err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_extension() {
        let help = formats_help();
        for format in Format::ALL {
            assert!(help.contains(format.description()));
            for ext in format.extensions() {
                assert!(help.contains(&format!(".{ext}")), "missing .{ext}");
            }
        }
    }

    #[test]
    fn test_command_is_well_formed() {
        command().debug_assert();
    }
}
