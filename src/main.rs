use clap::Parser;

use stat_cards::cli::{Cli, Commands};
use stat_cards::commands::{generation_date, run_languages, run_leetcode};

/// Default log filter for the verbosity flags; `RUST_LOG` takes precedence.
const fn default_log_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn init_logging(cli: &Cli) {
    let env = env_logger::Env::default()
        .default_filter_or(default_log_filter(cli.verbose, cli.quiet));
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let updated = generation_date();
    let exit_code = match &cli.command {
        Commands::Languages(args) => run_languages(args, &cli, &updated),
        Commands::Leetcode(args) => run_leetcode(args, &updated),
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
