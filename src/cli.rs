use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stat-cards")]
#[command(author, version, about = "Render GitHub language and LeetCode stat cards as SVG")]
#[command(long_about = "Render self-contained SVG stat cards for a profile README.\n\n\
    The previous card is left untouched whenever a run fails.\n\n\
    Exit codes:\n  \
    0 - Card written\n  \
    1 - Fetch, data or write error\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors and hide the progress bar
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the top-languages card from public GitHub repositories
    Languages(LanguagesArgs),

    /// Render the LeetCode solved-problems card
    Leetcode(LeetcodeArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct LanguagesArgs {
    /// GitHub user whose repositories are aggregated
    #[arg(long, env = "GH_USER")]
    pub user: Option<String>,

    /// Output SVG path [default: assets/languages-card.svg]
    #[arg(short, long, env = "OUT_FILE")]
    pub output: Option<PathBuf>,

    /// Maximum number of languages shown (1-12) [default: 8]
    #[arg(long, env = "TOP_N")]
    pub top_n: Option<usize>,

    /// Hide languages below this rounded percentage [default: 1]
    #[arg(long, env = "MIN_PCT")]
    pub min_pct: Option<u32>,

    /// Hide languages below this many bytes [default: 1000]
    #[arg(long, env = "MIN_BYTES")]
    pub min_bytes: Option<u64>,

    /// Languages to hide (comma-separated, exact names; replaces the default list)
    #[arg(long, env = "DENY_LANGUAGES", value_delimiter = ',')]
    pub deny: Option<Vec<String>>,

    /// GitHub token for higher rate limits
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub REST API base URL [default: https://api.github.com]
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_base: Option<String>,

    /// JSON icon dataset merged over the built-in icons
    #[arg(long)]
    pub icons: Option<PathBuf>,

    /// Skip repositories whose languages cannot be fetched instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Per-request timeout in seconds [default: 15]
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Path to configuration file [default: .stat-cards.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct LeetcodeArgs {
    /// LeetCode username
    #[arg(long, env = "LEETCODE_USERNAME")]
    pub user: Option<String>,

    /// Output SVG path [default: assets/leetcode-card.svg]
    #[arg(short, long, env = "OUT_FILE")]
    pub output: Option<PathBuf>,

    /// GraphQL endpoint [default: https://leetcode.com/graphql]
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds [default: 15]
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Path to configuration file [default: .stat-cards.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
