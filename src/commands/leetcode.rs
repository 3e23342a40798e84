use std::path::PathBuf;

use crate::cli::LeetcodeArgs;
use crate::config::{LeetcodeConfig, LeetcodeSection};
use crate::error::Result;
use crate::http::{HttpClient, HttpOptions, ReqwestClient};
use crate::leetcode::fetch_solve_counts;
use crate::output::svg::leetcode_card;
use crate::output::write_atomic;

use super::{finish, load_file_config};

#[must_use]
pub fn run_leetcode(args: &LeetcodeArgs, updated: &str) -> i32 {
    finish(run_leetcode_impl(args, updated))
}

#[cfg(not(tarpaulin_include))]
fn run_leetcode_impl(args: &LeetcodeArgs, updated: &str) -> Result<PathBuf> {
    let file_config = load_file_config(args.config.as_deref())?;
    let config = LeetcodeConfig::resolve(overrides_from_args(args), &file_config.leetcode)?;
    let client = ReqwestClient::new(HttpOptions::default().with_timeout(config.timeout))?;

    generate_leetcode_card(&config, &client, updated)
}

pub(crate) fn overrides_from_args(args: &LeetcodeArgs) -> LeetcodeSection {
    LeetcodeSection {
        user: args.user.clone(),
        output: args.output.clone(),
        endpoint: args.endpoint.clone(),
        timeout_secs: args.timeout_secs,
    }
}

/// Fetch solve counts, render and publish the LeetCode card.
///
/// # Errors
/// Transport and data-shape errors from the endpoint, and `FileWrite` when
/// publishing fails. The output is untouched on any error.
pub fn generate_leetcode_card<C: HttpClient + ?Sized>(
    config: &LeetcodeConfig,
    client: &C,
    updated: &str,
) -> Result<PathBuf> {
    let counts = fetch_solve_counts(client, &config.endpoint, &config.user)?;
    log::debug!(
        "{}: {} easy, {} medium, {} hard",
        counts.username,
        counts.easy,
        counts.medium,
        counts.hard
    );

    write_atomic(&config.output, &leetcode_card(&counts, updated))?;
    Ok(config.output.clone())
}

#[cfg(test)]
#[path = "leetcode_tests.rs"]
mod tests;
