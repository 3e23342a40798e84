use std::path::PathBuf;

use crate::cli::{Cli, LanguagesArgs};
use crate::config::{LanguagesConfig, LanguagesSection};
use crate::error::{CardError, Result};
use crate::github::{FailurePolicy, GITHUB_ACCEPT, GitHubApi, aggregate_languages};
use crate::http::{HttpClient, HttpOptions, ReqwestClient};
use crate::output::svg::LanguageCard;
use crate::output::{FetchProgress, write_atomic};
use crate::presentation::{IconRegistry, PresentationResolver};
use crate::selection::select_languages;

use super::{finish, load_file_config};

#[must_use]
pub fn run_languages(args: &LanguagesArgs, cli: &Cli, updated: &str) -> i32 {
    finish(run_languages_impl(args, cli, updated))
}

#[cfg(not(tarpaulin_include))]
fn run_languages_impl(args: &LanguagesArgs, cli: &Cli, updated: &str) -> Result<PathBuf> {
    let file_config = load_file_config(args.config.as_deref())?;
    let config = LanguagesConfig::resolve(
        overrides_from_args(args),
        args.token.clone(),
        &file_config.languages,
    )?;
    if config.token.is_none() {
        log::warn!("No GitHub token set; unauthenticated requests are heavily rate limited");
    }

    let icons = load_icons(&config)?;
    let client = ReqwestClient::new(
        HttpOptions::default()
            .with_timeout(config.timeout)
            .with_accept(GITHUB_ACCEPT)
            .with_bearer_token(config.token.clone()),
    )?;

    generate_languages_card(&config, &client, icons, cli.quiet, updated)
}

/// CLI values as a config layer; unset flags stay `None`.
pub(crate) fn overrides_from_args(args: &LanguagesArgs) -> LanguagesSection {
    LanguagesSection {
        user: args.user.clone(),
        output: args.output.clone(),
        top_n: args.top_n,
        min_pct: args.min_pct,
        min_bytes: args.min_bytes,
        deny: args.deny.clone(),
        api_base: args.api_base.clone(),
        icons: args.icons.clone(),
        policy: args.lenient.then_some(FailurePolicy::Lenient),
        timeout_secs: args.timeout_secs,
    }
}

/// Built-in icons, with the configured dataset merged on top.
pub(crate) fn load_icons(config: &LanguagesConfig) -> Result<IconRegistry> {
    let mut icons = IconRegistry::builtin()?;
    if let Some(path) = &config.icons {
        let extra = IconRegistry::load_file(path)?;
        log::debug!("Loaded {} icons from {}", extra.len(), path.display());
        icons.merge(extra);
    }
    Ok(icons)
}

/// Run the languages pipeline end to end and publish the card.
///
/// Returns the written path. Nothing is written unless every earlier stage
/// succeeded.
///
/// # Errors
/// Transport and data-shape errors from GitHub, `EmptyInput` when there is
/// nothing to chart, and `FileWrite` when publishing fails.
pub fn generate_languages_card<C: HttpClient + ?Sized>(
    config: &LanguagesConfig,
    client: &C,
    icons: IconRegistry,
    quiet: bool,
    updated: &str,
) -> Result<PathBuf> {
    let api = GitHubApi::new(client, &config.api_base)?;

    let repos = api.list_repositories(&config.user)?;
    if repos.is_empty() {
        return Err(CardError::EmptyInput(format!(
            "no public, non-fork, non-archived repositories for '{}'",
            config.user
        )));
    }
    log::info!("Aggregating languages across {} repositories", repos.len());

    let progress = FetchProgress::new(repos.len() as u64, quiet);
    let totals = aggregate_languages(&api, &config.user, &repos, config.policy, &progress)?;
    if totals.is_empty() {
        return Err(CardError::EmptyInput(
            "no language bytes reported for any repository".to_string(),
        ));
    }

    let selected = select_languages(&totals, &config.selection)?;
    log::debug!(
        "Selected: {}",
        selected
            .iter()
            .map(|lang| format!("{} {}%", lang.name, lang.pct))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let items = PresentationResolver::new(icons).resolve_all(&selected);
    let svg = LanguageCard::new(&items, updated).to_svg();

    write_atomic(&config.output, &svg)?;
    Ok(config.output.clone())
}

#[cfg(test)]
#[path = "languages_tests.rs"]
mod tests;
