//! Ranking, thresholding and percentage normalization of language totals.
//!
//! The output of [`select_languages`] always sums to exactly 100 percent. Rounding
//! drift is absorbed by the top-ranked entry alone, which may over- or
//! under-state that entry by a few points.

use crate::error::{CardError, Result};
use crate::github::LanguageTotals;

pub const DEFAULT_TOP_N: usize = 8;
pub const DEFAULT_MIN_PCT: u32 = 1;
pub const DEFAULT_MIN_BYTES: u64 = 1000;

/// Largest supported `top_n`. Keeps the single-entry rounding correction
/// from ever driving the top percentage below zero.
pub const MAX_TOP_N: usize = 12;

/// Build, packaging and shell languages hidden by default.
pub const DEFAULT_DENY_LIST: &[&str] = &[
    "Dockerfile",
    "Makefile",
    "Shell",
    "PowerShell",
    "Batchfile",
    "HCL",
    "Procfile",
    "Nix",
];

/// Filtering and ranking knobs for [`select_languages`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Exact, case-sensitive language names to drop.
    pub deny: Vec<String>,
    /// Languages below this many bytes are dropped unless that would drop all.
    pub min_bytes: u64,
    /// Languages whose rounded percentage is below this are dropped.
    pub min_pct: u32,
    /// Maximum number of languages to keep.
    pub top_n: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            deny: DEFAULT_DENY_LIST.iter().map(ToString::to_string).collect(),
            min_bytes: DEFAULT_MIN_BYTES,
            min_pct: DEFAULT_MIN_PCT,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl SelectionConfig {
    /// # Errors
    /// Returns a configuration error for out-of-range values.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 || self.top_n > MAX_TOP_N {
            return Err(CardError::Config(format!(
                "top_n must be between 1 and {MAX_TOP_N}, got {}",
                self.top_n
            )));
        }
        if self.min_pct > 100 {
            return Err(CardError::Config(format!(
                "min_pct must be at most 100, got {}",
                self.min_pct
            )));
        }
        Ok(())
    }

    fn is_denied(&self, language: &str) -> bool {
        self.deny.iter().any(|d| d == language)
    }
}

/// A language chosen for display with its integer share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedLanguage {
    pub name: String,
    pub bytes: u64,
    pub pct: u32,
}

/// Rank `totals`, keep the top entries and assign percentages summing to 100.
///
/// # Errors
/// Returns [`CardError::EmptyInput`] when nothing is left to chart.
pub fn select_languages(
    totals: &LanguageTotals,
    config: &SelectionConfig,
) -> Result<Vec<SelectedLanguage>> {
    let mut ranked: Vec<(&str, u64)> = totals
        .iter()
        .filter(|&(name, bytes)| bytes > 0 && !config.is_denied(name))
        .collect();
    // Stable: equal byte counts keep discovery order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut top: Vec<(&str, u64)> = ranked
        .iter()
        .copied()
        .filter(|&(_, bytes)| bytes >= config.min_bytes)
        .collect();
    if top.is_empty() {
        top = ranked;
    }
    top.truncate(config.top_n);

    let sum = top
        .iter()
        .fold(0u64, |acc, &(_, bytes)| acc.saturating_add(bytes));
    if sum == 0 {
        return Err(CardError::EmptyInput(
            "no language bytes left after filtering".to_string(),
        ));
    }

    let mut selected: Vec<SelectedLanguage> = top
        .into_iter()
        .map(|(name, bytes)| SelectedLanguage {
            name: name.to_string(),
            bytes,
            pct: rounded_percent(bytes, sum),
        })
        .filter(|lang| lang.pct >= config.min_pct)
        .collect();

    let Some(first) = selected.first() else {
        return Err(CardError::EmptyInput(format!(
            "no language reaches {}%",
            config.min_pct
        )));
    };
    let first_pct = first.pct;

    let pct_sum: i64 = selected.iter().map(|lang| i64::from(lang.pct)).sum();
    if pct_sum != 100 {
        let drift = 100 - pct_sum;
        log::debug!(
            "Correcting rounding drift of {drift} on {}",
            selected[0].name
        );
        let adjusted = i64::from(first_pct) + drift;
        selected[0].pct = u32::try_from(adjusted.max(0)).unwrap_or(u32::MAX);
    }

    Ok(selected)
}

/// `bytes * 100 / sum`, rounded half away from zero, in exact integer math.
#[must_use]
pub fn rounded_percent(bytes: u64, sum: u64) -> u32 {
    if sum == 0 {
        return 0;
    }
    let numerator = u128::from(bytes) * 200 + u128::from(sum);
    let pct = numerator / (u128::from(sum) * 2);
    u32::try_from(pct).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
