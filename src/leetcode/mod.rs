//! LeetCode GraphQL access for the solve-count card.

use serde::Deserialize;
use serde_json::json;

use crate::error::{CardError, Result};
use crate::http::HttpClient;

pub const DEFAULT_ENDPOINT: &str = "https://leetcode.com/graphql";

const PROFILE_QUERY: &str = r"
query getUserProfile($username: String!) {
  matchedUser(username: $username) {
    username
    submitStatsGlobal {
      acSubmissionNum {
        difficulty
        count
      }
    }
  }
}
";

/// Accepted solutions by difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveCounts {
    pub username: String,
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl SolveCounts {
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.easy.saturating_add(self.medium).saturating_add(self.hard)
    }
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    data: Option<ProfileData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileData {
    matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedUser {
    username: Option<String>,
    submit_stats_global: Option<SubmitStats>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStats {
    ac_submission_num: Option<Vec<DifficultyCount>>,
}

#[derive(Debug, Deserialize)]
struct DifficultyCount {
    difficulty: String,
    count: u32,
}

/// Request body for the profile query.
#[must_use]
pub fn profile_request(username: &str) -> String {
    json!({
        "query": PROFILE_QUERY,
        "variables": { "username": username },
    })
    .to_string()
}

/// Fetch accepted-solution counts for `username`.
///
/// Difficulties missing from the response count as zero. The username shown
/// is the one LeetCode returns, falling back to `username`.
///
/// # Errors
/// Transport errors propagate; a response without
/// `matchedUser.submitStatsGlobal.acSubmissionNum` is a data-shape error.
pub fn fetch_solve_counts<C: HttpClient + ?Sized>(
    client: &C,
    endpoint: &str,
    username: &str,
) -> Result<SolveCounts> {
    let body = client.post_json(endpoint, &profile_request(username))?;
    parse_solve_counts(endpoint, &body, username)
}

fn parse_solve_counts(endpoint: &str, body: &str, username: &str) -> Result<SolveCounts> {
    let response: ProfileResponse = serde_json::from_str(body)
        .map_err(|e| CardError::data_shape(endpoint, format!("invalid JSON: {e}"), body))?;

    let Some(user) = response.data.and_then(|data| data.matched_user) else {
        return Err(CardError::data_shape(
            endpoint,
            format!("no matchedUser for '{username}'"),
            body,
        ));
    };
    let Some(counts) = user
        .submit_stats_global
        .and_then(|stats| stats.ac_submission_num)
    else {
        return Err(CardError::data_shape(
            endpoint,
            "missing submitStatsGlobal.acSubmissionNum",
            body,
        ));
    };

    let count_for = |difficulty: &str| {
        counts
            .iter()
            .find(|c| c.difficulty == difficulty)
            .map_or(0, |c| c.count)
    };

    Ok(SolveCounts {
        username: user
            .username
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| username.to_string()),
        easy: count_for("Easy"),
        medium: count_for("Medium"),
        hard: count_for("Hard"),
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
