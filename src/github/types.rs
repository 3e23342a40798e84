use serde::Deserialize;

/// One entry of the "list repositories for a user" response.
///
/// Only the fields the language card needs are decoded; all three are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    #[serde(rename = "fork")]
    pub is_fork: bool,
    #[serde(rename = "archived")]
    pub is_archived: bool,
}

impl RepoSummary {
    /// Forks and archived repositories do not count towards language usage.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        !self.is_fork && !self.is_archived
    }
}
