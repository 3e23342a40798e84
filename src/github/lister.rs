use super::GitHubApi;
use super::types::RepoSummary;
use crate::error::{CardError, Result};
use crate::http::HttpClient;

/// Repositories requested per page.
pub const PAGE_SIZE: u32 = 100;

/// Hard ceiling on pages fetched for one user.
pub const MAX_PAGES: u32 = 20;

impl<C: HttpClient + ?Sized> GitHubApi<'_, C> {
    /// List the repositories owned by `user`, excluding forks and archived ones.
    ///
    /// Pages are requested in order until one comes back empty or
    /// [`MAX_PAGES`] pages have been read. The returned order is the API order.
    ///
    /// # Errors
    /// Fails on the first page that cannot be fetched or decoded.
    pub fn list_repositories(&self, user: &str) -> Result<Vec<RepoSummary>> {
        let mut repos = Vec::new();
        let mut fetched = 0usize;

        for page in 1..=MAX_PAGES {
            let batch = self.fetch_page(user, page)?;
            if batch.is_empty() {
                break;
            }
            fetched += batch.len();
            repos.extend(batch.into_iter().filter(RepoSummary::is_eligible));

            if page == MAX_PAGES {
                log::warn!("Stopped listing repositories for {user} after {MAX_PAGES} pages");
            }
        }

        log::info!(
            "Listed {fetched} repositories for {user}, {} eligible",
            repos.len()
        );
        Ok(repos)
    }

    fn fetch_page(&self, user: &str, page: u32) -> Result<Vec<RepoSummary>> {
        let url = self.endpoint(
            &["users", user, "repos"],
            &[
                ("per_page", PAGE_SIZE.to_string()),
                ("page", page.to_string()),
                ("sort", "updated".to_string()),
            ],
        )?;
        let body = self.get(&url)?;
        serde_json::from_str(&body).map_err(|e| {
            CardError::data_shape(
                url.as_str(),
                format!("expected an array of repositories: {e}"),
                &body,
            )
        })
    }
}

#[cfg(test)]
#[path = "lister_tests.rs"]
mod tests;
