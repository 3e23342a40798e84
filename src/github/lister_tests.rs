use crate::http::test_fixtures::MockHttpClient;

use super::*;
use crate::github::DEFAULT_API_BASE;

fn page_url(user: &str, page: u32) -> String {
    format!("https://api.github.com/users/{user}/repos?per_page=100&page={page}&sort=updated")
}

fn repo_json(name: &str, fork: bool, archived: bool) -> String {
    format!(r#"{{"name":"{name}","fork":{fork},"archived":{archived},"stargazers_count":3}}"#)
}

#[test]
fn filters_forks_and_archived() {
    let page1 = format!(
        "[{},{},{},{}]",
        repo_json("app", false, false),
        repo_json("forked", true, false),
        repo_json("old", false, true),
        repo_json("lib", false, false)
    );
    let client = MockHttpClient::new()
        .with_body(&page_url("octocat", 1), &page1)
        .with_body(&page_url("octocat", 2), "[]");
    let api = GitHubApi::new(&client, DEFAULT_API_BASE).unwrap();

    let repos = api.list_repositories("octocat").unwrap();

    let names: Vec<_> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["app", "lib"]);
}

#[test]
fn follows_pages_until_empty() {
    let client = MockHttpClient::new()
        .with_body(&page_url("octocat", 1), &format!("[{}]", repo_json("a", false, false)))
        .with_body(&page_url("octocat", 2), &format!("[{}]", repo_json("b", false, false)))
        .with_body(&page_url("octocat", 3), "[]");
    let api = GitHubApi::new(&client, DEFAULT_API_BASE).unwrap();

    let repos = api.list_repositories("octocat").unwrap();

    assert_eq!(repos.len(), 2);
    assert_eq!(client.request_count(), 3);
}

#[test]
fn stops_at_page_ceiling() {
    let mut client = MockHttpClient::new();
    for page in 1..=MAX_PAGES + 5 {
        client = client.with_body(
            &page_url("busy", page),
            &format!("[{}]", repo_json(&format!("r{page}"), false, false)),
        );
    }
    let api = GitHubApi::new(&client, DEFAULT_API_BASE).unwrap();

    let repos = api.list_repositories("busy").unwrap();

    assert_eq!(repos.len(), MAX_PAGES as usize);
    assert_eq!(client.request_count(), MAX_PAGES as usize);
}

#[test]
fn empty_first_page_yields_no_repos() {
    let client = MockHttpClient::new().with_body(&page_url("nobody", 1), "[]");
    let api = GitHubApi::new(&client, DEFAULT_API_BASE).unwrap();

    assert!(api.list_repositories("nobody").unwrap().is_empty());
}

#[test]
fn page_error_propagates() {
    let client = MockHttpClient::new()
        .with_body(&page_url("octocat", 1), &format!("[{}]", repo_json("a", false, false)))
        .with_status(&page_url("octocat", 2), 403);
    let api = GitHubApi::new(&client, DEFAULT_API_BASE).unwrap();

    let err = api.list_repositories("octocat").unwrap_err();

    assert!(matches!(err, CardError::HttpStatus { status: 403, .. }));
}

#[test]
fn non_array_body_is_data_shape_error() {
    let body = r#"{"message":"Not Found","documentation_url":"https://docs.github.com"}"#;
    let client = MockHttpClient::new().with_body(&page_url("ghost", 1), body);
    let api = GitHubApi::new(&client, DEFAULT_API_BASE).unwrap();

    let err = api.list_repositories("ghost").unwrap_err();

    assert_eq!(err.error_type(), "DataShape");
    let msg = err.to_string();
    assert!(msg.contains("/users/ghost/repos"));
    assert!(msg.contains("Not Found"));
}

#[test]
fn missing_fork_flag_is_data_shape_error() {
    let client =
        MockHttpClient::new().with_body(&page_url("octocat", 1), r#"[{"name":"a","archived":false}]"#);
    let api = GitHubApi::new(&client, DEFAULT_API_BASE).unwrap();

    assert_eq!(
        api.list_repositories("octocat").unwrap_err().error_type(),
        "DataShape"
    );
}
