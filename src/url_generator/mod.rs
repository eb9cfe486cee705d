// Url generators derive compare and release links from a package source url.
//
// Each generator targets one hosting convention. They only pattern-match
// urls and never check that the generated links exist.

use crate::error::{ChangelogsError, Result};
use crate::package::Version;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub mod bitbucket;
pub mod github;
pub mod gitlab;
pub mod wordpress;

pub use bitbucket::BitbucketUrlGenerator;
pub use github::GithubUrlGenerator;
pub use gitlab::GitlabUrlGenerator;
pub use wordpress::WordPressUrlGenerator;

static SSH_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:ssh://)?[^@/]+@(?P<host>[^:/]+)[:/](?P<path>.+)$")
        .expect("ssh url pattern is valid")
});

pub trait UrlGenerator {
    /// Whether the source url is hosted on this provider
    fn supports(&self, source_url: &str) -> bool;

    /// Link to the changes between two versions, `None` when it cannot be
    /// computed for these urls.
    fn generate_compare_url(
        &self,
        source_url_from: &str,
        version_from: &Version,
        source_url_to: &str,
        version_to: &Version,
    ) -> Result<Option<String>>;

    /// Link to the release notes of a version, `None` for dev versions and
    /// providers without releases.
    fn generate_release_url(&self, source_url: &str, version: &Version) -> Result<Option<String>>;
}

/// Owner and name of a hosted repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCoordinate {
    pub owner: String,
    pub repository: String,
}

/// Host part of an https or ssh (`git@host:owner/repo.git`) source url
pub fn extract_host(source_url: &str) -> Option<String> {
    split_source_url(source_url).map(|(host, _)| host)
}

/// Whether the host of `source_url` is one of `domains`
pub fn host_matches(source_url: &str, domains: &[String]) -> bool {
    extract_host(source_url)
        .map(|host| domains.iter().any(|domain| domain.eq_ignore_ascii_case(&host)))
        .unwrap_or(false)
}

/// Normalize a source url to `https://<host>/<path>` without `.git`
pub fn generate_base_url(source_url: &str) -> String {
    let (host, path) = match split_source_url(source_url) {
        Some(parts) => parts,
        None => return source_url.trim_end_matches('/').to_string(),
    };

    let path = path.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    if path.is_empty() {
        format!("https://{host}")
    } else {
        format!("https://{host}/{path}")
    }
}

/// Split a normalized base url into owner and repository
pub fn extract_repository(base_url: &str, domain: &str) -> Result<RepositoryCoordinate> {
    let malformed = || ChangelogsError::MalformedRepositoryUrl {
        domain: domain.to_string(),
        url: base_url.to_string(),
    };

    let (_, path) = split_source_url(base_url).ok_or_else(malformed)?;
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [owner, repository] => Ok(RepositoryCoordinate {
            owner: owner.to_string(),
            repository: repository.to_string(),
        }),
        _ => Err(malformed()),
    }
}

fn split_source_url(source_url: &str) -> Option<(String, String)> {
    if !source_url.contains("://") || source_url.starts_with("ssh://") {
        if let Some(captures) = SSH_URL.captures(source_url) {
            return Some((
                captures["host"].to_lowercase(),
                captures["path"].to_string(),
            ));
        }
    }

    let url = Url::parse(source_url).ok()?;
    let host = url.host_str()?.to_lowercase();
    Some((host, url.path().to_string()))
}
