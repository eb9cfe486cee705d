use super::{UrlGenerator, extract_repository, generate_base_url, host_matches};
use crate::error::Result;
use crate::package::Version;

const DOMAIN: &str = "github.com";

/// Links for repositories hosted on github.com
pub struct GithubUrlGenerator {
    domains: Vec<String>,
}

impl GithubUrlGenerator {
    pub fn new() -> Self {
        Self {
            domains: vec![DOMAIN.to_string()],
        }
    }
}

impl Default for GithubUrlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlGenerator for GithubUrlGenerator {
    fn supports(&self, source_url: &str) -> bool {
        host_matches(source_url, &self.domains)
    }

    fn generate_compare_url(
        &self,
        source_url_from: &str,
        version_from: &Version,
        source_url_to: &str,
        version_to: &Version,
    ) -> Result<Option<String>> {
        // A local path on either side cannot be compared
        if !self.supports(source_url_from) || !self.supports(source_url_to) {
            return Ok(None);
        }

        let base_from = generate_base_url(source_url_from);
        let base_to = generate_base_url(source_url_to);

        if base_from != base_to {
            let repository_from = extract_repository(&base_from, DOMAIN)?;
            let repository_to = extract_repository(&base_to, DOMAIN)?;

            return Ok(Some(format!(
                "{}/compare/{}:{}...{}:{}",
                base_to,
                repository_from.owner,
                version_from.compare_token(),
                repository_to.owner,
                version_to.compare_token()
            )));
        }

        Ok(Some(format!(
            "{}/compare/{}...{}",
            base_to,
            version_from.compare_token(),
            version_to.compare_token()
        )))
    }

    fn generate_release_url(&self, source_url: &str, version: &Version) -> Result<Option<String>> {
        if version.is_dev() || !self.supports(source_url) {
            return Ok(None);
        }

        Ok(Some(format!(
            "{}/releases/tag/{}",
            generate_base_url(source_url),
            version.pretty()
        )))
    }
}
