use super::{UrlGenerator, generate_base_url, host_matches};
use crate::error::Result;
use crate::package::Version;

/// Links for GitLab instances, gitlab.com or self-hosted
///
/// The recognized hosts come from the `gitlab-hosts` configuration.
pub struct GitlabUrlGenerator {
    hosts: Vec<String>,
}

impl GitlabUrlGenerator {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hosts: hosts.into_iter().map(Into::into).collect(),
        }
    }
}

impl UrlGenerator for GitlabUrlGenerator {
    fn supports(&self, source_url: &str) -> bool {
        host_matches(source_url, &self.hosts)
    }

    fn generate_compare_url(
        &self,
        source_url_from: &str,
        version_from: &Version,
        source_url_to: &str,
        version_to: &Version,
    ) -> Result<Option<String>> {
        if !self.supports(source_url_from) || !self.supports(source_url_to) {
            return Ok(None);
        }

        let base_from = generate_base_url(source_url_from);
        let base_to = generate_base_url(source_url_to);

        // GitLab cannot compare across forks
        if base_from != base_to {
            return Ok(None);
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
            "{}/tags/{}",
            generate_base_url(source_url),
            version.pretty()
        )))
    }
}
