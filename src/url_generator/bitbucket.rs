use super::{UrlGenerator, extract_repository, generate_base_url, host_matches};
use crate::error::Result;
use crate::package::Version;

const DOMAIN: &str = "bitbucket.org";

/// Links for repositories hosted on bitbucket.org
///
/// Bitbucket lists the target revision first in its compare links and has no
/// release pages.
pub struct BitbucketUrlGenerator {
    domains: Vec<String>,
}

impl BitbucketUrlGenerator {
    pub fn new() -> Self {
        Self {
            domains: vec![DOMAIN.to_string()],
        }
    }
}

impl Default for BitbucketUrlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlGenerator for BitbucketUrlGenerator {
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
        if !self.supports(source_url_from) || !self.supports(source_url_to) {
            return Ok(None);
        }

        let base_from = generate_base_url(source_url_from);
        let base_to = generate_base_url(source_url_to);

        if base_from != base_to {
            let repository_from = extract_repository(&base_from, DOMAIN)?;
            let repository_to = extract_repository(&base_to, DOMAIN)?;

            return Ok(Some(format!(
                "{}/branches/compare/{}/{}:{}%0D{}/{}:{}",
                base_to,
                repository_to.owner,
                repository_to.repository,
                version_to.compare_token(),
                repository_from.owner,
                repository_from.repository,
                version_from.compare_token()
            )));
        }

        Ok(Some(format!(
            "{}/branches/compare/{}%0D{}",
            base_to,
            version_to.compare_token(),
            version_from.compare_token()
        )))
    }

    fn generate_release_url(&self, _source_url: &str, _version: &Version) -> Result<Option<String>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChangelogsError;

    const REPOSITORY: &str = "https://bitbucket.org/spiriit/composer-write-changelogs-repository";

    fn v100() -> Version {
        Version::new("v1.0.0.0", "v1.0.0", "v1.0.0")
    }

    fn v101() -> Version {
        Version::new("v1.0.1.0", "v1.0.1", "v1.0.1")
    }

    #[test]
    fn supports_bitbucket_urls() {
        let generator = BitbucketUrlGenerator::new();
        assert!(generator.supports("https://bitbucket.org/mailchimp/mandrill-api-php.git"));
        assert!(generator.supports("https://bitbucket.org/rogoOOS/rog"));
        assert!(generator.supports("git@bitbucket.org:private/repo.git"));
        assert!(!generator.supports("https://github.com/symfony/console"));
    }

    #[test]
    fn compare_url_lists_target_first() {
        let generator = BitbucketUrlGenerator::new();
        let expected = Some(format!("{REPOSITORY}/branches/compare/v1.0.1%0Dv1.0.0"));

        assert_eq!(
            generator
                .generate_compare_url(REPOSITORY, &v100(), REPOSITORY, &v101())
                .unwrap(),
            expected
        );
        assert_eq!(
            generator
                .generate_compare_url(
                    &format!("{REPOSITORY}.git"),
                    &v100(),
                    &format!("{REPOSITORY}.git"),
                    &v101()
                )
                .unwrap(),
            expected
        );
    }

    #[test]
    fn compare_url_uses_revisions_of_dev_versions() {
        let generator = BitbucketUrlGenerator::new();
        let url = format!("{REPOSITORY}.git");

        let from_dev = Version::new("v1.0.9999999.9999999-dev", "dev-master", "dev-master 1234abc");
        assert_eq!(
            generator
                .generate_compare_url(&url, &from_dev, &url, &v101())
                .unwrap(),
            Some(format!("{REPOSITORY}/branches/compare/v1.0.1%0D1234abc"))
        );

        let to_dev = Version::new("9999999-dev", "dev-master", "dev-master 6789def");
        assert_eq!(
            generator
                .generate_compare_url(&url, &v100(), &url, &to_dev)
                .unwrap(),
            Some(format!("{REPOSITORY}/branches/compare/6789def%0Dv1.0.0"))
        );
    }

    #[test]
    fn compare_url_across_forks() {
        assert_eq!(
            BitbucketUrlGenerator::new()
                .generate_compare_url(
                    "https://bitbucket.org/spiriit1/repo",
                    &v100(),
                    "https://bitbucket.org/spiriit2/repo",
                    &v101()
                )
                .unwrap()
                .as_deref(),
            Some("https://bitbucket.org/spiriit2/repo/branches/compare/spiriit2/repo:v1.0.1%0Dspiriit1/repo:v1.0.0")
        );
    }

    #[test]
    fn no_compare_url_for_unsupported_urls() {
        let generator = BitbucketUrlGenerator::new();
        assert_eq!(
            generator
                .generate_compare_url(
                    "/home/toto/work/my-package",
                    &v100(),
                    "https://bitbucket.org/spiriit2/repo",
                    &v101()
                )
                .unwrap(),
            None
        );
    }

    #[test]
    fn malformed_fork_url_is_an_error() {
        let err = BitbucketUrlGenerator::new()
            .generate_compare_url(
                "https://bitbucket.org/spiriit1/repo",
                &v100(),
                "https://bitbucket.org/spiriit2",
                &v101(),
            )
            .unwrap_err();

        assert!(matches!(err, ChangelogsError::MalformedRepositoryUrl { .. }));
        assert_eq!(
            err.to_string(),
            "Unrecognized url format for bitbucket.org (\"https://bitbucket.org/spiriit2\")"
        );
    }

    #[test]
    fn compare_url_from_ssh_urls() {
        let ssh = "git@bitbucket.org:spiriit/composer-write-changelogs-repository.git";
        assert_eq!(
            BitbucketUrlGenerator::new()
                .generate_compare_url(ssh, &v100(), ssh, &v101())
                .unwrap(),
            Some(format!("{REPOSITORY}/branches/compare/v1.0.1%0Dv1.0.0"))
        );
    }

    #[test]
    fn never_generates_release_urls() {
        let generator = BitbucketUrlGenerator::new();
        assert_eq!(generator.generate_release_url(REPOSITORY, &v101()).unwrap(), None);
        assert_eq!(
            generator
                .generate_release_url(&format!("{REPOSITORY}.git"), &v101())
                .unwrap(),
            None
        );
    }
}
