use super::{UrlGenerator, extract_host};
use crate::error::Result;
use crate::package::Version;
use regex::Regex;
use std::sync::LazyLock;

const PLUGINS_HOST: &str = "plugins.svn.wordpress.org";
const THEMES_HOST: &str = "themes.svn.wordpress.org";

static SVN_SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z+]+://(?P<host>[^/]+)/(?P<slug>[^/]+)")
        .expect("wordpress svn pattern is valid")
});

/// Links for plugins and themes served from the WordPress.org SVN
///
/// WordPress.org has no compare view between tags, so the "compare" link
/// points to the plugin changelog or the theme commit log.
pub struct WordPressUrlGenerator;

impl WordPressUrlGenerator {
    pub fn new() -> Self {
        Self
    }

    fn slug(source_url: &str) -> Option<(String, String)> {
        let captures = SVN_SLUG.captures(source_url)?;
        Some((captures["host"].to_lowercase(), captures["slug"].to_string()))
    }
}

impl Default for WordPressUrlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlGenerator for WordPressUrlGenerator {
    fn supports(&self, source_url: &str) -> bool {
        matches!(
            extract_host(source_url).as_deref(),
            Some(PLUGINS_HOST | THEMES_HOST)
        )
    }

    fn generate_compare_url(
        &self,
        _source_url_from: &str,
        _version_from: &Version,
        source_url_to: &str,
        _version_to: &Version,
    ) -> Result<Option<String>> {
        let url = match Self::slug(source_url_to) {
            Some((host, slug)) if host == PLUGINS_HOST => {
                format!("https://wordpress.org/plugins/{slug}/changelog/")
            }
            Some((host, slug)) if host == THEMES_HOST => {
                format!("https://themes.trac.wordpress.org/log/{slug}/")
            }
            _ => return Ok(None),
        };

        Ok(Some(url))
    }

    fn generate_release_url(&self, _source_url: &str, _version: &Version) -> Result<Option<String>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v100() -> Version {
        Version::new("v1.0.0.0", "v1.0.0", "v1.0.0")
    }

    fn v101() -> Version {
        Version::new("v1.0.1.0", "v1.0.1", "v1.0.1")
    }

    #[test]
    fn supports_wordpress_svn_urls() {
        let generator = WordPressUrlGenerator::new();
        assert!(generator.supports(
            "http://plugins.svn.wordpress.org/social-networks-auto-poster-facebook-twitter-g/"
        ));
        assert!(generator.supports("http://plugins.svn.wordpress.org/askimet/"));
        assert!(generator.supports("http://themes.svn.wordpress.org/minimize/"));
    }

    #[test]
    fn does_not_support_other_urls() {
        let generator = WordPressUrlGenerator::new();
        assert!(!generator.supports("https://github.com/phpunit/phpunit-mock-objects.git"));
        assert!(!generator.supports("https://github.com/symfony/console"));
        assert!(!generator.supports("https://bitbucket.org/mailchimp/mandrill-api-php.git"));
        assert!(!generator.supports("https://wordpress.org/plugins/askimet/"));
    }

    #[test]
    fn compare_urls_point_to_changelogs() {
        let generator = WordPressUrlGenerator::new();
        let plugin = "http://plugins.svn.wordpress.org/askimet/";
        let theme = "http://themes.svn.wordpress.org/minimize/";

        assert_eq!(
            generator
                .generate_compare_url(plugin, &v100(), plugin, &v101())
                .unwrap()
                .as_deref(),
            Some("https://wordpress.org/plugins/askimet/changelog/")
        );
        assert_eq!(
            generator
                .generate_compare_url(theme, &v100(), theme, &v101())
                .unwrap()
                .as_deref(),
            Some("https://themes.trac.wordpress.org/log/minimize/")
        );
    }

    #[test]
    fn never_generates_release_urls() {
        assert_eq!(
            WordPressUrlGenerator::new()
                .generate_release_url("http://themes.svn.wordpress.org/minimize/", &v101())
                .unwrap(),
            None
        );
    }
}
