use crate::package::SemverBump;
use colored::Colorize;
use serde::Serialize;

/// Direction of an update operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateAction {
    Updated,
    Downgraded,
}

impl UpdateAction {
    pub fn phrasing(self) -> &'static str {
        match self {
            UpdateAction::Updated => "updated from",
            UpdateAction::Downgraded => "downgraded from",
        }
    }
}

pub const INSTALL_PHRASING: &str = "installed in version";
/// The text line closes the parenthesis after the version; JSON consumers get
/// the phrasing without it.
pub const UNINSTALL_PHRASING: &str = "removed (installed version was";

/// Changelog entry for one operation
///
/// Serializes to the JSON summary objects, keys in a fixed order per
/// operation kind, and renders to the lines of the text summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum ChangelogRecord {
    #[serde(rename_all = "camelCase")]
    Install {
        package: String,
        phrasing: &'static str,
        version: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        release_url: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Update {
        package: String,
        action: UpdateAction,
        phrasing: &'static str,
        version_from: String,
        version_to: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        semver: Option<SemverBump>,
        #[serde(skip_serializing_if = "Option::is_none")]
        changes_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        release_url: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Uninstall {
        package: String,
        phrasing: &'static str,
        version: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        release_url: Option<String>,
    },
}

impl ChangelogRecord {
    /// Lines for summary files
    pub fn plain_lines(&self) -> Vec<String> {
        self.render(false)
    }

    /// Lines for the terminal, with colors
    pub fn styled_lines(&self) -> Vec<String> {
        self.render(true)
    }

    fn render(&self, styled: bool) -> Vec<String> {
        let package = |name: &str| paint(name, styled, |s| s.green().to_string());
        let version = |value: &str| paint(value, styled, |s| s.yellow().to_string());

        let mut lines = Vec::new();
        let (changes_url, release_url) = match self {
            ChangelogRecord::Install {
                package: name,
                phrasing,
                version: installed,
                release_url,
            } => {
                lines.push(format!(" - {} {} {}", package(name), phrasing, version(installed)));
                (None, release_url)
            }
            ChangelogRecord::Uninstall {
                package: name,
                phrasing,
                version: installed,
                release_url,
            } => {
                lines.push(format!(" - {} {} {})", package(name), phrasing, version(installed)));
                (None, release_url)
            }
            ChangelogRecord::Update {
                package: name,
                phrasing,
                version_from,
                version_to,
                semver,
                changes_url,
                release_url,
                ..
            } => {
                let mut line = format!(
                    " - {} {} {} to {}",
                    package(name),
                    phrasing,
                    version(version_from),
                    version(version_to)
                );
                if let Some(bump) = semver {
                    line.push(' ');
                    line.push_str(&paint_semver(*bump, styled));
                }
                lines.push(line);
                (changes_url.as_ref(), release_url)
            }
        };

        if let Some(url) = changes_url {
            lines.push(format!("   See changes: {url}"));
        }
        if let Some(url) = release_url {
            lines.push(format!("   Release notes: {url}"));
        }

        lines
    }
}

fn paint(text: &str, styled: bool, style: impl Fn(&str) -> String) -> String {
    if styled { style(text) } else { text.to_string() }
}

fn paint_semver(bump: SemverBump, styled: bool) -> String {
    let label = bump.to_string();
    if !styled {
        return label;
    }

    match bump {
        SemverBump::Major => label.red().to_string(),
        SemverBump::Minor => label.magenta().to_string(),
        SemverBump::Patch => label.cyan().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::strip_ansi;

    fn update_record() -> ChangelogRecord {
        ChangelogRecord::Update {
            package: "a/b".to_string(),
            action: UpdateAction::Updated,
            phrasing: UpdateAction::Updated.phrasing(),
            version_from: "v1.0.0".to_string(),
            version_to: "v1.0.1".to_string(),
            semver: Some(SemverBump::Patch),
            changes_url: Some("https://github.com/a/b/compare/v1.0.0...v1.0.1".to_string()),
            release_url: None,
        }
    }

    #[test]
    fn serializes_keys_in_order_and_skips_missing_urls() {
        let json = serde_json::to_string(&update_record()).unwrap();
        assert_eq!(
            json,
            r#"{"operation":"update","package":"a/b","action":"updated","phrasing":"updated from","versionFrom":"v1.0.0","versionTo":"v1.0.1","semver":"patch","changesUrl":"https://github.com/a/b/compare/v1.0.0...v1.0.1"}"#
        );
    }

    #[test]
    fn renders_uninstall_lines() {
        let record = ChangelogRecord::Uninstall {
            package: "a/b".to_string(),
            phrasing: UNINSTALL_PHRASING,
            version: "v1.0.0".to_string(),
            release_url: None,
        };
        assert_eq!(
            record.plain_lines(),
            vec![" - a/b removed (installed version was v1.0.0)".to_string()]
        );
    }

    #[test]
    fn styled_lines_carry_the_same_text() {
        let record = update_record();
        let styled: Vec<String> = record.styled_lines().iter().map(|l| strip_ansi(l)).collect();
        assert_eq!(styled, record.plain_lines());
        assert_eq!(
            record.plain_lines(),
            vec![
                " - a/b updated from v1.0.0 to v1.0.1 patch".to_string(),
                "   See changes: https://github.com/a/b/compare/v1.0.0...v1.0.1".to_string(),
            ]
        );
    }
}
