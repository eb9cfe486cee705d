pub mod builder;
pub mod locator;

pub use builder::ConfigBuilder;
pub use locator::ConfigLocator;

use crate::outputter::OutputFormat;

/// Key of the plugin section under `extra` in composer.json
pub const EXTRA_KEY: &str = "composer-write-changelogs";

/// Directory of the summary files when `changelogs-dir-path` is not set
pub const CHANGELOGS_DIR: &str = "changelogs";

/// Validated plugin configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub gitlab_hosts: Vec<String>,
    pub changelogs_dir_path: Option<String>,
    pub output_file_format: OutputFormat,
    pub write_summary_file: bool,
    pub webhook_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gitlab_hosts: Vec::new(),
            changelogs_dir_path: None,
            output_file_format: OutputFormat::Text,
            write_summary_file: true,
            webhook_url: None,
        }
    }
}

impl Config {
    pub fn changelogs_dir(&self) -> &str {
        self.changelogs_dir_path.as_deref().unwrap_or(CHANGELOGS_DIR)
    }
}
