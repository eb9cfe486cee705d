use super::Config;
use crate::outputter::OutputFormat;
use serde_json::Value;

/// Builds a `Config` from the plugin's `extra` section.
///
/// Invalid values never fail the build: they fall back to their default and
/// leave a warning for the user.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    warnings: Vec<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(&mut self, extra: &Value) -> Config {
        self.warnings.clear();

        let gitlab_hosts = self.gitlab_hosts(extra.get("gitlab-hosts"));
        let changelogs_dir_path = self.changelogs_dir_path(extra.get("changelogs-dir-path"));
        let output_file_format = self.output_file_format(extra.get("output-file-format"));
        let write_summary_file = !matches!(
            extra.get("write-summary-file"),
            Some(Value::String(value)) if value == "false"
        );
        let webhook_url = self.webhook_url(extra.get("webhook-url"));

        Config {
            gitlab_hosts,
            changelogs_dir_path,
            output_file_format,
            write_summary_file,
            webhook_url,
        }
    }

    /// Warnings of the last `build`
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn gitlab_hosts(&mut self, value: Option<&Value>) -> Vec<String> {
        match value {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(hosts)) => hosts
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Some(_) => {
                self.warnings
                    .push("\"gitlab-hosts\" is specified but should be an array. Ignoring.".to_string());
                Vec::new()
            }
        }
    }

    fn changelogs_dir_path(&mut self, value: Option<&Value>) -> Option<String> {
        let path = value.and_then(Value::as_str)?;
        if path.is_empty() {
            return None;
        }

        if path.trim().is_empty() {
            self.warnings.push(
                "\"changelogs-dir-path\" is specified but empty. Ignoring and using default changelogs dir path."
                    .to_string(),
            );
            return None;
        }

        Some(path.to_string())
    }

    fn output_file_format(&mut self, value: Option<&Value>) -> OutputFormat {
        let value = match value {
            None | Some(Value::Null) => return OutputFormat::default(),
            Some(value) => value,
        };

        if let Some(format) = value.as_str().and_then(OutputFormat::from_name) {
            return format;
        }

        let given = match value {
            Value::String(raw) => raw.clone(),
            other => other.to_string(),
        };
        let fallback = OutputFormat::default();
        self.warnings.push(format!(
            "Invalid value \"{given}\" for option \"output-file-format\", defaulting to \"{fallback}\". Valid options are \"{}\".",
            OutputFormat::VALID_NAMES.join("\", \"")
        ));

        fallback
    }

    fn webhook_url(&mut self, value: Option<&Value>) -> Option<String> {
        let url = value.and_then(Value::as_str)?;
        if url.is_empty() {
            self.warnings
                .push("\"webhook-url\" is specified but empty. Ignoring webhook".to_string());
            return None;
        }

        Some(url.to_string())
    }
}
