use super::{SUMMARY_HEADER, find_handler, find_url_generator};
use crate::error::Result;
use crate::handlers::{ChangelogRecord, OperationHandler};
use crate::package::Operation;
use crate::url_generator::UrlGenerator;
use std::fmt;

pub const EMPTY_SUMMARY: &str = "No changelogs summary";

/// Rendering of the summary file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const VALID_NAMES: [&'static str; 2] = ["text", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collects the summary file entries of a run.
///
/// Records are kept format-agnostic, so the same run renders both the text
/// file and the JSON payload sent to the webhook.
pub struct FileOutputter {
    operation_handlers: Vec<Box<dyn OperationHandler>>,
    url_generators: Vec<Box<dyn UrlGenerator>>,
    records: Vec<ChangelogRecord>,
    operations_seen: bool,
}

impl FileOutputter {
    pub fn new(
        operation_handlers: Vec<Box<dyn OperationHandler>>,
        url_generators: Vec<Box<dyn UrlGenerator>>,
    ) -> Self {
        Self {
            operation_handlers,
            url_generators,
            records: Vec::new(),
            operations_seen: false,
        }
    }

    pub fn add_operation(&mut self, operation: &Operation) -> Result<()> {
        self.operations_seen = true;

        let Some(handler) = find_handler(&self.operation_handlers, operation) else {
            return Ok(());
        };

        let source_url = handler.extract_source_url(operation)?;
        let url_generator = find_url_generator(&self.url_generators, source_url);
        self.records.push(handler.get_record(operation, url_generator)?);

        Ok(())
    }

    /// True until an operation is added, even one no handler supports
    pub fn is_empty(&self) -> bool {
        !self.operations_seen
    }

    pub fn records(&self) -> &[ChangelogRecord] {
        &self.records
    }

    pub fn get_output(&self, format: OutputFormat) -> Result<String> {
        if self.is_empty() {
            return Ok(EMPTY_SUMMARY.to_string());
        }

        match format {
            OutputFormat::Json => Ok(serde_json::to_string(&self.records)?),
            OutputFormat::Text => {
                let mut lines = vec![SUMMARY_HEADER.to_string()];
                for record in &self.records {
                    lines.push(String::new());
                    lines.extend(record.plain_lines());
                }
                lines.push(String::new());
                Ok(lines.join("\n"))
            }
        }
    }
}
