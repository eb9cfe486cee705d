pub mod factory;
pub mod file;

pub use factory::OutputterFactory;
pub use file::{FileOutputter, OutputFormat};

use crate::error::Result;
use crate::handlers::OperationHandler;
use crate::package::Operation;
use crate::url_generator::UrlGenerator;

pub const SUMMARY_HEADER: &str = "Changelogs summary:";

/// Collects the terminal entries of a run
pub struct Outputter {
    operation_handlers: Vec<Box<dyn OperationHandler>>,
    url_generators: Vec<Box<dyn UrlGenerator>>,
    entries: Vec<Vec<String>>,
}

impl Outputter {
    pub fn new(
        operation_handlers: Vec<Box<dyn OperationHandler>>,
        url_generators: Vec<Box<dyn UrlGenerator>>,
    ) -> Self {
        Self {
            operation_handlers,
            url_generators,
            entries: Vec::new(),
        }
    }

    /// Formats the operation with the first handler supporting it.
    ///
    /// Operations no handler knows are skipped silently.
    pub fn add_operation(&mut self, operation: &Operation) -> Result<()> {
        let Some(handler) = find_handler(&self.operation_handlers, operation) else {
            return Ok(());
        };

        let source_url = handler.extract_source_url(operation)?;
        let url_generator = find_url_generator(&self.url_generators, source_url);
        let lines = handler.get_output(operation, url_generator)?;
        self.entries.push(lines);

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_output(&self) -> String {
        let mut lines = vec![SUMMARY_HEADER.to_string(), String::new()];

        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                lines.push(String::new());
            }
            lines.extend(entry.iter().cloned());
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}

pub(crate) fn find_handler<'a>(
    handlers: &'a [Box<dyn OperationHandler>],
    operation: &Operation,
) -> Option<&'a dyn OperationHandler> {
    handlers
        .iter()
        .find(|handler| handler.supports(operation))
        .map(|handler| handler.as_ref())
}

/// First generator accepting the source url. A package without source url is
/// offered to the generators as an empty url.
pub(crate) fn find_url_generator<'a>(
    generators: &'a [Box<dyn UrlGenerator>],
    source_url: Option<&str>,
) -> Option<&'a dyn UrlGenerator> {
    let source_url = source_url.unwrap_or_default();
    generators
        .iter()
        .find(|generator| generator.supports(source_url))
        .map(|generator| generator.as_ref())
}
