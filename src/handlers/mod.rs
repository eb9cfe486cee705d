// Operation handlers turn one kind of package operation into a changelog entry.
//
// Every handler feeds two outputs: styled lines for the terminal summary and a
// plain `ChangelogRecord` for the summary file. Callers must check `supports`
// before asking for anything else.

pub mod install;
pub mod record;
pub mod uninstall;
pub mod update;

pub use install::InstallHandler;
pub use record::{ChangelogRecord, UpdateAction};
pub use uninstall::UninstallHandler;
pub use update::UpdateHandler;

use crate::error::{ChangelogsError, Result};
use crate::package::Operation;
use crate::url_generator::UrlGenerator;

pub trait OperationHandler {
    /// Whether the handler knows this kind of operation
    fn supports(&self, operation: &Operation) -> bool;

    /// Source url of the package the links are generated for
    fn extract_source_url<'a>(&self, operation: &'a Operation) -> Result<Option<&'a str>>;

    /// Plain entry for the summary file
    fn get_record(
        &self,
        operation: &Operation,
        url_generator: Option<&dyn UrlGenerator>,
    ) -> Result<ChangelogRecord>;

    /// Styled lines for the terminal summary
    fn get_output(
        &self,
        operation: &Operation,
        url_generator: Option<&dyn UrlGenerator>,
    ) -> Result<Vec<String>> {
        Ok(self.get_record(operation, url_generator)?.styled_lines())
    }
}

fn unsupported(expected: &'static str, operation: &Operation) -> ChangelogsError {
    ChangelogsError::UnsupportedOperation {
        expected,
        actual: operation.kind(),
    }
}
