use super::record::UNINSTALL_PHRASING;
use super::{ChangelogRecord, OperationHandler, unsupported};
use crate::error::Result;
use crate::package::{Operation, Package};
use crate::url_generator::UrlGenerator;

/// Handles removed packages
#[derive(Debug, Default)]
pub struct UninstallHandler;

impl UninstallHandler {
    pub fn new() -> Self {
        Self
    }

    fn package<'a>(&self, operation: &'a Operation) -> Result<&'a Package> {
        match operation {
            Operation::Uninstall { package } => Ok(package),
            other => Err(unsupported("uninstall", other)),
        }
    }
}

impl OperationHandler for UninstallHandler {
    fn supports(&self, operation: &Operation) -> bool {
        matches!(operation, Operation::Uninstall { .. })
    }

    fn extract_source_url<'a>(&self, operation: &'a Operation) -> Result<Option<&'a str>> {
        Ok(self.package(operation)?.source_url.as_deref())
    }

    fn get_record(
        &self,
        operation: &Operation,
        url_generator: Option<&dyn UrlGenerator>,
    ) -> Result<ChangelogRecord> {
        let package = self.package(operation)?;
        let version = package.to_version();

        let release_url = match url_generator {
            Some(generator) => generator.generate_release_url(
                package.source_url.as_deref().unwrap_or_default(),
                &version,
            )?,
            None => None,
        };

        Ok(ChangelogRecord::Uninstall {
            package: package.name.clone(),
            phrasing: UNINSTALL_PHRASING,
            version: version.display(),
            release_url,
        })
    }
}
