use super::record::INSTALL_PHRASING;
use super::{ChangelogRecord, OperationHandler, unsupported};
use crate::error::Result;
use crate::package::{Operation, Package};
use crate::url_generator::UrlGenerator;

/// Handles freshly installed packages
#[derive(Debug, Default)]
pub struct InstallHandler;

impl InstallHandler {
    pub fn new() -> Self {
        Self
    }

    fn package<'a>(&self, operation: &'a Operation) -> Result<&'a Package> {
        match operation {
            Operation::Install { package } => Ok(package),
            other => Err(unsupported("install", other)),
        }
    }
}

impl OperationHandler for InstallHandler {
    fn supports(&self, operation: &Operation) -> bool {
        matches!(operation, Operation::Install { .. })
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

        Ok(ChangelogRecord::Install {
            package: package.name.clone(),
            phrasing: INSTALL_PHRASING,
            version: version.display(),
            release_url,
        })
    }
}
