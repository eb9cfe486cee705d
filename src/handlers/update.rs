use super::{ChangelogRecord, OperationHandler, UpdateAction, unsupported};
use crate::error::Result;
use crate::package::{Operation, Package, VersionComparator};
use crate::url_generator::UrlGenerator;

/// Handles packages moved from one version to another, in either direction
#[derive(Debug, Default)]
pub struct UpdateHandler;

impl UpdateHandler {
    pub fn new() -> Self {
        Self
    }

    fn packages<'a>(&self, operation: &'a Operation) -> Result<(&'a Package, &'a Package)> {
        match operation {
            Operation::Update { initial, target } => Ok((initial, target)),
            other => Err(unsupported("update", other)),
        }
    }
}

impl OperationHandler for UpdateHandler {
    fn supports(&self, operation: &Operation) -> bool {
        matches!(operation, Operation::Update { .. })
    }

    /// Links are generated against the target package
    fn extract_source_url<'a>(&self, operation: &'a Operation) -> Result<Option<&'a str>> {
        let (_, target) = self.packages(operation)?;
        Ok(target.source_url.as_deref())
    }

    fn get_record(
        &self,
        operation: &Operation,
        url_generator: Option<&dyn UrlGenerator>,
    ) -> Result<ChangelogRecord> {
        let (initial, target) = self.packages(operation)?;
        let version_from = initial.to_version();
        let version_to = target.to_version();

        let action = if VersionComparator::is_upgrade(&initial.version, &target.version) {
            UpdateAction::Updated
        } else {
            UpdateAction::Downgraded
        };

        let (changes_url, release_url) = match url_generator {
            Some(generator) => {
                let source_url_from = initial.source_url.as_deref().unwrap_or_default();
                let source_url_to = target.source_url.as_deref().unwrap_or_default();
                (
                    generator.generate_compare_url(
                        source_url_from,
                        &version_from,
                        source_url_to,
                        &version_to,
                    )?,
                    generator.generate_release_url(source_url_to, &version_to)?,
                )
            }
            None => (None, None),
        };

        Ok(ChangelogRecord::Update {
            package: initial.name.clone(),
            action,
            phrasing: action.phrasing(),
            version_from: version_from.display(),
            version_to: version_to.display(),
            semver: VersionComparator::semver_bump(&version_from, &version_to),
            changes_url,
            release_url,
        })
    }
}
