use crate::error::{ChangelogsError, Result};
use std::path::{Component, Path, PathBuf};

const FORBIDDEN: &[&str] = &["/etc", "/sys", "/proc", "/dev", "/boot"];

/// Guards the directories the summary is read from and written to.
pub struct PathValidator;

impl PathValidator {
    /// Validates and canonicalises the project directory.
    pub fn validate_project_path(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let canonical = path.canonicalize().map_err(|e| {
            ChangelogsError::InvalidProject(format!("Invalid path '{}': {e}", path.display()))
        })?;

        if !canonical.is_dir() {
            return Err(ChangelogsError::InvalidProject(format!(
                "Path '{}' is not a directory",
                canonical.display()
            )));
        }

        Self::reject_system_directory(path, &canonical)?;

        Ok(canonical)
    }

    /// Validates a changelogs directory that already exists.
    ///
    /// `changelogs-dir-path` may point outside of the project, but never into a
    /// system directory.
    pub fn validate_output_dir(dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();

        let canonical = dir.canonicalize().map_err(|e| {
            ChangelogsError::InvalidProject(format!(
                "The directory '{}' was not created: {e}",
                dir.display()
            ))
        })?;

        if !canonical.is_dir() {
            return Err(ChangelogsError::InvalidProject(format!(
                "Changelogs path '{}' is not a directory",
                canonical.display()
            )));
        }

        Self::reject_system_directory(dir, &canonical)?;

        Ok(canonical)
    }

    /// Checks a changelogs directory before it is created.
    ///
    /// `..` components are resolved lexically and the nearest existing
    /// ancestor is canonicalised, so nothing is created inside a system
    /// directory. Returns the lexically normalised path.
    pub fn validate_new_output_dir(dir: impl AsRef<Path>) -> Result<PathBuf> {
        let lexical = normalize_lexically(dir.as_ref());

        match lexical.ancestors().find(|ancestor| ancestor.exists()) {
            Some(ancestor) => {
                let canonical = ancestor.canonicalize().map_err(|e| {
                    ChangelogsError::InvalidProject(format!(
                        "Invalid path '{}': {e}",
                        ancestor.display()
                    ))
                })?;
                Self::reject_system_directory(&lexical, &canonical)?;
            }
            None => Self::reject_system_directory(&lexical, &lexical)?,
        }

        Ok(lexical)
    }

    fn reject_system_directory(path: &Path, canonical: &Path) -> Result<()> {
        for forbidden in FORBIDDEN {
            let forbidden_path = Path::new(forbidden);
            let inside = path.starts_with(forbidden_path)
                || canonical.starts_with(forbidden_path)
                || forbidden_path
                    .canonicalize()
                    .is_ok_and(|resolved| canonical.starts_with(resolved));

            if inside {
                return Err(ChangelogsError::InvalidProject(format!(
                    "Access to system directory '{forbidden}' is not allowed"
                )));
            }
        }

        Ok(())
    }
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
