use crate::error::Result;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const COMPOSER_FILE: &str = "composer.json";

/// Finds the `extra` section of the plugin, looking at the project's
/// composer.json first and then at the global one in the Composer home.
pub struct ConfigLocator {
    project_dir: PathBuf,
    composer_home: Option<PathBuf>,
    cache: HashMap<String, Option<(PathBuf, Value)>>,
}

impl ConfigLocator {
    pub fn new<P: AsRef<Path>>(project_dir: P, composer_home: Option<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.as_ref().to_path_buf(),
            composer_home,
            cache: HashMap::new(),
        }
    }

    /// Whether a configuration exists for `key`
    pub fn locate(&mut self, key: &str) -> Result<bool> {
        Ok(self.lookup(key)?.is_some())
    }

    /// Directory of the composer.json holding the configuration
    pub fn get_path(&mut self, key: &str) -> Result<Option<PathBuf>> {
        Ok(self.lookup(key)?.map(|(path, _)| path.clone()))
    }

    /// Configuration for `key`, an empty object when none is found
    pub fn get_config(&mut self, key: &str) -> Result<Value> {
        Ok(self
            .lookup(key)?
            .map(|(_, config)| config.clone())
            .unwrap_or_else(|| Value::Object(Map::new())))
    }

    fn lookup(&mut self, key: &str) -> Result<Option<&(PathBuf, Value)>> {
        if !self.cache.contains_key(key) {
            let found = self.find(key)?;
            self.cache.insert(key.to_string(), found);
        }

        Ok(self.cache.get(key).and_then(Option::as_ref))
    }

    fn find(&self, key: &str) -> Result<Option<(PathBuf, Value)>> {
        let candidates = std::iter::once(self.project_dir.as_path()).chain(self.composer_home.as_deref());

        for dir in candidates {
            if let Some(config) = read_extra(&dir.join(COMPOSER_FILE), key)? {
                return Ok(Some((dir.to_path_buf(), config)));
            }
        }

        Ok(None)
    }
}

fn read_extra(composer_file: &Path, key: &str) -> Result<Option<Value>> {
    if !composer_file.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(composer_file)?;
    let manifest: Value = serde_json::from_str(&content)?;

    Ok(manifest
        .get("extra")
        .and_then(|extra| extra.get(key))
        .cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EXTRA_KEY;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_composer(dir: &Path, manifest: Value) {
        fs::write(dir.join(COMPOSER_FILE), manifest.to_string()).unwrap();
    }

    #[test]
    fn prefers_project_configuration() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        write_composer(
            project.path(),
            json!({ "extra": { EXTRA_KEY: { "output-file-format": "json" } } }),
        );
        write_composer(
            home.path(),
            json!({ "extra": { EXTRA_KEY: { "output-file-format": "text" } } }),
        );

        let mut locator = ConfigLocator::new(project.path(), Some(home.path().to_path_buf()));
        assert!(locator.locate(EXTRA_KEY).unwrap());
        assert_eq!(locator.get_path(EXTRA_KEY).unwrap().as_deref(), Some(project.path()));
        assert_eq!(
            locator.get_config(EXTRA_KEY).unwrap(),
            json!({ "output-file-format": "json" })
        );
    }

    #[test]
    fn falls_back_to_composer_home() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        write_composer(project.path(), json!({ "name": "acme/app" }));
        write_composer(
            home.path(),
            json!({ "extra": { EXTRA_KEY: { "gitlab-hosts": ["gitlab.acme.org"] } } }),
        );

        let mut locator = ConfigLocator::new(project.path(), Some(home.path().to_path_buf()));
        assert_eq!(locator.get_path(EXTRA_KEY).unwrap().as_deref(), Some(home.path()));
        assert_eq!(
            locator.get_config(EXTRA_KEY).unwrap(),
            json!({ "gitlab-hosts": ["gitlab.acme.org"] })
        );
    }

    #[test]
    fn returns_empty_object_when_missing() {
        let project = TempDir::new().unwrap();
        let mut locator = ConfigLocator::new(project.path(), None);

        assert!(!locator.locate(EXTRA_KEY).unwrap());
        assert_eq!(locator.get_path(EXTRA_KEY).unwrap(), None);
        assert_eq!(locator.get_config(EXTRA_KEY).unwrap(), json!({}));
    }

    #[test]
    fn fails_on_invalid_manifest() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(COMPOSER_FILE), "{ not json").unwrap();

        let mut locator = ConfigLocator::new(project.path(), None);
        assert!(locator.get_config(EXTRA_KEY).is_err());
    }
}
