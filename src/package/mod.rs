use serde::Deserialize;

pub mod version;

pub use version::{SemverBump, Version, VersionComparator};

/// Package descriptor as reported by the dependency manager
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub name: String,
    /// Normalized version, e.g. `1.0.0.0` or `dev-master`
    pub version: String,
    pub pretty_version: String,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub source_reference: Option<String>,
}

impl Package {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        pretty_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            pretty_version: pretty_version.into(),
            source_url: None,
            source_type: None,
            source_reference: None,
        }
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn with_source(mut self, source_type: impl Into<String>, reference: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self.source_reference = Some(reference.into());
        self
    }

    /// Pretty version followed by the source revision for dev packages
    /// checked out from git or mercurial. Full 40 character hashes are cut
    /// down to 7 characters.
    pub fn full_pretty_version(&self) -> String {
        let is_dev = self.version.contains("dev");
        let vcs_source = matches!(self.source_type.as_deref(), Some("git" | "hg"));

        match self.source_reference.as_deref() {
            Some(reference) if is_dev && vcs_source && !reference.is_empty() => {
                let reference = if reference.len() == 40 {
                    reference.get(..7).unwrap_or(reference)
                } else {
                    reference
                };
                format!("{} {}", self.pretty_version, reference)
            }
            _ => self.pretty_version.clone(),
        }
    }

    pub fn to_version(&self) -> Version {
        Version::new(
            self.version.clone(),
            self.pretty_version.clone(),
            self.full_pretty_version(),
        )
    }
}

/// One package operation observed during a dependency-resolution run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Operation {
    Install { package: Package },
    Update { initial: Package, target: Package },
    Uninstall { package: Package },
    MarkAliasInstalled { package: Package },
    MarkAliasUninstalled { package: Package },
}

impl Operation {
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::Install { .. } => "install",
            Operation::Update { .. } => "update",
            Operation::Uninstall { .. } => "uninstall",
            Operation::MarkAliasInstalled { .. } => "mark-alias-installed",
            Operation::MarkAliasUninstalled { .. } => "mark-alias-uninstalled",
        }
    }
}
