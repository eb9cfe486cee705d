use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Version of one side of a package operation
///
/// `name` is the normalized identifier (`1.0.9999999.9999999-dev`), `pretty`
/// the one users see (`dev-master`) and `full_pretty` the pretty version
/// followed by the short source revision for development branches
/// (`dev-master 1234abc`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    name: String,
    pretty: String,
    full_pretty: String,
}

impl Version {
    pub fn new(
        name: impl Into<String>,
        pretty: impl Into<String>,
        full_pretty: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pretty: pretty.into(),
            full_pretty: full_pretty.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pretty(&self) -> &str {
        &self.pretty
    }

    pub fn full_pretty(&self) -> &str {
        &self.full_pretty
    }

    /// Branch aliases (`dev-master`) and the numeric placeholders assigned to
    /// unreleased branches (`1.0.9999999.9999999-dev`) both count as dev.
    pub fn is_dev(&self) -> bool {
        self.name.contains("dev")
    }

    /// Token used to reference this version in compare links: the source
    /// revision for dev versions, the pretty version otherwise.
    pub fn compare_token(&self) -> &str {
        if self.is_dev() {
            self.full_pretty
                .rsplit(' ')
                .next()
                .unwrap_or(&self.full_pretty)
        } else {
            &self.pretty
        }
    }

    /// Human readable form, `dev-master@958a5dd` for dev versions.
    pub fn display(&self) -> String {
        if !self.is_dev() {
            return self.pretty.clone();
        }

        match self.full_pretty.split_once(' ') {
            Some((pretty, revision)) => format!("{pretty}@{revision}"),
            None => self.full_pretty.clone(),
        }
    }
}

/// Kind of bump between two released versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SemverBump {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for SemverBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SemverBump::Major => "major",
            SemverBump::Minor => "minor",
            SemverBump::Patch => "patch",
        };
        f.write_str(label)
    }
}

const DEFAULT_BRANCH_ALIAS: &str = "9999999-dev";
const DEFAULT_BRANCHES: &[&str] = &["dev-master", "dev-trunk", "dev-default"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Stability {
    Dev,
    Alpha,
    Beta,
    ReleaseCandidate,
    Stable,
    Patch,
}

/// A normalized version split into numeric components and stability
#[derive(Debug, Clone, PartialEq, Eq)]
struct NormalizedVersion {
    numbers: Vec<u64>,
    stability: Stability,
    stability_number: u64,
}

impl NormalizedVersion {
    fn parse(name: &str) -> Option<Self> {
        let trimmed = name.trim_start_matches(['v', 'V']);
        let (numeric, suffix) = match trimmed.split_once('-') {
            Some((numeric, suffix)) => (numeric, Some(suffix)),
            None => (trimmed, None),
        };

        let numbers = numeric
            .split('.')
            .map(|part| part.parse::<u64>().ok())
            .collect::<Option<Vec<_>>>()?;

        let (stability, stability_number) = match suffix {
            None => (Stability::Stable, 0),
            Some(suffix) => Self::parse_stability(suffix)?,
        };

        Some(Self {
            numbers,
            stability,
            stability_number,
        })
    }

    fn parse_stability(suffix: &str) -> Option<(Stability, u64)> {
        let lower = suffix.to_lowercase();
        let split_at = lower
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(lower.len());
        let (label, number) = lower.split_at(split_at);
        let label = label.trim_end_matches('.');

        let stability = match label {
            "dev" => Stability::Dev,
            "alpha" | "a" => Stability::Alpha,
            "beta" | "b" => Stability::Beta,
            "rc" => Stability::ReleaseCandidate,
            "patch" | "pl" | "p" => Stability::Patch,
            _ => return None,
        };
        let number = if number.is_empty() {
            0
        } else {
            number.parse().ok()?
        };

        Some((stability, number))
    }

    fn component(&self, index: usize) -> u64 {
        self.numbers.get(index).copied().unwrap_or(0)
    }
}

impl PartialOrd for NormalizedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NormalizedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.numbers.len().max(other.numbers.len());
        for index in 0..len {
            match self.component(index).cmp(&other.component(index)) {
                Ordering::Equal => continue,
                other => return other,
            }
        }

        self.stability
            .cmp(&other.stability)
            .then(self.stability_number.cmp(&other.stability_number))
    }
}

pub struct VersionComparator;

impl VersionComparator {
    /// Whether moving from `from` to `to` (normalized names) is an upgrade.
    ///
    /// Branch moves cannot be ordered and always count as upgrades, as do
    /// versions that cannot be parsed.
    pub fn is_upgrade(from: &str, to: &str) -> bool {
        if from == to {
            return true;
        }

        let from = Self::alias_default_branch(from);
        let to = Self::alias_default_branch(to);

        if from.starts_with("dev-") || to.starts_with("dev-") {
            return true;
        }

        match (NormalizedVersion::parse(from), NormalizedVersion::parse(to)) {
            (Some(from), Some(to)) => from <= to,
            _ => true,
        }
    }

    /// Classify the bump between two released versions by their first three
    /// numeric components.
    pub fn semver_bump(from: &Version, to: &Version) -> Option<SemverBump> {
        if from.is_dev() || to.is_dev() {
            return None;
        }

        let from = NormalizedVersion::parse(from.name())?;
        let to = NormalizedVersion::parse(to.name())?;

        if from.component(0) != to.component(0) {
            Some(SemverBump::Major)
        } else if from.component(1) != to.component(1) {
            Some(SemverBump::Minor)
        } else if from.component(2) != to.component(2) {
            Some(SemverBump::Patch)
        } else {
            None
        }
    }

    fn alias_default_branch(name: &str) -> &str {
        if DEFAULT_BRANCHES.contains(&name) {
            DEFAULT_BRANCH_ALIAS
        } else {
            name
        }
    }
}
