use crate::config::Config;
use crate::error::Result;
use crate::outputter::{FileOutputter, OutputFormat};
use crate::utils::path_validator::PathValidator;
use jiff::Zoned;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the summary file of a run into the changelogs directory
pub struct SummaryFileWriter {
    project_dir: PathBuf,
}

impl SummaryFileWriter {
    pub fn new<P: AsRef<Path>>(project_dir: P) -> Self {
        Self {
            project_dir: project_dir.as_ref().to_path_buf(),
        }
    }

    /// `changelogs-<date>-<hour:minute>.<ext>`, minute precision
    pub fn file_name(format: OutputFormat, now: &Zoned) -> String {
        format!(
            "changelogs-{}.{}",
            now.strftime("%Y-%m-%d-%H:%M"),
            format.extension()
        )
    }

    pub fn write(&self, config: &Config, outputter: &FileOutputter) -> Result<PathBuf> {
        self.write_at(config, outputter, &Zoned::now())
    }

    /// Writes the summary as if the run ended at `now`. A file from the same
    /// minute is overwritten.
    pub fn write_at(&self, config: &Config, outputter: &FileOutputter, now: &Zoned) -> Result<PathBuf> {
        let dir = self.changelogs_dir(config)?;
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        let dir = PathValidator::validate_output_dir(&dir)?;

        let path = dir.join(Self::file_name(config.output_file_format, now));
        let content = outputter.get_output(config.output_file_format)?;
        fs::write(&path, content)?;

        if std::env::var("CHANGELOGS_VERBOSE").is_ok() {
            eprintln!("[VERBOSE] Summary written to {}", path.display());
        }

        Ok(path)
    }

    /// The changelogs directory always lives under the project root, an
    /// absolute `changelogs-dir-path` included.
    fn changelogs_dir(&self, config: &Config) -> Result<PathBuf> {
        let relative = config.changelogs_dir().trim_start_matches('/');
        PathValidator::validate_new_output_dir(self.project_dir.join(relative))
    }
}
