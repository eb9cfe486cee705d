use crate::config::{Config, ConfigBuilder, ConfigLocator, EXTRA_KEY};
use crate::error::Result;
use crate::outputter::file::EMPTY_SUMMARY;
use crate::outputter::{OutputFormat, OutputterFactory};
use crate::package::Operation;
use crate::summary::SummaryFileWriter;
use crate::utils::path_validator::PathValidator;
use crate::webhook::WebhookCaller;
use colored::Colorize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What a run produced besides the terminal summary
#[derive(Debug)]
pub struct RunReport {
    pub summary: String,
    pub summary_file: Option<PathBuf>,
    pub webhook_response: Option<String>,
}

/// Summarize the operations of a Composer run for the project at `project_path`
pub fn execute_summary<P: AsRef<Path>>(
    project_path: P,
    operations_source: &str,
    composer_home: Option<PathBuf>,
) -> Result<()> {
    let project_dir = PathValidator::validate_project_path(project_path)?;

    let mut locator = ConfigLocator::new(&project_dir, composer_home);
    if std::env::var("CHANGELOGS_VERBOSE").is_ok() {
        match locator.get_path(EXTRA_KEY)? {
            Some(dir) => eprintln!("[VERBOSE] Using configuration from {}", dir.display()),
            None => eprintln!("[VERBOSE] No \"{EXTRA_KEY}\" configuration found, using defaults"),
        }
    }
    let extra = locator.get_config(EXTRA_KEY)?;

    let mut builder = ConfigBuilder::new();
    let config = builder.build(&extra);
    if !builder.warnings().is_empty() {
        eprintln!("{}", "Invalid config for composer-changelogs plugin:".red());
        for warning in builder.warnings() {
            println!("    {warning}");
        }
    }

    let operations = read_operations(operations_source)?;
    if std::env::var("CHANGELOGS_VERBOSE").is_ok() {
        eprintln!("[VERBOSE] Read {} operations from {}", operations.len(), operations_source);
    }

    let report = summarize(&project_dir, &config, &operations)?;

    print!("{}", report.summary);

    if let Some(path) = &report.summary_file {
        println!("\n{} {}", "Summary written to".green(), path.display());
    }
    if report.webhook_response.is_some() {
        println!("{}", "Summary posted to webhook".green());
    }

    Ok(())
}

/// Feeds every operation to both outputters, then writes the summary file and
/// calls the webhook when the configuration asks for it.
pub fn summarize(project_dir: &Path, config: &Config, operations: &[Operation]) -> Result<RunReport> {
    let mut outputter = OutputterFactory::create_outputter(&config.gitlab_hosts);
    let mut file_outputter = OutputterFactory::create_file_outputter(&config.gitlab_hosts);

    for operation in operations {
        outputter.add_operation(operation)?;
        file_outputter.add_operation(operation)?;
    }

    let mut report = RunReport {
        summary: outputter.get_output(),
        summary_file: None,
        webhook_response: None,
    };

    if file_outputter.is_empty() || !config.write_summary_file {
        return Ok(report);
    }

    let writer = SummaryFileWriter::new(project_dir);
    report.summary_file = Some(writer.write(config, &file_outputter)?);

    if let Some(webhook_url) = &config.webhook_url {
        let payload = file_outputter.get_output(OutputFormat::Json)?;
        if payload != EMPTY_SUMMARY {
            let caller = WebhookCaller::new(webhook_url)?;
            report.webhook_response = Some(caller.call(&payload)?);
        }
    }

    Ok(report)
}

/// Reads the JSON array of operations from a file, or from stdin for "-"
pub fn read_operations(source: &str) -> Result<Vec<Operation>> {
    let content = if source == "-" {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(source)?
    };

    parse_operations(&content)
}

pub fn parse_operations(content: &str) -> Result<Vec<Operation>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(content)?)
}
