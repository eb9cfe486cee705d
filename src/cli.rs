use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "composer-changelogs",
    about = "Summarize the package changes of a Composer run with links to their changelogs",
    version,
    author
)]
pub struct Cli {
    /// Path to the project directory holding composer.json (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// JSON file listing the operations of the run, "-" reads stdin
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub operations: String,

    /// Composer home holding the global composer.json (defaults to $COMPOSER_HOME)
    #[arg(long, value_name = "DIR")]
    pub composer_home: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn composer_home(&self) -> Option<PathBuf> {
        self.composer_home
            .clone()
            .or_else(|| std::env::var_os("COMPOSER_HOME").map(PathBuf::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_project_and_stdin() {
        let cli = Cli::parse_from(["composer-changelogs"]);
        assert_eq!(cli.path, ".");
        assert_eq!(cli.operations, "-");
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "composer-changelogs",
            "--path",
            "app",
            "--operations",
            "ops.json",
            "--composer-home",
            "/home/dev/.composer",
            "-v",
        ]);
        assert_eq!(cli.path, "app");
        assert_eq!(cli.operations, "ops.json");
        assert_eq!(cli.composer_home(), Some(PathBuf::from("/home/dev/.composer")));
        assert!(cli.verbose);
    }
}
