use super::{FileOutputter, Outputter};
use crate::handlers::{InstallHandler, OperationHandler, UninstallHandler, UpdateHandler};
use crate::url_generator::{
    BitbucketUrlGenerator, GithubUrlGenerator, GitlabUrlGenerator, UrlGenerator,
    WordPressUrlGenerator,
};

pub struct OutputterFactory;

impl OutputterFactory {
    /// Generators in lookup order. Self-hosted GitLab comes first so that a
    /// configured host always wins.
    pub fn create_url_generators(gitlab_hosts: &[String]) -> Vec<Box<dyn UrlGenerator>> {
        let mut generators: Vec<Box<dyn UrlGenerator>> = Vec::new();

        if !gitlab_hosts.is_empty() {
            generators.push(Box::new(GitlabUrlGenerator::new(gitlab_hosts.iter().cloned())));
        }

        generators.push(Box::new(GithubUrlGenerator::new()));
        generators.push(Box::new(BitbucketUrlGenerator::new()));
        generators.push(Box::new(WordPressUrlGenerator::new()));

        generators
    }

    pub fn create_operation_handlers() -> Vec<Box<dyn OperationHandler>> {
        vec![
            Box::new(InstallHandler::new()),
            Box::new(UpdateHandler::new()),
            Box::new(UninstallHandler::new()),
        ]
    }

    pub fn create_outputter(gitlab_hosts: &[String]) -> Outputter {
        Outputter::new(
            Self::create_operation_handlers(),
            Self::create_url_generators(gitlab_hosts),
        )
    }

    pub fn create_file_outputter(gitlab_hosts: &[String]) -> FileOutputter {
        FileOutputter::new(
            Self::create_operation_handlers(),
            Self::create_url_generators(gitlab_hosts),
        )
    }
}
