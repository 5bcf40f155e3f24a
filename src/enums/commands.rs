use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Ask a question and read the answer as markdown
    Search {
        /// Question to send; prompts for one when omitted
        query: Option<String>,
        /// Override the search endpoint base URL
        #[clap(short, long)]
        endpoint: Option<String>,
        /// Also save the answer as an untitled markdown file in this directory
        #[clap(short, long)]
        save: Option<PathBuf>,
    },
    /// Write a sample configuration file
    Init,
    /// Check the configuration and API key resolution
    Validate,
}
