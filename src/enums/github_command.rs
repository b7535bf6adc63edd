use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::DEFAULT_COMMIT_MESSAGE;

#[derive(Subcommand)]
pub enum GithubCommand {
    Status,
    Login,
    Create {
        name: String,
        #[clap(short, long, default_value = "")]
        description: String,
        #[clap(long)]
        public: bool,
    },
    Push {
        #[clap(short, long, default_value = DEFAULT_COMMIT_MESSAGE)]
        message: String,
        /// Editor content to save before pushing
        #[clap(long)]
        content_file: Option<PathBuf>,
    },
    Disconnect {
        #[clap(short, long)]
        yes: bool,
    },
}
