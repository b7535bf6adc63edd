use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::github_command::GithubCommand;

/// `page` is the editor page of a site: `/edit/42`, `/python/42`, a full URL or a bare id.
#[derive(Subcommand)]
pub enum Commands {
    Init,
    Validate,
    New {
        name: String,
    },
    Pull {
        page: String,
        #[clap(short, long, default_value = ".")]
        dir: PathBuf,
    },
    Save {
        page: String,
        file: String,
        #[clap(short, long, default_value = ".")]
        dir: PathBuf,
    },
    Deploy {
        page: String,
        #[clap(short, long, default_value = ".")]
        dir: PathBuf,
        /// File open in the editor; defaults to the configured default file
        #[clap(short, long)]
        file: Option<String>,
        /// Copy the deployed URL to the clipboard
        #[clap(long)]
        copy: bool,
    },
    Preview {
        page: String,
        /// Render local files instead of the ones stored on the server
        #[clap(short, long)]
        dir: Option<PathBuf>,
        /// Write the document here instead of serving it
        #[clap(short, long)]
        out: Option<PathBuf>,
    },
    Watch {
        page: String,
        #[clap(short, long, default_value = ".")]
        dir: PathBuf,
        #[clap(long)]
        autosave: bool,
        #[clap(long)]
        no_browser: bool,
    },
    Github {
        page: String,
        #[clap(subcommand)]
        action: GithubCommand,
    },
}
