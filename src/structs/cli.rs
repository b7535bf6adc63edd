use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "spaces")]
#[clap(about = "Edit, preview, deploy and push Spaces sites", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
