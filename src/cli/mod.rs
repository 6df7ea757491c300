use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a weight loss plan for the signed-in user
    Advice {
        /// User id; falls back to LEANADVICE_USER_ID
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Print the plan extracted from a saved function response
    Extract {
        /// File to read; stdin when omitted
        path: Option<PathBuf>,
    },
}
