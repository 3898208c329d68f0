use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "soapbox", version, about = "Anonymous comment board CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Comment store path (defaults to ~/.config/soapbox/comments.json)"
    )]
    pub store: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a comment under a person key
    Post {
        person_key: String,
        text: String,
        #[arg(long, default_value = "", help = "Display name; blank stays anonymous")]
        name: String,
        #[arg(long, help = "Submission time; server-assigned when omitted")]
        timestamp: Option<String>,
    },
    /// List the comments stored under a person key
    List {
        person_key: String,
    },
    /// Dump every thread, grouped by person key
    All,
    /// Count the comments stored under a person key
    Count {
        person_key: String,
    },
    /// Run the content filter over a text without storing anything
    Screen {
        text: String,
    },
}
