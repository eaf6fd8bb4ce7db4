use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI for turning server-rendered pages into a static site
#[derive(Parser, Debug)]
#[command(
    name = "pagelift",
    about = "Static page extraction for the marketing site",
    after_help = "USAGE:\n  pagelift extract            build every page and bump the version\n  pagelift extract --home-only\n  pagelift wire-form [FILE]   point the contact form at /api/contact\n  pagelift links [FILE]       rewrite app links for deployment\n\nFor help: pagelift <command> -h"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Site config file (default: pagelift.toml in the working directory)
    #[arg(short = 'c', long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bump the build version and extract every configured page
    Extract {
        /// Rebuild only the pages generated from local templates; skip
        /// fetching from the live server
        #[arg(long = "home-only")]
        home_only: bool,
    },

    /// Rewire a generated page's contact form to the serverless endpoint
    #[command(name = "wire-form")]
    WireForm {
        /// Page to patch (default: the home page output)
        file: Option<PathBuf>,
    },

    /// Rewrite application links in a generated page for deployment
    Links {
        /// Production application URL the links should point at
        #[arg(long = "app-url", value_name = "URL")]
        app_url: Option<String>,

        /// Hosted-form ID to fill into the YOUR_FORM_ID placeholder
        #[arg(long = "form-id", value_name = "ID")]
        form_id: Option<String>,

        /// Page to rewrite (default: the home page output)
        file: Option<PathBuf>,
    },
}
