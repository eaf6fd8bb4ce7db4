use clap::Parser;
use pagelift::commands;
use pagelift::core::config::SiteConfig;
use pagelift::utils::cli::{Args, Command};
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(args.config)?;

    match args.command {
        Command::Extract { home_only } => commands::extract::run(&config, home_only)?,
        Command::WireForm { file } => commands::wire_form::run(&config, file)?,
        Command::Links {
            app_url,
            form_id,
            file,
        } => commands::links::run(&config, app_url, form_id, file)?,
    }

    Ok(())
}

/// An explicit --config must load; the default path is optional and falls
/// back to the built-in site layout when absent.
fn load_config(path: Option<PathBuf>) -> anyhow::Result<SiteConfig> {
    let path = match path {
        Some(path) => path,
        None => {
            let default = Path::new(SiteConfig::DEFAULT_PATH);
            if !default.exists() {
                return Ok(SiteConfig::default());
            }
            default.to_path_buf()
        }
    };

    match SiteConfig::read(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!("Error loading config {}: {}", path.display(), e);
            eprintln!(
                "Expected a TOML file with keys like base_url, app_url, output_dir, \
                 version_file, [home], [[local_pages]], [[remote_pages]]"
            );
            std::process::exit(1);
        }
    }
}
