use std::path::{Path, PathBuf};

use chrono::Utc;
use reqwest::blocking::Client;

use crate::core::config::{LocalPage, RemotePage, SiteConfig};
use crate::core::{splice, version};
use crate::pages::{home, local, remote, wrapper};
use crate::utils::{fetch, file};

/// Full extraction run: bump the build version, regenerate the home page and
/// every configured template page, then fetch and clean the live pages.
/// With `home_only` the live server is never contacted.
pub fn run(config: &SiteConfig, home_only: bool) -> anyhow::Result<()> {
    let now = Utc::now();
    let store_path = Path::new(&config.version_file);

    // The store is persisted before any page is written; if that fails the
    // run must not ship pages stamped with a version the store never saw.
    let record = version::load(store_path, now).bump(now)?;
    version::persist(store_path, &record)?;

    println!("🔨 Building version {}...", record.version);

    let path = extract_home(config, &record.version)?;
    println!("  ✅ {}", path.display());

    for page in &config.local_pages {
        let path = generate_local(config, page)?;
        println!("  ✅ {}", path.display());
    }

    let mut fetched = 0;
    let mut failed = 0;
    if !home_only {
        let client = fetch::client()?;
        for page in &config.remote_pages {
            match extract_remote(config, &client, page) {
                Ok(path) => {
                    println!("  ✅ {} → {}", page.path, path.display());
                    fetched += 1;
                }
                Err(e) => {
                    // The previous build's copy of this page stays deployed,
                    // so a down server costs freshness, not the page.
                    eprintln!("  ❌ {}: {:#}", page.path, e);
                    failed += 1;
                }
            }
        }
    }

    let written = 1 + config.local_pages.len() + fetched;
    println!(
        "\n✨ Version {}: {} pages written, {} fetch failures",
        record.version, written, failed
    );
    Ok(())
}

/// Assemble the static home page from the server-side template and the nav,
/// footer, and form fragments.
fn extract_home(config: &SiteConfig, version: &str) -> anyhow::Result<PathBuf> {
    let home_cfg = &config.home;
    let sources = home::HomeSources {
        template: file::read_text(Path::new(&home_cfg.template))?,
        nav: file::read_text(Path::new(&home_cfg.nav))?,
        footer: file::read_text(Path::new(&home_cfg.footer))?,
        form: match &home_cfg.form {
            Some(path) => file::read_text(Path::new(path))?,
            None => home::DEFAULT_CONTACT_FORM.to_string(),
        },
    };

    let body = home::extract(
        &sources,
        version,
        &config.base_url,
        &config.links.extract,
        &home_cfg.footer_partial,
    )?;
    let html = wrapper::wrap(&body, &home_cfg.title, &home_cfg.description, &config.site_url);

    let path = config.home_output_path();
    file::write_page(&path, &html)?;
    Ok(path)
}

fn generate_local(config: &SiteConfig, page: &LocalPage) -> anyhow::Result<PathBuf> {
    let template = file::read_text(Path::new(&page.template))?;
    let footer = match &page.footer {
        Some(path) => Some(file::read_text(Path::new(path))?),
        None => None,
    };

    let body = local::generate(&template, footer.as_deref(), &page.footer_partial);
    let html = wrapper::wrap(&body, &page.title, &page.description, &config.site_url);

    let path = Path::new(&config.output_dir).join(&page.output);
    file::write_page(&path, &html)?;
    Ok(path)
}

/// Fetched pages arrive as complete documents; they are cleaned of server
/// artifacts and saved without the wrapper shell.
fn extract_remote(
    config: &SiteConfig,
    client: &Client,
    page: &RemotePage,
) -> anyhow::Result<PathBuf> {
    let content = fetch::fetch_page(client, &config.base_url, &page.path)?;
    let content = remote::clean(&content);
    let content = splice::rewrite_links(&content, &config.base_url, &config.links.extract);

    let path = Path::new(&config.output_dir).join(&page.output);
    file::write_page(&path, &content)?;
    Ok(path)
}
