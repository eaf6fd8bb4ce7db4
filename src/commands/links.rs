use std::path::PathBuf;

use crate::core::config::SiteConfig;
use crate::core::splice;
use crate::utils::file;

/// Placeholder for the hosted-form ID in pages generated before one existed.
const FORM_ID_PLACEHOLDER: &str = "YOUR_FORM_ID";

/// Rewrite application links in a generated page so they point at the
/// production app, and fill in the hosted-form ID. Flags override the config
/// for one-off deploys.
pub fn run(
    config: &SiteConfig,
    app_url: Option<String>,
    form_id: Option<String>,
    file_arg: Option<PathBuf>,
) -> anyhow::Result<()> {
    let path = file_arg.unwrap_or_else(|| config.home_output_path());
    let app_url = app_url.unwrap_or_else(|| config.app_url.clone());
    let form_id = form_id.or_else(|| config.form_id.clone());

    let content = file::read_text(&path)?;
    let mut updated = splice::rewrite_links(&content, &app_url, &config.links.deploy);
    if let Some(id) = &form_id {
        updated = updated.replace(FORM_ID_PLACEHOLDER, id);
    }
    file::write_page(&path, &updated)?;

    println!("✅ Links updated in {}", path.display());
    println!("   App URL: {app_url}");
    match form_id {
        Some(id) => println!("   Form ID: {id}"),
        None => println!("   Form ID: not configured, placeholder left in place"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PAGE: &str = concat!(
        r#"<a href="/users/sign_in">Sign in</a>"#,
        "\n",
        r#"<a href="/faq">FAQ</a>"#,
        "\n",
        r#"<form action="https://formspree.io/f/YOUR_FORM_ID">"#,
    );

    fn config_for(dir: &std::path::Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.output_dir = dir.join("public").to_string_lossy().into_owned();
        config
    }

    #[test]
    fn test_run_rewrites_deploy_links_and_fills_the_form_id() {
        let dir = TempDir::new().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, PAGE).unwrap();

        let config = config_for(dir.path());
        run(
            &config,
            Some("https://app.example.com".to_string()),
            Some("mqkrlzyx".to_string()),
            Some(page.clone()),
        )
        .unwrap();

        let html = fs::read_to_string(&page).unwrap();
        assert!(html.contains(r#"href="https://app.example.com/users/sign_in""#));
        assert!(html.contains(r#"href="https://app.example.com/faq""#));
        assert!(html.contains("https://formspree.io/f/mqkrlzyx"));
        assert!(!html.contains(FORM_ID_PLACEHOLDER));
    }

    #[test]
    fn test_run_without_a_form_id_keeps_the_placeholder() {
        let dir = TempDir::new().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, PAGE).unwrap();

        let config = config_for(dir.path());
        run(&config, None, None, Some(page.clone())).unwrap();

        let html = fs::read_to_string(&page).unwrap();
        assert!(html.contains(FORM_ID_PLACEHOLDER));
        // Links still point at the configured production app.
        let expected = format!("href=\"{}/users/sign_in\"", config.app_url);
        assert!(html.contains(&expected));
    }

    #[test]
    fn test_run_defaults_to_the_home_page_output() {
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path());
        let page = config.home_output_path();
        fs::create_dir_all(page.parent().unwrap()).unwrap();
        fs::write(&page, PAGE).unwrap();

        run(&config, None, Some("abc123".to_string()), None).unwrap();
        assert!(fs::read_to_string(&page).unwrap().contains("abc123"));
    }

    #[test]
    fn test_rerunning_with_the_same_app_url_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, PAGE).unwrap();

        let config = config_for(dir.path());
        let url = Some("https://app.example.com".to_string());
        run(&config, url.clone(), None, Some(page.clone())).unwrap();
        let first = fs::read_to_string(&page).unwrap();

        // Rewritten hrefs no longer match the bare paths.
        run(&config, url, None, Some(page.clone())).unwrap();
        assert_eq!(fs::read_to_string(&page).unwrap(), first);
    }
}
