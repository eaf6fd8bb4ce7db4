use std::sync::OnceLock;

use regex::Regex;

/// Module bundle import emitted by the server's asset pipeline. Removed
/// literally; the import has exactly this shape on every page.
const MODULE_IMPORT: &str = r#"<script type="module">import "application"</script>"#;

/// Strip server-framework artifacts from a fetched page: bundle preloads,
/// the module import, turbo-tracked asset tags, and CSRF meta tags. What
/// remains is plain HTML that can be served from a static host.
pub fn clean(source: &str) -> String {
    static MODULEPRELOAD: OnceLock<Regex> = OnceLock::new();
    static TURBO_LINK: OnceLock<Regex> = OnceLock::new();
    static TURBO_SCRIPT: OnceLock<Regex> = OnceLock::new();
    static CSRF_META: OnceLock<Regex> = OnceLock::new();

    let modulepreload = MODULEPRELOAD
        .get_or_init(|| Regex::new(r#"<link rel="modulepreload"[^>]*>"#).unwrap());
    let turbo_link =
        TURBO_LINK.get_or_init(|| Regex::new(r"<link[^>]*data-turbo-track[^>]*>").unwrap());
    // (?s) lets the body span lines; importmap scripts are multi-line.
    let turbo_script = TURBO_SCRIPT
        .get_or_init(|| Regex::new(r"(?s)<script[^>]*data-turbo-track[^>]*>.*?</script>").unwrap());
    let csrf_meta =
        CSRF_META.get_or_init(|| Regex::new(r#"<meta name="csrf-[^"]*"[^>]*>"#).unwrap());

    let content = modulepreload.replace_all(source, "");
    let content = content.replace(MODULE_IMPORT, "");
    let content = turbo_link.replace_all(&content, "");
    let content = turbo_script.replace_all(&content, "");
    csrf_meta.replace_all(&content, "").into_owned()
}
