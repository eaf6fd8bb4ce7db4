use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Site configuration (`pagelift.toml`).
///
/// Every field carries a default matching the site layout the tool ships
/// against, so running with no config file at all produces a working build.
#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    /// Server the live pages are fetched from and that development links
    /// point at after extraction.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Production application URL that `links` rewrites hrefs to.
    #[serde(default = "default_app_url")]
    pub app_url: String,
    /// Public site URL stamped into the og:url meta tag.
    #[serde(default = "default_site_url")]
    pub site_url: String,
    /// Directory the generated pages land in.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_version_file")]
    pub version_file: String,
    /// Hosted-form ID that `links` fills into the YOUR_FORM_ID placeholder.
    #[serde(default)]
    pub form_id: Option<String>,
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub links: LinkPaths,
    /// Extra server-rendered templates turned into standalone pages.
    #[serde(default)]
    pub local_pages: Vec<LocalPage>,
    /// Pages pulled from the running server instead of from templates.
    #[serde(default = "default_remote_pages")]
    pub remote_pages: Vec<RemotePage>,
}

/// Home page inputs. Paths are relative to the working directory, which is
/// expected to be the static-site subdirectory of the application checkout.
#[derive(Debug, Deserialize)]
pub struct HomeConfig {
    #[serde(default = "default_home_template")]
    pub template: String,
    /// Static navigation fragment spliced over the server-rendered nav.
    #[serde(default = "default_home_nav")]
    pub nav: String,
    /// Footer fragment; its version markers are re-stamped on every build.
    #[serde(default = "default_home_footer")]
    pub footer: String,
    /// Partial name the template renders the footer through.
    #[serde(default = "default_footer_partial")]
    pub footer_partial: String,
    /// Replacement contact form; the built-in fragment is used when unset.
    #[serde(default)]
    pub form: Option<String>,
    #[serde(default = "default_home_output")]
    pub output: String,
    #[serde(default = "default_home_title")]
    pub title: String,
    #[serde(default = "default_home_description")]
    pub description: String,
}

/// Application paths whose hrefs get absolutized.
#[derive(Debug, Deserialize)]
pub struct LinkPaths {
    /// Rewritten to `base_url` during extraction.
    #[serde(default = "default_extract_paths")]
    pub extract: Vec<String>,
    /// Rewritten to `app_url` by the `links` command.
    #[serde(default = "default_deploy_paths")]
    pub deploy: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocalPage {
    pub template: String,
    pub output: String,
    pub title: String,
    pub description: String,
    /// Footer fragment injected over the render tag before directives are
    /// stripped. Without one the tag is stripped and the page has no footer.
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default = "default_footer_partial")]
    pub footer_partial: String,
}

#[derive(Debug, Deserialize)]
pub struct RemotePage {
    pub path: String,
    pub output: String,
}

fn default_base_url() -> String {
    "https://dev.residentcheckin.co".to_string()
}

fn default_app_url() -> String {
    "https://app.residentcheckin.co".to_string()
}

fn default_site_url() -> String {
    "https://residentcheckin.co".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_version_file() -> String {
    "version.json".to_string()
}

fn default_home_template() -> String {
    "../app/views/pages/home.html.erb".to_string()
}

fn default_home_nav() -> String {
    "shared_nav_home.html".to_string()
}

fn default_home_footer() -> String {
    "../app/views/shared/_footer.html.erb".to_string()
}

fn default_footer_partial() -> String {
    "shared/footer".to_string()
}

fn default_home_output() -> String {
    "index.html".to_string()
}

fn default_home_title() -> String {
    "ResidentCheckin.co - Automated Wellness Checks for Senior Living Communities".to_string()
}

fn default_home_description() -> String {
    "Save 20+ hours per week on wellness checks. Automated safety monitoring and resident \
     communications for independent living facilities. Trusted since 2012."
        .to_string()
}

fn default_extract_paths() -> Vec<String> {
    vec![
        "/facility/onboarding".to_string(),
        "/users/sign_in".to_string(),
    ]
}

fn default_deploy_paths() -> Vec<String> {
    vec![
        "/facility/onboarding".to_string(),
        "/users/sign_in".to_string(),
        "/faq".to_string(),
    ]
}

fn default_remote_pages() -> Vec<RemotePage> {
    vec![
        RemotePage {
            path: "/privacy".to_string(),
            output: "privacy.html".to_string(),
        },
        RemotePage {
            path: "/cookies".to_string(),
            output: "cookies.html".to_string(),
        },
        RemotePage {
            path: "/terms".to_string(),
            output: "terms.html".to_string(),
        },
    ]
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            template: default_home_template(),
            nav: default_home_nav(),
            footer: default_home_footer(),
            footer_partial: default_footer_partial(),
            form: None,
            output: default_home_output(),
            title: default_home_title(),
            description: default_home_description(),
        }
    }
}

impl Default for LinkPaths {
    fn default() -> Self {
        Self {
            extract: default_extract_paths(),
            deploy: default_deploy_paths(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_url: default_app_url(),
            site_url: default_site_url(),
            output_dir: default_output_dir(),
            version_file: default_version_file(),
            form_id: None,
            home: HomeConfig::default(),
            links: LinkPaths::default(),
            local_pages: Vec::new(),
            remote_pages: default_remote_pages(),
        }
    }
}

impl SiteConfig {
    /// Config file looked for in the working directory when no --config is
    /// given.
    pub const DEFAULT_PATH: &'static str = "pagelift.toml";

    pub fn read(config_path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(config_path)?;
        let config: SiteConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Generated home page; the page the patch commands default to.
    pub fn home_output_path(&self) -> PathBuf {
        Path::new(&self.output_dir).join(&self.home.output)
    }
}
