use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::Client;

/// One fetch may stall on a cold server; the whole run should not.
const FETCH_TIMEOUT_SECS: u64 = 30;

/// Build the HTTP client the remote-page fetches share.
pub fn client() -> anyhow::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .context("building HTTP client")
}

/// Fetch one page from the live server and return its body. Non-2xx
/// responses are errors; an error page saved as static output would be
/// worse than a skipped page.
pub fn fetch_page(client: &Client, base_url: &str, path: &str) -> anyhow::Result<String> {
    let url = format!("{base_url}{path}");
    let response = client
        .get(&url)
        .send()
        .with_context(|| format!("GET {url}"))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("GET {url} returned {status}");
    }
    response.text().with_context(|| format!("reading body of {url}"))
}
