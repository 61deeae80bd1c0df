use std::path::Path;
use std::time::Duration;

/// Fetches the raw body of a document.
pub trait TextSource {
    fn fetch_text(&self, location: &str) -> anyhow::Result<String>;
}

pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Reads `http(s)://` locations over the network and anything else from disk.
pub struct SourceFetcher {
    timeout: Duration,
}

impl SourceFetcher {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    fn fetch_remote(&self, url: &str) -> anyhow::Result<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let resp = client.get(url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }

    fn fetch_local(&self, location: &str) -> anyhow::Result<String> {
        let path = Path::new(location);
        std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))
    }
}

impl TextSource for SourceFetcher {
    fn fetch_text(&self, location: &str) -> anyhow::Result<String> {
        tracing::debug!(location, remote = is_remote(location), "fetching document");
        if is_remote(location) {
            self.fetch_remote(location)
        } else {
            self.fetch_local(location)
        }
    }
}
