use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use std::error::Error;

/// A single WebDriver browser session, exclusively owned by one
/// category scrape.
///
/// Callers must invoke [`BrowserSession::close`] on every exit path once
/// the scrape result is known; close never panics and downgrades cleanup
/// failures to a warning.
pub struct BrowserSession {
    client: Client,
}

impl BrowserSession {
    /// Connect a new session to the WebDriver server
    pub async fn connect(webdriver_url: &str, headless: bool) -> Result<Self, Box<dyn Error>> {
        let mut capabilities = serde_json::map::Map::new();
        if headless {
            capabilities.insert(
                "goog:chromeOptions".to_string(),
                json!({ "args": ["--headless=new", "--disable-gpu"] }),
            );
        }

        let client = ClientBuilder::native()
            .capabilities(capabilities)
            .connect(webdriver_url)
            .await?;
        ::log::debug!("Connected to WebDriver at {}", webdriver_url);

        Ok(Self { client })
    }

    /// The underlying WebDriver client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Close the session, releasing the browser
    pub async fn close(self) {
        if let Err(e) = self.client.close().await {
            ::log::warn!("Failed to close browser session: {}", e);
        }
    }
}
