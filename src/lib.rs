// Re-export modules
pub mod config;
pub mod driver;
pub mod export;
pub mod extract;
pub mod navigate;
pub mod records;
pub mod session;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use records::Product;

use std::error::Error;
use std::path::PathBuf;

/// Main builder for scraping every configured category into CSV files
pub struct Scraper {
    config: ScraperConfig,
}

impl Scraper {
    /// Create a new Scraper with the default configuration
    pub fn new() -> Self {
        Self {
            config: ScraperConfig::new(),
        }
    }

    /// Use the given configuration
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn Error>> {
        self.config = ScraperConfig::from_file(path)?;
        Ok(self)
    }

    /// Override the WebDriver server URL
    pub fn with_webdriver_url(mut self, url: &str) -> Self {
        self.config.webdriver_url = url.to_string();
        self
    }

    /// Override the directory CSV files are written into
    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.config.output_dir = dir;
        self
    }

    /// Override whether the browser runs headless
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    /// Scrape every configured category, strictly in order, writing one
    /// `<name>.csv` per category.
    ///
    /// Each category gets its own browser session, released before the
    /// next category starts. The first failure aborts the run; nothing is
    /// caught or retried.
    pub async fn run(mut self) -> Result<(), Box<dyn Error>> {
        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.config.webdriver_url = webdriver_url;
            }
        }

        let categories = self.config.category_urls()?;
        for (name, url) in &categories {
            ::log::info!("Scraping category {} from {}", name, url);
            driver::scrape_category(&self.config, name, url.as_str()).await?;
        }

        Ok(())
    }
}

impl Default for Scraper {
    fn default() -> Self {
        Self::new()
    }
}
