use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use url::Url;

/// Listing page that every category URL is joined against
pub const DEFAULT_BASE_URL: &str = "https://webscraper.io/test-sites/e-commerce/more/";

/// Category names and their path suffixes relative to the base URL,
/// in the order they are scraped
pub const CATEGORIES: [(&str, &str); 6] = [
    ("home", ""),
    ("computers", "computers"),
    ("laptops", "computers/laptops"),
    ("tablets", "computers/tablets"),
    ("touch", "phones/touch"),
    ("phones", "phones"),
];

/// Configuration for the category scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Base URL of the listing site; category URLs are joined onto this
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Directory the per-category CSV files are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Whether to run the browser headless
    #[serde(default = "default_headless")]
    pub headless: bool,
}

/// Default value for base_url
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default output directory (process working directory)
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Default value for headless
fn default_headless() -> bool {
    true
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            webdriver_url: default_webdriver_url(),
            output_dir: default_output_dir(),
            headless: default_headless(),
        }
    }
}

impl ScraperConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Build the fixed (name, url) table by joining each category suffix
    /// onto the base URL, preserving declaration order
    pub fn category_urls(&self) -> Result<Vec<(String, Url)>, url::ParseError> {
        let base = Url::parse(&self.base_url)?;
        CATEGORIES
            .iter()
            .map(|(name, suffix)| Ok((name.to_string(), base.join(suffix)?)))
            .collect()
    }
}
