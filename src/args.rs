use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ecom-scrape")]
#[command(about = "Scrapes webscraper.io e-commerce categories into per-category CSV files")]
#[command(version)]
pub struct Args {
    /// URL of the WebDriver server to drive the browser through
    /// [default: http://localhost:4444]
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Directory to write the per-category CSV files into
    /// [default: current directory]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Optional JSON configuration file; CLI flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run the browser with a visible window instead of headless
    #[arg(long)]
    pub headed: bool,
}
