use clap::Parser;
use ecom_scrape::Scraper;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    println!("Note: scraping requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    // Build the scraper from the optional config file plus CLI overrides
    let mut scraper = match &args.config {
        Some(path) => match Scraper::new().with_config_file(path) {
            Ok(scraper) => scraper,
            Err(e) => {
                ::log::error!("Failed to load config from {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Scraper::new(),
    };

    if let Some(webdriver_url) = &args.webdriver_url {
        scraper = scraper.with_webdriver_url(webdriver_url);
    }
    if let Some(output_dir) = args.output_dir {
        scraper = scraper.with_output_dir(output_dir);
    }
    if args.headed {
        scraper = scraper.with_headless(false);
    }

    let start_time = std::time::Instant::now();
    ::log::info!("Starting category scrape at {:?}", start_time);

    if let Err(e) = scraper.run().await {
        ::log::error!("Scrape failed: {}", e);
        std::process::exit(1);
    }

    let duration = start_time.elapsed();
    ::log::info!(
        "Scrape complete in {:.2} seconds",
        duration.as_secs_f64()
    );
}
