use crate::config::ScraperConfig;
use crate::session::BrowserSession;
use crate::{export, extract, navigate};
use std::error::Error;
use std::path::{Path, PathBuf};

/// Scrapes one category listing into `<name>.csv` in the output directory.
///
/// Owns a browser session for the duration of the scrape and closes it on
/// every exit path. Errors are not caught here; any failure propagates
/// and aborts the remaining categories.
pub async fn scrape_category(
    config: &ScraperConfig,
    name: &str,
    url: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let session = BrowserSession::connect(&config.webdriver_url, config.headless).await?;
    let result = scrape_with_session(&session, config, name, url).await;
    session.close().await;
    result
}

async fn scrape_with_session(
    session: &BrowserSession,
    config: &ScraperConfig,
    name: &str,
    url: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let client = session.client();

    navigate::load(client, url).await?;
    navigate::accept_cookies(client).await?;
    navigate::expand_all_items(client).await?;

    let source = client.source().await?;
    archive_listing(&source, name, &config.output_dir)
}

/// Extracts every product from an expanded listing page and writes the
/// category CSV. Split out from the browser-driving half so the parse
/// and export pipeline can run against static page source.
pub fn archive_listing(
    source: &str,
    name: &str,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let products = extract::parse_listing(source, name)?;

    let path = output_dir.join(format!("{}.csv", name));
    export::write_products_csv(&path, &products)?;

    ::log::info!("Wrote {} products to {}", products.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // Listing markup matching the shape of the live site's product tiles
    const STUB_LISTING: &str = r#"<html><body>
        <div class="thumbnail">
            <h4 class="price pull-right">$295.99</h4>
            <h4><a class="title" title="Asus VivoBook X441NA">Asus VivoBo...</a></h4>
            <p class="description">Asus VivoBook X441NA, quiet and light</p>
            <div class="ratings">
                <p class="review-count">14 reviews</p>
                <p><span></span><span></span><span></span></p>
            </div>
        </div>
        <div class="thumbnail">
            <h4 class="price pull-right">$1139.54</h4>
            <h4><a class="title" title="Asus ROG Strix GL553VD">Asus ROG Str...</a></h4>
            <p class="description">Gaming laptop</p>
            <div class="ratings">
                <p class="review-count">8 reviews</p>
                <p><span></span><span></span><span></span><span></span><span></span></p>
            </div>
        </div>
        <div class="thumbnail">
            <h4 class="price pull-right">$416.99</h4>
            <h4><a class="title" title="Packard 255 G2">Packard 255...</a></h4>
            <p class="description">15.6 inch budget machine</p>
            <div class="ratings">
                <p class="review-count">2 reviews</p>
                <p><span></span><span></span></p>
            </div>
        </div>
    </body></html>"#;

    #[test]
    fn test_stub_listing_produces_csv_in_document_order() {
        let out_dir = std::env::temp_dir().join(format!("ecom-scrape-e2e-{}", std::process::id()));
        fs::create_dir_all(&out_dir).unwrap();

        let path = archive_listing(STUB_LISTING, "laptops", &out_dir).unwrap();
        assert_eq!(path, out_dir.join("laptops.csv"));

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "title,description,price,rating,num_of_reviews");
        assert_eq!(
            lines[1],
            "Asus VivoBook X441NA,\"Asus VivoBook X441NA, quiet and light\",295.99,3,14"
        );
        assert_eq!(lines[2], "Asus ROG Strix GL553VD,Gaming laptop,1139.54,5,8");
        assert_eq!(lines[3], "Packard 255 G2,15.6 inch budget machine,416.99,2,2");

        fs::remove_dir_all(&out_dir).unwrap();
    }

    #[test]
    fn test_malformed_listing_writes_no_csv() {
        let out_dir =
            std::env::temp_dir().join(format!("ecom-scrape-e2e-bad-{}", std::process::id()));
        fs::create_dir_all(&out_dir).unwrap();

        let source = r#"<html><body><div class="thumbnail"></div></body></html>"#;
        assert!(archive_listing(source, "phones", &out_dir).is_err());
        assert!(!out_dir.join("phones.csv").exists());

        fs::remove_dir_all(&out_dir).unwrap();
    }
}
