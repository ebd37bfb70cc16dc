use crate::records::Product;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;

/// One product tile in a category listing
pub const PRODUCT_TILE: &str = ".thumbnail";

const TITLE: &str = ".title";
const PRICE: &str = ".pull-right";
const DESCRIPTION: &str = ".description";
const REVIEW_COUNT: &str = ".review-count";
// One span per star of the rating widget
const RATING_STARS: &str = ".ratings > p > span";

/// Parses every product tile out of a fully expanded listing page.
///
/// Tiles are returned in document order. A malformed tile aborts the
/// whole listing; there is no per-item recovery.
pub fn parse_listing(html: &str, category: &str) -> Result<Vec<Product>, Box<dyn Error>> {
    let doc = Html::parse_document(html);
    let tile_selector = Selector::parse(PRODUCT_TILE).unwrap();
    let tiles: Vec<_> = doc.select(&tile_selector).collect();

    ::log::info!("Found {} product tiles in {}", tiles.len(), category);

    let mut products = Vec::with_capacity(tiles.len());
    for (index, tile) in tiles.iter().enumerate() {
        let product = parse_product(*tile)?;
        ::log::debug!(
            "Scraping {}: {}/{} {}",
            category,
            index + 1,
            tiles.len(),
            product.title
        );
        products.push(product);
    }

    Ok(products)
}

/// Extracts a [`Product`] from one tile element.
///
/// The tile shows a shortened title as text; the full title lives in the
/// `title` attribute. The rating is not encoded as a number anywhere, it
/// is the count of rendered star elements.
pub fn parse_product(tile: ElementRef<'_>) -> Result<Product, Box<dyn Error>> {
    let title = select_one(tile, TITLE)?
        .value()
        .attr("title")
        .ok_or("title element has no title attribute")?
        .to_string();

    let price_text = element_text(select_one(tile, PRICE)?);
    let price = price_text
        .replace('$', "")
        .parse::<f64>()
        .map_err(|e| format!("invalid price {:?}: {}", price_text, e))?;

    let description = element_text(select_one(tile, DESCRIPTION)?);

    let review_text = element_text(select_one(tile, REVIEW_COUNT)?);
    let num_of_reviews = review_text
        .split_whitespace()
        .next()
        .ok_or("empty review count")?
        .parse::<u32>()
        .map_err(|e| format!("invalid review count {:?}: {}", review_text, e))?;

    let star_selector = Selector::parse(RATING_STARS).unwrap();
    let rating = tile.select(&star_selector).count() as u32;

    Ok(Product::new(
        title,
        description,
        price,
        rating,
        num_of_reviews,
    ))
}

/// Finds exactly one sub-element, failing if the selector matches nothing
fn select_one<'a>(tile: ElementRef<'a>, css: &str) -> Result<ElementRef<'a>, Box<dyn Error>> {
    let selector = Selector::parse(css).unwrap();
    tile.select(&selector)
        .next()
        .ok_or_else(|| format!("no element matching {:?} in product tile", css).into())
}

/// Visible text of an element with whitespace collapsed
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
