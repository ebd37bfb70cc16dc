use crate::records::{PRODUCT_FIELDS, Product};
use std::error::Error;
use std::path::Path;

/// Writes products to a CSV file at `path`, truncating any existing file.
///
/// The header row is always written, so an empty product list still
/// produces a header-only file.
pub fn write_products_csv(path: &Path, products: &[Product]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;

    writer.write_record(PRODUCT_FIELDS)?;
    for product in products {
        writer.serialize(product)?;
    }
    writer.flush()?;

    Ok(())
}
