use fantoccini::{Client, Locator};
use std::error::Error;

/// Cookie-consent button shown on first visit
pub const COOKIE_BUTTON: &str = ".acceptCookies";

/// "Load more" control at the bottom of a category listing.
/// The site really does spell it "ecomerce".
pub const LOAD_MORE_BUTTON: &str = ".ecomerce-items-scroll-more";

/// Navigates the browser to the given URL
pub async fn load(client: &Client, url: &str) -> Result<(), Box<dyn Error>> {
    client.goto(url).await?;
    ::log::debug!("Loaded {}", url);
    Ok(())
}

/// Clicks the cookie-consent button if it is present.
///
/// Absence is the steady state once cookies have been accepted, so a
/// missing button is a no-op rather than an error.
pub async fn accept_cookies(client: &Client) -> Result<(), Box<dyn Error>> {
    let buttons = client.find_all(Locator::Css(COOKIE_BUTTON)).await?;
    match buttons.into_iter().next() {
        Some(button) => {
            button.click().await?;
            ::log::debug!("Accepted cookies");
        }
        None => {
            ::log::debug!("No cookie banner present");
        }
    }
    Ok(())
}

/// Clicks the "load more" control until the listing is fully expanded.
///
/// Stops as soon as no control is found or the found control is hidden.
/// The site renders at most one such control, so only the first match is
/// checked. There is no iteration cap; synchronization is left entirely
/// to the WebDriver's own click/lookup waits.
pub async fn expand_all_items(client: &Client) -> Result<(), Box<dyn Error>> {
    let mut clicks = 0u32;
    loop {
        let buttons = client.find_all(Locator::Css(LOAD_MORE_BUTTON)).await?;
        let Some(button) = buttons.into_iter().next() else {
            break;
        };
        if !button.is_displayed().await? {
            break;
        }
        button.click().await?;
        clicks += 1;
    }
    ::log::debug!("Expanded listing with {} load-more clicks", clicks);
    Ok(())
}
