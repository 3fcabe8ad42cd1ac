//! Page-ready wiring
//!
//! Mirrors the page's ready handler: bind the burger controls, and, only
//! if the search input is present, run the one-shot directory download
//! and hand its completion to a fresh search panel. No initial render
//! pass happens here; output is produced on query-change events only.

use anyhow::Result;
use reqwest::Client;
use url::Url;

use crate::page::menu::MenuBinding;
use crate::page::search::SearchPanel;
use crate::page::surface::{MenuSurface, SearchSurface};
use crate::services::{directory_url, fetch_directory};

/// Initializes both interactive behaviors over one page surface.
///
/// The two are independent: menu binding never waits on the network, and
/// a page without a search input skips the download entirely.
pub async fn boot<S>(
    surface: &mut S,
    client: &Client,
    base_url: &Url,
) -> Result<(MenuBinding, Option<SearchPanel>)>
where
    S: MenuSurface + SearchSurface,
{
    let menu = MenuBinding::bind(surface);

    if !surface.has_search_input() {
        return Ok((menu, None));
    }

    let url = directory_url(base_url)?;
    let mut panel = SearchPanel::new();
    panel.complete_load(fetch_directory(client, url).await);
    Ok((menu, Some(panel)))
}
