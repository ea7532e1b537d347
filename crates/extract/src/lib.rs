//! Event-record extraction for Kyoto University event pages.
//!
//! Two page families are supported: the legacy campus-map event pages, whose
//! content subtree is rendered to a description string by a recursive
//! HTML-to-text renderer, and the official calendar event pages, whose
//! labeled fields are read directly. Japanese date and time phrases are
//! normalized by tolerant multi-pattern parsers that derive a missing range
//! end from the start.
//!
//! Fetching is the caller's concern; every entry point takes already-fetched
//! HTML plus the page URL. Extraction is pure and synchronous, and a failure
//! affects only the record being extracted.

mod calendar;
mod clean;
mod consts;
mod datetime;
pub mod error;
mod extract;
pub mod models;
mod render;

use tracing::instrument;
use url::Url;

pub use crate::calendar::{calendar_url, event_urls, event_urls_for_day};
pub use crate::clean::clean_html;
pub use crate::datetime::{JST, parse_date_span, parse_lenient_datetime_span, parse_time_span};
use crate::error::Result;
pub use crate::extract::{LegacyPage, OfficialPage};
pub use crate::models::Event;
pub use crate::render::render_description;

/// Extracts one event record from an official calendar event page.
///
/// # Examples
///
/// ```rust
/// use gyoji_extract::extract;
/// use url::Url;
///
/// let html = r#"
///     <h1 class="title">講演会</h1>
///     <p>開催日</p><span>2019年08月06日 火曜日</span>
///     <p>時間</p><span>15時00分～</span>
///     <p>開催地</p><span>時計台</span>
///     <p>要旨</p><span>概要</span>
/// "#;
/// let url = Url::parse("http://www.kyoto-u.ac.jp/ja/event/123.html").unwrap();
/// let event = extract(html, url).unwrap();
/// assert_eq!(event.title, "講演会");
/// assert!(event.date.unwrap().is_single_day());
/// ```
///
/// # Errors
///
/// Any [`error::ErrorKind`]; the record should be skipped and siblings in
/// the same batch processed normally.
#[instrument(skip(html), fields(html_size = html.len(), url = %url))]
pub fn extract(html: &str, url: Url) -> Result<Event> {
    OfficialPage::from_html(html, url).event()
}

/// Extracts one event record from a legacy campus-map event page.
///
/// Samples the current JST wall clock for the lenient datetime parse; use
/// [`LegacyPage::event_at`] directly for a reproducible result.
#[instrument(skip(html), fields(html_size = html.len(), url = %url))]
pub fn extract_legacy(html: &str, url: Url) -> Result<Event> {
    LegacyPage::from_html(html, url).event()
}
