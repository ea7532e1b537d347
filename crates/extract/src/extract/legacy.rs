//! Extraction for the legacy campus-map event pages.

use crate::clean;
use crate::consts;
use crate::datetime::{self, JST};
use crate::error::{ErrorKind, Result};
use crate::models::Event;
use crate::render;
use exn::OptionExt;
use scraper::{ElementRef, Html};
use time::{OffsetDateTime, UtcDateTime};
use tracing::instrument;
use url::Url;

/// A parsed legacy event page.
///
/// The raw HTML is run through [`clean_html`](crate::clean_html) before
/// parsing, so the tree this type walks is free of formatting whitespace and
/// carries line-break sentinels instead of `<br>` tags.
#[derive(Debug)]
pub struct LegacyPage {
    document: Html,
    url: Url,
}

impl LegacyPage {
    pub fn from_html(html: &str, url: Url) -> Self {
        let cleaned = clean::clean_html(html);
        Self { document: Html::parse_document(&cleaned), url }
    }

    /// Extracts the event record, sampling the current JST wall clock for
    /// the lenient datetime parse.
    ///
    /// Prefer [`event_at`](Self::event_at) when the result must be
    /// reproducible.
    #[instrument(skip(self), fields(url = %self.url))]
    pub fn event(&self) -> Result<Event> {
        self.event_at(UtcDateTime::now().to_offset(JST))
    }

    /// Extracts the event record, substituting fields missing from the date
    /// text from the supplied instant.
    ///
    /// Lookup misses on this page family are not errors: an absent title or
    /// location becomes an empty string, and an unparseable date text leaves
    /// the date and time spans unset.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidDocument`] when the content root is absent.
    pub fn event_at(&self, now: OffsetDateTime) -> Result<Event> {
        let content = self.content_root()?;
        let title =
            content.select(&consts::LEGACY_TITLE_SELECTOR).next().and_then(render::own_text).unwrap_or_default();
        let description = render::render_description(content, &self.url);
        let location = clean::strip_line_breaks(&labeled_paragraph(content, &consts::LOCATION_LABELS));
        let date_text = clean::strip_line_breaks(&labeled_paragraph(content, &[consts::DATE_HEADING_LABEL]));
        let (date, time) = match datetime::parse_lenient_datetime_span(&date_text, now) {
            Ok(span) => (Some(span.dates()), Some(span.times())),
            // Silent policy: an unrecognized date text is tolerated.
            Err(_) => (None, None),
        };
        Ok(Event {
            title: title.to_string(),
            url: self.url.clone(),
            location,
            description,
            date,
            time,
        })
    }

    /// The subtree holding the whole event body: the third child node of the
    /// `#region-content` element on these pages.
    fn content_root(&self) -> Result<ElementRef<'_>> {
        let region = self
            .document
            .select(&consts::REGION_CONTENT_SELECTOR)
            .next()
            .ok_or_raise(|| ErrorKind::InvalidDocument)?;
        region.children().nth(2).and_then(ElementRef::wrap).ok_or_raise(|| ErrorKind::InvalidDocument)
    }
}

/// Finds the first `h2` heading whose own text contains one of `labels` and
/// returns the own text of the immediately adjacent `<p>`.
///
/// Any miss — no such heading, the adjacent sibling is not a paragraph, the
/// paragraph has no text — yields an empty string.
fn labeled_paragraph(content: ElementRef<'_>, labels: &[&str]) -> String {
    for heading in content.select(&consts::LABEL_HEADING_SELECTOR) {
        let Some(text) = render::own_text(heading) else {
            continue;
        };
        if labels.iter().any(|label| text.contains(label)) {
            return adjacent_paragraph_text(heading).unwrap_or_default();
        }
    }
    String::new()
}

fn adjacent_paragraph_text(heading: ElementRef<'_>) -> Option<String> {
    let paragraph = ElementRef::wrap(heading.next_sibling()?)?;
    if paragraph.value().name() != "p" {
        return None;
    }
    Some(render::own_text(paragraph).unwrap_or_default().to_string())
}
