//! Extraction for the official calendar event pages.

use crate::consts;
use crate::datetime;
use crate::error::{ErrorKind, Result};
use crate::models::Event;
use exn::OptionExt;
use scraper::{ElementRef, Html};
use tracing::instrument;
use url::Url;

/// A parsed official event page.
///
/// Fields on this family are labeled by standalone text nodes (開催日, 時間,
/// 開催地, 要旨) each followed in document order by a `<span>` carrying the
/// value. Unlike the legacy family, a missing label or span is a propagated
/// failure: the record is unrecoverable and the caller should skip it.
#[derive(Debug)]
pub struct OfficialPage {
    document: Html,
    url: Url,
}

impl OfficialPage {
    pub fn from_html(html: &str, url: Url) -> Self {
        Self { document: Html::parse_document(html), url }
    }

    /// Extracts the event record.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::MissingField`] when a labeled field cannot be located,
    /// [`ErrorKind::InvalidFormat`] when the date or time text matches no
    /// accepted pattern.
    #[instrument(skip(self), fields(url = %self.url))]
    pub fn event(&self) -> Result<Event> {
        Ok(Event {
            title: self.title()?,
            url: self.url.clone(),
            location: self.location()?,
            description: self.description()?,
            date: Some(datetime::parse_date_span(&self.field_text(consts::DATE_LABEL)?)?),
            time: Some(datetime::parse_time_span(&self.field_text(consts::TIME_LABEL)?)?),
        })
    }

    fn title(&self) -> Result<String> {
        self.document
            .select(&consts::OFFICIAL_TITLE_SELECTOR)
            .next()
            .and_then(|heading| stripped_strings(heading).next())
            .map(str::to_string)
            .ok_or_raise(|| ErrorKind::MissingField("title"))
    }

    fn location(&self) -> Result<String> {
        let span = self.labeled_span(consts::LOCATION_LABEL)?;
        let mut location = String::new();
        for piece in stripped_strings(span) {
            // The venue is followed by campus-map link captions; stop there.
            if piece.contains(consts::MAP_NOISE) {
                break;
            }
            location.push_str(piece);
        }
        Ok(location)
    }

    fn description(&self) -> Result<String> {
        let span = self.labeled_span(consts::DESCRIPTION_LABEL)?;
        let mut description = String::new();
        for piece in stripped_strings(span) {
            description.push_str(piece);
            description.push('\n');
        }
        Ok(description)
    }

    /// The concatenated text of a labeled value span, for the parsers.
    fn field_text(&self, label: &'static str) -> Result<String> {
        Ok(stripped_strings(self.labeled_span(label)?).collect::<String>())
    }

    /// Finds the first text node equal to `label` (exact match after
    /// trimming), then the first `<span>` element after it in document
    /// order.
    fn labeled_span(&self, label: &'static str) -> Result<ElementRef<'_>> {
        let mut nodes = self.document.root_element().descendants();
        while let Some(node) = nodes.next() {
            if node.value().as_text().is_some_and(|text| text.trim() == label) {
                return nodes
                    .find_map(|following| {
                        ElementRef::wrap(following).filter(|element| element.value().name() == "span")
                    })
                    .ok_or_raise(|| ErrorKind::MissingField(label));
            }
        }
        exn::bail!(ErrorKind::MissingField(label))
    }
}

/// Every non-empty descendant text fragment, trimmed, in document order.
fn stripped_strings<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element.text().map(str::trim).filter(|piece| !piece.is_empty())
}
