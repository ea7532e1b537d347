use super::{DateSpan, TimeSpan};
use std::fmt::{Display, Formatter, Result as FmtResult};
use url::Url;

/// One extracted event record.
///
/// Everything in here is taken from a single event page; the record is
/// self-contained and carries the page URL it came from. The date and time
/// spans are optional because the legacy page family tolerates pages whose
/// date text matches no known pattern; the official family always fills
/// both or fails the whole extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Event name.
    pub title: String,
    /// URL of the event page the record was extracted from.
    pub url: Url,
    /// Venue text; may be empty on legacy pages.
    pub location: String,
    /// Rendered description, ending with the source attribution line.
    pub description: String,
    /// Days the event runs on.
    pub date: Option<DateSpan>,
    /// Daily opening hours, in JST.
    pub time: Option<TimeSpan>,
}
impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.title)
    }
}
impl AsRef<Event> for Event {
    fn as_ref(&self) -> &Event {
        self
    }
}
