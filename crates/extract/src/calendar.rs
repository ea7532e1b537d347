//! Event-URL enumeration from monthly calendar listing pages.
//!
//! Parsing only: the caller fetches the listing HTML and resolves any
//! relative hrefs against the listing URL.

use crate::consts;
use scraper::{ElementRef, Html};
use std::sync::LazyLock;
use url::Url;

static CALENDAR_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://www.kyoto-u.ac.jp/ja/social/event/calendar/").unwrap());

/// The official monthly calendar URL for a given year and month.
pub fn calendar_url(year: i32, month: u8) -> Url {
    let mut url = CALENDAR_BASE.clone();
    url.query_pairs_mut().append_pair("year", &year.to_string()).append_pair("month", &month.to_string());
    url
}

/// Hrefs of every event linked from a legacy monthly calendar page.
pub fn event_urls(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&consts::CALENDAR_LINK_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href").map(str::to_string))
        .collect()
}

/// Hrefs of the events listed for one day of an official calendar page.
///
/// Days without a matching cell, and cells without an event list in their
/// row, yield an empty list.
pub fn event_urls_for_day(html: &str, day: u8) -> Vec<String> {
    let document = Html::parse_document(html);
    let needle = day.to_string();
    let Some(cell) =
        document.select(&consts::DAY_CELL_SELECTOR).find(|cell| cell.text().any(|text| text.contains(&needle)))
    else {
        return Vec::new();
    };
    let Some(row) = cell.parent().and_then(ElementRef::wrap) else {
        return Vec::new();
    };
    row.select(&consts::DAY_EVENT_LINK_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href").map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_monthly_calendar_url() {
        assert_eq!(calendar_url(2019, 8).as_str(), "http://www.kyoto-u.ac.jp/ja/social/event/calendar/?year=2019&month=8");
    }

    #[test]
    fn collects_legacy_calendar_links() {
        let html = r#"<div class="event_calender">
            <ul>
                <li><a href="http://www.example.ac.jp/event/1.html">一</a></li>
                <li><a href="http://www.example.ac.jp/event/2.html">二</a></li>
            </ul>
            <a href="http://www.example.ac.jp/other.html">他</a>
        </div>"#;
        assert_eq!(
            event_urls(html),
            vec!["http://www.example.ac.jp/event/1.html", "http://www.example.ac.jp/event/2.html"]
        );
    }

    #[test]
    fn collects_links_for_the_matching_day_row() {
        let html = r#"<table>
            <tr>
                <td class="day">5</td>
                <td><div class="event_of_day"><a href="/e/5a.html">a</a><a href="/e/5b.html">b</a></div></td>
            </tr>
            <tr>
                <td class="day">6</td>
                <td><div class="event_of_day"><a href="/e/6a.html">c</a></div></td>
            </tr>
        </table>"#;
        assert_eq!(event_urls_for_day(html, 5), vec!["/e/5a.html", "/e/5b.html"]);
        assert_eq!(event_urls_for_day(html, 6), vec!["/e/6a.html"]);
    }

    #[test]
    fn day_without_events_yields_no_links() {
        let html = r#"<table><tr><td class="day">7</td><td></td></tr></table>"#;
        assert!(event_urls_for_day(html, 7).is_empty());
        assert!(event_urls_for_day(html, 8).is_empty());
    }
}
