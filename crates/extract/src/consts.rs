use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Legacy (campus map) page family.
selector!(REGION_CONTENT_SELECTOR, "#region-content");
selector!(LEGACY_TITLE_SELECTOR, "h1.documentFirstHeading");
selector!(LABEL_HEADING_SELECTOR, "h2");
selector!(CALENDAR_LINK_SELECTOR, ".event_calender li > a");

// Official calendar page family.
selector!(OFFICIAL_TITLE_SELECTOR, "h1.title");
selector!(DAY_CELL_SELECTOR, "td.day");
selector!(DAY_EVENT_LINK_SELECTOR, ".event_of_day a");

// Field labels. The legacy family matches them as substrings of h2 heading
// text; the official family matches standalone text nodes exactly.
pub(crate) const LOCATION_LABELS: [&str; 2] = ["場所", "会場"];
pub(crate) const DATE_HEADING_LABEL: &str = "日時";
pub(crate) const LOCATION_LABEL: &str = "開催地";
pub(crate) const DATE_LABEL: &str = "開催日";
pub(crate) const TIME_LABEL: &str = "時間";
pub(crate) const DESCRIPTION_LABEL: &str = "要旨";
// Campus-map link captions mixed into the official location field.
pub(crate) const MAP_NOISE: &str = "マップ";

// Source attribution appended once to every rendered description.
pub(crate) const DETAIL_PREFIX: &str = "\n\n詳細: ";

// Pre-parse cleanup. Scripts and comments may span what used to be multiple
// lines, hence the dotall groups.
regex!(SPACE_BEFORE_TAG_REGEX, r"\s+<");
regex!(SPACE_AFTER_TAG_REGEX, r">\s+");
regex!(SCRIPT_REGEX, r"(?s)<script[^>]*>.*?</script>");
regex!(COMMENT_REGEX, r"(?s)<!--.*?-->");
regex!(LINE_BREAK_REGEX, r"<br\s*/?>");

// Time spans: "H時M分～H時M分" with arbitrary text tolerated before the first
// time, around the range marker, and after the end time. Tried in order; the
// single-endpoint form means a zero-length span (end = start).
regex!(TIME_RANGE_REGEX, r"(\d{1,2})時(\d{1,2})分.*?～.*?(\d{1,2})時(\d{1,2})分");
regex!(TIME_SINGLE_REGEX, r"(\d{1,2})時(\d{1,2})分");

// Date spans: "YYYY年M月D日 〜 YYYY年M月D日" with a full-width wave dash as
// the range marker. Day-of-week and parenthetical annotations after a date
// are ignored by both patterns.
regex!(DATE_RANGE_REGEX, r"(\d{4})年(\d{1,2})月(\d{1,2})日.*?〜.*?(\d{4})年(\d{1,2})月(\d{1,2})日");
regex!(DATE_SINGLE_REGEX, r"(\d{4})年(\d{1,2})月(\d{1,2})日");

// Lenient combined form: optional Heisei era prefix (two-digit year), then
// an optional start time and an optional end time. The final 分 is optional
// in the source pages, so the end minute group does not require it.
regex!(
    LENIENT_DATETIME_REGEX,
    r"(?:平成)?(\d{2,4})年(\d{1,2})月(\d{1,2})日(?:.*?(\d{1,2})時(\d{1,2})分(?:.*?～.*?(\d{1,2})時(\d{1,2}))?)?"
);
