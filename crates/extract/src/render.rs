//! Recursive HTML-to-text rendering of event descriptions.
//!
//! Converts a subtree of a parsed legacy event page into one linear,
//! human-readable string. All formatting policy lives here, keyed by tag
//! kind; the traversal is depth-first pre-order over a read-only tree and
//! never mutates a node.

use crate::clean;
use crate::consts;
use scraper::ElementRef;
use url::Url;

/// The closed set of tag kinds the renderer distinguishes.
///
/// Everything outside the known set falls through to [`TagKind::Other`],
/// which emits text and children without decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    /// `p`, `div`, `tr`: starts a new line.
    Block,
    /// `h1`..`h6` (and anything else starting with `h` that is not a block):
    /// preceded by a blank line. The second-level heading carries the field
    /// labels on these pages and is wrapped in brackets for readability.
    Heading { bracketed: bool },
    /// `a`: text plus the resolved link target.
    Anchor,
    /// `td`, `th`: followed by a separating space.
    Cell,
    /// `ul`: one bullet line per direct child.
    List,
    /// `img`: elided, but kept as a space so adjacent text does not collapse.
    Image,
    /// Default passthrough.
    Other,
}

impl TagKind {
    fn of(tag: &str) -> Self {
        // Arms are tried in order: block tags first, then the heading prefix
        // check (first character only), then the remaining exact matches.
        match tag {
            "p" | "div" | "tr" => Self::Block,
            _ if tag.starts_with('h') => Self::Heading { bracketed: tag == "h2" },
            "a" => Self::Anchor,
            "td" | "th" => Self::Cell,
            "ul" => Self::List,
            "img" => Self::Image,
            _ => Self::Other,
        }
    }
}

/// Renders an event-content subtree to a description string.
///
/// After the recursive rendering, trailing whitespace is trimmed, the source
/// attribution line is appended exactly once, and line-break sentinels left
/// by [`clean_html`](crate::clean_html) are expanded to real newlines as the
/// very last step.
pub fn render_description(root: ElementRef<'_>, url: &Url) -> String {
    let mut text = render_element(root, url);
    let trimmed = text.trim_end().len();
    text.truncate(trimmed);
    text.push_str(consts::DETAIL_PREFIX);
    text.push_str(url.as_str());
    clean::restore_line_breaks(&text)
}

/// The first direct text child of an element, in document order.
///
/// Descendant text is rendered by the recursive calls, not here.
pub(crate) fn own_text<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    element.children().find_map(|node| node.value().as_text().map(|text| &**text))
}

fn push_own_text(out: &mut String, element: ElementRef<'_>) {
    if let Some(text) = own_text(element) {
        out.push_str(text);
    }
}

fn push_children(out: &mut String, element: ElementRef<'_>, url: &Url) {
    for child in element.child_elements() {
        out.push_str(&render_element(child, url));
    }
}

fn render_element(element: ElementRef<'_>, url: &Url) -> String {
    let mut out = String::new();
    match TagKind::of(element.value().name()) {
        TagKind::Block => {
            out.push('\n');
            push_own_text(&mut out, element);
            push_children(&mut out, element, url);
        },
        TagKind::Heading { bracketed } => {
            out.push_str("\n\n");
            if let Some(text) = own_text(element) {
                if bracketed {
                    out.push('【');
                    out.push_str(text);
                    out.push('】');
                } else {
                    out.push_str(text);
                }
            }
            push_children(&mut out, element, url);
        },
        TagKind::Anchor => {
            push_own_text(&mut out, element);
            push_children(&mut out, element, url);
            if let Some(href) = element.value().attr("href")
                && let Ok(resolved) = url.join(href)
            {
                let resolved = resolved.as_str().to_owned();
                if out == resolved {
                    // The visible label is itself the URL; keep only the
                    // resolved form plus a separating space.
                    out = resolved;
                    out.push(' ');
                } else {
                    out.push_str(" (");
                    out.push_str(&resolved);
                    out.push(')');
                }
            }
        },
        TagKind::Cell => {
            push_own_text(&mut out, element);
            push_children(&mut out, element, url);
            out.push(' ');
        },
        TagKind::List => {
            out.push('\n');
            for child in element.child_elements() {
                out.push('・');
                out.push_str(&render_element(child, url));
                out.push('\n');
            }
        },
        TagKind::Image => out.push(' '),
        TagKind::Other => {
            push_own_text(&mut out, element);
            push_children(&mut out, element, url);
        },
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::{LINE_BREAK_MARKER, clean_html};
    use scraper::{Html, Selector};

    fn base() -> Url {
        Url::parse("http://www.example.ac.jp/event/1.html").unwrap()
    }

    fn render_first(html: &str, css: &str) -> String {
        let document = Html::parse_fragment(html);
        let selector = Selector::parse(css).unwrap();
        let element = document.select(&selector).next().unwrap();
        render_element(element, &base())
    }

    #[test]
    fn empty_element_renders_to_empty_string() {
        assert_eq!(render_first("<span></span>", "span"), "");
    }

    #[test]
    fn block_starts_a_new_line() {
        assert_eq!(render_first("<p>本文</p>", "p"), "\n本文");
    }

    #[test]
    fn second_level_heading_is_bracketed() {
        assert_eq!(render_first("<h2>場所</h2>", "h2"), "\n\n【場所】");
        assert_eq!(render_first("<h3>概要</h3>", "h3"), "\n\n概要");
    }

    #[test]
    fn heading_without_own_text_keeps_blank_line_prefix() {
        assert_eq!(render_first("<h2><span>場所</span></h2>", "h2"), "\n\n場所");
    }

    #[test]
    fn anchor_label_matching_target_collapses_to_url() {
        let html = r#"<a href="http://www.example.ac.jp/page.html">http://www.example.ac.jp/page.html</a>"#;
        assert_eq!(render_first(html, "a"), "http://www.example.ac.jp/page.html ");
    }

    #[test]
    fn anchor_label_differing_from_target_gets_parenthetical() {
        let html = r#"<a href="/event/2.html">次回</a>"#;
        assert_eq!(render_first(html, "a"), "次回 (http://www.example.ac.jp/event/2.html)");
    }

    #[test]
    fn anchor_without_href_gets_no_decoration() {
        assert_eq!(render_first("<a>どこか</a>", "a"), "どこか");
    }

    #[test]
    fn table_row_renders_cells_with_separators() {
        assert_eq!(render_first("<table><tbody><tr><td>月</td><td>火</td></tr></tbody></table>", "tr"), "\n月 火 ");
    }

    #[test]
    fn list_renders_one_bullet_line_per_child() {
        assert_eq!(render_first("<ul><li>一</li><li>二</li><li>三</li></ul>", "ul"), "\n・一\n・二\n・三\n");
    }

    #[test]
    fn empty_list_renders_to_its_leading_newline() {
        assert_eq!(render_first("<ul></ul>", "ul"), "\n");
    }

    #[test]
    fn image_is_elided_to_a_single_space() {
        assert_eq!(render_first("<p>前<img src=\"x.png\">後</p>", "p"), "\n前 ");
    }

    #[test]
    fn description_ends_with_attribution_suffix() {
        let document = Html::parse_fragment("<div><p>本文</p></div>");
        let selector = Selector::parse("div").unwrap();
        let element = document.select(&selector).next().unwrap();
        let text = render_description(element, &base());
        assert_eq!(text, "\n\n本文\n\n詳細: http://www.example.ac.jp/event/1.html");
    }

    #[test]
    fn line_break_sentinel_never_leaks_into_output() {
        let cleaned = clean_html("<div>\n  <p>一行目<br/>二行目</p>\n</div>");
        let document = Html::parse_fragment(&cleaned);
        let selector = Selector::parse("div").unwrap();
        let element = document.select(&selector).next().unwrap();
        let text = render_description(element, &base());
        assert!(text.contains("一行目\n二行目"));
        assert!(!text.contains(LINE_BREAK_MARKER));
    }
}
