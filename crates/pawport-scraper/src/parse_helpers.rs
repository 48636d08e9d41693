//! HTML-region extraction primitives.
//!
//! Venue pages are third-party server-rendered HTML; these helpers pull
//! out known regions and flatten them to text without a full DOM parser.
//! All functions are pure over the input string. This module is
//! `pub(crate)` so the venue adapters and [`crate::parse`] share the same
//! low-level routines without exposing them publicly.

use regex::Regex;

/// Returns the inner HTML of the first `<tag ... attr="value" ...>`
/// element.
///
/// Nested elements of the same tag are handled by depth counting.
/// Attribute matching tolerates either quote style and surrounding
/// attributes; for `class`, `value` only needs to appear in the class
/// list.
pub(crate) fn element_inner_html<'a>(
    html: &'a str,
    tag: &str,
    attr: &str,
    value: &str,
) -> Option<&'a str> {
    let open_re = Regex::new(&format!(
        r#"(?is)<{tag}\b[^>]*\b{attr}\s*=\s*["']([^"']*)["'][^>]*>"#
    ))
    .expect("valid regex");

    let mut search_from = 0usize;
    let content_start = loop {
        let caps = open_re.captures(html.get(search_from..)?)?;
        let whole = caps.get(0)?;
        let attr_value = caps.get(1)?.as_str();
        let matched = if attr.eq_ignore_ascii_case("class") {
            attr_value.split_whitespace().any(|c| c == value)
        } else {
            attr_value == value
        };
        if matched {
            break search_from + whole.end();
        }
        search_from += whole.end();
    };

    let open_tag = format!("<{tag}");
    let close_tag = format!("</{tag}");
    let mut depth = 1usize;
    let mut pos = content_start;
    loop {
        let rest = html.get(pos..)?;
        let next_close = find_tag_token(rest, &close_tag)?;
        match find_tag_token(rest, &open_tag) {
            Some(next_open) if next_open < next_close => {
                depth += 1;
                pos += next_open + open_tag.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(&html[content_start..pos + next_close]);
                }
                pos += next_close + close_tag.len();
            }
        }
    }
}

/// Finds `needle` in `haystack` at a real tag boundary: the character after
/// the match must not extend the tag name (`<tr` must not match `<track`).
fn find_tag_token(haystack: &str, needle: &str) -> Option<usize> {
    let lower = haystack.to_ascii_lowercase();
    let needle = needle.to_ascii_lowercase();
    let mut from = 0usize;
    loop {
        let pos = from + lower.get(from..)?.find(&needle)?;
        let boundary = lower[pos + needle.len()..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_ascii_alphanumeric());
        if boundary {
            return Some(pos);
        }
        from = pos + needle.len();
    }
}

/// Flattens an HTML fragment to the text a browser would render.
///
/// `<br>` and closing block tags become newlines, remaining tags are
/// stripped, common entities are decoded, and each line is trimmed with
/// blank lines dropped. The free-text block parser consumes this shape:
/// one `Label:value` pair per line.
pub(crate) fn inner_text(html: &str) -> String {
    let break_re =
        Regex::new(r"(?i)<br\s*/?>|</(?:div|p|tr|li|h[1-6])\s*>").expect("valid regex");
    let with_breaks = break_re.replace_all(html, "\n");

    let tag_re = Regex::new(r"(?s)<[^>]*>").expect("valid regex");
    let stripped = tag_re.replace_all(&with_breaks, "");

    decode_entities(&stripped)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_entities(s: &str) -> String {
    // `&amp;` last so already-decoded ampersands are not re-expanded.
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Extracts `<tr>` rows as vectors of cell text (`<th>` and `<td>` alike).
///
/// Rows with no cells (spacer markup) are dropped.
pub(crate) fn table_rows(html: &str) -> Vec<Vec<String>> {
    let row_re = Regex::new(r"(?is)<tr[^>]*>(.*?)</tr\s*>").expect("valid regex");
    let cell_re = Regex::new(r"(?is)<t([hd])[^>]*>(.*?)</t[hd]\s*>").expect("valid regex");

    row_re
        .captures_iter(html)
        .map(|row| {
            cell_re
                .captures_iter(row.get(1).map_or("", |m| m.as_str()))
                .map(|cell| inner_text(cell.get(2).map_or("", |m| m.as_str())))
                .collect::<Vec<String>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect()
}
