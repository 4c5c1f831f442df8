//! Flattens a weekly page's HTML into normalized cell fragments.

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\W_]+").unwrap());

static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Collapses every run of non-alphanumeric characters into a single space.
pub fn normalize_fragment(text: &str) -> String {
    NON_ALPHANUMERIC.replace_all(text, " ").into_owned()
}

/// Returns the normalized text of every `<td>` in document order.
pub fn extract_fragments(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&CELL_SELECTOR)
        .map(|cell| normalize_fragment(&cell.text().collect::<String>()))
        .collect()
}
