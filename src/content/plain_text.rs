use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag pattern."));
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace pattern."));

/// Plain-text fallback for an HTML body.
///
/// Tags become spaces, whitespace runs collapse, and the ends are trimmed.
/// The contents of `<script>` and `<style>` blocks are kept as text.
pub fn strip_html_to_plain_text(html: &str) -> String {
    let without_tags = TAG.replace_all(html, " ");
    WHITESPACE
        .replace_all(&without_tags, " ")
        .trim()
        .to_string()
}
