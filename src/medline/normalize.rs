//! Per-field value cleanup applied while extracting MEDLINE items.

/// Keep a tag value as it is.
pub(crate) fn verbatim(value: &str) -> String {
    value.to_string()
}

/// Year of a `DP` publication date such as `2012 Jan 23`: everything before
/// the first space, or the whole value if there is none.
pub(crate) fn publication_year(date: &str) -> String {
    year_of(date).to_string()
}

/// Title with one trailing period removed and braces added so BibTeX
/// preserves its capitalization.
pub(crate) fn protected_title(title: &str) -> String {
    protected(strip_trailing_period(title))
}

/// Wrap a value in braces so BibTeX preserves its capitalization.
pub(crate) fn protected(value: &str) -> String {
    format!("{{{value}}}")
}

/// Page range in BibTeX syntax: every `-` becomes `--`.
pub(crate) fn page_range(pages: &str) -> String {
    pages.replace('-', "--")
}

fn year_of(date: &str) -> &str {
    date.split_once(' ').map_or(date, |(year, _)| year)
}

fn strip_trailing_period(s: &str) -> &str {
    s.strip_suffix('.').unwrap_or(s)
}
