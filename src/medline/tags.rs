//! MEDLINE tags which contribute to a BibTeX entry.

use crate::medline::normalize::{page_range, protected, protected_title, publication_year, verbatim};
use crate::medline::structure::Field;

/// How the value of one MEDLINE tag becomes a BibTeX field.
pub(crate) struct TagRule {
    /// MEDLINE tag, e.g. `TI`
    pub(crate) tag: &'static str,
    /// Field populated by the tag
    pub(crate) field: Field,
    /// Cleanup applied to the tag value
    pub(crate) transform: fn(&str) -> String,
}

/// Every MEDLINE tag that is converted. Tags not listed here are ignored.
pub(crate) const TAG_RULES: &[TagRule] = &[
    TagRule { tag: "PMID", field: Field::Pmid, transform: verbatim },
    TagRule { tag: "VI", field: Field::Volume, transform: verbatim },
    TagRule { tag: "IP", field: Field::Number, transform: verbatim },
    TagRule { tag: "DP", field: Field::Year, transform: publication_year },
    TagRule { tag: "TI", field: Field::Title, transform: protected_title },
    TagRule { tag: "PG", field: Field::Pages, transform: page_range },
    TagRule { tag: "TA", field: Field::Journal, transform: protected },
    TagRule { tag: "AID", field: Field::Doi, transform: verbatim },
    TagRule { tag: "FAU", field: Field::Author, transform: verbatim },
];

impl TagRule {
    /// Find the rule for `tag`.
    pub(crate) fn lookup(tag: &str) -> Option<&'static TagRule> {
        TAG_RULES.iter().find(|rule| rule.tag == tag)
    }

    /// Apply this rule to a tag value.
    pub(crate) fn apply(&self, value: &str) -> (Field, String) {
        (self.field, (self.transform)(value))
    }
}

/// Split a whole MEDLINE item into its tag and value.
///
/// The tag is the leading run of ASCII alphanumerics. The value follows the
/// padding and the `-` separator, so `TI  - Title` and `TI  Title` both give
/// `("TI", "Title")`.
pub(crate) fn split_tag(item: &str) -> Option<(&str, &str)> {
    let end = item
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(item.len());
    if end == 0 {
        return None;
    }
    let (tag, rest) = item.split_at(end);
    let rest = rest.trim_start();
    let value = rest.strip_prefix('-').map_or(rest, str::trim_start);
    Some((tag, value.trim_end()))
}
