use crate::medline::split::BlankLineSplit;
use crate::medline::structure::{Field, FieldMap};
use crate::medline::tags::{TagRule, split_tag};
use crate::medline::whole_lines::WholeLinesIter;
use crate::utils::newline_delimiter_of;
use either::{Either, Left, Right};
use itertools::Itertools;

/// Fields extracted from one MEDLINE record.
pub(crate) struct RawMedlineData {
    /// Normalized BibTeX field values.
    pub(crate) fields: FieldMap,
    /// Items whose tag is not converted, which were skipped by the parser.
    pub(crate) ignored_items: Vec<String>,
    /// Starting line number of this record in the source text (1-based).
    pub(crate) start_line: usize,
}

/// Parse MEDLINE text containing any number of records separated by blank lines.
pub(crate) fn medline_parse(text: &str) -> impl Iterator<Item = RawMedlineData> + '_ {
    let line_break = newline_delimiter_of(text);
    BlankLineSplit::new(text, line_break)
        .map(|(start_line, chunk)| medline_parse_one(chunk, start_line))
}

/// Parse the text of a single MEDLINE record.
pub(crate) fn medline_parse_one(text: &str, start_line: usize) -> RawMedlineData {
    let (ignored_items, pairs): (Vec<_>, Vec<_>) =
        WholeLinesIter::new(text.lines()).partition_map(classify_item);
    let mut fields: FieldMap = pairs.into_iter().collect();
    fields.normalize();
    RawMedlineData {
        fields,
        ignored_items,
        start_line,
    }
}

/// Match a whole item against the tag table, returning the converted field,
/// or the item itself if its tag is not converted.
fn classify_item(item: String) -> Either<String, (Field, String)> {
    split_tag(&item)
        .and_then(|(tag, value)| TagRule::lookup(tag).map(|rule| rule.apply(value)))
        .map(Right)
        .unwrap_or_else(|| Left(item))
}
