//! MEDLINE format conversion.
//!
//! Converts PubMed records in MEDLINE text format, one record per blank-line
//! separated block, into BibTeX entries.
//!
//! # Example
//!
//! ```
//! use pm2bib::parse_multi_record;
//!
//! let input = "PMID- 12345678
//! TI  - Example Title.
//! DP  - 2023 Jan 23
//! FAU - Smith, John
//!
//! PMID- 87654321
//! TI  - Another Title.
//! DP  - 2021
//! FAU - Doe, Jane
//! ";
//!
//! let bibtex = parse_multi_record(input);
//! assert!(bibtex.starts_with("@article{smith23,\n"));
//! assert!(bibtex.contains("\ttitle = \"{Example Title}\",\n"));
//! assert!(bibtex.contains("@article{doe21,\n"));
//! ```

mod normalize;
mod parse;
mod split;
mod structure;
mod tags;
mod whole_lines;

pub use structure::{AUTHOR_SEPARATOR, Field, FieldMap};

use crate::bibtex::BibEntry;
use crate::medline::parse::{RawMedlineData, medline_parse, medline_parse_one};

/// Convert MEDLINE text holding any number of records into BibTeX entries,
/// one per non-empty blank-line separated block.
pub fn parse_entries(text: &str) -> Vec<BibEntry> {
    medline_parse(text).map(BibEntry::from).collect()
}

/// Convert the text of one MEDLINE record into a BibTeX entry.
///
/// Malformed input never fails; it yields an entry with fewer fields.
pub fn parse_entry(block: &str) -> BibEntry {
    medline_parse_one(block, 1).into()
}

/// Convert the text of one MEDLINE record into BibTeX text.
pub fn parse_record(block: &str) -> String {
    parse_entry(block).to_string()
}

/// Convert MEDLINE text holding any number of records into concatenated
/// BibTeX text, in input order.
pub fn parse_multi_record(text: &str) -> String {
    medline_parse(text)
        .map(|raw| BibEntry::from(raw).to_string())
        .collect()
}

impl From<RawMedlineData> for BibEntry {
    fn from(
        RawMedlineData {
            fields,
            ignored_items,
            start_line,
        }: RawMedlineData,
    ) -> Self {
        if !ignored_items.is_empty() {
            tracing::debug!(
                line = start_line,
                ignored = ignored_items.len(),
                "skipped MEDLINE items without a BibTeX field"
            );
        }
        let entry = BibEntry::new(fields);
        tracing::debug!(line = start_line, key = entry.key.as_str(), "converted MEDLINE record");
        entry
    }
}
