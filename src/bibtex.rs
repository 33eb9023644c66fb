//! BibTeX rendering of converted MEDLINE records.
//!
//! Every record becomes an `@article` entry with one tab-indented
//! `name = "value",` line per field:
//!
//! ```text
//! @article{smith12,
//! 	author = "Smith, J",
//! 	pmid = "123456",
//! 	title = "{A Study}",
//! }
//! ```

mod key;

pub use key::{CitationKey, UNKNOWN_KEY};

use crate::medline::FieldMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A BibTeX `@article` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BibEntry {
    /// Citation key of the entry
    pub key: CitationKey,
    /// Field values in output order
    pub fields: FieldMap,
}

impl BibEntry {
    /// Create an entry for `fields`, deriving its key with
    /// [CitationKey::derive_or_fallback].
    #[must_use]
    pub fn new(fields: FieldMap) -> Self {
        Self {
            key: CitationKey::derive_or_fallback(&fields),
            fields,
        }
    }
}

impl fmt::Display for BibEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@article{{{},", self.key)?;
        for (field, value) in self.fields.iter() {
            writeln!(f, "\t{field} = \"{value}\",")?;
        }
        writeln!(f, "}}")
    }
}
