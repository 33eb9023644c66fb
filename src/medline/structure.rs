use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Separator placed between author names in the BibTeX `author` field.
pub const AUTHOR_SEPARATOR: &str = " and ";

/// BibTeX fields which can be extracted from a MEDLINE record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// PubMed unique identifier (`PMID`)
    Pmid,
    /// Journal volume (`VI`)
    Volume,
    /// Journal issue (`IP`)
    Number,
    /// Publication year, taken from the publication date (`DP`)
    Year,
    /// Article title (`TI`)
    Title,
    /// Pagination (`PG`)
    Pages,
    /// Journal title abbreviation (`TA`)
    Journal,
    /// Article identifier (`AID`).
    ///
    /// N.B. this is not always a DOI: PubMed lists publisher item identifiers
    /// and other ids under the same tag, and the value is not validated.
    Doi,
    /// Full author names (`FAU`)
    Author,
}

impl Field {
    /// Name of the field in a BibTeX entry.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Pmid => "pmid",
            Field::Volume => "volume",
            Field::Number => "number",
            Field::Year => "year",
            Field::Title => "title",
            Field::Pages => "pages",
            Field::Journal => "journal",
            Field::Doi => "doi",
            Field::Author => "author",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered field values of one record.
///
/// Authors are kept as a list and joined with [AUTHOR_SEPARATOR] only when
/// read. The `author` field always comes first; the other fields keep the
/// order in which they first appeared. Setting a field again replaces its
/// value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMap {
    authors: Vec<String>,
    entries: Vec<(Field, String)>,
}

impl FieldMap {
    /// Create an empty [FieldMap].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `field` to `value`, or add another author if `field` is [Field::Author].
    pub fn insert(&mut self, field: Field, value: String) {
        if field == Field::Author {
            self.authors.push(value);
        } else if let Some((_, existing)) = self.entries.iter_mut().find(|(f, _)| *f == field) {
            *existing = value;
        } else {
            self.entries.push((field, value));
        }
    }

    /// Get the value of `field`. Authors are joined into one string, and
    /// [Field::Author] is `None` when there are no authors.
    pub fn get(&self, field: Field) -> Option<Cow<'_, str>> {
        if field == Field::Author {
            if self.authors.is_empty() {
                None
            } else {
                Some(Cow::Owned(self.author()))
            }
        } else {
            self.entries
                .iter()
                .find(|(f, _)| *f == field)
                .map(|(_, v)| Cow::Borrowed(v.as_str()))
        }
    }

    /// Author names in order of appearance.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Author names joined into a BibTeX `author` value, empty if there are
    /// no authors.
    pub fn author(&self) -> String {
        self.authors.iter().join(AUTHOR_SEPARATOR)
    }

    /// Drop blank author names.
    pub fn normalize(&mut self) {
        self.authors.retain(|a| !a.trim().is_empty());
    }

    /// Iterate over every field in output order, starting with `author`
    /// (which is present even when empty).
    pub fn iter(&self) -> impl Iterator<Item = (Field, Cow<'_, str>)> {
        std::iter::once((Field::Author, Cow::Owned(self.author()))).chain(
            self.entries
                .iter()
                .map(|(f, v)| (*f, Cow::Borrowed(v.as_str()))),
        )
    }

    /// Whether no field other than the (empty) `author` was found.
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.entries.is_empty()
    }
}

impl FromIterator<(Field, String)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (Field, String)>>(iter: T) -> Self {
        let mut map = FieldMap::new();
        for (field, value) in iter {
            map.insert(field, value);
        }
        map
    }
}
