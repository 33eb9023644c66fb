//! Citation keys derived from the first author's surname and the year.

use crate::error::KeyError;
use crate::medline::{Field, FieldMap};
use crate::utils::last_chars;
use compact_str::{CompactString, format_compact};
use serde::{Deserialize, Serialize};

/// Key used when a record has neither a usable author/year nor a PMID.
pub const UNKNOWN_KEY: &str = "unknown";

/// Unique identifier of a BibTeX entry, such as `smith12`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CitationKey(CompactString);

impl CitationKey {
    /// Derive a key from the lower-cased surname of the first author, with
    /// whitespace removed, followed by the last two characters of the year.
    ///
    /// Names are expected in `Surname, Given Names` form; a name without a
    /// comma is used whole.
    ///
    /// # Errors
    ///
    /// Returns a [KeyError] if there is no author, the surname is blank, or the
    /// year is missing or shorter than two characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use pm2bib::{CitationKey, Field, FieldMap};
    ///
    /// let fields: FieldMap = [
    ///     (Field::Author, "Van Dyke, Marley C".to_string()),
    ///     (Field::Year, "2019".to_string()),
    /// ]
    /// .into_iter()
    /// .collect();
    /// assert_eq!(CitationKey::derive(&fields).unwrap().as_str(), "vandyke19");
    /// ```
    pub fn derive(fields: &FieldMap) -> Result<Self, KeyError> {
        let author = fields.authors().first().ok_or(KeyError::MissingAuthor)?;
        let surname = author.split_once(',').map_or(author.as_str(), |(s, _)| s);
        let surname: CompactString = surname
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        if surname.is_empty() {
            return Err(KeyError::EmptySurname {
                author: author.clone(),
            });
        }
        let year = fields.get(Field::Year).ok_or(KeyError::MissingYear)?;
        let suffix = last_chars(&year, 2).ok_or_else(|| KeyError::ShortYear {
            year: year.to_string(),
        })?;
        Ok(Self(format_compact!("{surname}{suffix}")))
    }

    /// Key used in place of a derived one: `pmid` followed by the PMID, or
    /// [UNKNOWN_KEY] if the record has no PMID.
    pub fn fallback(fields: &FieldMap) -> Self {
        match fields.get(Field::Pmid) {
            Some(pmid) if !pmid.is_empty() => Self(format_compact!("pmid{pmid}")),
            _ => Self(CompactString::const_new(UNKNOWN_KEY)),
        }
    }

    /// [CitationKey::derive], or [CitationKey::fallback] if that fails.
    pub fn derive_or_fallback(fields: &FieldMap) -> Self {
        Self::derive(fields).unwrap_or_else(|error| {
            let key = Self::fallback(fields);
            tracing::warn!(%error, key = key.as_str(), "using fallback citation key");
            key
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CitationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
