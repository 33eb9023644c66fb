//! Error types for citation key derivation and record retrieval.
//!
//! Parsing itself never fails: malformed MEDLINE input is absorbed into a
//! best-effort BibTeX entry. The errors here classify the cases where a
//! caller asked for something stricter.

use thiserror::Error;

/// Reasons a citation key cannot be derived from a record's fields.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KeyError {
    #[error("No author available to derive a citation key")]
    MissingAuthor,

    #[error("Author \"{author}\" has no usable surname")]
    EmptySurname { author: String },

    #[error("No publication year available to derive a citation key")]
    MissingYear,

    #[error("Publication year \"{year}\" is too short to derive a citation key")]
    ShortYear { year: String },
}

/// Errors raised while retrieving MEDLINE records over HTTP.
#[cfg(feature = "fetch")]
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned status {status} for {url}")]
    Status { status: u16, url: String },
}
