//! Conversion of PubMed citations into BibTeX entries.
//!
//! `pm2bib` turns records in PubMed's MEDLINE text format into BibTeX
//! `@article` entries, and can retrieve those records from PubMed for a PMID
//! or a free-text query.
//!
//! # Features
//!
//! - `fetch` - Enable retrieval of MEDLINE records from PubMed (enabled by default)
//! - `cli` - Build the `pm2bib` command-line tool (enabled by default)
//!
//! To use only the converter, disable default features:
//!
//! ```toml
//! [dependencies]
//! pm2bib = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Basic Usage
//!
//! ```rust
//! use pm2bib::parse_record;
//!
//! let medline = "PMID- 123456
//! TI  - A Study.
//! TA  - J Med
//! DP  - 2012 Jan
//! FAU - Smith, J
//! PG  - 1-5";
//!
//! assert_eq!(
//!     parse_record(medline),
//!     "@article{smith12,
//! \tauthor = \"Smith, J\",
//! \tpmid = \"123456\",
//! \ttitle = \"{A Study}\",
//! \tjournal = \"{J Med}\",
//! \tyear = \"2012\",
//! \tpages = \"1--5\",
//! }
//! "
//! );
//! ```
//!
//! # Conversion Rules
//!
//! | MEDLINE tag | BibTeX field | Value |
//! |---|---|---|
//! | `PMID` | `pmid` | as is |
//! | `VI` | `volume` | as is |
//! | `IP` | `number` | as is |
//! | `DP` | `year` | text before the first space |
//! | `TI` | `title` | trailing period removed, wrapped in braces |
//! | `PG` | `pages` | `-` replaced with `--` |
//! | `TA` | `journal` | wrapped in braces |
//! | `AID` | `doi` | as is, and not necessarily a DOI |
//! | `FAU` | `author` | all authors joined with `and` |
//!
//! The citation key is the first author's surname in lower case followed by
//! the last two digits of the year. See [CitationKey] for the fallback used
//! when a record lacks either.
//!
//! # Error Handling
//!
//! Conversion never fails: malformed records produce entries with fewer
//! fields. Stricter operations such as [CitationKey::derive] return a
//! [KeyError], and retrieval returns a `FetchError`.

pub mod bibtex;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod medline;

// Reexports
pub use bibtex::{BibEntry, CitationKey};
#[cfg(feature = "fetch")]
pub use error::FetchError;
pub use error::KeyError;
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, PubmedFetcher};
pub use medline::{Field, FieldMap, parse_entries, parse_entry, parse_multi_record, parse_record};

mod utils;
