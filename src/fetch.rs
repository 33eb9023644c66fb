//! Retrieval of MEDLINE records from PubMed.
//!
//! PubMed serves search results in MEDLINE format inside `<pre>` blocks of an
//! HTML page. [PubmedFetcher] requests that page for a query and hands the
//! preformatted text to the MEDLINE converter.
//!
//! ```no_run
//! use pm2bib::{FetchConfig, PubmedFetcher};
//!
//! let mut config = FetchConfig::new();
//! config.set_timeout_secs(10);
//! let fetcher = PubmedFetcher::with_config(config)?;
//! println!("{}", fetcher.fetch_bibtex("22426065")?);
//! # Ok::<(), pm2bib::FetchError>(())
//! ```

use crate::error::FetchError;
use crate::medline::parse_multi_record;
use itertools::Itertools;
use regex::Regex;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;
use std::time::Duration;

/// Default PubMed search URL.
pub const DEFAULT_URL: &str = "https://pubmed.ncbi.nlm.nih.gov/";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

static PRE_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<pre(?:\s[^>]*)?>\r?\n?(.*?)</pre>").unwrap());

/// Configuration of the PubMed retrieval.
///
/// # Examples
///
/// ```
/// use pm2bib::FetchConfig;
///
/// let mut config = FetchConfig::new();
/// config
///     .set_url("http://localhost:8080/pubmed")
///     .set_timeout_secs(5);
/// assert_eq!(config.url(), "http://localhost:8080/pubmed");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// PubMed search URL
    pub(crate) url: String,
    /// Timeout for the whole request, in seconds
    pub(crate) timeout_secs: u64,
    /// User agent sent with each request
    pub(crate) user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchConfig {
    /// Creates a configuration pointing at the public PubMed site.
    #[must_use]
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Sets the PubMed search URL
    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = url.into();
        self
    }

    /// Sets the request timeout in seconds
    pub fn set_timeout_secs(&mut self, secs: u64) -> &mut Self {
        self.timeout_secs = secs;
        self
    }

    /// Sets the user agent
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) -> &mut Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Blocking PubMed client returning MEDLINE text or BibTeX for a query.
#[derive(Debug, Clone)]
pub struct PubmedFetcher {
    client: Client,
    config: FetchConfig,
}

impl PubmedFetcher {
    /// Creates a fetcher with the default [FetchConfig].
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(FetchConfig::new())
    }

    /// Creates a fetcher with a custom configuration.
    pub fn with_config(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Search PubMed for `query` (usually a PMID) and return the MEDLINE
    /// text of the results.
    ///
    /// # Errors
    ///
    /// Returns [FetchError::Http] if the request fails and
    /// [FetchError::Status] if the server answers with a non-success status.
    pub fn fetch_medline(&self, query: &str) -> Result<String, FetchError> {
        tracing::debug!(url = %self.config.url, query, "querying PubMed");
        let response = self
            .client
            .get(&self.config.url)
            .query(&[("term", query), ("report", "medline"), ("format", "pubmed")])
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        let body = response.text()?;
        Ok(extract_preformatted(&body).into_owned())
    }

    /// Search PubMed for `query` and convert the results to BibTeX.
    ///
    /// # Errors
    ///
    /// See [PubmedFetcher::fetch_medline].
    pub fn fetch_bibtex(&self, query: &str) -> Result<String, FetchError> {
        let medline = self.fetch_medline(query)?;
        Ok(parse_multi_record(&medline))
    }
}

/// Text of every `<pre>` block in `html`, separated by blank lines and with
/// HTML entities unescaped.
///
/// If there is no non-empty `<pre>` block, `html` is returned unchanged.
pub fn extract_preformatted(html: &str) -> Cow<'_, str> {
    let blocks = PRE_BLOCK_REGEX
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.trim().is_empty())
        .collect_vec();
    if blocks.is_empty() {
        tracing::warn!("no <pre> block found in response, using it unchanged");
        return Cow::Borrowed(html);
    }
    Cow::Owned(unescape_html(&blocks.join("\n\n")))
}

fn unescape_html(s: &str) -> String {
    // `&amp;` last, so `&amp;lt;` stays `&lt;`
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use rstest::*;

    const RESULTS_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><title>22426065 - PubMed</title></head>
<body>
<pre class="search-results-chunk">
PMID- 22426065
DP  - 2012 Apr
TI  - Structural variation &amp; expression in medulloblastoma &lt;subgroups&gt;.
PG  - 398-406
FAU - Northcott, Paul A
TA  - Nat Genet
</pre>
</body>
</html>
"#;

    #[rstest]
    #[case("<pre>\nPMID- 1\n</pre>", "PMID- 1\n")]
    #[case("<pre>PMID- 1</pre>", "PMID- 1")]
    #[case("<pre class=\"search-results-chunk\">\r\nPMID- 1</pre>", "PMID- 1")]
    #[case("<p>x</p><pre>\nPMID- 1</pre><pre>\nPMID- 2</pre>", "PMID- 1\n\nPMID- 2")]
    #[case("<pre>\nTI  - A &amp; B &lt;i&gt;C&lt;/i&gt; &quot;D&quot; &#39;E&#39;</pre>", "TI  - A & B <i>C</i> \"D\" 'E'")]
    #[case("<pre>&amp;lt;</pre>", "&lt;")]
    fn test_extract_preformatted(#[case] html: &str, #[case] expected: &str) {
        assert_eq!(extract_preformatted(html), expected);
    }

    #[rstest]
    #[case("PMID- 1\nTI  - No markers")]
    #[case("<html><body>No results</body></html>")]
    #[case("<pre>\n  \n</pre>")]
    #[case("<preview>PMID- 1</preview>")]
    fn test_extract_preformatted_passthrough(#[case] html: &str) {
        let actual = extract_preformatted(html);
        assert!(matches!(actual, Cow::Borrowed(_)));
        assert_eq!(actual, html);
    }

    #[test]
    fn test_config_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.url(), DEFAULT_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent().starts_with("pm2bib/"));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: FetchConfig =
            serde_json::from_str(r#"{"url": "http://localhost/pubmed"}"#).unwrap();
        assert_eq!(config.url(), "http://localhost/pubmed");
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_fetch_bibtex() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("term".into(), "22426065".into()),
                Matcher::UrlEncoded("report".into(), "medline".into()),
                Matcher::UrlEncoded("format".into(), "pubmed".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(RESULTS_PAGE)
            .create();

        let mut config = FetchConfig::new();
        config.set_url(server.url());
        let fetcher = PubmedFetcher::with_config(config).unwrap();
        let bibtex = fetcher.fetch_bibtex("22426065").unwrap();
        mock.assert();

        assert_eq!(
            bibtex,
            "@article{northcott12,\n\
             \tauthor = \"Northcott, Paul A\",\n\
             \tpmid = \"22426065\",\n\
             \tyear = \"2012\",\n\
             \ttitle = \"{Structural variation & expression in medulloblastoma <subgroups>}\",\n\
             \tpages = \"398--406\",\n\
             \tjournal = \"{Nat Genet}\",\n\
             }\n"
        );
    }

    #[test]
    fn test_fetch_free_text_query() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::UrlEncoded(
                "term".into(),
                "medulloblastoma subgroups".into(),
            ))
            .with_status(200)
            .with_body("<pre>\nPMID- 1\n\nPMID- 2\n</pre>")
            .create();

        let mut config = FetchConfig::new();
        config.set_url(server.url());
        let fetcher = PubmedFetcher::with_config(config).unwrap();
        let medline = fetcher.fetch_medline("medulloblastoma subgroups").unwrap();
        mock.assert();
        assert_eq!(medline, "PMID- 1\n\nPMID- 2\n");
    }

    #[test]
    fn test_fetch_error_status() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", Matcher::Any)
            .with_status(503)
            .create();

        let mut config = FetchConfig::new();
        config.set_url(server.url());
        let fetcher = PubmedFetcher::with_config(config).unwrap();
        let result = fetcher.fetch_medline("1");
        assert!(matches!(result, Err(FetchError::Status { status: 503, .. })));
    }
}
