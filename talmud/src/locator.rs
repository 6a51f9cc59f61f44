//! Locator resolution: from structured input or a Sefaria URL to a [`Locator`].
//!
//! A locator addresses a span of text as tractate / page (daf) / optional
//! 1-based section. URL input is resolved by taking the last path segment and
//! matching it against `<tractate>.<page>[.<section>]`.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::FetchError;

/// Anchored reference pattern: tractate and page are non-dot runs, the optional
/// section is numeric. Ranges (`2a.3-5`) and other trailing garbage do not match.
static REF_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^.]+)\.([^.]+?)(?:\.(\d+))?$").unwrap());

/// Resolved identification of a text span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locator {
    pub tractate: String,
    pub page: String,
    /// 1-based section index within the page, when a single section was requested.
    pub section: Option<u32>,
}

impl Locator {
    /// Human-readable form: `"Berakhot 2a"` or `"Berakhot 2a:3"`.
    pub fn span(&self) -> String {
        match self.section {
            Some(s) => format!("{} {}:{}", self.tractate, self.page, s),
            None => format!("{} {}", self.tractate, self.page),
        }
    }
}

/// How the client identified the text, decided once at the entry point.
///
/// Anything other than `input_method == "url"` takes the reference branch,
/// matching the upstream service's two-way dispatch.
#[derive(Clone, Debug)]
pub enum LocatorInput {
    /// A Sefaria URL whose last path segment carries the reference.
    ByUrl(String),
    /// Structured tractate / page / optional section straight from the form.
    ByReference {
        tractate: String,
        page: String,
        section: Option<u32>,
    },
}

impl LocatorInput {
    /// Resolves the input into a [`Locator`].
    ///
    /// URL input that cannot be parsed as a URL at all is an internal-class
    /// error ([`FetchError::UrlParse`]); a parseable URL whose last segment
    /// does not match the reference pattern is [`FetchError::InvalidRef`].
    pub fn resolve(self) -> Result<Locator, FetchError> {
        match self {
            LocatorInput::ByUrl(url) => {
                let parsed = Url::parse(&url)?;
                let segment = parsed
                    .path_segments()
                    .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
                    .unwrap_or_default()
                    .to_string();
                parse_ref_segment(&segment).ok_or(FetchError::InvalidRef(segment))
            }
            LocatorInput::ByReference {
                tractate,
                page,
                section,
            } => Ok(Locator {
                tractate,
                page,
                section,
            }),
        }
    }
}

/// Parses a path segment like `"Berakhot.2a.3"` into a [`Locator`].
/// Returns `None` when the segment does not match the reference pattern.
pub fn parse_ref_segment(segment: &str) -> Option<Locator> {
    let caps = REF_SEGMENT.captures(segment)?;
    let section = match caps.get(3) {
        // Numeric by the pattern; out-of-range digits still reject the segment.
        Some(m) => Some(m.as_str().parse::<u32>().ok()?),
        None => None,
    };
    Some(Locator {
        tractate: caps[1].to_string(),
        page: caps[2].to_string(),
        section,
    })
}
