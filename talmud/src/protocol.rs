//! Wire types for the `/fetch` endpoint.
//!
//! The raw body keeps every field optional; [`FetchRequest::into_input`] turns
//! it into the explicit [`LocatorInput`] union exactly once at the entry point.

use serde::{Deserialize, Serialize};

use crate::locator::LocatorInput;

/// `section` arrives from the form as a string and from API clients as a
/// number; both are accepted.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum SectionField {
    Number(u32),
    Text(String),
}

impl SectionField {
    /// The 1-based section, or `None` for non-numeric input (the whole page is
    /// fetched instead of propagating a bogus index downstream).
    pub fn as_section(&self) -> Option<u32> {
        match self {
            SectionField::Number(n) => Some(*n),
            SectionField::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Request body for `POST /fetch`.
#[derive(Clone, Debug, Deserialize, Default)]
pub struct FetchRequest {
    #[serde(default)]
    pub input_method: Option<String>,
    #[serde(default)]
    pub tractate: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub section: Option<SectionField>,
    #[serde(default)]
    pub url: Option<String>,
}

impl FetchRequest {
    /// Dispatches on `input_method`: `"url"` takes the URL branch, anything
    /// else (including absence) the structured-reference branch.
    pub fn into_input(self) -> LocatorInput {
        if self.input_method.as_deref() == Some("url") {
            LocatorInput::ByUrl(self.url.unwrap_or_default())
        } else {
            LocatorInput::ByReference {
                tractate: self.tractate.unwrap_or_default(),
                page: self.page.unwrap_or_default(),
                section: self.section.as_ref().and_then(SectionField::as_section),
            }
        }
    }
}

/// Error body: every failure the browser sees is `{"error": "..."}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
