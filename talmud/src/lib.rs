//! # Talmud
//!
//! Core library for the Talmud passage service: resolve a user-supplied locator
//! (structured tractate/page/section or a Sefaria URL), fetch the bilingual text
//! from the Sefaria API with a one-shot `"Bavli "`-prefix fallback, and reshape
//! the response into per-section sentence lists.
//!
//! ## Main modules
//!
//! - [`locator`]: [`Locator`], [`LocatorInput`] — reference resolution and span rendering.
//! - [`sefaria`]: [`SefariaClient`], [`HttpClient`] — upstream fetch with fallback.
//! - [`passage`]: [`Passage`], [`build_passage`] — section extraction and sentence splitting.
//! - [`sentence`]: heuristic sentence splitter.
//! - [`hebrew`]: nikud stripping for Hebrew paragraphs.
//! - [`protocol`]: wire types for the `/fetch` endpoint.
//! - [`corpus`]: tractate names and daf pages for the UI dropdowns.
//! - [`error`]: [`FetchError`] taxonomy.

pub mod corpus;
pub mod error;
pub mod hebrew;
pub mod locator;
pub mod passage;
pub mod protocol;
pub mod sefaria;
pub mod sentence;

pub use error::FetchError;
pub use locator::{Locator, LocatorInput};
pub use passage::{build_passage, Passage, PassageSection, MAX_SECTIONS};
pub use protocol::{ErrorBody, FetchRequest};
pub use sefaria::{HttpClient, ReqwestHttpClient, SefariaClient, TextResponse, DEFAULT_BASE_URL};
pub use sentence::split_sentences;

/// Resolves the locator, fetches the upstream text, and assembles the passage.
/// The single entry point the HTTP handler calls.
pub async fn fetch_passage(
    client: &SefariaClient,
    input: LocatorInput,
) -> Result<Passage, FetchError> {
    let locator = input.resolve()?;
    let text = client
        .fetch_reference(&locator.tractate, &locator.page)
        .await?;
    Ok(build_passage(&locator, &text))
}
