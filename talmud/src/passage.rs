//! Passage assembly: pick the requested section(s) out of the upstream arrays
//! and split each paragraph into sentences.

use serde::{Deserialize, Serialize};

use crate::hebrew::strip_nikud;
use crate::locator::Locator;
use crate::sefaria::TextResponse;
use crate::sentence::split_sentences;

/// Cap on sections returned for a whole-page request, for payload-size control.
pub const MAX_SECTIONS: usize = 20;

/// One section's sentence lists, Hebrew and English in parallel.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassageSection {
    pub hebrew: Vec<String>,
    pub english: Vec<String>,
}

/// The reshaped result sent to the browser.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Passage {
    pub span: String,
    pub sections: Vec<PassageSection>,
}

/// Builds the passage for a locator from the upstream arrays.
///
/// With a section request, the 1-based index must be in bounds of **both**
/// arrays to yield the single section; otherwise the passage is empty but
/// still a success. Without one, up to [`MAX_SECTIONS`] parallel entries are
/// emitted in order.
pub fn build_passage(locator: &Locator, text: &TextResponse) -> Passage {
    let mut sections = Vec::new();
    match locator.section {
        Some(requested) => {
            // checked_sub keeps section 0 out of bounds instead of wrapping.
            if let Some(idx) = (requested as usize).checked_sub(1) {
                if idx < text.he.len() && idx < text.text.len() {
                    sections.push(make_section(&text.he[idx], &text.text[idx]));
                }
            }
        }
        None => {
            let limit = text.he.len().min(text.text.len()).min(MAX_SECTIONS);
            for i in 0..limit {
                sections.push(make_section(&text.he[i], &text.text[i]));
            }
        }
    }
    Passage {
        span: locator.span(),
        sections,
    }
}

fn make_section(hebrew: &str, english: &str) -> PassageSection {
    PassageSection {
        hebrew: split_sentences(&strip_nikud(hebrew)),
        english: split_sentences(english),
    }
}
