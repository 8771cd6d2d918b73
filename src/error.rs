//! Errors raised while extracting fields from a front page item.
//!
//! Every variant is recoverable: the pipeline logs it, counts the item as
//! skipped and moves on to the next one.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("missing <{tag}> element{}", marker_suffix(.marker))]
    MissingElement {
        tag: &'static str,
        marker: Option<&'static str>,
    },

    #[error("<{tag}> element has no `{attr}` attribute")]
    MissingAttribute {
        tag: &'static str,
        attr: &'static str,
    },

    #[error("no date pattern found in {input:?}")]
    NoDateMatch { input: String },
}

fn marker_suffix(marker: &Option<&'static str>) -> String {
    match marker {
        Some(m) => format!(" with class `{m}`"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, ExtractionError>;
