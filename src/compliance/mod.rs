//! Compliance request template tool.
//!
//! Builds a multi-paragraph request e-mail from fixed fragments:
//! - `model` - languages, categories and text block types
//! - `texts` - the read-only wording table
//! - `composer` - ordering, connective selection and assembly
//! - `routes` - HTTP endpoints

pub mod composer;
pub mod model;
pub mod routes;
pub mod texts;

#[cfg(test)]
mod tests;

pub use composer::{compose, order_by_priority};
pub use model::{ComposeRequest, ComposeResponse, Language, RequestCategory};
pub use texts::placeholder;

use crate::common::escape_js_template;

/// Handle a compose request the way the form does: the placeholder for an
/// empty selection, the composed message otherwise.
pub fn respond(request: &ComposeRequest) -> ComposeResponse {
    let (text, placeholder) = if request.categories.is_empty() {
        (texts::placeholder(request.language).to_string(), true)
    } else {
        (compose(request.language, &request.categories), false)
    };

    ComposeResponse {
        clipboard_literal: escape_js_template(&text),
        text,
        placeholder,
    }
}
