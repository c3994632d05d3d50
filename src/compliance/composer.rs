//! Assembles the compliance request e-mail from the fixed text table.

use super::model::{Connective, Language, RequestCategory};
use super::texts::{closing, intro, text_block};

/// Selected categories in paragraph order, without duplicates.
pub fn order_by_priority(categories: &[RequestCategory]) -> Vec<RequestCategory> {
    RequestCategory::PRIORITY
        .into_iter()
        .filter(|category| categories.contains(category))
        .collect()
}

/// Body paragraphs only, joined by blank lines.
///
/// The table holds every category and language pair; a missing entry is
/// logged and its paragraph left out rather than failing the request.
pub fn render_body(language: Language, categories: &[RequestCategory]) -> String {
    order_by_priority(categories)
        .into_iter()
        .enumerate()
        .filter_map(|(index, category)| {
            let Some(block) = text_block(category, language) else {
                log::error!("No text block for {:?}/{:?}", category, language);
                return None;
            };
            let sentence = block.sentence(Connective::for_position(index));
            Some(format!("{}{}", sentence, block.trailing).trim().to_string())
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Compose the full message: intro, one paragraph per category, closing.
///
/// Callers show [`placeholder`](super::texts::placeholder) instead of
/// calling this with an empty selection; if they do not, the message is
/// intro and closing only.
pub fn compose(language: Language, categories: &[RequestCategory]) -> String {
    let body = render_body(language, categories);

    let text = if body.is_empty() {
        format!("{}\n\n{}", intro(language), closing(language))
    } else {
        format!("{}\n\n{}\n\n{}", intro(language), body, closing(language))
    };

    text.trim().to_string()
}
