use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Language of the generated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Language {
    #[serde(alias = "ru")]
    Russian,
    #[serde(alias = "en")]
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Russian, Language::English];
}

/// Kind of document requested from the client.
///
/// Declaration order is the order in which paragraphs appear.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum RequestCategory {
    #[serde(rename = "SOF")]
    SourceOfFunds,
    #[serde(rename = "ID")]
    IdentityDocument,
    #[serde(rename = "UB")]
    UtilityBill,
}

impl RequestCategory {
    /// Fixed paragraph priority.
    pub const PRIORITY: [RequestCategory; 3] = [
        RequestCategory::SourceOfFunds,
        RequestCategory::IdentityDocument,
        RequestCategory::UtilityBill,
    ];

    pub fn code(self) -> &'static str {
        match self {
            RequestCategory::SourceOfFunds => "SOF",
            RequestCategory::IdentityDocument => "ID",
            RequestCategory::UtilityBill => "UB",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RequestCategory::SourceOfFunds => "Source of funds",
            RequestCategory::IdentityDocument => "Identity document",
            RequestCategory::UtilityBill => "Utility bill / proof of address",
        }
    }
}

/// Which opening phrase a paragraph gets, by its position in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    Lead,
    Additional,
    Final,
}

impl Connective {
    pub fn for_position(index: usize) -> Self {
        match index {
            0 => Connective::Lead,
            1 => Connective::Additional,
            _ => Connective::Final,
        }
    }
}

/// Fixed wording for one category in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBlock {
    pub lead: &'static str,
    pub additional: &'static str,
    pub final_sentence: &'static str,
    /// Boilerplate appended after the sentence; may be empty
    pub trailing: &'static str,
}

impl TextBlock {
    pub fn sentence(&self, connective: Connective) -> &'static str {
        match connective {
            Connective::Lead => self.lead,
            Connective::Additional => self.additional,
            Connective::Final => self.final_sentence,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ComposeRequest {
    pub language: Language,
    #[serde(default)]
    #[schema(example = json!(["SOF", "UB"]))]
    pub categories: Vec<RequestCategory>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComposeResponse {
    pub text: String,
    /// Text escaped for a JavaScript template literal
    pub clipboard_literal: String,
    /// True when no category was selected and `text` is the placeholder
    pub placeholder: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryOption {
    #[schema(example = "SOF")]
    pub code: String,
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComplianceOptions {
    pub categories: Vec<CategoryOption>,
    pub languages: Vec<Language>,
    pub default_categories: Vec<RequestCategory>,
    pub default_language: Language,
}
