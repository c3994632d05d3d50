use super::*;
use crate::compliance::model::ComposeRequest;

#[test]
fn test_compose_request_deserialization_with_codes() {
    let json = r#"{
        "language": "English",
        "categories": ["UB", "SOF"]
    }"#;

    let request: ComposeRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.language, Language::English);
    assert_eq!(
        request.categories,
        vec![RequestCategory::UtilityBill, RequestCategory::SourceOfFunds]
    );
}

#[test]
fn test_language_aliases() {
    let ru: Language = serde_json::from_str(r#""ru""#).unwrap();
    let en: Language = serde_json::from_str(r#""en""#).unwrap();
    assert_eq!(ru, Language::Russian);
    assert_eq!(en, Language::English);
}

#[test]
fn test_unknown_category_code_is_rejected() {
    let json = r#"{ "language": "English", "categories": ["TAX"] }"#;
    assert!(serde_json::from_str::<ComposeRequest>(json).is_err());
}

#[test]
fn test_respond_with_empty_selection_returns_placeholder() {
    let request = ComposeRequest {
        language: Language::Russian,
        categories: vec![],
    };

    let response = respond(&request);
    assert!(response.placeholder);
    assert_eq!(response.text, "Пожалуйста, выберите опции запроса");
}

#[test]
fn test_respond_escapes_clipboard_literal() {
    let request = ComposeRequest {
        language: Language::English,
        categories: vec![RequestCategory::IdentityDocument],
    };

    let response = respond(&request);
    assert!(!response.placeholder);
    assert!(response.text.contains('\n'));
    assert!(!response.clipboard_literal.contains('\n'));
    assert!(response.clipboard_literal.contains(r"\n\n"));
}
