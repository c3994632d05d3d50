use passport_compliance_server::common::escape_js_template;
use passport_compliance_server::compliance::model::{Connective, TextBlock};
use passport_compliance_server::compliance::texts::{closing, intro, placeholder, text_block};
use passport_compliance_server::compliance::{compose, Language, RequestCategory};

use RequestCategory::{IdentityDocument, SourceOfFunds, UtilityBill};

fn block(category: RequestCategory, language: Language) -> &'static TextBlock {
    text_block(category, language).unwrap()
}

#[test]
fn test_input_order_does_not_matter() {
    for language in Language::ALL {
        assert_eq!(
            compose(language, &[UtilityBill, SourceOfFunds]),
            compose(language, &[SourceOfFunds, UtilityBill])
        );
        assert_eq!(
            compose(language, &[IdentityDocument, IdentityDocument]),
            compose(language, &[IdentityDocument])
        );
    }
}

#[test]
fn test_single_identity_request_in_english() {
    let text = compose(Language::English, &[IdentityDocument]);
    let expected = format!(
        "{}\n\n{}\n\n{}",
        intro(Language::English),
        "In this regard, we ask you to provide a scan or photo of your valid passport or another identity document.",
        closing(Language::English)
    );
    assert_eq!(text, expected);
}

#[test]
fn test_three_categories_use_lead_additional_final() {
    for language in Language::ALL {
        let text = compose(language, &[UtilityBill, IdentityDocument, SourceOfFunds]);

        let sof = block(SourceOfFunds, language);
        let id = block(IdentityDocument, language);
        let ub = block(UtilityBill, language);

        let sof_paragraph = format!("{}{}", sof.sentence(Connective::Lead), sof.trailing);
        let expected_body = [
            sof_paragraph.trim(),
            id.sentence(Connective::Additional),
            ub.sentence(Connective::Final),
        ]
        .join("\n\n");

        let expected = format!("{}\n\n{}\n\n{}", intro(language), expected_body, closing(language));
        assert_eq!(text, expected);
    }
}

#[test]
fn test_connective_phrasing_in_english() {
    let text = compose(Language::English, &[SourceOfFunds, IdentityDocument, UtilityBill]);
    assert!(text.contains("In this regard, we ask you to provide information on the source of funds"));
    assert!(text.contains("Additionally, please provide a scan or photo of your valid passport"));
    assert!(text.contains("Moreover, please provide a utility bill or a bank statement"));
}

#[test]
fn test_connective_phrasing_in_russian() {
    let text = compose(Language::Russian, &[IdentityDocument, UtilityBill]);
    assert!(text.starts_with("Добрый день,"));
    assert!(text.contains("В связи с этим, мы просим вас предоставить скан или фото актуального паспорта"));
    assert!(text.contains("Также, пожалуйста, предоставьте счёт за коммунальные услуги"));
    assert!(text.ends_with("С уважением,"));
}

#[test]
fn test_source_of_funds_keeps_its_boilerplate_before_next_paragraph() {
    let text = compose(Language::English, &[SourceOfFunds, UtilityBill]);
    let boilerplate = text
        .find("Attached is a list of documents")
        .expect("source of funds boilerplate");
    let utility = text
        .find("Additionally, please provide a utility bill")
        .expect("utility bill paragraph");
    assert!(boilerplate < utility);
}

#[test]
fn test_result_is_trimmed_and_blocks_separated_by_single_blank_line() {
    for language in Language::ALL {
        let text = compose(language, &[SourceOfFunds, IdentityDocument, UtilityBill]);
        assert_eq!(text, text.trim());
        assert!(!text.contains("\n\n\n"));
    }
}

#[test]
fn test_placeholders() {
    assert_eq!(placeholder(Language::English), "Please choose request options");
    assert_eq!(placeholder(Language::Russian), "Пожалуйста, выберите опции запроса");
}

#[test]
fn test_escape_js_template() {
    assert_eq!(escape_js_template(r"C:\path"), r"C:\\path");
    assert_eq!(escape_js_template("`quoted`"), r"\`quoted\`");
    assert_eq!(escape_js_template("${name}"), r"\${name}");
    assert_eq!(escape_js_template("line1\r\nline2\nline3"), r"line1\nline2\nline3");
    assert_eq!(escape_js_template("$ and { alone"), "$ and { alone");
}
