//! Fixed wording of the compliance request.
//!
//! The table is built once and only read afterwards; `run()` forces it at
//! start-up so the first request does not pay for it.

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::model::{Language, RequestCategory, TextBlock};

const INTRO_RU: &str = "Добрый день,

в соответствии с требованиями регулятора FSC Белиза и законодательством по борьбе с отмыванием денежных средств RoboForex Ltd обязана на регулярной основе осуществлять постоянную проверку и мониторинг личной информации своих клиентов.";

const INTRO_EN: &str = "Hello,

in accordance with the requirements of the FSC Belize regulator and anti-money laundering legislation, RoboForex Ltd is obliged to regularly verify and monitor the personal information of its clients.";

const CLOSING_RU: &str = "Мы ценим ваше сотрудничество.

Если у вас есть какие-либо вопросы, пожалуйста, свяжитесь с нами.

С уважением,";

const CLOSING_EN: &str = "We appreciate your cooperation.

If you have any questions, please contact us.

Best regards,";

const SOF_RU: TextBlock = TextBlock {
    lead: "В связи с этим, мы просим вас предоставить информацию об источнике средств, которые были зачислены на ваши торговые счета в RoboForex Ltd.",
    additional: "Также, пожалуйста, предоставьте информацию об источнике средств, которые были зачислены на ваши торговые счета в RoboForex Ltd.",
    final_sentence: "Помимо этого, пожалуйста, предоставьте информацию об источнике средств, которые были зачислены на ваши торговые счета в RoboForex Ltd.",
    trailing: "\n\nПрилагаем список документов, которые можно использовать для проверки происхождения средств.\n\nВы можете предоставить нам любые документы, такие как: справки о зарплате, налоговые декларации, доходы от бизнеса, продажи имущества и т. д. или любой другой документ, указанный в прилагаемом документе.",
};

const SOF_EN: TextBlock = TextBlock {
    lead: "In this regard, we ask you to provide information on the source of funds credited to your trading accounts with RoboForex Ltd.",
    additional: "Additionally, please provide information on the source of funds credited to your trading accounts with RoboForex Ltd.",
    final_sentence: "Moreover, please provide information on the source of funds credited to your trading accounts with RoboForex Ltd.",
    trailing: "\n\nAttached is a list of documents that can be used to verify the origin of funds.\n\nYou can provide us with any documents, such as salary certificates, tax returns, business income, property sales, etc., or any other document specified in the attached document.",
};

const ID_RU: TextBlock = TextBlock {
    lead: "В связи с этим, мы просим вас предоставить скан или фото актуального паспорта, удостоверяющего вашу личность.",
    additional: "Также, пожалуйста, предоставьте скан или фото актуального паспорта, удостоверяющего вашу личность.",
    final_sentence: "Помимо этого, пожалуйста, предоставьте скан или фото актуального паспорта, удостоверяющего вашу личность.",
    trailing: "",
};

const ID_EN: TextBlock = TextBlock {
    lead: "In this regard, we ask you to provide a scan or photo of your valid passport or another identity document.",
    additional: "Additionally, please provide a scan or photo of your valid passport or another identity document.",
    final_sentence: "Moreover, please provide a scan or photo of your valid passport or another identity document.",
    trailing: "",
};

const UB_RU: TextBlock = TextBlock {
    lead: "В связи с этим, мы просим вас предоставить счёт за коммунальные услуги или банковскую выписку для подтверждения вашего адреса проживания.",
    additional: "Также, пожалуйста, предоставьте счёт за коммунальные услуги или банковскую выписку для подтверждения вашего адреса проживания.",
    final_sentence: "Помимо этого, пожалуйста, предоставьте счёт за коммунальные услуги или банковскую выписку для подтверждения вашего адреса проживания.",
    trailing: "",
};

const UB_EN: TextBlock = TextBlock {
    lead: "In this regard, we ask you to provide a utility bill or a bank statement to confirm your residential address.",
    additional: "Additionally, please provide a utility bill or a bank statement to confirm your residential address.",
    final_sentence: "Moreover, please provide a utility bill or a bank statement to confirm your residential address.",
    trailing: "",
};

lazy_static! {
    pub static ref TEXT_BLOCKS: HashMap<(RequestCategory, Language), TextBlock> = {
        use Language::{English, Russian};
        use RequestCategory::{IdentityDocument, SourceOfFunds, UtilityBill};

        let mut blocks = HashMap::new();
        blocks.insert((SourceOfFunds, Russian), SOF_RU);
        blocks.insert((SourceOfFunds, English), SOF_EN);
        blocks.insert((IdentityDocument, Russian), ID_RU);
        blocks.insert((IdentityDocument, English), ID_EN);
        blocks.insert((UtilityBill, Russian), UB_RU);
        blocks.insert((UtilityBill, English), UB_EN);
        blocks
    };
}

pub fn intro(language: Language) -> &'static str {
    match language {
        Language::Russian => INTRO_RU,
        Language::English => INTRO_EN,
    }
}

pub fn closing(language: Language) -> &'static str {
    match language {
        Language::Russian => CLOSING_RU,
        Language::English => CLOSING_EN,
    }
}

/// Shown instead of a message when nothing is selected.
pub fn placeholder(language: Language) -> &'static str {
    match language {
        Language::Russian => "Пожалуйста, выберите опции запроса",
        Language::English => "Please choose request options",
    }
}

pub fn text_block(category: RequestCategory, language: Language) -> Option<&'static TextBlock> {
    TEXT_BLOCKS.get(&(category, language))
}
