//! Internationalization (i18n) of the agent greeting and capability phrases.

/// Languages with translated greeting templates.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "es", "de", "fr", "nl", "it", "ja"];

/// Language used when a code is empty or unsupported.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Localized templates for one language.
#[derive(Debug, Clone)]
pub struct Locale {
    /// Base language code.
    pub code: &'static str,
    /// Greeting with `{voiceName}`, `{company}` and `{capabilities}` placeholders.
    pub welcome: &'static str,
    /// Capability sentence with a `{topic}` placeholder.
    pub capability: &'static str,
}

pub static LOCALE_EN: Locale = Locale {
    code: "en",
    welcome: "Hello! I'm {voiceName} from {company} customer service. {capabilities} How can I help you today?",
    capability: "I can help you answer questions about {topic}.",
};

pub static LOCALE_ES: Locale = Locale {
    code: "es",
    welcome: "¡Hola! Soy {voiceName} del servicio al cliente de {company}. {capabilities} ¿Cómo puedo ayudarte hoy?",
    capability: "Puedo ayudarte a responder preguntas sobre {topic}.",
};

pub static LOCALE_DE: Locale = Locale {
    code: "de",
    welcome: "Hallo! Ich bin {voiceName} vom Kundenservice von {company}. {capabilities} Wie kann ich Ihnen heute helfen?",
    capability: "Ich kann Ihnen bei Fragen zu {topic} helfen.",
};

pub static LOCALE_FR: Locale = Locale {
    code: "fr",
    welcome: "Bonjour ! Je suis {voiceName} du service client de {company}. {capabilities} Comment puis-je vous aider aujourd'hui ?",
    capability: "Je peux vous aider à répondre à vos questions sur {topic}.",
};

pub static LOCALE_NL: Locale = Locale {
    code: "nl",
    welcome: "Hallo! Ik ben {voiceName} van de klantenservice van {company}. {capabilities} Hoe kan ik u vandaag helpen?",
    capability: "Ik kan u helpen met vragen over {topic}.",
};

pub static LOCALE_IT: Locale = Locale {
    code: "it",
    welcome: "Ciao! Sono {voiceName} del servizio clienti di {company}. {capabilities} Come posso aiutarti oggi?",
    capability: "Posso aiutarti a rispondere a domande su {topic}.",
};

pub static LOCALE_JA: Locale = Locale {
    code: "ja",
    welcome: "こんにちは！{company}のカスタマーサービス担当の{voiceName}です。{capabilities}本日はどのようなご用件でしょうか？",
    capability: "{topic}に関するご質問にお答えします。",
};

/// Reduce a language tag to its lowercase base code.
///
/// `"en-US"` becomes `"en"`. An empty tag becomes [`DEFAULT_LANGUAGE`].
pub fn base_language(lang: &str) -> String {
    let base = lang.trim().split('-').next().unwrap_or_default().to_lowercase();
    if base.is_empty() {
        DEFAULT_LANGUAGE.to_string()
    } else {
        base
    }
}

/// Whether a greeting translation exists for the tag's base language.
pub fn is_supported_language(lang: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&base_language(lang).as_str())
}

/// Get the localized templates for a language tag.
///
/// Unsupported languages fall back to English.
pub fn get_locale(lang: &str) -> &'static Locale {
    match base_language(lang).as_str() {
        "es" => &LOCALE_ES,
        "de" => &LOCALE_DE,
        "fr" => &LOCALE_FR,
        "nl" => &LOCALE_NL,
        "it" => &LOCALE_IT,
        "ja" => &LOCALE_JA,
        _ => &LOCALE_EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_language() {
        assert_eq!(base_language("en-US"), "en");
        assert_eq!(base_language("ES-mx"), "es");
        assert_eq!(base_language("ja"), "ja");
        assert_eq!(base_language(""), "en");
    }

    #[test]
    fn test_get_locale() {
        assert_eq!(get_locale("de-DE").code, "de");
        assert_eq!(get_locale("ja").capability, "{topic}に関するご質問にお答えします。");
        assert_eq!(get_locale("pt-BR").code, "en");
        assert_eq!(get_locale("").code, "en");
    }

    #[test]
    fn test_every_supported_language_has_a_locale() {
        for lang in SUPPORTED_LANGUAGES {
            assert_eq!(get_locale(lang).code, *lang);
            assert!(get_locale(lang).welcome.contains("{capabilities}"));
            assert!(get_locale(lang).capability.contains("{topic}"));
        }
        assert!(!is_supported_language("pt"));
        assert!(is_supported_language("fr-CA"));
    }
}
