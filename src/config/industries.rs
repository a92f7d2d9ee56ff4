//! Industry profiles: company names, personas and capability topics.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use super::i18n::{base_language, DEFAULT_LANGUAGE};
use crate::template::{fill_template, TemplateError};

/// Industry persona the agent speaks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Industry {
    #[default]
    Deepgram,
    Healthcare,
    Banking,
    Pharmaceuticals,
    Retail,
    Travel,
    /// Fallback for keys outside the known set.
    Generic,
}

/// Industries offered to users, in display order.
pub const INDUSTRIES: &[Industry] = &[
    Industry::Deepgram,
    Industry::Healthcare,
    Industry::Banking,
    Industry::Pharmaceuticals,
    Industry::Retail,
    Industry::Travel,
];

impl Industry {
    /// Look up an industry by key, ignoring case and surrounding whitespace.
    ///
    /// This is looser than an exact key match: `"Banking"` and `" banking "`
    /// both resolve to [`Industry::Banking`] instead of the generic profile.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        INDUSTRIES.iter().copied().find(|i| i.key() == key)
    }

    /// Look up an industry by key, falling back to [`Industry::Generic`].
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            warn!("Unknown industry '{}', using generic profile", key);
            Industry::Generic
        })
    }

    pub fn key(&self) -> &'static str {
        match self {
            Industry::Deepgram => "deepgram",
            Industry::Healthcare => "healthcare",
            Industry::Banking => "banking",
            Industry::Pharmaceuticals => "pharmaceuticals",
            Industry::Retail => "retail",
            Industry::Travel => "travel",
            Industry::Generic => "generic",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Industry::Deepgram => "Deepgram",
            Industry::Healthcare => "Healthcare",
            Industry::Banking => "Banking",
            Industry::Pharmaceuticals => "Pharmaceuticals",
            Industry::Retail => "Retail",
            Industry::Travel => "Travel",
            Industry::Generic => "Generic",
        }
    }

    /// Company the agent represents.
    pub fn company(&self) -> &'static str {
        match self {
            Industry::Deepgram => "Deepgram",
            Industry::Healthcare => "HealthFirst",
            Industry::Banking => "SecureBank",
            Industry::Pharmaceuticals => "MedLine",
            Industry::Retail => "StyleMart",
            Industry::Travel => "TravelTech",
            Industry::Generic => "our company",
        }
    }

    fn persona_template(&self) -> &'static str {
        match self {
            Industry::Deepgram => "You are {voiceName}, a friendly and professional customer service representative for {company}, a Voice API company who provides STT and TTS capabilities via API. Your role is to assist potential customers with general inquiries about Deepgram.",
            Industry::Healthcare => "You are {voiceName}, a compassionate and knowledgeable healthcare assistant for {company}, a leading healthcare provider. Your role is to assist patients with general information about their appointments and orders.",
            Industry::Banking => "You are {voiceName}, a professional and trustworthy banking representative for {company}, a secure financial institution. Your role is to assist customers with general information about their accounts and transactions.",
            Industry::Pharmaceuticals => "You are {voiceName}, a professional and trustworthy pharmaceutical representative for {company}, a secure pharmaceutical company. Your role is to assist customers with general information about their prescriptions and orders.",
            Industry::Retail => "You are {voiceName}, a friendly and attentive retail associate for {company}, a trendy clothing and accessories store. Your role is to assist customers with general information about their orders and transactions.",
            Industry::Travel => "You are {voiceName}, a friendly and professional customer service representative for {company}, a tech-forward travel agency. Your role is to assist customers with general information about their travel plans and orders.",
            Industry::Generic => "You are {voiceName}, a friendly and professional customer service representative for {company}. Your role is to assist customers with general inquiries.",
        }
    }

    /// Persona sentence that opens the system prompt.
    pub fn personality(&self, voice_name: &str) -> Result<String, TemplateError> {
        fill_template(
            self.persona_template(),
            &[("voiceName", voice_name), ("company", self.company())],
        )
    }

    /// Localized capability topic, trying the language's base code and then English.
    pub fn capability_topic(&self, lang: &str) -> Option<&'static str> {
        let topics = CAPABILITY_TOPICS.get(self.key())?;
        topics
            .get(base_language(lang).as_str())
            .or_else(|| topics.get(DEFAULT_LANGUAGE))
            .copied()
    }

    /// Whether the system prompt is built from on-disk product documentation.
    pub fn uses_documentation(&self) -> bool {
        matches!(self, Industry::Deepgram)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Topic names plugged into the capability sentence, keyed by industry then language.
static CAPABILITY_TOPICS: Lazy<HashMap<&'static str, HashMap<&'static str, &'static str>>> =
    Lazy::new(|| {
        let mut m = HashMap::new();

        m.insert(
            "deepgram",
            ["en", "es", "de", "fr", "nl", "it", "ja"]
                .into_iter()
                .map(|lang| (lang, "Deepgram"))
                .collect(),
        );
        m.insert(
            "healthcare",
            HashMap::from([
                ("en", "healthcare"),
                ("es", "atención médica"),
                ("de", "Gesundheitsversorgung"),
                ("fr", "soins de santé"),
                ("nl", "gezondheidszorg"),
                ("it", "assistenza sanitaria"),
                ("ja", "ヘルスケア"),
            ]),
        );
        m.insert(
            "banking",
            HashMap::from([
                ("en", "banking"),
                ("es", "banca"),
                ("de", "Bankwesen"),
                ("fr", "banque"),
                ("nl", "bankzaken"),
                ("it", "banking"),
                ("ja", "銀行業務"),
            ]),
        );
        m.insert(
            "pharmaceuticals",
            HashMap::from([
                ("en", "pharmaceuticals"),
                ("es", "productos farmacéuticos"),
                ("de", "Arzneimittel"),
                ("fr", "produits pharmaceutiques"),
                ("nl", "farmaceutische producten"),
                ("it", "prodotti farmaceutici"),
                ("ja", "医薬品"),
            ]),
        );
        m.insert(
            "retail",
            HashMap::from([
                ("en", "retail"),
                ("es", "retail"),
                ("de", "Einzelhandel"),
                ("fr", "vente au détail"),
                ("nl", "retail"),
                ("it", "vendita al dettaglio"),
                ("ja", "小売"),
            ]),
        );
        m.insert(
            "travel",
            HashMap::from([
                ("en", "travel"),
                ("es", "viajes"),
                ("de", "Reisen"),
                ("fr", "voyages"),
                ("nl", "reizen"),
                ("it", "viaggi"),
                ("ja", "旅行"),
            ]),
        );

        m
    });

/// Available industries as `(key, display name)` pairs.
pub fn get_available_industries() -> Vec<(&'static str, &'static str)> {
    INDUSTRIES
        .iter()
        .map(|i| (i.key(), i.display_name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(Industry::from_key("banking"), Some(Industry::Banking));
        assert_eq!(Industry::from_key("  Retail "), Some(Industry::Retail));
        assert_eq!(Industry::from_key("Banking"), Some(Industry::Banking));
        assert_eq!(Industry::from_key("generic"), None);
        assert_eq!(Industry::from_key("insurance"), None);
    }

    #[test]
    fn test_resolve_falls_back_to_generic() {
        assert_eq!(Industry::resolve("travel"), Industry::Travel);
        assert_eq!(Industry::resolve("insurance"), Industry::Generic);
        assert_eq!(Industry::resolve(""), Industry::Generic);
    }

    #[test]
    fn test_personality() {
        let p = Industry::Healthcare.personality("Thalia").unwrap();
        assert!(p.starts_with("You are Thalia, a compassionate"));
        assert!(p.contains("for HealthFirst, a leading healthcare provider"));

        let g = Industry::Generic.personality("Orion").unwrap();
        assert!(g.contains("for our company."));
    }

    #[test]
    fn test_capability_topic() {
        assert_eq!(Industry::Banking.capability_topic("de-DE"), Some("Bankwesen"));
        assert_eq!(Industry::Travel.capability_topic("pt"), Some("travel"));
        assert_eq!(Industry::Deepgram.capability_topic("ja"), Some("Deepgram"));
        assert_eq!(Industry::Generic.capability_topic("en"), None);
    }

    #[test]
    fn test_get_available_industries() {
        let industries = get_available_industries();
        assert_eq!(industries.len(), 6);
        assert_eq!(industries[0], ("deepgram", "Deepgram"));
        assert_eq!(industries[3], ("pharmaceuticals", "Pharmaceuticals"));
        assert!(!industries.iter().any(|(k, _)| *k == "generic"));
    }

    #[test]
    fn test_only_deepgram_uses_documentation() {
        assert!(Industry::Deepgram.uses_documentation());
        assert!(INDUSTRIES[1..].iter().all(|i| !i.uses_documentation()));
    }
}
