//! Assembles persona, prompt, greeting and settings for one agent session.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::debug;

use super::settings::{
    Settings, AGENT_AUDIO_BYTES_PER_SEC, AGENT_AUDIO_SAMPLE_RATE, USER_AUDIO_SAMPLES_PER_CHUNK,
    USER_AUDIO_SAMPLE_RATE, USER_AUDIO_SECS_PER_CHUNK, VOICE_AGENT_URL,
};
use crate::config::{
    build_prompt, current_date, function_definitions, get_available_industries, get_locale,
    Industry, DEFAULT_LANGUAGE,
};
use crate::docs::{documentation_summary, read_documentation_files, DEFAULT_DOCS_DIR};
use crate::template::{fill_template, TemplateError};
use crate::voice::{resolve_voice_name, DEFAULT_VOICE_MODEL};

/// Inputs for building an [`AgentTemplates`].
#[derive(Debug, Clone)]
pub struct AgentTemplatesConfig {
    /// Industry key, e.g. "banking".
    pub industry: String,
    /// Text-to-speech voice model.
    pub voice_model: String,
    /// Display name for the agent. Empty means derive it from the voice model.
    pub voice_name: String,
    /// Language tag, e.g. "en" or "es-MX".
    pub language: String,
    /// Directory scanned for documentation when the industry uses it.
    pub docs_dir: PathBuf,
}

impl Default for AgentTemplatesConfig {
    fn default() -> Self {
        Self {
            industry: Industry::default().key().to_string(),
            voice_model: DEFAULT_VOICE_MODEL.to_string(),
            voice_name: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
        }
    }
}

impl AgentTemplatesConfig {
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = industry.into();
        self
    }

    pub fn with_voice_model(mut self, voice_model: impl Into<String>) -> Self {
        self.voice_model = voice_model.into();
        self
    }

    pub fn with_voice_name(mut self, voice_name: impl Into<String>) -> Self {
        self.voice_name = voice_name.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_docs_dir(mut self, docs_dir: impl Into<PathBuf>) -> Self {
        self.docs_dir = docs_dir.into();
        self
    }
}

/// Everything a voice-agent session needs, resolved from an [`AgentTemplatesConfig`].
#[derive(Debug, Clone)]
pub struct AgentTemplates {
    voice_model: String,
    voice_name: String,
    language: String,
    industry: Industry,
    industry_key: String,
    company: String,
    personality: String,
    capabilities: String,
    first_message: String,
    prompt: String,
    documentation: BTreeMap<String, String>,
    settings: Settings,
}

impl AgentTemplates {
    /// Build the templates, dating the prompt with today's date.
    pub fn new(config: AgentTemplatesConfig) -> Result<Self, TemplateError> {
        Self::new_with_date(config, &current_date())
    }

    /// Build the templates with an already formatted prompt date.
    pub fn new_with_date(config: AgentTemplatesConfig, date: &str) -> Result<Self, TemplateError> {
        let voice_name = resolve_voice_name(&config.voice_name, &config.voice_model);
        let industry = Industry::resolve(&config.industry);
        let language = if config.language.trim().is_empty() {
            DEFAULT_LANGUAGE.to_string()
        } else {
            config.language.clone()
        };
        debug!(
            "Building agent templates: industry={}, voice={} ({}), language={}",
            industry, voice_name, config.voice_model, language
        );

        let documentation = if industry.uses_documentation() {
            read_documentation_files(&config.docs_dir)
        } else {
            BTreeMap::new()
        };
        let body = build_prompt(industry, &documentation_summary(&documentation), date)?;

        let company = industry.company().to_string();
        let personality = industry.personality(&voice_name)?;

        let locale = get_locale(&language);
        let topic = industry
            .capability_topic(&language)
            .unwrap_or(config.industry.as_str());
        let capabilities = fill_template(locale.capability, &[("topic", topic)])?;
        let first_message = fill_template(
            locale.welcome,
            &[
                ("voiceName", voice_name.as_str()),
                ("company", company.as_str()),
                ("capabilities", capabilities.as_str()),
            ],
        )?;

        let prompt = format!("{}\n\n{}", personality, body);
        let settings = Settings::new(
            language.as_str(),
            config.voice_model.as_str(),
            body.as_str(),
            function_definitions(),
            first_message.as_str(),
        );

        Ok(Self {
            voice_model: config.voice_model,
            voice_name,
            language,
            industry,
            industry_key: config.industry,
            company,
            personality,
            capabilities,
            first_message,
            prompt,
            documentation,
            settings,
        })
    }

    /// Available industries as `(key, display name)` pairs.
    pub fn get_available_industries() -> Vec<(&'static str, &'static str)> {
        get_available_industries()
    }

    pub fn voice_model(&self) -> &str {
        &self.voice_model
    }

    pub fn voice_name(&self) -> &str {
        &self.voice_name
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn industry(&self) -> Industry {
        self.industry
    }

    /// The industry key as requested, before fallback.
    pub fn industry_key(&self) -> &str {
        &self.industry_key
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn personality(&self) -> &str {
        &self.personality
    }

    pub fn capabilities(&self) -> &str {
        &self.capabilities
    }

    /// Localized greeting spoken when the session starts.
    pub fn first_message(&self) -> &str {
        &self.first_message
    }

    /// Full system prompt: persona followed by the prompt body.
    ///
    /// The settings record carries only the body; the persona is not sent.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Documentation files keyed by file stem. Empty unless the industry uses them.
    pub fn documentation(&self) -> &BTreeMap<String, String> {
        &self.documentation
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }

    pub fn voice_agent_url(&self) -> &'static str {
        VOICE_AGENT_URL
    }

    pub fn user_audio_sample_rate(&self) -> u32 {
        USER_AUDIO_SAMPLE_RATE
    }

    pub fn user_audio_secs_per_chunk(&self) -> f64 {
        USER_AUDIO_SECS_PER_CHUNK
    }

    pub fn user_audio_samples_per_chunk(&self) -> u32 {
        USER_AUDIO_SAMPLES_PER_CHUNK
    }

    pub fn agent_audio_sample_rate(&self) -> u32 {
        AGENT_AUDIO_SAMPLE_RATE
    }

    pub fn agent_audio_bytes_per_sec(&self) -> u32 {
        AGENT_AUDIO_BYTES_PER_SEC
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    const DATE: &str = "Sunday, October 18, 2026";

    fn build(config: AgentTemplatesConfig) -> AgentTemplates {
        AgentTemplates::new_with_date(config, DATE).unwrap()
    }

    fn missing_docs_dir() -> PathBuf {
        env::temp_dir().join("voice_agent_templates_missing_docs")
    }

    #[test]
    fn test_banking_english() {
        let t = build(AgentTemplatesConfig::default().with_industry("banking"));

        assert_eq!(t.voice_name(), "Thalia");
        assert_eq!(t.company(), "SecureBank");
        assert_eq!(t.capabilities(), "I can help you answer questions about banking.");
        assert_eq!(
            t.first_message(),
            "Hello! I'm Thalia from SecureBank customer service. I can help you answer questions about banking. How can I help you today?"
        );
        assert!(t.prompt().starts_with(t.personality()));
        assert!(t.prompt().contains("\n\nPERSONALITY & TONE:"));
        assert!(t.prompt().ends_with(&format!("Today's date is {}.", DATE)));
        assert!(t.documentation().is_empty());
    }

    #[test]
    fn test_settings_are_populated() {
        let t = build(
            AgentTemplatesConfig::default()
                .with_industry("travel")
                .with_voice_model("aura-2-apollo-en")
                .with_language("es-MX"),
        );
        let settings = t.settings();

        assert_eq!(settings.agent.language, "es-MX");
        assert_eq!(settings.agent.speak.provider.model, "aura-2-apollo-en");
        assert!(settings.agent.think.prompt.starts_with("PERSONALITY & TONE:"));
        assert!(!settings.agent.think.prompt.contains(t.personality()));
        assert_eq!(
            t.prompt(),
            format!("{}\n\n{}", t.personality(), settings.agent.think.prompt)
        );
        assert_eq!(settings.agent.greeting, t.first_message());
        assert_eq!(settings.agent.think.functions.len(), 7);
    }

    #[test]
    fn test_localized_greeting() {
        let t = build(
            AgentTemplatesConfig::default()
                .with_industry("healthcare")
                .with_voice_name("Ana")
                .with_language("es-MX"),
        );
        assert_eq!(
            t.first_message(),
            "¡Hola! Soy Ana del servicio al cliente de HealthFirst. Puedo ayudarte a responder preguntas sobre atención médica. ¿Cómo puedo ayudarte hoy?"
        );

        let ja = build(
            AgentTemplatesConfig::default()
                .with_industry("retail")
                .with_language("ja"),
        );
        assert_eq!(ja.capabilities(), "小売に関するご質問にお答えします。");
        assert!(ja.first_message().starts_with("こんにちは！StyleMartの"));
    }

    #[test]
    fn test_unsupported_language_falls_back_to_english() {
        let t = build(
            AgentTemplatesConfig::default()
                .with_industry("pharmaceuticals")
                .with_language("pt-BR"),
        );
        assert_eq!(t.language(), "pt-BR");
        assert!(t.first_message().starts_with("Hello! I'm Thalia from MedLine"));
        assert!(t.capabilities().ends_with("about pharmaceuticals."));
    }

    #[test]
    fn test_empty_language_defaults_to_english() {
        let t = build(AgentTemplatesConfig::default().with_industry("retail").with_language(""));
        assert_eq!(t.language(), "en");
        assert_eq!(t.settings().agent.language, "en");
    }

    #[test]
    fn test_unknown_industry_uses_generic_profile() {
        let t = build(AgentTemplatesConfig::default().with_industry("insurance"));

        assert_eq!(t.industry(), Industry::Generic);
        assert_eq!(t.industry_key(), "insurance");
        assert_eq!(t.company(), "our company");
        assert_eq!(t.capabilities(), "I can help you answer questions about insurance.");
        assert!(t.prompt().contains("Today's date is"));
    }

    #[test]
    fn test_deepgram_without_docs() {
        let t = build(AgentTemplatesConfig::default().with_docs_dir(missing_docs_dir()));

        assert_eq!(t.industry(), Industry::Deepgram);
        assert!(t.documentation().is_empty());
        assert!(t.prompt().contains("DOCUMENTATION:\n\n"));
        assert!(!t.prompt().contains("Today's date is"));
        assert_eq!(
            t.first_message(),
            "Hello! I'm Thalia from Deepgram customer service. I can help you answer questions about Deepgram. How can I help you today?"
        );
    }

    #[test]
    fn test_deepgram_with_docs() {
        let dir = env::temp_dir().join("voice_agent_templates_agent_docs");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("voice-agent.mdx"), "Agent docs").unwrap();
        fs::write(dir.join("getting-started.mdx"), "Start here").unwrap();

        let t = build(AgentTemplatesConfig::default().with_docs_dir(&dir));

        assert_eq!(t.documentation().len(), 2);
        assert!(t
            .prompt()
            .contains("Available documentation topics: getting-started, voice-agent"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_docs_ignored_for_other_industries() {
        let dir = env::temp_dir().join("voice_agent_templates_banking_docs");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("faq.mdx"), "FAQ").unwrap();

        let t = build(
            AgentTemplatesConfig::default()
                .with_industry("banking")
                .with_docs_dir(&dir),
        );
        assert!(t.documentation().is_empty());
        assert!(!t.prompt().contains("faq"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_instances_are_independent() {
        let a = build(AgentTemplatesConfig::default().with_industry("banking"));
        let b = build(
            AgentTemplatesConfig::default()
                .with_industry("retail")
                .with_voice_model("aura-2-orion-en"),
        );
        assert_eq!(a.settings().agent.speak.provider.model, "aura-2-thalia-en");
        assert_eq!(b.settings().agent.speak.provider.model, "aura-2-orion-en");
        assert_ne!(a.settings().agent.greeting, b.settings().agent.greeting);
    }

    #[test]
    fn test_audio_accessors() {
        let t = build(AgentTemplatesConfig::default().with_industry("travel"));
        assert_eq!(t.voice_agent_url(), "wss://agent.deepgram.com/v1/agent/converse");
        assert_eq!(t.user_audio_samples_per_chunk(), 800);
        assert_eq!(t.agent_audio_bytes_per_sec(), 32000);
        assert_eq!(AgentTemplates::get_available_industries().len(), 6);
    }
}
