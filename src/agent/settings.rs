//! The `Settings` message sent to the voice-agent service when a session opens.

use serde::{Deserialize, Serialize};

use crate::config::FunctionDefinition;
use crate::template::TemplateError;

/// Voice agent websocket endpoint.
pub const VOICE_AGENT_URL: &str = "wss://agent.deepgram.com/v1/agent/converse";

/// Sample rate of microphone audio sent to the agent.
pub const USER_AUDIO_SAMPLE_RATE: u32 = 16000;
/// Length of each microphone chunk in seconds.
pub const USER_AUDIO_SECS_PER_CHUNK: f64 = 0.05;
/// Samples per microphone chunk.
pub const USER_AUDIO_SAMPLES_PER_CHUNK: u32 = 800;

/// Sample rate of synthesized agent audio.
pub const AGENT_AUDIO_SAMPLE_RATE: u32 = 16000;
/// Bytes per second of 16-bit agent audio.
pub const AGENT_AUDIO_BYTES_PER_SEC: u32 = 2 * AGENT_AUDIO_SAMPLE_RATE;

const AUDIO_ENCODING: &str = "linear16";

/// Top-level settings message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "type")]
    pub message_type: String,
    pub audio: AudioSettings,
    pub agent: AgentSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    pub input: AudioInput,
    pub output: AudioOutput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioInput {
    pub encoding: String,
    pub sample_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioOutput {
    pub encoding: String,
    pub sample_rate: u32,
    pub container: String,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            input: AudioInput {
                encoding: AUDIO_ENCODING.to_string(),
                sample_rate: USER_AUDIO_SAMPLE_RATE,
            },
            output: AudioOutput {
                encoding: AUDIO_ENCODING.to_string(),
                sample_rate: AGENT_AUDIO_SAMPLE_RATE,
                container: "none".to_string(),
            },
        }
    }
}

/// Agent behaviour: language plus the listen/think/speak pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSettings {
    pub language: String,
    pub listen: ListenSettings,
    pub think: ThinkSettings,
    pub speak: SpeakSettings,
    pub greeting: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListenSettings {
    pub provider: ListenProvider,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListenProvider {
    #[serde(rename = "type")]
    pub provider_type: String,
    pub model: String,
}

impl Default for ListenSettings {
    fn default() -> Self {
        Self {
            provider: ListenProvider {
                provider_type: "deepgram".to_string(),
                model: "nova-3".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThinkSettings {
    pub provider: ThinkProvider,
    pub prompt: String,
    pub functions: Vec<FunctionDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThinkProvider {
    #[serde(rename = "type")]
    pub provider_type: String,
    pub model: String,
    pub temperature: f32,
}

impl Default for ThinkProvider {
    fn default() -> Self {
        Self {
            provider_type: "open_ai".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakSettings {
    pub provider: SpeakProvider,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakProvider {
    #[serde(rename = "type")]
    pub provider_type: String,
    pub model: String,
}

impl SpeakSettings {
    pub fn new(voice_model: impl Into<String>) -> Self {
        Self {
            provider: SpeakProvider {
                provider_type: "deepgram".to_string(),
                model: voice_model.into(),
            },
        }
    }
}

impl Settings {
    /// Assemble a settings message from its session-specific parts.
    pub fn new(
        language: impl Into<String>,
        voice_model: impl Into<String>,
        prompt: impl Into<String>,
        functions: Vec<FunctionDefinition>,
        greeting: impl Into<String>,
    ) -> Self {
        Self {
            message_type: "Settings".to_string(),
            audio: AudioSettings::default(),
            agent: AgentSettings {
                language: language.into(),
                listen: ListenSettings::default(),
                think: ThinkSettings {
                    provider: ThinkProvider::default(),
                    prompt: prompt.into(),
                    functions,
                },
                speak: SpeakSettings::new(voice_model),
                greeting: greeting.into(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
