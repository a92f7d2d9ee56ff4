//! Session assembly: agent templates and the settings message they produce.

mod settings;
mod templates;

pub use settings::{
    AgentSettings, AudioInput, AudioOutput, AudioSettings, ListenProvider, ListenSettings,
    Settings, SpeakProvider, SpeakSettings, ThinkProvider, ThinkSettings,
    AGENT_AUDIO_BYTES_PER_SEC, AGENT_AUDIO_SAMPLE_RATE, USER_AUDIO_SAMPLES_PER_CHUNK,
    USER_AUDIO_SAMPLE_RATE, USER_AUDIO_SECS_PER_CHUNK, VOICE_AGENT_URL,
};
pub use templates::{AgentTemplates, AgentTemplatesConfig};
