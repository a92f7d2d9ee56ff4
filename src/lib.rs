// Copyright 2025 The voice-agent-templates Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Voice Agent Templates
//!
//! Builds the configuration payload and localized text for a voice-agent
//! session.
//!
//! An [`AgentTemplates`] picks an industry persona, composes the system
//! prompt, fills in a localized greeting and assembles the [`Settings`]
//! message that opens a session with the voice-agent service. Unknown
//! industries get a generic profile and unsupported languages fall back to
//! English.
//!
//! ## Example
//!
//! ```rust,no_run
//! use voice_agent_templates::{AgentTemplates, AgentTemplatesConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = AgentTemplatesConfig::default()
//!         .with_industry("banking")
//!         .with_language("de-DE");
//!
//!     let templates = AgentTemplates::new(config)?;
//!     println!("{}", templates.first_message());
//!     println!("{}", templates.settings().to_json_pretty()?);
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod config;
pub mod docs;
pub mod settings;
pub mod template;
pub mod voice;

pub use agent::{AgentTemplates, AgentTemplatesConfig, Settings, VOICE_AGENT_URL};
pub use config::{get_available_industries, FunctionDefinition, Industry, Locale};
pub use docs::{read_documentation_files, DEFAULT_DOCS_DIR};
pub use settings::AppSettings;
pub use template::{fill_template, TemplateError};
pub use voice::{voice_name_from_model, DEFAULT_VOICE_MODEL};
