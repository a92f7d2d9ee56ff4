//! Basic usage example for Voice Agent Templates.

use voice_agent_templates::{AgentTemplates, AgentTemplatesConfig};

fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    for (key, name) in AgentTemplates::get_available_industries() {
        println!("🏢 {} ({})", name, key);
    }

    // Configure a Spanish-speaking travel agent
    let config = AgentTemplatesConfig::default()
        .with_industry("travel")
        .with_voice_model("aura-2-celeste-es")
        .with_language("es-MX");

    let templates = AgentTemplates::new(config)?;

    println!("\n🗣️ Voice: {}", templates.voice_name());
    println!("👋 Greeting: {}", templates.first_message());
    println!("\n📝 Prompt:\n{}", templates.prompt());
    println!("\n⚙️ Settings:\n{}", templates.settings().to_json_pretty()?);

    Ok(())
}
