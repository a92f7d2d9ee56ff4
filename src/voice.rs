//! Voice model identifiers and display names.

/// Default text-to-speech voice model.
pub const DEFAULT_VOICE_MODEL: &str = "aura-2-thalia-en";

/// Derive a display name from a voice model identifier.
///
/// `"aura-2-thalia-en"` becomes `"Thalia"`. Model names without the `aura`
/// prefix keep their first dash-separated segment.
pub fn voice_name_from_model(model: &str) -> String {
    let stripped = model.replace("aura-2-", "").replace("aura-", "");
    let first = stripped.split('-').next().unwrap_or_default();
    capitalize(first)
}

/// Pick the explicit voice name when given, otherwise derive it from the model.
pub fn resolve_voice_name(voice_name: &str, model: &str) -> String {
    if voice_name.is_empty() {
        voice_name_from_model(model)
    } else {
        voice_name.to_string()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_name_from_model() {
        assert_eq!(voice_name_from_model("aura-2-thalia-en"), "Thalia");
        assert_eq!(voice_name_from_model("aura-asteria-en"), "Asteria");
        assert_eq!(voice_name_from_model("aura-2-ODYSSEUS-en"), "Odysseus");
        assert_eq!(voice_name_from_model("custom"), "Custom");
        assert_eq!(voice_name_from_model(""), "");
    }

    #[test]
    fn test_resolve_voice_name() {
        assert_eq!(resolve_voice_name("", "aura-2-andromeda-en"), "Andromeda");
        assert_eq!(resolve_voice_name("Sam", "aura-2-andromeda-en"), "Sam");
    }
}
