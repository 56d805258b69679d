use once_cell::sync::Lazy;
use std::collections::HashMap;

const ENGLISH_VOICES: &[&str] = &[
    "Joanna", "Matthew", "Ivy", "Justin", "Kendra", "Kimberly", "Salli", "Joey", "Nicole",
    "Russell", "Amy", "Brian", "Emma",
];
const FRENCH_VOICES: &[&str] = &["Celine", "Mathieu", "Lea"];
const SPANISH_VOICES: &[&str] = &["Conchita", "Enrique", "Lucia", "Mia"];
const ITALIAN_VOICES: &[&str] = &["Carla", "Giorgio", "Bianca"];
const GERMAN_VOICES: &[&str] = &["Marlene", "Hans", "Vicki"];
// Twi has no native voice; falls back to English
const TWI_VOICES: &[&str] = &["Joanna"];

/// Language code to ordered voice list, fixed at startup.
/// Reference data only; requests are not validated against it.
pub static VOICE_CATALOG: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        HashMap::from([
            ("en", ENGLISH_VOICES),
            ("fr", FRENCH_VOICES),
            ("es", SPANISH_VOICES),
            ("it", ITALIAN_VOICES),
            ("de", GERMAN_VOICES),
            ("tw", TWI_VOICES),
        ])
    });

/// Voices available for a language code, in catalog order
pub fn voices_for_language(code: &str) -> Option<&'static [&'static str]> {
    VOICE_CATALOG.get(code).copied()
}
