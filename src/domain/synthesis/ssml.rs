use super::dto::Speed;

/// Escape XML-reserved characters so user text cannot break out of the
/// surrounding SSML markup.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Wrap text in an SSML document applying a single prosody rate to the
/// whole span.
pub fn wrap_with_prosody(text: &str, speed: Speed) -> String {
    format!(
        r#"<speak><prosody rate="{}">{}</prosody></speak>"#,
        speed.as_str(),
        escape(text)
    )
}
