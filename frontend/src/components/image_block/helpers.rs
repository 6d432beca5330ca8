use base64::{engine::general_purpose, Engine as _};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Builds an inline `data:<mime>;base64,<payload>` URL.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = mime.trim();
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

/// `.class` selector for a single class name.
pub fn class_selector(class: &str) -> String {
    format!(".{}", class)
}
