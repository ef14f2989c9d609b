use crate::config::translator_key;
use crate::core::errors::{Error, Result};

// Pure external lookup. Failures degrade to a message the caller can
// render inline instead of surfacing a transport error.
pub fn translate(text: &str, source_lang: &str, dest_lang: &str) -> String {
    let key = match translator_key() {
        Some(key) => key,
        None => return "Error: the translation service is not configured.".to_string(),
    };

    match request_translation(&key, text, source_lang, dest_lang) {
        Ok(translated) => translated,
        Err(_) => "Error: the translation service failed.".to_string(),
    }
}

fn request_translation(key: &str, text: &str, source_lang: &str, dest_lang: &str) -> Result<String> {
    let url = format!(
        "https://api.microsofttranslator.com/v2/Ajax.svc/Translate?text={}&from={}&to={}",
        urlencoding::encode(text),
        urlencoding::encode(source_lang),
        urlencoding::encode(dest_lang)
    );

    let response = reqwest::blocking::Client::new()
        .get(&url)
        .header("Ocp-Apim-Subscription-Key", key)
        .send()
        .map_err(|e| Error::ServiceUnavailable(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::ServiceUnavailable(format!(
            "Translation service returned {}",
            response.status()
        )));
    }

    // The service returns the translated text as a JSON string literal,
    // sometimes with a UTF-8 BOM in front.
    let raw = response
        .text()
        .map_err(|e| Error::ServiceUnavailable(e.to_string()))?;
    serde_json::from_str(raw.trim_start_matches('\u{feff}'))
        .map_err(|e| Error::ServiceUnavailable(e.to_string()))
}
