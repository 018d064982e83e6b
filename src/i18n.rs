//! Internationalization (i18n) for the generation panel.
//!
//! Uses a simple key→string HashMap loaded at runtime from embedded translation data.
//! The `t!("key")` macro looks up the current language, falling back to English.
//! Language can be switched at runtime via `set_language()`.

use std::collections::HashMap;
use std::sync::Mutex;

/// Global translation state.
static I18N: Mutex<Option<I18nState>> = Mutex::new(None);

struct I18nState {
    current_lang: String,
    /// lang_code → (key → translated_string)
    translations: HashMap<String, HashMap<String, String>>,
}

/// Supported languages: (code, native_name)
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Español"),
    ("fr", "Français"),
    ("de", "Deutsch"),
];

/// Initialize the i18n system with embedded translations.
/// Safe to call more than once; the active language is kept.
pub fn init() {
    let mut translations: HashMap<String, HashMap<String, String>> = HashMap::new();

    translations.insert(
        "en".to_string(),
        parse_translations(include_str!("../locales/en.txt")),
    );
    translations.insert(
        "es".to_string(),
        parse_translations(include_str!("../locales/es.txt")),
    );
    translations.insert(
        "fr".to_string(),
        parse_translations(include_str!("../locales/fr.txt")),
    );
    translations.insert(
        "de".to_string(),
        parse_translations(include_str!("../locales/de.txt")),
    );

    if let Ok(mut guard) = I18N.lock() {
        let current_lang = guard
            .as_ref()
            .map(|s| s.current_lang.clone())
            .unwrap_or_else(|| "en".to_string());
        *guard = Some(I18nState {
            current_lang,
            translations,
        });
    }
}

/// Set the active language. If `code` is not a known language, falls back to "en".
pub fn set_language(code: &str) {
    if let Ok(mut guard) = I18N.lock()
        && let Some(ref mut state) = *guard
    {
        if state.translations.contains_key(code) {
            state.current_lang = code.to_string();
        } else {
            state.current_lang = "en".to_string();
        }
    }
}

/// Get the current language code.
pub fn current_language() -> String {
    if let Ok(guard) = I18N.lock()
        && let Some(ref state) = *guard
    {
        return state.current_lang.clone();
    }
    "en".to_string()
}

/// Look up a key in the current language, then English. `None` if neither has it.
pub fn try_translate(key: &str) -> Option<String> {
    let guard = I18N.lock().ok()?;
    let state = guard.as_ref()?;
    if let Some(val) = state
        .translations
        .get(&state.current_lang)
        .and_then(|map| map.get(key))
    {
        return Some(val.clone());
    }
    state
        .translations
        .get("en")
        .and_then(|map| map.get(key))
        .cloned()
}

/// Look up a translation key. Returns the translated string if found,
/// or falls back to English, or returns the key itself as last resort.
pub fn translate(key: &str) -> String {
    try_translate(key).unwrap_or_else(|| key.to_string())
}

/// Detect the system language and return the best matching language code.
/// Returns "en" if no match is found.
pub fn detect_system_language() -> String {
    for var in &["LC_ALL", "LC_MESSAGES", "LANG", "LANGUAGE"] {
        if let Ok(val) = std::env::var(var)
            && let Some(lang) = match_system_locale(&val)
        {
            return lang;
        }
    }
    "en".to_string()
}

/// Match a system locale string (e.g. "en_US.UTF-8", "fr-FR", "de_DE@euro") to our languages.
fn match_system_locale(locale: &str) -> Option<String> {
    let normalized = locale.to_lowercase().replace('_', "-");

    let lang_part = normalized.split('.').next().unwrap_or(&normalized);
    let lang_part = lang_part.split('@').next().unwrap_or(lang_part);

    for &(code, _) in LANGUAGES {
        if code.to_lowercase() == lang_part {
            return Some(code.to_string());
        }
    }

    // Prefix match ("fr-ca" → "fr")
    let primary = lang_part.split('-').next().unwrap_or(lang_part);
    LANGUAGES
        .iter()
        .find(|(code, _)| *code == primary)
        .map(|(code, _)| code.to_string())
}

/// Parse a simple key=value translation file.
/// Format: one `key=value` per line. Lines starting with `#` are comments. Empty lines ignored.
fn parse_translations(data: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            map.insert(key.trim().to_string(), val.trim().to_string());
        }
    }
    map
}

/// Translation macro. Usage: `t!("parameters.coherenceMode")` or `t!("cli.ignored", value = v)`
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::translate($key)
    };
    ($key:expr, $($name:ident = $val:expr),+ $(,)?) => {{
        let mut s = $crate::i18n::translate($key);
        $(
            s = s.replace(concat!("{", stringify!($name), "}"), &format!("{}", $val));
        )+
        s
    }};
}
