// ============================================================================
// Panel settings — persisted between sessions as a key=value file
// ============================================================================

use std::fmt;
use std::path::{Path, PathBuf};

use crate::coherence::CoherenceMode;

const SETTINGS_FILE: &str = "canvas_coherence.cfg";

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    NoConfigDir,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "I/O error: {}", e),
            SettingsError::NoConfigDir => write!(f, "no configuration directory available"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

/// Settings that persist across sessions.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelSettings {
    /// Language code (e.g. "en", "fr"). Empty string = auto-detect system language.
    pub language: String,
    /// Coherence mode restored into the store at startup. `None` leaves it unset.
    pub coherence_mode: Option<CoherenceMode>,
    /// Show hover help next to parameters.
    pub enable_informational_popovers: bool,
    /// Look option labels up in the locale instead of showing the fixed English ones.
    pub translate_option_labels: bool,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            language: String::new(),
            coherence_mode: None,
            enable_informational_popovers: true,
            translate_option_labels: false,
        }
    }
}

impl PanelSettings {
    /// Path to the settings file.
    /// On Linux:   ~/.config/canvas_coherence/canvas_coherence.cfg  (XDG_CONFIG_HOME respected)
    /// On Windows: %APPDATA%\CanvasCoherence\canvas_coherence.cfg
    /// On macOS:   ~/Library/Application Support/CanvasCoherence/canvas_coherence.cfg
    pub fn settings_path() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            let appdata = std::env::var("APPDATA")
                .or_else(|_| std::env::var("USERPROFILE"))
                .ok()?;
            return Some(PathBuf::from(appdata).join("CanvasCoherence").join(SETTINGS_FILE));
        }
        #[cfg(target_os = "macos")]
        {
            let home = std::env::var("HOME").ok()?;
            return Some(
                PathBuf::from(home)
                    .join("Library")
                    .join("Application Support")
                    .join("CanvasCoherence")
                    .join(SETTINGS_FILE),
            );
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            let config_dir = std::env::var("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .or_else(|_| std::env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
                .ok()?;
            Some(config_dir.join("canvas_coherence").join(SETTINGS_FILE))
        }
    }

    /// Serialize to the config file format.
    pub fn to_config_string(&self) -> String {
        format!(
            "language={}\n\
             canvas_coherence_mode={}\n\
             enable_informational_popovers={}\n\
             translate_option_labels={}\n",
            self.language,
            self.coherence_mode.map(|m| m.as_str()).unwrap_or(""),
            self.enable_informational_popovers,
            self.translate_option_labels,
        )
    }

    /// Parse the config file format. Unknown keys and bad values are skipped.
    pub fn parse(content: &str) -> Self {
        let mut s = Self::default();
        for line in content.lines() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else { continue };
            let val = val.trim();
            match key.trim() {
                "language" => {
                    s.language = val.to_string();
                }
                "canvas_coherence_mode" => {
                    if val.is_empty() {
                        s.coherence_mode = None;
                    } else {
                        match val.parse::<CoherenceMode>() {
                            Ok(mode) => s.coherence_mode = Some(mode),
                            Err(e) => {
                                crate::log_warn!("settings: {}", e);
                            }
                        }
                    }
                }
                "enable_informational_popovers" => {
                    s.enable_informational_popovers = val == "true";
                }
                "translate_option_labels" => {
                    s.translate_option_labels = val == "true";
                }
                _ => {}
            }
        }
        s
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_config_string())?;
        Ok(())
    }

    /// Load settings from disk (returns default if file missing or corrupt)
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else { return Self::default() };
        match Self::load_from(&path) {
            Ok(s) => s,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                crate::log_warn!("settings: could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location.
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }
}
