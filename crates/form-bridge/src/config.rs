//! Bridge Configuration
//!
//! Backend address and the element ids the page is built from.
//! Overrides are baked in at build time; the browser has no environment.

use log::{info, warn};

/// Backend address when `NUTRI_BACKEND_URL` is not set at build time
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Console log level when `NUTRI_LOG` is not set at build time
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    pub base_url: String,
    pub log_level: log::LevelFilter,
    pub ids: ElementIds,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
            ids: ElementIds::default(),
        }
    }
}

impl BridgeConfig {
    pub fn load() -> Self {
        Self::from_overrides(option_env!("NUTRI_BACKEND_URL"), option_env!("NUTRI_LOG"))
    }

    pub fn from_overrides(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let base_url = match base_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(url) => url.to_string(),
            None => {
                info!("NUTRI_BACKEND_URL not set, using default: {DEFAULT_BACKEND_URL}");
                DEFAULT_BACKEND_URL.to_string()
            }
        };

        let log_level = match log_level {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("Invalid NUTRI_LOG value {raw:?}: {e}");
                DEFAULT_LOG_LEVEL
            }),
            None => DEFAULT_LOG_LEVEL,
        };

        Self {
            base_url,
            log_level,
            ids: ElementIds::default(),
        }
    }
}

/// Ids of the controls and output elements of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementIds {
    pub test_button: &'static str,
    pub response: &'static str,
    pub user_form: &'static str,
    pub form_response: &'static str,
    pub upload_form: &'static str,
    pub upload_response: &'static str,
    pub goal: &'static str,
    pub allergies: &'static str,
    pub preferences: &'static str,
    pub summary_button: &'static str,
    pub summary_response: &'static str,
    pub language: &'static str,
    pub translate_button: &'static str,
    pub translation_response: &'static str,
    pub analyze_form: &'static str,
    pub analyze_response: &'static str,
    pub advice_button: &'static str,
    pub advice_response: &'static str,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            test_button: "testButton",
            response: "response",
            user_form: "userForm",
            form_response: "formResponse",
            upload_form: "uploadForm",
            upload_response: "uploadResponse",
            goal: "goal",
            allergies: "allergies",
            preferences: "preferences",
            summary_button: "summaryButton",
            summary_response: "summaryResponse",
            language: "language",
            translate_button: "translateButton",
            translation_response: "translationResponse",
            analyze_form: "analyzeForm",
            analyze_response: "analyzeResponse",
            advice_button: "adviceButton",
            advice_response: "adviceResponse",
        }
    }
}
