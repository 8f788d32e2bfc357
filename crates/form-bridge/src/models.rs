//! Payload and Response Models
//!
//! Request bodies sent to the backend and the response fields we read back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ========================
// Requests
// ========================

/// Flat field name -> value mapping built from the user form
pub type UserData = BTreeMap<String, String>;

/// Collect form entries into `UserData`; a repeated name keeps its last value
pub fn user_data_from_entries<I, K, V>(entries: I) -> UserData
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// One entry of a multipart form, in form order
#[derive(Debug, Clone, PartialEq)]
pub enum FormEntry {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        /// Empty when the browser did not know the type
        content_type: String,
        bytes: Vec<u8>,
    },
}

impl FormEntry {
    /// Content type to send for a file part, guessed from the file name when unknown
    pub fn effective_content_type(&self) -> Option<String> {
        match self {
            FormEntry::Text { .. } => None,
            FormEntry::File { content_type, .. } if !content_type.is_empty() => {
                Some(content_type.clone())
            }
            FormEntry::File { file_name, .. } => Some(
                mime_guess::from_path(file_name)
                    .first_or_octet_stream()
                    .essence_str()
                    .to_string(),
            ),
        }
    }
}

/// Multipart form data forwarded as-is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartPayload {
    pub entries: Vec<FormEntry>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(FormEntry::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.entries.push(FormEntry::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub goal: String,
    pub allergies: String,
    pub preferences: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceRequest {
    pub recognized_items: Vec<String>,
}

// ========================
// Responses
// ========================

/// Shape shared by `/test`, `/saveuserdata` and `/upload`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationResponse {
    #[serde(default)]
    pub translated_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub recognized_items: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdviceResponse {
    #[serde(default)]
    pub advice: Option<Vec<String>>,
}

/// Treat `None` and `""` alike, the way the form falls back on absent text
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
