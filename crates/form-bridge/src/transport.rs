//! HTTP Transport
//!
//! Endpoint table and the seam between the handlers and the network.
//! `HttpTransport` uses reqwest, which goes through `fetch` in the browser.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;

use crate::error::BridgeResult;
use crate::models::{FormEntry, MultipartPayload};

/// Backend endpoints the page talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Health,
    SaveUserData,
    Upload,
    Summary,
    Translate,
    AnalyzeImage,
    NutritionAdvice,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Health => "/test",
            Endpoint::SaveUserData => "/saveuserdata",
            Endpoint::Upload => "/upload",
            Endpoint::Summary => "/getsummary",
            Endpoint::Translate => "/translate",
            Endpoint::AnalyzeImage => "/analyzeimage",
            Endpoint::NutritionAdvice => "/nutritionadvice",
        }
    }

    /// Absolute URL under `base_url`, with or without its trailing slash
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// One request/response exchange with the backend
///
/// Non-2xx responses still resolve to their JSON body.
#[async_trait(?Send)]
pub trait Transport {
    async fn get_json(&self, endpoint: Endpoint) -> BridgeResult<Value>;

    async fn post_json(&self, endpoint: Endpoint, body: Value) -> BridgeResult<Value>;

    async fn post_multipart(&self, endpoint: Endpoint, form: MultipartPayload)
        -> BridgeResult<Value>;
}

/// reqwest-backed transport against a fixed base URL
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn read_json(endpoint: Endpoint, response: reqwest::Response) -> BridgeResult<Value> {
        let status = response.status();
        if !status.is_success() {
            log::warn!("{} answered {}", endpoint.path(), status);
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get_json(&self, endpoint: Endpoint) -> BridgeResult<Value> {
        let url = endpoint.url(&self.base_url);
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::read_json(endpoint, response).await
    }

    async fn post_json(&self, endpoint: Endpoint, body: Value) -> BridgeResult<Value> {
        let url = endpoint.url(&self.base_url);
        log::debug!("POST {} (json)", url);
        let response = self.client.post(url).json(&body).send().await?;
        Self::read_json(endpoint, response).await
    }

    async fn post_multipart(
        &self,
        endpoint: Endpoint,
        form: MultipartPayload,
    ) -> BridgeResult<Value> {
        let url = endpoint.url(&self.base_url);
        log::debug!("POST {} (multipart, {} entries)", url, form.entries.len());
        let response = self
            .client
            .post(url)
            .multipart(to_reqwest_form(form)?)
            .send()
            .await?;
        Self::read_json(endpoint, response).await
    }
}

fn to_reqwest_form(payload: MultipartPayload) -> BridgeResult<Form> {
    let mut form = Form::new();
    for entry in payload.entries {
        let content_type = entry.effective_content_type();
        form = match entry {
            FormEntry::Text { name, value } => form.text(name, value),
            FormEntry::File {
                name,
                file_name,
                bytes,
                ..
            } => {
                let mut part = Part::bytes(bytes).file_name(file_name);
                if let Some(mime) = content_type {
                    part = part.mime_str(&mime)?;
                }
                form.part(name, part)
            }
        };
    }
    Ok(form)
}
