//! Form Bridge
//!
//! The seven handlers. Each one performs a single request/response cycle
//! and renders either the result, a fallback text, or its fixed error text.

use std::cell::RefCell;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::BridgeConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::messages;
use crate::models::{
    present, AdviceRequest, AdviceResponse, AnalysisResult, MessageResponse, MultipartPayload,
    SummaryRequest, SummaryResponse, TranslationRequest, TranslationResponse, UserData,
};
use crate::output::{Output, Slot};
use crate::transport::{Endpoint, Transport};

/// Structured values handed from one handler to a later one
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Last summary the backend produced; fed to translation
    pub summary: Option<String>,
    /// Items from the last successful analysis; fed to advice
    pub recognized_items: Vec<String>,
}

pub struct FormBridge<T: Transport, O: Output> {
    config: BridgeConfig,
    transport: T,
    output: O,
    session: RefCell<Session>,
}

impl<T: Transport, O: Output> FormBridge<T, O> {
    pub fn new(config: BridgeConfig, transport: T, output: O) -> Self {
        Self {
            config,
            transport,
            output,
            session: RefCell::new(Session::default()),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Snapshot of the values shared between handlers
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Uniform failure path: fixed text in the slot, one report
    pub fn fail(&self, slot: Slot, error: BridgeError) {
        self.output.report(slot, &error);
        self.output.render(slot, slot.failure_text());
    }

    /// Render the outcome of one exchange
    fn finish(&self, slot: Slot, outcome: BridgeResult<String>) {
        match outcome {
            Ok(text) => self.output.render(slot, &text),
            Err(e) => self.fail(slot, e),
        }
    }

    async fn get<R: DeserializeOwned>(&self, endpoint: Endpoint) -> BridgeResult<R> {
        let value = self.transport.get_json(endpoint).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn post<R: DeserializeOwned>(&self, endpoint: Endpoint, body: Value) -> BridgeResult<R> {
        let value = self.transport.post_json(endpoint, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn post_form<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        form: MultipartPayload,
    ) -> BridgeResult<R> {
        let value = self.transport.post_multipart(endpoint, form).await?;
        Ok(serde_json::from_value(value)?)
    }

    // ========================
    // Handlers
    // ========================

    /// `testButton`: GET /test, render `message`
    pub async fn check_connection(&self) {
        let outcome = self.fetch_health().await;
        self.finish(Slot::Connectivity, outcome);
    }

    /// `userForm`: POST the form fields as a flat JSON object
    pub async fn submit_user_data(&self, data: UserData) {
        let outcome = self.save_user_data(&data).await;
        self.finish(Slot::UserData, outcome);
    }

    /// `uploadForm`: forward the multipart form, render `message`, then `error`
    pub async fn upload(&self, form: MultipartPayload) {
        let outcome = self.upload_form(form).await;
        self.finish(Slot::Upload, outcome);
    }

    /// `summaryButton`: POST goal/allergies/preferences, render `summary`
    pub async fn generate_summary(&self, request: SummaryRequest) {
        let summary = self.fetch_summary(&request).await;
        self.session.borrow_mut().summary = summary.as_ref().ok().cloned().flatten();

        let outcome =
            summary.map(|s| s.unwrap_or_else(|| messages::SUMMARY_FAILED.to_string()));
        self.finish(Slot::Summary, outcome);
    }

    /// `translateButton`: translate the last summary into `language`
    pub async fn translate_summary(&self, language: &str) {
        let request = TranslationRequest {
            text: self.session.borrow().summary.clone().unwrap_or_default(),
            language: language.to_string(),
        };
        let outcome = self.fetch_translation(&request).await;
        self.finish(Slot::Translation, outcome);
    }

    /// `analyzeForm`: forward the image form, render the recognized foods
    pub async fn analyze_image(&self, form: MultipartPayload) {
        let items = self
            .post_form::<AnalysisResult>(Endpoint::AnalyzeImage, form)
            .await
            .map(|r| r.recognized_items.unwrap_or_default());
        self.session.borrow_mut().recognized_items = items.as_ref().cloned().unwrap_or_default();

        let outcome = items.map(|items| messages::recognized_items_text(&items));
        self.finish(Slot::Analysis, outcome);
    }

    /// `adviceButton`: POST the last recognized items, render the advice
    ///
    /// A response without `advice` counts as a failure.
    pub async fn request_advice(&self) {
        let request = AdviceRequest {
            recognized_items: self.session.borrow().recognized_items.clone(),
        };
        let outcome = self.fetch_advice(&request).await;
        self.finish(Slot::Advice, outcome);
    }

    // ========================
    // Exchanges
    // ========================

    async fn fetch_health(&self) -> BridgeResult<String> {
        let response: MessageResponse = self.get(Endpoint::Health).await?;
        Ok(response.message.unwrap_or_default())
    }

    async fn save_user_data(&self, data: &UserData) -> BridgeResult<String> {
        let response: MessageResponse = self
            .post(Endpoint::SaveUserData, serde_json::to_value(data)?)
            .await?;
        Ok(present(response.message).unwrap_or_else(|| messages::USER_DATA_RECEIVED.to_string()))
    }

    async fn upload_form(&self, form: MultipartPayload) -> BridgeResult<String> {
        let response: MessageResponse = self.post_form(Endpoint::Upload, form).await?;
        Ok(present(response.message)
            .or_else(|| present(response.error))
            .unwrap_or_else(|| messages::UPLOAD_DONE.to_string()))
    }

    async fn fetch_summary(&self, request: &SummaryRequest) -> BridgeResult<Option<String>> {
        let response: SummaryResponse = self
            .post(Endpoint::Summary, serde_json::to_value(request)?)
            .await?;
        Ok(present(response.summary))
    }

    async fn fetch_translation(&self, request: &TranslationRequest) -> BridgeResult<String> {
        let response: TranslationResponse = self
            .post(Endpoint::Translate, serde_json::to_value(request)?)
            .await?;
        Ok(present(response.translated_text)
            .unwrap_or_else(|| messages::TRANSLATION_FAILED.to_string()))
    }

    async fn fetch_advice(&self, request: &AdviceRequest) -> BridgeResult<String> {
        let response: AdviceResponse = self
            .post(Endpoint::NutritionAdvice, serde_json::to_value(request)?)
            .await?;
        let advice = response.advice.ok_or(BridgeError::MissingField("advice"))?;
        Ok(messages::advice_text(&advice))
    }
}
