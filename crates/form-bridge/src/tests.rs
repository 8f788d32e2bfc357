//! Handler Tests
//!
//! Drive every handler against scripted transports and a recording output.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::oneshot;

use crate::*;

// ========================
// Test doubles
// ========================

#[derive(Debug, Clone, PartialEq)]
enum Sent {
    Nothing,
    Json(Value),
    Form(MultipartPayload),
}

/// Replies queued per endpoint; an endpoint with no reply left fails like a dead backend
#[derive(Default)]
struct ScriptedTransport {
    replies: RefCell<HashMap<Endpoint, VecDeque<Value>>>,
    sent: RefCell<Vec<(Endpoint, Sent)>>,
}

impl ScriptedTransport {
    fn reply(self, endpoint: Endpoint, body: Value) -> Self {
        self.replies
            .borrow_mut()
            .entry(endpoint)
            .or_default()
            .push_back(body);
        self
    }

    fn answer(&self, endpoint: Endpoint, sent: Sent) -> BridgeResult<Value> {
        self.sent.borrow_mut().push((endpoint, sent));
        self.replies
            .borrow_mut()
            .get_mut(&endpoint)
            .and_then(|queue| queue.pop_front())
            .ok_or_else(|| BridgeError::Network("connection refused".to_string()))
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn get_json(&self, endpoint: Endpoint) -> BridgeResult<Value> {
        self.answer(endpoint, Sent::Nothing)
    }

    async fn post_json(&self, endpoint: Endpoint, body: Value) -> BridgeResult<Value> {
        self.answer(endpoint, Sent::Json(body))
    }

    async fn post_multipart(
        &self,
        endpoint: Endpoint,
        form: MultipartPayload,
    ) -> BridgeResult<Value> {
        self.answer(endpoint, Sent::Form(form))
    }
}

/// Each request waits for the next gate; the test decides when it resolves
struct GatedTransport {
    gates: RefCell<VecDeque<oneshot::Receiver<Value>>>,
}

#[async_trait(?Send)]
impl Transport for GatedTransport {
    async fn get_json(&self, _endpoint: Endpoint) -> BridgeResult<Value> {
        let gate = self
            .gates
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| BridgeError::Network("no gate".to_string()))?;
        gate.await.map_err(|e| BridgeError::Network(e.to_string()))
    }

    async fn post_json(&self, endpoint: Endpoint, _body: Value) -> BridgeResult<Value> {
        self.get_json(endpoint).await
    }

    async fn post_multipart(
        &self,
        endpoint: Endpoint,
        _form: MultipartPayload,
    ) -> BridgeResult<Value> {
        self.get_json(endpoint).await
    }
}

#[derive(Default)]
pub(crate) struct RecordingOutput {
    rendered: RefCell<Vec<(Slot, String)>>,
    reports: RefCell<Vec<(Slot, String)>>,
}

impl RecordingOutput {
    pub(crate) fn text(&self, slot: Slot) -> Option<String> {
        self.rendered
            .borrow()
            .iter()
            .rev()
            .find(|(s, _)| *s == slot)
            .map(|(_, text)| text.clone())
    }

    fn history(&self, slot: Slot) -> Vec<String> {
        self.rendered
            .borrow()
            .iter()
            .filter(|(s, _)| *s == slot)
            .map(|(_, text)| text.clone())
            .collect()
    }

    pub(crate) fn reports(&self) -> Vec<(Slot, String)> {
        self.reports.borrow().clone()
    }
}

impl Output for RecordingOutput {
    fn render(&self, slot: Slot, text: &str) {
        self.rendered.borrow_mut().push((slot, text.to_string()));
    }

    fn report(&self, slot: Slot, error: &BridgeError) {
        self.reports.borrow_mut().push((slot, error.to_string()));
    }
}

fn bridge(transport: ScriptedTransport) -> FormBridge<ScriptedTransport, RecordingOutput> {
    FormBridge::new(BridgeConfig::default(), transport, RecordingOutput::default())
}

fn sent(bridge: &FormBridge<ScriptedTransport, RecordingOutput>) -> Vec<(Endpoint, Sent)> {
    bridge.transport().sent.borrow().clone()
}

fn image_payload() -> MultipartPayload {
    MultipartPayload::new().file("file", "plate.jpg", "image/jpeg", vec![0xff, 0xd8, 0xff])
}

// ========================
// Failure pattern
// ========================

#[tokio::test]
async fn test_every_handler_renders_its_error_text_on_network_failure() {
    let bridge = bridge(ScriptedTransport::default());

    bridge.check_connection().await;
    bridge.submit_user_data(UserData::new()).await;
    bridge.upload(image_payload()).await;
    bridge.generate_summary(SummaryRequest::default()).await;
    bridge.translate_summary("en").await;
    bridge.analyze_image(image_payload()).await;
    bridge.request_advice().await;

    let output = bridge.output();
    for slot in Slot::ALL {
        assert_eq!(output.text(slot).as_deref(), Some(slot.failure_text()));
    }

    let reports = output.reports();
    assert_eq!(reports.len(), Slot::ALL.len());
    for slot in Slot::ALL {
        assert_eq!(reports.iter().filter(|(s, _)| *s == slot).count(), 1);
    }
    assert!(reports[0].1.contains("connection refused"));
}

#[tokio::test]
async fn test_unexpected_field_type_is_a_decode_failure() {
    let bridge = bridge(
        ScriptedTransport::default()
            .reply(Endpoint::AnalyzeImage, json!({"recognized_items": "apple"})),
    );

    bridge.analyze_image(image_payload()).await;

    let output = bridge.output();
    assert_eq!(output.text(Slot::Analysis).as_deref(), Some(ANALYSIS_ERROR));
    assert_eq!(output.reports().len(), 1);
    assert!(output.reports()[0].1.starts_with("Decode error"));
}

#[tokio::test]
async fn test_form_read_failure_takes_the_same_path() {
    let bridge = bridge(ScriptedTransport::default());

    bridge.fail(Slot::Upload, BridgeError::Form("file unreadable".to_string()));

    assert_eq!(bridge.output().text(Slot::Upload).as_deref(), Some(UPLOAD_ERROR));
    assert_eq!(bridge.output().reports().len(), 1);
}

// ========================
// Connectivity / user data / upload
// ========================

#[tokio::test]
async fn test_connectivity_renders_message_verbatim() {
    let bridge = bridge(
        ScriptedTransport::default()
            .reply(Endpoint::Health, json!({"message": "OK"}))
            .reply(Endpoint::Health, json!({})),
    );

    bridge.check_connection().await;
    assert_eq!(bridge.output().text(Slot::Connectivity).as_deref(), Some("OK"));

    bridge.check_connection().await;
    assert_eq!(bridge.output().text(Slot::Connectivity).as_deref(), Some(""));
    assert!(bridge.output().reports().is_empty());
}

#[tokio::test]
async fn test_user_data_message_and_fallback() {
    let bridge = bridge(
        ScriptedTransport::default()
            .reply(Endpoint::SaveUserData, json!({"message": "saved"}))
            .reply(Endpoint::SaveUserData, json!({"error": "exists"})),
    );
    let data = user_data_from_entries(vec![
        ("goal", "lose weight"),
        ("allergies", "peanuts"),
        ("preferences", "vegetarian"),
    ]);

    bridge.submit_user_data(data.clone()).await;
    assert_eq!(bridge.output().text(Slot::UserData).as_deref(), Some("saved"));
    assert_eq!(
        sent(&bridge)[0],
        (
            Endpoint::SaveUserData,
            Sent::Json(json!({
                "goal": "lose weight",
                "allergies": "peanuts",
                "preferences": "vegetarian"
            }))
        )
    );

    bridge.submit_user_data(data).await;
    assert_eq!(
        bridge.output().text(Slot::UserData).as_deref(),
        Some(USER_DATA_RECEIVED)
    );
}

#[tokio::test]
async fn test_upload_precedence() {
    let bridge = bridge(
        ScriptedTransport::default()
            .reply(Endpoint::Upload, json!({"message": "m", "error": "e"}))
            .reply(Endpoint::Upload, json!({"error": "e"}))
            .reply(Endpoint::Upload, json!({})),
    );

    bridge.upload(image_payload()).await;
    assert_eq!(bridge.output().text(Slot::Upload).as_deref(), Some("m"));
    assert_eq!(sent(&bridge)[0], (Endpoint::Upload, Sent::Form(image_payload())));

    bridge.upload(image_payload()).await;
    assert_eq!(bridge.output().text(Slot::Upload).as_deref(), Some("e"));

    bridge.upload(image_payload()).await;
    assert_eq!(bridge.output().text(Slot::Upload).as_deref(), Some(UPLOAD_DONE));
}

// ========================
// Summary / translation
// ========================

#[tokio::test]
async fn test_summary_feeds_translation() {
    let bridge = bridge(
        ScriptedTransport::default()
            .reply(Endpoint::Summary, json!({"summary": "Objectif : maigrir."}))
            .reply(Endpoint::Translate, json!({"translated_text": "Goal: lose weight."})),
    );

    bridge
        .generate_summary(SummaryRequest {
            goal: "maigrir".into(),
            allergies: String::new(),
            preferences: String::new(),
        })
        .await;
    assert_eq!(
        bridge.output().text(Slot::Summary).as_deref(),
        Some("Objectif : maigrir.")
    );
    assert_eq!(bridge.session().summary.as_deref(), Some("Objectif : maigrir."));

    bridge.translate_summary("en").await;
    assert_eq!(
        bridge.output().text(Slot::Translation).as_deref(),
        Some("Goal: lose weight.")
    );
    assert_eq!(
        sent(&bridge)[1],
        (
            Endpoint::Translate,
            Sent::Json(json!({"text": "Objectif : maigrir.", "language": "en"}))
        )
    );
}

#[tokio::test]
async fn test_empty_summary_falls_back_and_clears_session() {
    let bridge = bridge(
        ScriptedTransport::default()
            .reply(Endpoint::Summary, json!({"summary": "first"}))
            .reply(Endpoint::Summary, json!({"summary": ""})),
    );

    bridge.generate_summary(SummaryRequest::default()).await;
    assert!(bridge.session().summary.is_some());

    bridge.generate_summary(SummaryRequest::default()).await;
    assert_eq!(bridge.output().text(Slot::Summary).as_deref(), Some(SUMMARY_FAILED));
    assert_eq!(bridge.session().summary, None);
}

#[tokio::test]
async fn test_translation_fallback_without_translated_text() {
    let bridge = bridge(ScriptedTransport::default().reply(Endpoint::Translate, json!({})));

    bridge.translate_summary("es").await;

    assert_eq!(
        sent(&bridge),
        vec![(
            Endpoint::Translate,
            Sent::Json(json!({"text": "", "language": "es"}))
        )]
    );
    assert_eq!(
        bridge.output().text(Slot::Translation).as_deref(),
        Some(TRANSLATION_FAILED)
    );
    assert!(bridge.output().reports().is_empty());
}

// ========================
// Analysis / advice
// ========================

#[tokio::test]
async fn test_analysis_rendering() {
    let bridge = bridge(
        ScriptedTransport::default()
            .reply(Endpoint::AnalyzeImage, json!({"recognized_items": ["apple", "rice"]}))
            .reply(Endpoint::AnalyzeImage, json!({"recognized_items": []}))
            .reply(Endpoint::AnalyzeImage, json!({"error": "vision down"})),
    );

    bridge.analyze_image(image_payload()).await;
    assert_eq!(
        bridge.output().text(Slot::Analysis).as_deref(),
        Some("Aliments reconnus : apple, rice")
    );
    assert_eq!(bridge.session().recognized_items, vec!["apple", "rice"]);

    bridge.analyze_image(image_payload()).await;
    assert_eq!(
        bridge.output().text(Slot::Analysis).as_deref(),
        Some(NOTHING_RECOGNIZED)
    );

    bridge.analyze_image(image_payload()).await;
    assert_eq!(
        bridge.output().text(Slot::Analysis).as_deref(),
        Some(NOTHING_RECOGNIZED)
    );
    assert!(bridge.session().recognized_items.is_empty());
}

#[tokio::test]
async fn test_advice_uses_structured_items_not_rendered_text() {
    let bridge = bridge(
        ScriptedTransport::default()
            .reply(Endpoint::AnalyzeImage, json!({"recognized_items": ["rice, fried"]}))
            .reply(Endpoint::NutritionAdvice, json!({"advice": ["Mangez", "varié."]})),
    );

    bridge.analyze_image(image_payload()).await;
    let rendered = bridge.output().text(Slot::Analysis).unwrap();
    assert_eq!(rendered, "Aliments reconnus : rice, fried");

    // Re-parsing the rendered text cannot recover an item containing the separator
    let reparsed: Vec<&str> = rendered
        .trim_start_matches(RECOGNIZED_PREFIX)
        .split(ITEM_SEPARATOR)
        .collect();
    assert_eq!(reparsed, vec!["rice", "fried"]);

    assert_eq!(bridge.session().recognized_items, vec!["rice, fried"]);
    bridge.request_advice().await;
    assert_eq!(
        bridge.output().text(Slot::Advice).as_deref(),
        Some("Mangez varié.")
    );
    assert_eq!(
        sent(&bridge)[1],
        (
            Endpoint::NutritionAdvice,
            Sent::Json(json!({"recognized_items": ["rice, fried"]}))
        )
    );
}

#[tokio::test]
async fn test_advice_rendering_and_missing_field() {
    let bridge = bridge(
        ScriptedTransport::default()
            .reply(Endpoint::NutritionAdvice, json!({"advice": ["Eat", "more", "fiber"]}))
            .reply(Endpoint::NutritionAdvice, json!({"advice": []}))
            .reply(Endpoint::NutritionAdvice, json!({"tips": ["x"]})),
    );

    bridge.request_advice().await;
    assert_eq!(
        bridge.output().text(Slot::Advice).as_deref(),
        Some("Eat more fiber")
    );
    assert_eq!(
        sent(&bridge)[0],
        (
            Endpoint::NutritionAdvice,
            Sent::Json(json!({"recognized_items": []}))
        )
    );

    bridge.request_advice().await;
    assert_eq!(bridge.output().text(Slot::Advice).as_deref(), Some(NO_ADVICE));
    assert!(bridge.output().reports().is_empty());

    bridge.request_advice().await;
    assert_eq!(bridge.output().text(Slot::Advice).as_deref(), Some(ADVICE_ERROR));
    let reports = bridge.output().reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].0, Slot::Advice);
    assert!(reports[0].1.contains("advice"));
}

// ========================
// Overlapping requests
// ========================

#[tokio::test]
async fn test_last_response_to_resolve_wins() {
    let (first_tx, first_rx) = oneshot::channel();
    let (second_tx, second_rx) = oneshot::channel();
    let bridge = FormBridge::new(
        BridgeConfig::default(),
        GatedTransport {
            gates: RefCell::new(VecDeque::from(vec![first_rx, second_rx])),
        },
        RecordingOutput::default(),
    );

    let driver = async {
        let _ = second_tx.send(json!({"message": "second"}));
        while bridge.output().history(Slot::Connectivity).is_empty() {
            tokio::task::yield_now().await;
        }
        let _ = first_tx.send(json!({"message": "first"}));
    };

    tokio::join!(bridge.check_connection(), bridge.check_connection(), driver);

    assert_eq!(
        bridge.output().history(Slot::Connectivity),
        vec!["second", "first"]
    );
    assert_eq!(
        bridge.output().text(Slot::Connectivity).as_deref(),
        Some("first")
    );
}
