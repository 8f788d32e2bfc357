//! NutriAI Form Bridge
//!
//! Binds the NutriAI page controls to the backend:
//! - models: request bodies and response fields
//! - transport: endpoint table and the HTTP seam
//! - bridge: one handler per control, rendering into output slots
//! - messages: the fixed French texts shown to the user

mod bridge;
mod config;
mod error;
mod messages;
mod models;
mod output;
mod transport;

#[cfg(test)]
mod tests;

pub use bridge::{FormBridge, Session};
pub use config::{BridgeConfig, ElementIds, DEFAULT_BACKEND_URL};
pub use error::{BridgeError, BridgeResult};
pub use messages::*;
pub use models::{
    user_data_from_entries, AdviceRequest, AnalysisResult, FormEntry, MultipartPayload,
    SummaryRequest, TranslationRequest, UserData,
};
pub use output::{Output, Slot};
pub use transport::{Endpoint, HttpTransport, Transport};
