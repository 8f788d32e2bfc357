//! UI Components
//!
//! One panel per backend interaction.

mod response_line;
mod connectivity_panel;
mod user_form;
mod summary_panel;
mod translation_panel;
mod upload_form;
mod analyze_form;
mod advice_panel;

pub use response_line::ResponseLine;
pub use connectivity_panel::ConnectivityPanel;
pub use user_form::{ProfileInputs, UserForm};
pub use summary_panel::SummaryPanel;
pub use translation_panel::TranslationPanel;
pub use upload_form::UploadForm;
pub use analyze_form::AnalyzeForm;
pub use advice_panel::AdvicePanel;
