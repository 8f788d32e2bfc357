//! Localized Display Strings
//!
//! Fixed French texts shown in the output slots.

pub const CONNECTIVITY_ERROR: &str = "Erreur de communication avec le backend.";

pub const USER_DATA_RECEIVED: &str = "Données reçues avec succès !";
pub const USER_DATA_ERROR: &str = "Erreur lors de l'envoi des données.";

pub const UPLOAD_DONE: &str = "Upload réussi !";
pub const UPLOAD_ERROR: &str = "Erreur lors de l'upload.";

pub const SUMMARY_FAILED: &str = "Erreur lors de la génération du résumé.";
pub const SUMMARY_ERROR: &str = "Erreur lors de la communication avec le service de résumé.";

pub const TRANSLATION_FAILED: &str = "Erreur lors de la traduction.";
pub const TRANSLATION_ERROR: &str =
    "Erreur lors de la communication avec le service de traduction.";

pub const RECOGNIZED_PREFIX: &str = "Aliments reconnus : ";
pub const NOTHING_RECOGNIZED: &str = "Aucun aliment reconnu.";
pub const ANALYSIS_ERROR: &str = "Erreur lors de l'analyse de l'image.";

pub const NO_ADVICE: &str = "Aucun conseil disponible.";
pub const ADVICE_ERROR: &str = "Erreur lors de la génération des conseils.";

/// Separator between recognized items in the analysis text
pub const ITEM_SEPARATOR: &str = ", ";

/// "Aliments reconnus : a, b" for a non-empty list, the fixed fallback otherwise
pub fn recognized_items_text(items: &[String]) -> String {
    if items.is_empty() {
        NOTHING_RECOGNIZED.to_string()
    } else {
        format!("{}{}", RECOGNIZED_PREFIX, items.join(ITEM_SEPARATOR))
    }
}

/// Advice sentences joined by a single space, or the fixed fallback
pub fn advice_text(advice: &[String]) -> String {
    let joined = advice.join(" ");
    if joined.is_empty() {
        NO_ADVICE.to_string()
    } else {
        joined
    }
}
