//! Shared DTOs for the dashboard/backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde can do all shape
//! checking at the boundary; pages never inspect loosely-typed values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role string the backend uses for administrator accounts.
pub const ADMIN_ROLE: &str = "admin";

/// The authenticated viewer as returned by `/api/v1/me`.
///
/// This is identity only; what the viewer may do is decided by the
/// navigation guard from the `role` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Login name, unique per account.
    pub username: String,
    /// Role string; anything other than `"admin"` is a regular researcher.
    pub role: String,
}

impl UserIdentity {
    /// Whether this identity may reach the account-management section.
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// A managed user account as listed by `/api/v1/users/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Backend-assigned numeric identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Role string (`"admin"` or a plain researcher role).
    pub role: String,
    /// Whether the account may currently sign in.
    pub is_active: bool,
}

/// Partial update for a user account; `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserAccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// New password; omitted entirely when the admin leaves the field blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// A trained (or training) outcome-prediction model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Backend-assigned numeric identifier.
    pub id: i64,
    /// Human-chosen model name.
    pub name: String,
    /// Architecture label (e.g. `"mlp"`, `"gbdt"`).
    pub model_architecture: String,
    /// Training loss of the final epoch; absent until training completes.
    #[serde(default)]
    pub final_loss: Option<f64>,
    /// Storage path of the serialized model on the backend.
    #[serde(default)]
    pub model_path: Option<String>,
    /// Serving tag under which the backend exposes this model.
    #[serde(default)]
    pub bentoml_tag: Option<String>,
    /// Whether the model is selectable for prediction.
    pub is_active: bool,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// Identifier of the training CSV this model was fitted on.
    pub csv_id: i64,
    /// Free-form version label.
    #[serde(default)]
    pub version: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// Partial metadata update for a model; `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Request body for uploading a training CSV.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CsvUpload {
    /// Original file name, kept for the download button.
    pub filename: String,
    /// Raw CSV text.
    pub content: String,
}

/// Response to a CSV upload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CsvUploadResponse {
    /// Identifier to reference in a subsequent training request.
    pub csv_id: i64,
}

/// Request body for `/api/v1/model_train`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrainRequest {
    pub name: String,
    pub model_architecture: String,
    pub csv_id: i64,
}

/// Patient features posted to `/nn/{model}`.
///
/// Field names follow the backend's expected keys (pre-op scores keep their
/// clinical abbreviations).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    /// Hospital number (pseudonymized patient key).
    pub hn: String,
    pub sex: String,
    pub age: f64,
    /// Underlying disease, free text.
    pub ud: String,
    /// Body weight in kilograms.
    pub bw: f64,
    /// Height in centimeters.
    pub ht: f64,
    pub bmi: f64,
    /// Pre-operative IKDC score.
    pub ikdc: f64,
    /// Pre-operative Lysholm score.
    pub lysholm: f64,
    /// Kellgren-Lawrence osteoarthritis grade, 0-4.
    pub kl_grade: u8,
    /// Meniscal extrusion in millimeters.
    pub mm_extrusion: f64,
}

/// One predicted outcome at a follow-up horizon.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OutcomePoint {
    /// Follow-up horizon label (e.g. `"6 months"`, `"2 years"`).
    pub horizon: String,
    /// Predicted IKDC score.
    pub ikdc: f64,
    /// Predicted Lysholm score.
    pub lysholm: f64,
}

/// Relative weight of one input feature in the model's prediction.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeatureWeight {
    pub feature: String,
    /// Normalized importance in `0.0..=1.0`.
    pub weight: f64,
}

/// Full inference result for one patient.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictionResponse {
    /// Predicted scores per follow-up horizon, in chronological order.
    pub points: Vec<OutcomePoint>,
    /// Feature-importance weights, sorted by weight descending.
    #[serde(default)]
    pub feature_importance: Vec<FeatureWeight>,
}
