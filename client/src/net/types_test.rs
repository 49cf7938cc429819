use super::*;

// =============================================================
// UserIdentity
// =============================================================

#[test]
fn admin_role_is_admin() {
    let identity = UserIdentity {
        username: "somsak".to_owned(),
        role: "admin".to_owned(),
    };
    assert!(identity.is_admin());
}

#[test]
fn any_other_role_is_not_admin() {
    for role in ["researcher", "user", "Admin", ""] {
        let identity = UserIdentity {
            username: "somsak".to_owned(),
            role: role.to_owned(),
        };
        assert!(!identity.is_admin(), "role {role:?} must not be admin");
    }
}

#[test]
fn identity_deserializes_and_ignores_extra_fields() {
    let identity: UserIdentity = serde_json::from_str(
        r#"{"username":"somsak","role":"admin","is_active":true,"id":7}"#,
    )
    .expect("valid payload");
    assert_eq!(identity.username, "somsak");
    assert!(identity.is_admin());
}

// =============================================================
// UserAccountUpdate serialization
// =============================================================

#[test]
fn account_update_omits_unset_fields() {
    let update = UserAccountUpdate {
        role: Some("admin".to_owned()),
        ..UserAccountUpdate::default()
    };
    let value = serde_json::to_value(&update).expect("serializable");
    let object = value.as_object().expect("object");
    assert_eq!(object.len(), 1);
    assert_eq!(object["role"], "admin");
}

#[test]
fn account_update_serializes_set_fields() {
    let update = UserAccountUpdate {
        username: Some("new-name".to_owned()),
        password: Some("s3cret".to_owned()),
        role: Some("researcher".to_owned()),
        is_active: Some(false),
    };
    let value = serde_json::to_value(&update).expect("serializable");
    assert_eq!(value["username"], "new-name");
    assert_eq!(value["is_active"], false);
}

// =============================================================
// ModelRecord
// =============================================================

#[test]
fn model_record_tolerates_untrained_fields() {
    let record: ModelRecord = serde_json::from_str(
        r#"{
            "id": 3,
            "name": "mrt-mlp",
            "model_architecture": "mlp",
            "is_active": true,
            "created_at": "2025-11-02T10:00:00Z",
            "csv_id": 12
        }"#,
    )
    .expect("valid payload");
    assert_eq!(record.final_loss, None);
    assert_eq!(record.model_path, None);
    assert_eq!(record.version, "");
}

#[test]
fn model_record_roundtrips_trained_fields() {
    let record: ModelRecord = serde_json::from_str(
        r#"{
            "id": 3,
            "name": "mrt-mlp",
            "model_architecture": "mlp",
            "final_loss": 0.042,
            "model_path": "/models/3.pt",
            "bentoml_tag": "mrt_mlp:v2",
            "is_active": false,
            "created_at": "2025-11-02T10:00:00Z",
            "csv_id": 12,
            "version": "v2",
            "description": "baseline"
        }"#,
    )
    .expect("valid payload");
    assert_eq!(record.final_loss, Some(0.042));
    assert_eq!(record.bentoml_tag.as_deref(), Some("mrt_mlp:v2"));
}

// =============================================================
// PredictionRequest key casing
// =============================================================

#[test]
fn prediction_request_uses_backend_key_casing() {
    let request = PredictionRequest {
        hn: "12345678".to_owned(),
        sex: "female".to_owned(),
        age: 61.0,
        ud: "none".to_owned(),
        bw: 64.0,
        ht: 158.0,
        bmi: 25.6,
        ikdc: 42.5,
        lysholm: 48.0,
        kl_grade: 2,
        mm_extrusion: 3.4,
    };
    let value = serde_json::to_value(&request).expect("serializable");
    let object = value.as_object().expect("object");
    assert!(object.contains_key("klGrade"));
    assert!(object.contains_key("mmExtrusion"));
    assert!(object.contains_key("bmi"));
    assert!(!object.contains_key("kl_grade"));
}

// =============================================================
// PredictionResponse
// =============================================================

#[test]
fn prediction_response_defaults_missing_importance() {
    let response: PredictionResponse = serde_json::from_str(
        r#"{"points":[{"horizon":"6 months","ikdc":55.0,"lysholm":52.0}]}"#,
    )
    .expect("valid payload");
    assert_eq!(response.points.len(), 1);
    assert!(response.feature_importance.is_empty());
}
