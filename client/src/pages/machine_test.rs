use super::*;

fn model(id: i64, name: &str, architecture: &str, created_at: &str, version: &str) -> ModelRecord {
    ModelRecord {
        id,
        name: name.to_owned(),
        model_architecture: architecture.to_owned(),
        final_loss: None,
        model_path: None,
        bentoml_tag: None,
        is_active: true,
        created_at: created_at.to_owned(),
        csv_id: id * 10,
        version: version.to_owned(),
        description: String::new(),
    }
}

fn fixtures() -> Vec<ModelRecord> {
    vec![
        model(1, "Baseline MLP", "mlp", "2025-01-15", "v1"),
        model(2, "Gradient Boost", "gbdt", "2025-02-10", "v2"),
        model(3, "Linear Probe", "linear", "2025-03-01", "v1.1"),
    ]
}

// =============================================================
// filter_models
// =============================================================

#[test]
fn empty_filter_returns_everything() {
    let models = fixtures();
    assert_eq!(filter_models(&models, ""), models);
    assert_eq!(filter_models(&models, "   "), models);
}

#[test]
fn filter_matches_name_case_insensitively() {
    let models = fixtures();
    let hits = filter_models(&models, "baseline");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Baseline MLP");
}

#[test]
fn filter_matches_architecture() {
    let models = fixtures();
    let hits = filter_models(&models, "gbdt");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);
}

#[test]
fn filter_matches_creation_date() {
    let models = fixtures();
    let hits = filter_models(&models, "2025-02");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);
}

#[test]
fn filter_matches_version() {
    let models = fixtures();
    let hits = filter_models(&models, "v1.1");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 3);
}

#[test]
fn filter_with_no_hits_returns_empty() {
    assert!(filter_models(&fixtures(), "transformer").is_empty());
}

// =============================================================
// Labels and validation
// =============================================================

#[test]
fn csv_download_name_derives_from_model_name() {
    let m = model(1, "Baseline MLP", "mlp", "2025-01-15", "v1");
    assert_eq!(csv_download_name(&m), "Baseline MLP-training-data.csv");
}

#[test]
fn final_loss_label_formats_or_falls_back() {
    let mut m = model(1, "a", "mlp", "2025-01-15", "v1");
    assert_eq!(final_loss_label(&m), "n/a");
    m.final_loss = Some(0.04251);
    assert_eq!(final_loss_label(&m), "0.0425");
}

#[test]
fn validate_new_model_requires_name_and_csv() {
    assert_eq!(validate_new_model("  ", true), Err("Enter a model name."));
    assert_eq!(validate_new_model("mrt", false), Err("Choose a training CSV first."));
    assert_eq!(validate_new_model(" mrt ", true), Ok("mrt".to_owned()));
}
