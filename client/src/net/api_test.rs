use super::*;

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint(42), "/api/v1/users/42");
}

#[test]
fn model_endpoint_formats_expected_path() {
    assert_eq!(model_endpoint(7), "/api/v1/models/7");
}

#[test]
fn csv_endpoint_formats_expected_path() {
    assert_eq!(csv_endpoint(12), "/api/v1/csv/12");
}

#[test]
fn predict_endpoint_targets_named_model() {
    assert_eq!(predict_endpoint("mrt-mlp"), "/nn/mrt-mlp");
}

#[test]
fn collection_endpoints_match_backend_routes() {
    assert_eq!(ME_ENDPOINT, "/api/v1/me");
    assert_eq!(LOGIN_ENDPOINT, "/api/v1/login");
    assert_eq!(LOGOUT_ENDPOINT, "/api/v1/logout");
    assert_eq!(REGISTER_ENDPOINT, "/api/v1/register");
    assert_eq!(USERS_ENDPOINT, "/api/v1/users/");
    assert_eq!(MODELS_ENDPOINT, "/api/v1/models/");
    assert_eq!(CSV_ENDPOINT, "/api/v1/csv");
    assert_eq!(TRAIN_ENDPOINT, "/api/v1/model_train");
}

#[test]
fn status_failed_message_formats_operation_and_status() {
    assert_eq!(status_failed_message("login", 401), "login failed: 401");
    assert_eq!(status_failed_message("model list", 503), "model list failed: 503");
}

#[test]
fn timed_out_message_names_operation() {
    assert_eq!(timed_out_message("logout"), "logout timed out");
}
