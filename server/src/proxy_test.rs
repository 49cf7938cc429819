use super::*;

// =============================================================
// target_url
// =============================================================

#[test]
fn target_url_joins_path_onto_backend() {
    let uri: Uri = "/api/v1/me".parse().expect("valid uri");
    assert_eq!(
        target_url("http://localhost:8000", &uri),
        "http://localhost:8000/api/v1/me"
    );
}

#[test]
fn target_url_preserves_query_parameters() {
    let uri: Uri = "/api/v1/users/?page=2&active=true".parse().expect("valid uri");
    assert_eq!(
        target_url("http://localhost:8000", &uri),
        "http://localhost:8000/api/v1/users/?page=2&active=true"
    );
}

#[test]
fn target_url_forwards_inference_routes() {
    let uri: Uri = "/nn/mrt-mlp".parse().expect("valid uri");
    assert_eq!(
        target_url("https://ml.example.org", &uri),
        "https://ml.example.org/nn/mrt-mlp"
    );
}

// =============================================================
// is_hop_header
// =============================================================

#[test]
fn hop_headers_are_stripped_case_insensitively() {
    assert!(is_hop_header("connection"));
    assert!(is_hop_header("Transfer-Encoding"));
    assert!(is_hop_header("UPGRADE"));
}

#[test]
fn host_is_stripped() {
    assert!(is_hop_header("host"));
    assert!(is_hop_header("Host"));
}

#[test]
fn credentials_and_content_headers_pass_through() {
    assert!(!is_hop_header("cookie"));
    assert!(!is_hop_header("set-cookie"));
    assert!(!is_hop_header("content-type"));
    assert!(!is_hop_header("authorization"));
}
