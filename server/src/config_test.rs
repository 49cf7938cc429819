use super::*;

#[test]
fn normalize_base_url_strips_trailing_slash() {
    assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
    assert_eq!(normalize_base_url("http://localhost:8000///"), "http://localhost:8000");
}

#[test]
fn normalize_base_url_keeps_clean_urls_untouched() {
    assert_eq!(normalize_base_url("https://ml.example.org"), "https://ml.example.org");
}

#[test]
fn default_port_is_3000() {
    assert_eq!(DEFAULT_PORT, 3000);
}
