use super::*;

#[test]
fn callback_page_is_a_complete_document() {
    assert!(CALLBACK_HTML.starts_with("<!DOCTYPE html>"));
    assert!(CALLBACK_HTML.ends_with("</html>"));
}

#[test]
fn callback_page_has_no_script() {
    assert!(!CALLBACK_HTML.contains("<script"));
}

#[test]
fn callback_route_matches_the_redirect_path() {
    assert_eq!(CALLBACK_PATH, "/auth/callback");
}

#[tokio::test]
async fn healthz_reports_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn callback_handler_serves_the_landing_page() {
    let Html(body) = oauth_callback().await;
    assert_eq!(body, CALLBACK_HTML);
}
