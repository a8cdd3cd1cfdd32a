use super::*;

fn headers_with_location(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(LOCATION, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn resolves_absolute_location() {
    let base = Url::parse("https://docs.example.com/sheet/export?format=csv").unwrap();
    let next = resolve_location(
        &base,
        &headers_with_location("https://cdn.example.com/export.csv"),
        307,
    )
    .unwrap();
    assert_eq!(next.as_str(), "https://cdn.example.com/export.csv");
}

#[test]
fn resolves_relative_location_against_request_url() {
    let base = Url::parse("https://docs.example.com/sheet/export?format=csv").unwrap();
    let next = resolve_location(&base, &headers_with_location("/moved/export.csv"), 308).unwrap();
    assert_eq!(next.as_str(), "https://docs.example.com/moved/export.csv");
}

#[test]
fn missing_location_is_an_error() {
    let base = Url::parse("https://docs.example.com/sheet").unwrap();
    let err = resolve_location(&base, &HeaderMap::new(), 307).unwrap_err();
    assert!(
        matches!(err, CatalogError::MissingRedirectLocation { status: 307 }),
        "expected MissingRedirectLocation, got: {err:?}"
    );
}

#[test]
fn classify_401_mentions_sharing_settings() {
    let err = classify_status(StatusCode::UNAUTHORIZED, "https://x.test/a");
    assert!(matches!(err, CatalogError::Unauthorized));
    assert!(err.to_string().contains("Anyone with the link"));
}

#[test]
fn classify_403_mentions_forbidden() {
    let err = classify_status(StatusCode::FORBIDDEN, "https://x.test/a");
    assert!(err.to_string().contains("forbidden"));
}

#[test]
fn classify_404_carries_url() {
    let err = classify_status(StatusCode::NOT_FOUND, "https://x.test/a");
    assert!(
        matches!(&err, CatalogError::NotFound { url } if url == "https://x.test/a"),
        "got: {err:?}"
    );
}

#[test]
fn classify_other_status_is_generic() {
    let err = classify_status(StatusCode::BAD_GATEWAY, "https://x.test/a");
    assert!(
        matches!(err, CatalogError::UnexpectedStatus { status: 502, .. }),
        "got: {err:?}"
    );
}

#[test]
fn only_307_and_308_are_followed() {
    assert!(is_followed_redirect(StatusCode::TEMPORARY_REDIRECT));
    assert!(is_followed_redirect(StatusCode::PERMANENT_REDIRECT));
    assert!(!is_followed_redirect(StatusCode::FOUND));
    assert!(!is_followed_redirect(StatusCode::MOVED_PERMANENTLY));
}

#[test]
fn client_builds_with_custom_user_agent() {
    assert!(SheetsClient::new(5, "luxwatch-test/1.0").is_ok());
}

#[tokio::test]
async fn invalid_url_is_rejected_before_any_request() {
    let client = SheetsClient::new(5, "luxwatch-test/1.0").unwrap();
    let err = client.fetch_csv("not a url").await.unwrap_err();
    assert!(
        matches!(err, CatalogError::InvalidUrl { .. }),
        "got: {err:?}"
    );
}
