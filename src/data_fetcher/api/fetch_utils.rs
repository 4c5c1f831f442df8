//! Page fetching with status and content type checks

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use crate::error::AppError;

/// Fetches a page and returns its body.
///
/// A page is accepted only when the status is 200 and the Content-Type
/// mentions HTML. No retries are attempted.
///
/// # Returns
/// * `Result<String, AppError>` - The HTML body or the reason it was rejected
#[instrument(skip(client))]
pub(super) async fn fetch_html(client: &Client, url: &str) -> Result<String, AppError> {
    debug!("Fetching page: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        debug!("Request failed for URL {url}: {e}");
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::PageFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if status != reqwest::StatusCode::OK {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        debug!("HTTP {status_code} - {reason} (URL: {url})");

        return Err(match status_code {
            404 => AppError::page_not_found(url),
            400..=499 => AppError::client_error(status_code, reason, url),
            _ => AppError::server_error(status_code, reason, url),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_lowercase();

    if !content_type.contains("html") {
        debug!("Unexpected content type {content_type:?} (URL: {url})");
        return Err(AppError::not_html(content_type, url));
    }

    let body = response.text().await?;
    debug!("Response length: {} bytes", body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_html_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(
                    "<table><tr><td>Bears</td></tr></table>",
                    "text/html; charset=utf-8",
                ),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let body = fetch_html(&client, &format!("{}/page", mock_server.uri()))
            .await
            .unwrap();

        assert!(body.contains("Bears"));
    }

    #[tokio::test]
    async fn test_fetch_html_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = fetch_html(&client, &format!("{}/missing", mock_server.uri())).await;

        assert!(matches!(result, Err(AppError::PageNotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_html_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = fetch_html(&client, &format!("{}/page", mock_server.uri())).await;

        assert!(matches!(
            result,
            Err(AppError::ServerError { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_html_rejects_non_html() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("{}", "application/json"),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = fetch_html(&client, &format!("{}/page", mock_server.uri())).await;

        assert!(matches!(result, Err(AppError::NotHtml { .. })));
    }

    #[tokio::test]
    async fn test_fetch_html_rejects_other_success_statuses() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(204).insert_header("Content-Type", "text/html"),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = fetch_html(&client, &format!("{}/page", mock_server.uri())).await;

        assert!(result.is_err());
    }
}
