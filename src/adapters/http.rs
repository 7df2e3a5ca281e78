use crate::domain::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// `Transport` backed by a shared `reqwest::Client`. No timeout is set here;
/// whatever the OS and reqwest defaults impose applies.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        // 連線失敗等錯誤會經由 From<reqwest::Error> 轉成 Transport
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::InventoryError;
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;

    #[tokio::test]
    async fn test_execute_passes_method_headers_and_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/user/resetPassword/4")
                .header("Content-Type", "application/json")
                .header("Authorization", "Bearer t0k3n")
                .json_body(serde_json::json!({"newPassword": "secret"}));
            then.status(200).body("ok");
        });

        let request = HttpRequest::new(HttpMethod::Patch, server.url("/user/resetPassword/4"))
            .with_header("Authorization", "Bearer t0k3n")
            .with_json_body(r#"{"newPassword":"secret"}"#.to_string());

        let response = ReqwestTransport::new().execute(request).await.unwrap();

        api_mock.assert();
        assert_eq!(response, HttpResponse::new(200, "ok"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_data_not_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/batch/get/99");
            then.status(404).body("Batch not found");
        });

        let request = HttpRequest::new(HttpMethod::Get, server.url("/batch/get/99"));
        let response = ReqwestTransport::new().execute(request).await.unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(response.body, "Batch not found");
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // 先綁定再釋放，取得一個沒有人在聽的埠
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let request = HttpRequest::new(
            HttpMethod::Get,
            format!("http://127.0.0.1:{}/batch/getAll", port),
        );
        let err = ReqwestTransport::new().execute(request).await.unwrap_err();

        assert!(matches!(err, InventoryError::Transport { .. }));
    }
}
