//! Plain-data HTTP request/response types.
//!
//! The resource clients build `HttpRequest` values and parse `HttpResponse`
//! values; a `Transport` executes the round-trip in between. Keeping both sides
//! as owned data lets tests drive the parsing half without a socket.

use serde_json::Value;

pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: vec![("Accept".to_string(), CONTENT_TYPE_JSON.to_string())],
            body: None,
        }
    }

    /// 附上 JSON 內容並設定 Content-Type
    pub fn with_json_body(mut self, body: String) -> Self {
        self.headers
            .push(("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()));
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Best-effort error text: the JSON `message` field, then a JSON string
    /// body, then the raw text, then a generic fallback.
    pub fn failure_message(&self) -> String {
        let trimmed = self.body.trim();

        if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
            match value {
                Value::Object(map) => match map.get("message") {
                    Some(Value::String(message)) if !message.trim().is_empty() => {
                        return message.clone();
                    }
                    Some(Value::Null) | Some(Value::String(_)) | None => {}
                    Some(other) => return other.to_string(),
                },
                Value::String(message) if !message.trim().is_empty() => return message,
                _ => {}
            }
        }

        if !trimmed.is_empty() {
            return trimmed.to_string();
        }

        format!("Request failed with status {}", self.status)
    }
}
