//! # HTTP client
//!
//! [`ApiClient`] wraps a `reqwest::Client` with the backend base URL and a
//! [`TokenStore`]. Every call goes through [`ApiClient::send`], which:
//!
//! 1. attaches `Authorization: Bearer <token>` when the store holds a token,
//! 2. maps transport failures to [`RequestError::Network`],
//! 3. maps non-2xx responses to [`RequestError::Http`] with a message extracted by
//!    [`error_message`],
//! 4. decodes the 2xx body as JSON, mapping failures to [`RequestError::Payload`].
//!
//! There is no retry, no timeout and no caching. The instant-answer envelope of
//! `POST /search` is decoded here, once, into a typed [`Dispatch`].

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use store::{ClientConfig, Dispatch, SearchEnvelope, SummaryUpdate, TokenStore, Website};

use crate::error::{error_message, RequestError};
use crate::models::{
    AuthResponse, CrawlerStatus, HealthResponse, IndexUrlResponse, KgContext, KnowledgeGraph,
    SearchOptions, SearchResponse, SubmitUrlResponse, UserInfo, WebSources,
};

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct QueryBody<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct ExpressionBody<'a> {
    expression: &'a str,
}

#[derive(Serialize)]
struct UrlBody<'a> {
    url: &'a str,
}

#[derive(Deserialize)]
struct CalculateResponse {
    #[serde(default)]
    result: Value,
}

/// Typed client for the Notice backend.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: Client,
    base_url: String,
    tokens: S,
}

impl<S: TokenStore> ApiClient<S> {
    pub fn new(base_url: &str, tokens: S) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub fn from_config(config: &ClientConfig, tokens: S) -> Self {
        Self::new(&config.api.base_url, tokens)
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &str,
        path: &str,
        fallback: &str,
    ) -> Result<T, RequestError> {
        tracing::debug!("{} {}", method, path);

        let response = self.authorize(request).send().await.map_err(|e| {
            tracing::warn!("{} {} failed: {}", method, path, e);
            RequestError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, content_type.as_deref(), &body, fallback);
            tracing::warn!("{} {} -> {}: {}", method, path, status.as_u16(), message);
            return Err(RequestError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("{} {} returned an unexpected body: {}", method, path, e);
            RequestError::from(e)
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, RequestError> {
        let request = self.http.get(self.url(path));
        self.send(request, "GET", path, fallback).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, RequestError> {
        let request = self.http.post(self.url(path)).json(body);
        self.send(request, "POST", path, fallback).await
    }

    // ── Auth ──

    pub async fn register(&self, username: &str, password: &str) -> Result<AuthResponse, RequestError> {
        self.post(
            "/api/auth/register",
            &Credentials { username, password },
            "Registration failed",
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, RequestError> {
        self.post("/api/auth/login", &Credentials { username, password }, "Login failed")
            .await
    }

    /// Resolve the stored token to a user.
    ///
    /// Returns `Ok(None)` without touching the network when no token is stored,
    /// and `Ok(None)` when the backend rejects the token (401/403).
    pub async fn me(&self) -> Result<Option<UserInfo>, RequestError> {
        if self.tokens.get().is_none() {
            return Ok(None);
        }
        match self.get::<UserInfo>("/api/auth/me", "Session check failed").await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.is_unauthorized() => Ok(None),
            Err(e) => Err(e),
        }
    }

    // ── Search ──

    /// Ranked web results, `GET /api/search`.
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResponse, RequestError> {
        let path = "/api/search";
        let request = self
            .http
            .get(self.url(path))
            .query(&options.query_pairs(query));
        self.send(request, "GET", path, "Search failed").await
    }

    /// Instant answer, `POST /search`, decoded into a typed result.
    pub async fn search_instant(&self, query: &str) -> Result<Dispatch, RequestError> {
        let envelope: SearchEnvelope = self.post("/search", &QueryBody { query }, "Search failed").await?;
        let dispatch = store::decode(&envelope);
        tracing::debug!("search {:?} -> {}", query, dispatch.result_type);
        Ok(dispatch)
    }

    /// Sources for a concept result that arrived without websites.
    pub async fn search_web(&self, query: &str) -> Result<Vec<Website>, RequestError> {
        let sources: WebSources = self
            .post("/search/web", &QueryBody { query }, "Failed to load sources")
            .await?;
        Ok(sources.websites)
    }

    /// Slow summary refresh for a concept result.
    pub async fn search_summary(&self, query: &str) -> Result<SummaryUpdate, RequestError> {
        let value: Value = self
            .post("/search/summary", &QueryBody { query }, "Summary failed")
            .await?;
        summary_from_value(value)
    }

    /// Evaluate a calculator expression. `Ok(None)` when the backend has no result.
    pub async fn calculate(&self, expression: &str) -> Result<Option<String>, RequestError> {
        let response: CalculateResponse = self
            .post("/calculate", &ExpressionBody { expression }, "Calculation failed")
            .await?;
        Ok(match response.result {
            Value::String(s) if !s.is_empty() => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    // ── Content ──

    pub async fn submit_url(&self, url: &str) -> Result<SubmitUrlResponse, RequestError> {
        self.post("/api/submit", &UrlBody { url }, "Submit failed").await
    }

    /// Direct indexer endpoint, used when `[index] legacy` is set.
    pub async fn index_url(&self, url: &str) -> Result<IndexUrlResponse, RequestError> {
        self.post("/index-url", &UrlBody { url }, "Failed to index URL").await
    }

    // ── Knowledge graph ──

    pub async fn my_kg(&self) -> Result<KnowledgeGraph, RequestError> {
        self.get("/api/me/kg", "Failed to load knowledge graph").await
    }

    pub async fn my_context(&self) -> Result<KgContext, RequestError> {
        self.get("/api/me/kg/context", "Failed to load context").await
    }

    // ── Status ──

    pub async fn health(&self) -> Result<HealthResponse, RequestError> {
        self.get("/health", "Health check failed").await
    }

    pub async fn crawler_status(&self) -> Result<CrawlerStatus, RequestError> {
        self.get("/api/crawler/status", "Failed to load crawler status").await
    }
}

/// Accept either a bare summary object or an envelope whose `content` holds one.
fn summary_from_value(value: Value) -> Result<SummaryUpdate, RequestError> {
    let value = match value.get("content") {
        Some(Value::String(content)) => serde_json::from_str(content)?,
        _ => value,
    };
    if let Some(error) = value.get("error").and_then(Value::as_str) {
        return Err(RequestError::Payload(error.to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};
    use store::MemoryStore;

    /// Answer one request with a canned response and hand back the raw request text.
    fn serve_once(status: &str, content_type: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            content_type,
            body.len(),
            body
        );
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            let header_end = loop {
                if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
                let n = stream.read(&mut buf).unwrap();
                assert!(n > 0, "connection closed before headers");
                request.extend_from_slice(&buf[..n]);
            };
            let head = String::from_utf8_lossy(&request[..header_end]).to_ascii_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            while request.len() < header_end + content_length {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });
        (base_url, handle)
    }

    fn local_client(base_url: String, tokens: MemoryStore) -> ApiClient<MemoryStore> {
        // Loopback only, so ignore any proxy set in the environment.
        ApiClient {
            http: Client::builder().no_proxy().build().unwrap(),
            base_url,
            tokens,
        }
    }

    #[test]
    fn test_base_url_normalized() {
        let client = ApiClient::new(" http://localhost:4000/ ", MemoryStore::new());
        assert_eq!(client.base_url(), "http://localhost:4000");
        assert_eq!(client.url("/health"), "http://localhost:4000/health");
    }

    #[test]
    fn test_summary_bare_object() {
        let update = summary_from_value(json!({
            "summary": "**Bitcoin** is a cryptocurrency.",
            "related_topics": ["Ethereum"]
        }))
        .unwrap();
        assert_eq!(update.summary.as_deref(), Some("**Bitcoin** is a cryptocurrency."));
        assert!(update.websites.is_none());
    }

    #[test]
    fn test_summary_envelope() {
        let update = summary_from_value(json!({
            "result_type": "concept",
            "content": "{\"summary\":\"fresh\",\"facts\":[{\"label\":\"Founded\",\"value\":2009}]}"
        }))
        .unwrap();
        assert_eq!(update.summary.as_deref(), Some("fresh"));
        assert_eq!(update.facts.unwrap()[0].value, "2009");
    }

    #[test]
    fn test_summary_error_field() {
        let err = summary_from_value(json!({"error": "quota exceeded"})).unwrap_err();
        assert_eq!(err, RequestError::Payload("quota exceeded".to_string()));
    }

    #[tokio::test]
    async fn test_me_without_token_skips_network() {
        // Unroutable base URL: any request would fail with a network error.
        let client = ApiClient::new("http://127.0.0.1:9", MemoryStore::new());
        assert_eq!(client.me().await, Ok(None));
    }

    #[tokio::test]
    async fn test_plain_text_failure_keeps_raw_message_and_sends_bearer() {
        let (base_url, server) = serve_once(
            "500 Internal Server Error",
            "text/plain",
            "Index offline, try again later",
        );
        let client = local_client(base_url, MemoryStore::with_token("tok-123"));

        let err = client.search_instant("rust").await.unwrap_err();
        assert_eq!(
            err,
            RequestError::Http {
                status: 500,
                message: "Index offline, try again later".to_string(),
            }
        );

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /search HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer tok-123"));
        assert!(request.ends_with(r#"{"query":"rust"}"#));
    }

    #[tokio::test]
    async fn test_no_token_sends_no_authorization_header() {
        let (base_url, server) = serve_once(
            "200 OK",
            "application/json",
            r#"{"status":"ok","service":"notice","version":"1.0"}"#,
        );
        let client = local_client(base_url, MemoryStore::new());

        let health = client.health().await.unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.service, "notice");

        let request = server.join().unwrap();
        assert!(request.starts_with("GET /health HTTP/1.1"));
        assert!(!request.to_ascii_lowercase().contains("authorization:"));
    }
}
