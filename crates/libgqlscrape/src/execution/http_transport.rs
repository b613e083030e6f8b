use crate::execution::Transport;
use crate::execution::TransportError;
use crate::introspection::INTROSPECTION_QUERY;
use indexmap::IndexMap;
use inherent::inherent;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use std::time::Duration;

type Result<T> = std::result::Result<T, TransportError>;

#[derive(Clone, Debug, PartialEq)]
pub struct HttpTransportConfig {
    /// Sent as `Authorization: Bearer <token>`.
    pub auth_token: Option<String>,

    /// Sent verbatim as the `Cookie` header.
    pub cookie: Option<String>,

    /// Extra headers sent with every request. Bodies go out as
    /// `application/json` unless a `Content-Type` entry here overrides it.
    pub headers: IndexMap<String, String>,
    pub timeout: Duration,
}
impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            auth_token: None,
            cookie: None,
            headers: IndexMap::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// [`Transport`] that POSTs `{"query", "variables", "operationName"}` JSON
/// bodies to a single endpoint URL.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    content_type: Option<HeaderValue>,
    endpoint: reqwest::Url,
}
impl HttpTransport {
    pub fn new(endpoint: reqwest::Url, config: &HttpTransportConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            insert_header(&mut headers, name, value)?;
        }
        if let Some(auth_token) = &config.auth_token {
            insert_header(&mut headers, "Authorization", &format!("Bearer {auth_token}"))?;
        }
        if let Some(cookie) = &config.cookie {
            insert_header(&mut headers, "Cookie", cookie)?;
        }
        // A configured content type is applied per request, after
        // `RequestBuilder::json()` has set its own.
        let content_type = headers.remove(CONTENT_TYPE);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            content_type,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    /// Ask the endpoint to describe its schema.
    ///
    /// The returned value is the raw response body, suitable for
    /// [`SchemaBuilder::from_introspection_value()`](crate::schema::SchemaBuilder::from_introspection_value).
    pub async fn introspect(&self) -> Result<serde_json::Value> {
        log::debug!("Sending introspection query to `{}`.", self.endpoint);
        self.post_query(INTROSPECTION_QUERY).await
    }
}

#[inherent]
impl Transport for HttpTransport {
    pub async fn post_query(&self, query: &str) -> Result<serde_json::Value> {
        let body = serde_json::json!({
            "query": query,
            "variables": {},
            "operationName": null,
        });

        let mut request = self.client
            .post(self.endpoint.clone())
            .json(&body);
        if let Some(content_type) = &self.content_type {
            request = request.headers(HeaderMap::from_iter([
                (CONTENT_TYPE, content_type.clone()),
            ]));
        }
        let response = request.send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(TransportError::HttpStatus {
                body: text,
                status: status.as_u16(),
            });
        }

        serde_json::from_str(&text).map_err(|err| TransportError::MalformedBody {
            reason: err.to_string(),
        })
    }
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<()> {
    let invalid = |reason: String| TransportError::InvalidHeader {
        name: name.to_string(),
        reason,
    };
    let header_name = HeaderName::from_bytes(name.trim().as_bytes())
        .map_err(|err| invalid(err.to_string()))?;
    let header_value = HeaderValue::from_str(value.trim())
        .map_err(|err| invalid(err.to_string()))?;
    headers.insert(header_name, header_value);
    Ok(())
}
