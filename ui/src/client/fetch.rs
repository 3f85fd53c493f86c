//! Browser fetch transport

use gloo_net::http::{Request, RequestBuilder};

use super::{ApiRequest, ApiResponse, ConfigClientError, Method, Transport};

/// Transport that issues requests with the browser's `fetch`
#[derive(Debug, Clone)]
pub struct FetchTransport {
    /// API base URL
    base_url: String,
}

impl FetchTransport {
    pub fn new(base_url: &str) -> Self {
        // Normalize URL (remove trailing slash)
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, request.path);
        match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ConfigClientError> {
        let builder = self.builder(&request);

        let sent = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ConfigClientError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ConfigClientError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ConfigClientError::Transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
