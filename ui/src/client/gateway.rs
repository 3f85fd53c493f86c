//! Config gateway over a [`Transport`]

use async_trait::async_trait;
use homebase_shared::{
    AssignedDefinition, AssignmentTags, ConfigEntry, CreatedConfigs, ErrorBody, Region,
    RegionalDefinition, TagCatalog,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::{ApiRequest, ApiResponse, ConfigClientError, ConfigGateway, Transport};
use crate::state::Session;

/// Maps gateway operations onto `/config/{tenant}/...` requests
#[derive(Debug, Clone)]
pub struct ConfigApi<T> {
    transport: T,
}

impl<T: Transport> ConfigApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// `/config/{tenant}` followed by the given segments, each percent-encoded
    fn tenant_path(session: &Session, segments: &[&str]) -> String {
        let mut path = format!("/config/{}", urlencoding::encode(session.current_tenant()));
        for segment in segments {
            path.push('/');
            path.push_str(&urlencoding::encode(segment));
        }
        path
    }

    /// Send a request, turning non-2xx responses into [`ConfigClientError::Api`]
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ConfigClientError> {
        debug!(method = ?request.method, path = %request.path, "Sending config API request");

        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            let err = api_error(&response);
            warn!(status = response.status, "Config API request rejected: {}", err);
            Err(err)
        }
    }

    async fn fetch_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ConfigClientError> {
        let response = self.execute(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ConfigClientError::Decode(e.to_string()))
    }
}

fn json_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ConfigClientError> {
    serde_json::to_value(body).map_err(|e| ConfigClientError::Encode(e.to_string()))
}

/// Build the error for a rejected request
///
/// Prefers the `message` of the error body, then the raw body text, then
/// `HTTP {status}` when the body is empty.
fn api_error(response: &ApiResponse) -> ConfigClientError {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message)
        .or_else(|| {
            let raw = response.body.trim();
            (!raw.is_empty()).then(|| raw.to_string())
        })
        .unwrap_or_else(|| format!("HTTP {}", response.status));

    ConfigClientError::Api {
        status: response.status,
        message,
    }
}

#[async_trait(?Send)]
impl<T: Transport> ConfigGateway for ConfigApi<T> {
    async fn list_configs(&self, session: &Session) -> Result<Vec<ConfigEntry>, ConfigClientError> {
        self.fetch_json(ApiRequest::get(Self::tenant_path(session, &[])))
            .await
    }

    async fn get_config(&self, session: &Session, id: &str) -> Result<ConfigEntry, ConfigClientError> {
        self.fetch_json(ApiRequest::get(Self::tenant_path(session, &[id])))
            .await
    }

    async fn create_regional(
        &self,
        session: &Session,
        region: Region,
        text: &str,
        title: &str,
    ) -> Result<CreatedConfigs, ConfigClientError> {
        let body = json_body(&RegionalDefinition::single(region, text, title))?;
        self.fetch_json(ApiRequest::post(Self::tenant_path(session, &["regional"]), body))
            .await
    }

    async fn create_assigned(
        &self,
        session: &Session,
        tags: &AssignmentTags,
        text: &str,
        title: &str,
    ) -> Result<CreatedConfigs, ConfigClientError> {
        let body = json_body(&AssignedDefinition {
            text: text.to_string(),
            title: title.to_string(),
            assignment_tags: tags.clone(),
        })?;
        self.fetch_json(ApiRequest::post(Self::tenant_path(session, &["assigned"]), body))
            .await
    }

    async fn remove(&self, session: &Session, id: &str) -> Result<(), ConfigClientError> {
        self.execute(ApiRequest::delete(Self::tenant_path(session, &[id])))
            .await
            .map(|_| ())
    }

    async fn list_tags(&self, session: &Session) -> Result<TagCatalog, ConfigClientError> {
        self.fetch_json(ApiRequest::get(Self::tenant_path(session, &["tags"])))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Method;
    use crate::testing::RecordingTransport;
    use futures::executor::block_on;

    fn api(transport: &RecordingTransport) -> ConfigApi<RecordingTransport> {
        ConfigApi::new(transport.clone())
    }

    #[test]
    fn test_list_configs_is_scoped_to_session_tenant() {
        let transport = RecordingTransport::new();
        transport.respond(200, r#"[{"id":"1","region":"west","title":"A"}]"#);

        let configs = block_on(api(&transport).list_configs(&Session::new("ac-1"))).unwrap();

        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].title.as_deref(), Some("A"));
        assert_eq!(transport.requests(), vec![ApiRequest::get("/config/ac-1")]);
    }

    #[test]
    fn test_create_regional_sends_single_region_list() {
        let transport = RecordingTransport::new();
        transport.respond(200, r#"{"created":["r-1"]}"#);

        let created = block_on(api(&transport).create_regional(
            &Session::new("ac-1"),
            Region::East,
            "[[inputs.cpu]]",
            "cpu",
        ))
        .unwrap();

        assert_eq!(created.first_id(), Some("r-1"));
        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/config/ac-1/regional");
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({"regions": ["east"], "text": "[[inputs.cpu]]", "title": "cpu"}))
        );
    }

    #[test]
    fn test_create_assigned_sends_assignment_tags() {
        let transport = RecordingTransport::new();
        transport.respond(200, r#"{"created":["a-1"]}"#);

        let mut tags = AssignmentTags::new();
        tags.insert("env".to_string(), "prod".to_string());
        let created = block_on(api(&transport).create_assigned(
            &Session::new("ac-1"),
            &tags,
            "[[inputs.mem]]",
            "T",
        ))
        .unwrap();

        assert_eq!(created.created, vec!["a-1".to_string()]);
        assert_eq!(
            transport.requests(),
            vec![ApiRequest::post(
                "/config/ac-1/assigned",
                serde_json::json!({"text": "[[inputs.mem]]", "title": "T", "assignmentTags": {"env": "prod"}}),
            )]
        );
    }

    #[test]
    fn test_remove_accepts_empty_body() {
        let transport = RecordingTransport::new();
        transport.respond(200, "");

        block_on(api(&transport).remove(&Session::new("ac-1"), "1")).unwrap();

        assert_eq!(transport.requests(), vec![ApiRequest::delete("/config/ac-1/1")]);
    }

    #[test]
    fn test_get_config_and_tags_paths() {
        let transport = RecordingTransport::new();
        transport.respond(200, r#"{"id":"x","runningOn":"telegraf-2"}"#);
        transport.respond(200, r#"{"env":["prod","dev"],"os":["linux"]}"#);
        let session = Session::new("ac-1");

        let entry = block_on(api(&transport).get_config(&session, "x")).unwrap();
        let tags = block_on(api(&transport).list_tags(&session)).unwrap();

        assert_eq!(entry.running_on.as_deref(), Some("telegraf-2"));
        assert_eq!(tags["env"], vec!["prod".to_string(), "dev".to_string()]);
        assert_eq!(
            transport.requests(),
            vec![ApiRequest::get("/config/ac-1/x"), ApiRequest::get("/config/ac-1/tags")]
        );
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let transport = RecordingTransport::new();
        transport.respond(204, "");

        block_on(api(&transport).remove(&Session::new("tenant one"), "a/b")).unwrap();

        assert_eq!(transport.requests()[0].path, "/config/tenant%20one/a%2Fb");
    }

    #[test]
    fn test_error_message_comes_from_body() {
        let transport = RecordingTransport::new();
        transport.respond(403, r#"{"status":403,"message":"Not owned by tenant"}"#);

        let err = block_on(api(&transport).remove(&Session::new("ac-1"), "1")).unwrap_err();

        assert_eq!(
            err,
            ConfigClientError::Api {
                status: 403,
                message: "Not owned by tenant".to_string()
            }
        );
        assert_eq!(err.to_string(), "Not owned by tenant (403)");
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body_then_status() {
        let transport = RecordingTransport::new();
        transport.respond(502, "Bad Gateway\n");
        transport.respond(500, "");
        let session = Session::new("ac-1");

        let first = block_on(api(&transport).list_configs(&session)).unwrap_err();
        let second = block_on(api(&transport).list_configs(&session)).unwrap_err();

        assert_eq!(first.to_string(), "Bad Gateway (502)");
        assert_eq!(second.to_string(), "HTTP 500 (500)");
    }

    #[test]
    fn test_transport_and_decode_failures_pass_through() {
        let transport = RecordingTransport::new();
        transport.fail("connection refused");
        transport.respond(200, "not json");
        let session = Session::new("ac-1");

        let first = block_on(api(&transport).list_configs(&session)).unwrap_err();
        let second = block_on(api(&transport).list_tags(&session)).unwrap_err();

        assert_eq!(first, ConfigClientError::Transport("connection refused".to_string()));
        assert!(matches!(second, ConfigClientError::Decode(_)));
        assert_eq!(second.status(), None);
    }
}
