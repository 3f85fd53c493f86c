//! Config API Client Layer
//!
//! This module wraps the backend's tenant-scoped `/config` REST surface.
//!
//! # Layers
//!
//! - **ConfigGateway**: the operations the controllers need, one call each,
//!   no retry and no caching
//! - **ConfigApi**: the gateway implementation; maps each operation to an
//!   [`ApiRequest`] and decodes the [`ApiResponse`]
//! - **Transport**: sends a request; [`FetchTransport`] uses the browser's
//!   `fetch` through gloo-net

mod fetch;
mod gateway;
mod transport;

pub use fetch::FetchTransport;
pub use gateway::ConfigApi;
pub use transport::{ApiRequest, ApiResponse, Method, Transport};

use async_trait::async_trait;
use homebase_shared::{AssignmentTags, ConfigEntry, CreatedConfigs, Region, TagCatalog};

use crate::state::Session;

/// Gateway used by the running browser client
pub type BrowserApi = ConfigApi<FetchTransport>;

/// Error types for config API operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigClientError {
    /// The request never produced an HTTP response
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status
    #[error("{message} ({status})")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid request body: {0}")]
    Encode(String),
}

impl ConfigClientError {
    /// HTTP status, for errors the backend reported
    pub fn status(&self) -> Option<u16> {
        match self {
            ConfigClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Backend operations on a tenant's managed inputs
///
/// Every call is scoped to the tenant of the session it is given.
#[async_trait(?Send)]
pub trait ConfigGateway {
    /// All managed inputs of the tenant, in server order
    async fn list_configs(&self, session: &Session) -> Result<Vec<ConfigEntry>, ConfigClientError>;

    /// One managed input with its lookup details
    async fn get_config(&self, session: &Session, id: &str) -> Result<ConfigEntry, ConfigClientError>;

    /// Create an input running in a single region
    async fn create_regional(
        &self,
        session: &Session,
        region: Region,
        text: &str,
        title: &str,
    ) -> Result<CreatedConfigs, ConfigClientError>;

    /// Create an input assigned to agents carrying the given tags
    async fn create_assigned(
        &self,
        session: &Session,
        tags: &AssignmentTags,
        text: &str,
        title: &str,
    ) -> Result<CreatedConfigs, ConfigClientError>;

    async fn remove(&self, session: &Session, id: &str) -> Result<(), ConfigClientError>;

    /// Tag names and values known for the tenant's agents
    async fn list_tags(&self, session: &Session) -> Result<TagCatalog, ConfigClientError>;
}
