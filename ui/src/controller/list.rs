//! Config list orchestration
//!
//! Loads the tenant's inputs into a [`ListView`], runs remove and add
//! actions through the gateway and reports every outcome as a notification.

use homebase_shared::{ConfigEntry, TagCatalog};
use tracing::{debug, info, warn};

use super::add_flow::{AddOutcome, AddRequest, AddTarget};
use crate::client::{ConfigClientError, ConfigGateway};
use crate::state::{Notification, Session, LOADED_MESSAGE};

/// Where the list controller shows its results
pub trait ListView {
    /// Replace the displayed list
    fn show_configs(&self, configs: Vec<ConfigEntry>);

    fn notify(&self, notification: Notification);
}

/// Drives the config list page
#[derive(Clone)]
pub struct ListController<G, V> {
    gateway: G,
    view: V,
}

impl<G: ConfigGateway, V: ListView> ListController<G, V> {
    pub fn new(gateway: G, view: V) -> Self {
        Self { gateway, view }
    }

    /// Initial load when the page opens; silent on success
    pub async fn activate(&self, session: &Session) -> bool {
        self.load(session, false).await
    }

    /// User-requested reload; announces itself on success
    pub async fn reload(&self, session: &Session) -> bool {
        self.load(session, true).await
    }

    async fn load(&self, session: &Session, announce: bool) -> bool {
        match self.gateway.list_configs(session).await {
            Ok(configs) => {
                debug!(
                    tenant = session.current_tenant(),
                    count = configs.len(),
                    "Loaded configs"
                );
                self.view.show_configs(configs);
                if announce {
                    self.view.notify(Notification::info(LOADED_MESSAGE));
                }
                true
            }
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    /// Delete an entry, then reload the list
    pub async fn remove(&self, session: &Session, entry: &ConfigEntry) -> bool {
        match self.gateway.remove(session, &entry.id).await {
            Ok(()) => {
                info!(id = %entry.id, "Removed config");
                self.view.notify(Notification::removed(&entry.id));
                self.activate(session).await;
                true
            }
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    /// Act on the add dialog's result
    pub async fn complete_add(&self, session: &Session, outcome: AddOutcome) -> bool {
        match outcome {
            AddOutcome::Submitted(request) => self.add(session, request).await,
            AddOutcome::Cancelled => false,
        }
    }

    async fn add(&self, session: &Session, request: AddRequest) -> bool {
        let created = match &request.target {
            AddTarget::Regional { region } => {
                self.gateway
                    .create_regional(session, *region, &request.text, &request.title)
                    .await
            }
            AddTarget::Assigned { tags } => {
                self.gateway
                    .create_assigned(session, tags, &request.text, &request.title)
                    .await
            }
        };

        match created {
            Ok(created) => {
                info!(created = ?created.created, "Added config");
                self.view.notify(Notification::added(created.first_id()));
                self.activate(session).await;
                true
            }
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    /// Fetch the tag catalog after the add dialog entered assigned mode
    ///
    /// Failures are reported and leave the dialog with its previous catalog.
    pub async fn load_tag_catalog(&self, session: &Session) -> Option<TagCatalog> {
        match self.gateway.list_tags(session).await {
            Ok(catalog) => {
                debug!(tag_names = catalog.len(), "Loaded tag catalog");
                Some(catalog)
            }
            Err(e) => {
                self.report(&e);
                None
            }
        }
    }

    /// Fetch one entry with its details for the detail panel
    pub async fn inspect(&self, session: &Session, entry: &ConfigEntry) -> Option<ConfigEntry> {
        match self.gateway.get_config(session, &entry.id).await {
            Ok(details) => Some(details),
            Err(e) => {
                self.report(&e);
                None
            }
        }
    }

    fn report(&self, err: &ConfigClientError) {
        warn!(status = ?err.status(), "Config action failed: {}", err);
        self.view.notify(Notification::from_error(err));
    }
}
