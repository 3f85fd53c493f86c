//! Test doubles for the gateway transport and the list view

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use homebase_shared::ConfigEntry;

use crate::client::{ApiRequest, ApiResponse, ConfigClientError, Transport};
use crate::controller::ListView;
use crate::state::Notification;

/// Transport that records requests and replays queued responses in order
#[derive(Clone, Default)]
pub struct RecordingTransport {
    requests: Rc<RefCell<Vec<ApiRequest>>>,
    responses: Rc<RefCell<VecDeque<Result<ApiResponse, ConfigClientError>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
    }

    pub fn fail(&self, reason: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ConfigClientError::Transport(reason.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ConfigClientError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ConfigClientError::Transport("no response queued".to_string())))
    }
}

/// List view that keeps everything it was asked to show
#[derive(Clone, Default)]
pub struct RecordingView {
    shown: Rc<RefCell<Vec<Vec<ConfigEntry>>>>,
    notifications: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every list passed to `show_configs`, oldest first
    pub fn shown(&self) -> Vec<Vec<ConfigEntry>> {
        self.shown.borrow().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }
}

impl ListView for RecordingView {
    fn show_configs(&self, configs: Vec<ConfigEntry>) {
        self.shown.borrow_mut().push(configs);
    }

    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}
