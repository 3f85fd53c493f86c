//! Tenant session

/// Tenant the console is acting for
///
/// Created once at startup with the configured default tenant and changed
/// only by logging in. Every gateway call takes it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    tenant_id: String,
}

impl Session {
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
        }
    }

    /// Switch to another tenant; the id is not validated
    pub fn login(&mut self, tenant_id: impl Into<String>) {
        self.tenant_id = tenant_id.into();
    }

    pub fn current_tenant(&self) -> &str {
        &self.tenant_id
    }
}
