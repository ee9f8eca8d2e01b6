use model::entities::role;
use tracing::{debug, error, warn};

use crate::error::{Result, WizardError};
use crate::store::RoleStore;

/// Read-only view of the assignable roles.
pub struct RoleCatalog<'a> {
    store: &'a dyn RoleStore,
}

impl<'a> RoleCatalog<'a> {
    pub fn new(store: &'a dyn RoleStore) -> Self {
        Self { store }
    }

    /// Reads every role in one call, without filtering or paging.
    pub async fn list_roles(&self) -> Result<Vec<role::Model>> {
        let roles = self.store.list_roles().await.map_err(|e| {
            error!("Failed to load roles: {}", e);
            WizardError::roles_unavailable(e)
        })?;

        if roles.is_empty() {
            warn!("Role catalog is empty, no roles can be assigned");
        } else {
            debug!("Role catalog holds {} roles", roles.len());
        }

        Ok(roles)
    }
}
