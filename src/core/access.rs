//! Role gate for archive writes.

use std::collections::HashSet;

/// Static allow-list of role ids permitted to save archive entries.
#[derive(Debug, Clone, Default)]
pub struct RoleGate {
    allowed: HashSet<u64>,
}

impl RoleGate {
    /// Builds a gate from the configured role ids.
    #[must_use]
    pub fn new(allowed: impl IntoIterator<Item = u64>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    /// True iff any of the actor's roles is on the allow-list.
    ///
    /// An actor without roles (e.g. in direct messages) is never authorized.
    #[must_use]
    pub fn is_authorized(&self, actor_role_ids: &[u64]) -> bool {
        actor_role_ids.iter().any(|id| self.allowed.contains(id))
    }

    /// Allowed role ids in ascending order.
    #[must_use]
    pub fn allowed_roles(&self) -> Vec<u64> {
        let mut roles: Vec<u64> = self.allowed.iter().copied().collect();
        roles.sort_unstable();
        roles
    }
}
