//! Group service

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Group;
use crate::storage::{atomically, GroupRow, LedgerGateway};

/// Service for envelope groups
pub struct GroupService<'a, G: ?Sized> {
    gateway: &'a G,
}

impl<'a, G: LedgerGateway + ?Sized> GroupService<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Create a new group
    pub fn create(&self, name: &str) -> LedgerResult<Group> {
        let name = name.trim();

        let group = atomically(self.gateway, |g| {
            if g.group_by_name(name)?.is_some() {
                return Err(LedgerError::Duplicate {
                    entity_type: "Group",
                    identifier: name.to_string(),
                });
            }

            let group = Group::new(name);
            group
                .validate()
                .map_err(|e| LedgerError::Validation(e.to_string()))?;

            g.insert_group(group.clone())?;
            Ok(group)
        })?;

        info!(group = %group.name, "group created");
        Ok(group)
    }

    pub fn list(&self) -> LedgerResult<Vec<GroupRow>> {
        self.gateway.list_groups()
    }
}
