//! Storage initialization
//!
//! Handles first-run setup: the pool envelope and its group, plus the
//! default groups for a fresh ledger.

use tracing::info;

use crate::config::Settings;
use crate::error::LedgerError;
use crate::models::{Envelope, Group};

use super::gateway::{atomically, LedgerGateway};

/// Group that holds the pool envelope
pub const POOL_GROUP: &str = "Income";

/// Groups created alongside the pool on a fresh ledger
pub const DEFAULT_GROUPS: [&str; 4] = ["Bills", "Needs", "Wants", "Savings"];

/// Initialize storage for a fresh installation
///
/// Returns `true` when anything was created. Running it again on an
/// initialized ledger changes nothing.
pub fn initialize_storage<G>(gateway: &G, settings: &Settings) -> Result<bool, LedgerError>
where
    G: LedgerGateway + ?Sized,
{
    atomically(gateway, |g| {
        let fresh = g.is_empty()?;
        let mut created = false;

        if g.group_by_name(POOL_GROUP)?.is_none() {
            g.insert_group(Group::new(POOL_GROUP))?;
            created = true;
        }

        if g.envelope_by_name(&settings.pool_envelope)?.is_none() {
            g.insert_envelope(Envelope::new(POOL_GROUP, settings.pool_envelope.as_str()))?;
            created = true;
        }

        if fresh {
            for name in DEFAULT_GROUPS {
                g.insert_group(Group::new(name))?;
            }
        }

        if created {
            info!(pool = %settings.pool_envelope, fresh, "ledger initialized");
        }
        Ok(created)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerPaths;
    use crate::models::Money;
    use crate::storage::{Storage, StorageLayout};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(StorageLayout::from_paths(&paths)).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_initialize_storage() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        assert!(initialize_storage(&storage, &settings).unwrap());

        let pool = storage.envelope_by_name("Income Pool").unwrap().unwrap();
        assert_eq!(pool.group, POOL_GROUP);
        assert_eq!(pool.balance, Money::zero());

        let names: Vec<_> = storage
            .list_groups()
            .unwrap()
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(names, vec!["Income", "Bills", "Needs", "Wants", "Savings"]);
        assert!(storage.layout().groups.exists());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        initialize_storage(&storage, &settings).unwrap();
        assert!(!initialize_storage(&storage, &settings).unwrap());

        assert_eq!(storage.list_groups().unwrap().len(), 5);
        assert_eq!(storage.list_envelopes().unwrap().len(), 1);
    }

    #[test]
    fn test_custom_pool_name() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings {
            pool_envelope: "Unassigned".into(),
            ..Settings::default()
        };

        initialize_storage(&storage, &settings).unwrap();
        assert!(storage.envelope_by_name("Unassigned").unwrap().is_some());
        assert!(storage.envelope_by_name("Income Pool").unwrap().is_none());
    }

    #[test]
    fn test_missing_pool_added_to_existing_ledger() {
        let (_temp_dir, storage) = create_test_storage();

        storage.begin().unwrap();
        storage.insert_group(Group::new("Needs")).unwrap();
        storage.commit().unwrap();

        assert!(initialize_storage(&storage, &Settings::default()).unwrap());

        // Not fresh, so only the pool and its group are added
        let names: Vec<_> = storage
            .list_groups()
            .unwrap()
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(names, vec!["Needs", "Income"]);
    }
}
