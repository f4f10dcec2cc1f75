//! Groups table, stored in groups.json

use crate::models::Group;

use super::table::{Row, Table};

pub type GroupTable = Table<Group>;

impl Row for Group {
    const TABLE: &'static str = "groups";

    fn unique_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn check(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_insert_and_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("groups.json");
        let table = GroupTable::new(path.clone());

        table.insert(Group::new("Bills")).unwrap();
        table.insert(Group::new("Needs")).unwrap();
        table.save().unwrap();

        let reloaded = GroupTable::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.len().unwrap(), 2);
        assert!(reloaded.find_by_name("needs").unwrap().is_some());
    }
}
