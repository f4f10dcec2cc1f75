//! Group CLI commands

use clap::Subcommand;

use crate::display::format_group_list;
use crate::error::LedgerResult;
use crate::services::GroupService;
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum GroupCommands {
    /// Create a new envelope group
    Create {
        name: String,
    },
    /// List all groups
    List,
}

pub fn handle_group_command(storage: &Storage, cmd: GroupCommands) -> LedgerResult<()> {
    let service = GroupService::new(storage);

    match cmd {
        GroupCommands::Create { name } => {
            let group = service.create(&name)?;
            println!("Created group: {}", group.name);
        }
        GroupCommands::List => {
            println!("{}", format_group_list(&service.list()?));
        }
    }

    Ok(())
}
