use color_eyre::Result;
use eyre::eyre;

use crate::api::schema::command::CommandDefinition;

pub mod cancel;
pub mod kab;

/// Every command this application owns, in submission order.
pub fn definitions() -> Vec<CommandDefinition> {
    vec![cancel::register(), kab::register()]
}

/// Keep only the named definitions, in table order. Empty `names` keeps all.
pub fn select(table: Vec<CommandDefinition>, names: &[String]) -> Result<Vec<CommandDefinition>> {
    if let Some(unknown) = names
        .iter()
        .find(|name| !table.iter().any(|cmd| &cmd.name == *name))
    {
        return Err(eyre!("Unknown command: {unknown}"));
    }
    if names.is_empty() {
        return Ok(table);
    }

    Ok(table
        .into_iter()
        .filter(|cmd| names.contains(&cmd.name))
        .collect())
}
