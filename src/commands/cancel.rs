use crate::api::schema::command::CommandDefinition;

pub fn register() -> CommandDefinition {
    CommandDefinition::new("cancel").description("Cancel the scheduled event.")
}
