use crate::api::schema::command::{CommandDefinition, OptionSpec};

/// `/kab month date hour minute` schedules the inactive-member cleanup.
pub fn register() -> CommandDefinition {
    CommandDefinition::new("kab")
        .description("Schedule an event to clean up inactive members.")
        .option(OptionSpec::integer("month", "The month of the event.").required(true))
        .option(OptionSpec::integer("date", "The date of the event.").required(true))
        .option(OptionSpec::integer("hour", "The hour of the event.").required(true))
        .option(OptionSpec::integer("minute", "The minute of the event.").required(true))
}
