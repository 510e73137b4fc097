pub mod report;

use std::collections::HashSet;

use color_eyre::Result;
use regex::Regex;

use crate::api::schema::command::CommandDefinition;

const NAME_PATTERN: &str = r"^[-_\p{Ll}\p{N}]{1,32}$";
const MAX_DESCRIPTION: usize = 100;
const MAX_OPTIONS: usize = 25;

/// Check a definition against the platform's published shape rules.
///
/// Problems are advisory: the platform has the final say and the
/// definition is submitted either way.
pub fn lint(cmd: &CommandDefinition) -> Result<Vec<String>> {
    let name_re = Regex::new(NAME_PATTERN)?;
    let mut problems = Vec::new();

    if !name_re.is_match(&cmd.name) {
        problems.push(format!("{:?}: name must be 1-32 lowercase letters, digits, '-' or '_'", cmd.name));
    }
    if let Some(problem) = check_description(&cmd.description) {
        problems.push(format!("{:?}: {problem}", cmd.name));
    }
    if cmd.options.len() > MAX_OPTIONS {
        problems.push(format!(
            "{:?}: {} options, at most {MAX_OPTIONS} allowed",
            cmd.name,
            cmd.options.len()
        ));
    }

    let mut seen = HashSet::new();
    let mut optional_seen = false;
    for opt in &cmd.options {
        let at = format!("{:?} option {:?}", cmd.name, opt.name);
        if !name_re.is_match(&opt.name) {
            problems.push(format!("{at}: name must be 1-32 lowercase letters, digits, '-' or '_'"));
        }
        if !seen.insert(opt.name.as_str()) {
            problems.push(format!("{at}: declared more than once"));
        }
        if let Some(problem) = check_description(&opt.description) {
            problems.push(format!("{at}: {problem}"));
        }
        if opt.required && optional_seen {
            problems.push(format!("{at}: required options must come before optional ones"));
        }
        optional_seen |= !opt.required;
    }

    Ok(problems)
}

fn check_description(description: &str) -> Option<String> {
    let len = description.chars().count();
    if len == 0 {
        Some("description is empty".to_string())
    } else if len > MAX_DESCRIPTION {
        Some(format!("description is {len} characters, at most {MAX_DESCRIPTION} allowed"))
    } else {
        None
    }
}
