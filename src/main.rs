mod api;
mod commands;
mod settings;
mod util;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use dotenv::dotenv;
use eyre::eyre;
use tracing::{info, warn};

use api::registrar::{CommandRegistrar, HttpTransport};
use api::schema::command::CommandDefinition;
use api::schema::response::Submission;
use settings::Settings;

/// Register this application's slash commands with one guild.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// JSON settings file; missing is fine when the environment has everything.
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Print the payloads instead of sending them.
    #[arg(long)]
    dry_run: bool,

    /// Only register these commands (repeatable).
    #[arg(long = "only", value_name = "NAME")]
    only: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt().with_writer(writer).init();
    dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;
    let definitions = commands::select(commands::definitions(), &cli.only)?;

    if cli.dry_run {
        print!("{}", dry_run(&settings, &definitions)?);
        return Ok(());
    }

    for cmd in &definitions {
        for problem in util::lint(cmd)? {
            warn!("{problem}");
        }
    }

    let transport = HttpTransport::new(settings.request_timeout()?)?;
    let registrar = CommandRegistrar::new(settings.endpoint()?, settings.credential()?, transport);
    info!("Registering {} commands at {}", definitions.len(), registrar.endpoint());

    let submissions = registrar.register(&definitions).await;
    for submission in &submissions {
        println!("{}", util::report::line(submission));
    }
    println!("{}", util::report::summary(&submissions));

    outcome(&submissions)
}

/// Payloads and lint notes for `--dry-run`. Needs neither ids nor a credential.
fn dry_run(settings: &Settings, definitions: &[CommandDefinition]) -> Result<String> {
    let mut out = match settings.endpoint() {
        Ok(endpoint) => format!("POST {endpoint}\n"),
        Err(why) => format!("POST <endpoint unavailable: {why}>\n"),
    };
    for cmd in definitions {
        for problem in util::lint(cmd)? {
            out.push_str(&format!("# {problem}\n"));
        }
        out.push_str(&serde_json::to_string_pretty(cmd)?);
        out.push('\n');
    }
    Ok(out)
}

fn outcome(submissions: &[Submission]) -> Result<()> {
    let failed = submissions.iter().filter(|s| !s.is_ok()).count();
    if failed > 0 {
        return Err(eyre!(
            "{failed} of {} command registrations failed",
            submissions.len()
        ));
    }
    Ok(())
}
