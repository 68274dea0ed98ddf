// Entrypoint for the demo CLI.
// - Builds the UI once from env + flags, then walks through each kind of
//   output and prompt.
// - Returns `anyhow::Result` so prompt failures end the run with context.

use anyhow::{Context, Result};
use clap::Parser;
use cli_ui::logging::Logging;
use cli_ui::{ChoiceOpts, Table, TextOpts, Ui, UiConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Walk through the console UI")]
struct Args {
    /// Answer every prompt with its default
    #[arg(long)]
    non_interactive: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Write logs to this file (relative paths go under the local data dir)
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = UiConfig::from_env();
    config.non_interactive |= args.non_interactive;
    config.debug |= args.debug;

    let mut logging = Logging::new().with_debug_mode(config.debug);
    if let Some(file) = &args.log_file {
        logging = logging.with_file(file);
    }
    logging.start()?;

    let mut ui = config.build_ui();
    log::debug!("starting with {config:?}");

    run(ui.as_mut())?;
    ui.flush();
    Ok(())
}

fn run(ui: &mut dyn Ui) -> Result<()> {
    let mut services = Table::new(["Service", "State"]).with_title("Services");
    services.add_row(["web", "running"]);
    services.add_row(["worker", "stopped"]);
    services.add_note("2 services");
    ui.print_table(&services);

    let name = ui
        .ask_for_text(
            TextOpts::new("Deployment name")
                .with_default("staging")
                .with_validator(|name| {
                    if name.contains(char::is_whitespace) {
                        anyhow::bail!("Deployment name '{name}' must not contain spaces");
                    }
                    Ok(!name.is_empty())
                }),
        )
        .context("Reading deployment name")?;

    let sizes = ["0", "1", "2", "3"];
    let replicas = ui
        .ask_for_choice(ChoiceOpts::new("Replicas", sizes).with_default(1))
        .context("Reading replica count")?;

    ui.begin_line(format_args!("Deploying '{name}' with {replicas} replica(s)"));
    ui.end_line(format_args!("..."));

    ui.ask_for_confirmation()?;
    ui.print_line(format_args!("Deployed '{name}'"));

    Ok(())
}
