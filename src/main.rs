use anyhow::Result;
use clap::Parser;

use rbac_console::config::Settings;
use rbac_console::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "rbac-console",
    version,
    about = "Terminal-based user and role administration console",
    long_about = "RBAC Console is an interactive terminal application for managing \
                  users, roles, and permissions. All records live in memory for the \
                  lifetime of the session, and every change is recorded in an audit \
                  trail viewable from inside the console."
)]
struct Cli {
    /// Name recorded as the acting administrator in audit entries
    #[arg(long, env = "RBAC_ACTOR", default_value = "Admin")]
    actor: String,

    /// Start with empty stores instead of the sample users and roles
    #[arg(long)]
    empty: bool,

    /// Milliseconds between UI ticks
    #[arg(long, default_value_t = 250)]
    tick_rate_ms: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings {
        actor: cli.actor,
        tick_rate_ms: cli.tick_rate_ms,
        seed_sample_data: !cli.empty,
    };

    run_tui(settings)
}
