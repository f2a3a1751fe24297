//! Demo command - manage demo mode

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::get_roster_dir;
use roster_core::services::DemoService;

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Enable demo mode
    #[command(name = "on")]
    On,
    /// Disable demo mode
    #[command(name = "off")]
    Off,
    /// Show demo mode status
    Status,
}

pub fn run(command: Option<DemoCommands>) -> Result<()> {
    let roster_dir = get_roster_dir()?;
    std::fs::create_dir_all(&roster_dir)?;
    let demo_service = DemoService::new(&roster_dir);

    match command {
        Some(DemoCommands::On) => {
            demo_service.enable()?;
            println!("{}", "Demo mode enabled".green());
            println!("Queries without --file now use the demo roster. Try 'roster status'.");
            Ok(())
        }
        Some(DemoCommands::Off) => {
            demo_service.disable()?;
            println!("{}", "Demo mode disabled".yellow());
            Ok(())
        }
        Some(DemoCommands::Status) | None => {
            if demo_service.is_enabled()? {
                println!("Demo mode is {}", "ON".green());
            } else {
                println!("Demo mode is {}", "OFF".yellow());
            }
            Ok(())
        }
    }
}
