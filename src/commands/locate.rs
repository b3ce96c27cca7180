//! Locate command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::LocateConfig;
use crate::error::GvError;

impl FromCommand for LocateConfig {
    fn from_command(command: Commands) -> Result<Self, GvError> {
        match command {
            Commands::Locate { report } => LocateConfig::builder()
                .with_report(report.report)
                .build(),
            _ => Err(GvError::ConfigurationError {
                message: "Invalid command type for LocateConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(LocateConfig);

/// Execute the locate command
pub fn execute_locate_command(command: Commands) -> Result<()> {
    let config = LocateConfig::from_command(command)
        .wrap_err("Failed to parse locate command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::locate::LocateExecutor;
    LocateExecutor::execute(config)
}
