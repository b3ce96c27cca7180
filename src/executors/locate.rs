//! Locate command executor

use std::path::PathBuf;

use miette::{Result, WrapErr};

use crate::config::LocateConfig;
use crate::constants::install::ROOTS;
use crate::executors::CommandExecutor;
use crate::native::{discover_install_path, required_library_files};
use crate::reports::{LocateSummary, generator_for};

pub struct LocateExecutor;

impl CommandExecutor for LocateExecutor {
    type Config = LocateConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let summary = LocateSummary {
            install_path: discover_install_path(),
            roots: ROOTS.iter().map(PathBuf::from).collect(),
            required_libraries: required_library_files(),
        };

        let report = generator_for(config.report)
            .locate_report(&summary)
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        Ok(())
    }
}
