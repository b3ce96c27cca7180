//! Command implementations for the gvbind CLI
//!
//! - render: render a DOT file or inline description
//! - demo: render the three-node demo graph
//! - locate: look for an installed Graphviz

pub mod locate;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Render { .. } | Commands::Demo { .. } => render::execute_render_command(command),
        Commands::Locate { .. } => locate::execute_locate_command(command),
    }
}
