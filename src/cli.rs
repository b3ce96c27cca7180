use clap::{Parser, Subcommand};

use crate::common::{InputArgs, RenderArgs, ReportArgs, RuntimeArgs};

#[derive(Parser)]
#[command(
    name = "gvbind",
    about = "Render Graphviz DOT descriptions through the native Graphviz libraries",
    long_about = "gvbind loads an installed Graphviz (cgraph and gvc) at runtime and renders DOT \
                  descriptions with it. The install is found automatically in the standard \
                  program directories, or given explicitly with --graphviz-dir.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a DOT file or inline description
    ///
    /// Parses the description with Graphviz, lays it out with the selected
    /// engine and writes the output in the requested format.
    #[command(
        long_about = "Render a graph description with the native Graphviz libraries. The input \
                      is a DOT file, an inline description passed with --dot, or standard input \
                      when neither is given. The raw output is written to --output, or to \
                      standard output. Any format and layout engine supported by the installed \
                      Graphviz plugins may be used."
    )]
    Render {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        render: RenderArgs,

        #[command(flatten)]
        runtime: RuntimeArgs,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Render the three-node demo graph to a PNG file
    #[command(
        long_about = "Render `digraph{a -> b; b -> c; c -> a;}` to PNG and report the image \
                      size. Useful to check that a Graphviz install works with gvbind."
    )]
    Demo {
        /// Output file
        #[arg(
            short,
            long,
            default_value = crate::constants::demo::OUTPUT_FILE,
            env = "GVBIND_DEMO_OUTPUT"
        )]
        output: std::path::PathBuf,

        #[command(flatten)]
        runtime: RuntimeArgs,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Look for an installed Graphviz
    #[command(
        long_about = "Probe the standard install directories for Graphviz and print the \
                      directory holding its shared libraries, along with the library files \
                      that must be present there."
    )]
    Locate {
        #[command(flatten)]
        report: ReportArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    Human,
    Json,
}
