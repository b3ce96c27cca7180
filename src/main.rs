use miette::Result;

/// Main entry point for the gvbind CLI
fn main() -> Result<()> {
    // Install miette's panic and error handler for beautiful error reporting
    miette::set_panic_hook();

    gvbind::run()
}
