//! Configuration constants for gvbind
//!
//! Defaults for the renderer, the install locations probed during discovery
//! and the CLI presentation.

use std::time::Duration;

/// Layout defaults
pub mod layout {
    /// Hierarchical layout engine used when none is configured
    pub const DEFAULT_ENGINE: &str = "dot";
}

/// Output formatting configuration
pub mod output {
    /// Native render format used by the convenience entry points
    pub const DEFAULT_FORMAT: &str = "png";

    /// Default summary format for CLI reports
    pub const DEFAULT_REPORT: &str = "human";
}

/// Where an installed Graphviz is looked for
pub mod install {
    /// Wildcard matched (case-insensitively) against install directory names
    pub const DIR_PATTERN: &str = "graph*viz*";

    /// Libraries that must all be present in the binaries directory
    pub const REQUIRED_LIBRARIES: &[&str] = &["cgraph", "gvc"];

    #[cfg(windows)]
    pub const ROOTS: &[&str] = &[r"C:\Program Files", r"C:\Program Files (x86)"];

    #[cfg(not(windows))]
    pub const ROOTS: &[&str] = &["/opt/homebrew/opt", "/usr/local/opt", "/opt"];

    /// Subdirectory of the install directory holding the shared libraries
    #[cfg(windows)]
    pub const BIN_DIR: &str = "bin";

    #[cfg(not(windows))]
    pub const BIN_DIR: &str = "lib";

    /// Environment variable holding the dynamic-library search path
    #[cfg(windows)]
    pub const SEARCH_PATH_VAR: &str = "PATH";

    #[cfg(target_os = "macos")]
    pub const SEARCH_PATH_VAR: &str = "DYLD_LIBRARY_PATH";

    #[cfg(not(any(windows, target_os = "macos")))]
    pub const SEARCH_PATH_VAR: &str = "LD_LIBRARY_PATH";
}

/// Demo application input
pub mod demo {
    /// Three-node cycle rendered by `gvbind demo`
    pub const TRIANGLE: &str = "digraph{a -> b; b -> c; c -> a;}";

    pub const OUTPUT_FILE: &str = "triangle.png";
}

/// Logging configuration
pub mod logging {
    /// Environment variable read by the tracing filter
    pub const FILTER_ENV: &str = "GVBIND_LOG";

    pub const DEFAULT_FILTER: &str = "warn";
}

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while the native library works
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants() {
        assert_eq!(layout::DEFAULT_ENGINE, "dot");
        assert_eq!(output::DEFAULT_FORMAT, "png");
    }

    #[test]
    fn test_install_constants() {
        assert_eq!(install::REQUIRED_LIBRARIES, &["cgraph", "gvc"]);
        assert!(!install::ROOTS.is_empty());
        assert_eq!(install::DIR_PATTERN, "graph*viz*");
    }

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 4);
    }
}
