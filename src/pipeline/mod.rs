//! Input provisioning and output routing around the diff engine.
//!
//! The engine assumes valid, open streams. This module validates the input
//! paths, opens them, and decides where and how the report is written.

mod input;
mod output;

pub use input::{normalize_path, open_input, OpenedInput};
pub use output::{should_use_color, OutputTarget};

/// Exit codes for CI/CD and grading integration
pub mod exit_codes {
    /// The inputs match
    pub const SUCCESS: i32 = 0;
    /// The inputs differ (default; configurable)
    pub const DIFFERENCES: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::DIFFERENCES, 1);
        assert_eq!(exit_codes::ERROR, 2);
        assert_eq!(
            exit_codes::DIFFERENCES,
            crate::config::DEFAULT_DIFF_EXIT_CODE
        );
    }
}
