//! Default values shared by the configuration types.

/// Exit status used when the inputs differ, unless configured otherwise.
pub const DEFAULT_DIFF_EXIT_CODE: i32 = 1;

/// Read buffer size for input files.
pub const DEFAULT_READ_BUFFER_BYTES: usize = 64 * 1024;

/// Range of exit statuses accepted for `behavior.diff_exit_code`.
pub const DIFF_EXIT_CODE_RANGE: std::ops::RangeInclusive<i32> = 1..=255;
