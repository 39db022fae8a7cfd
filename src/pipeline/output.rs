//! Output routing for diff reports.

use crate::error::{NanodiffError, Result};
use std::fs::File;
use std::io::{BufWriter, IsTerminal, Write};
use std::path::PathBuf;

/// Target for output - either stdout or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Check if output is to a terminal
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }

    /// Open a buffered writer for this target.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
            Self::File(path) => {
                let file = File::create(path).map_err(|e| NanodiffError::io(path, e))?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// Color is used only for terminals, and never when disabled by flag or by
/// the `NO_COLOR` environment variable.
#[must_use]
pub fn should_use_color(no_color_flag: bool, target: &OutputTarget) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none() && target.is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_target_from_option() {
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);

        let path = PathBuf::from("/tmp/diff.txt");
        assert_eq!(
            OutputTarget::from_option(Some(path.clone())),
            OutputTarget::File(path)
        );
    }

    #[test]
    fn test_file_target_is_not_terminal() {
        let target = OutputTarget::File(PathBuf::from("/tmp/diff.txt"));
        assert!(!target.is_terminal());
        assert!(!should_use_color(false, &target));
    }

    #[test]
    fn test_no_color_flag_wins() {
        assert!(!should_use_color(true, &OutputTarget::Stdout));
    }

    #[test]
    fn test_open_file_target() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");
        {
            let mut writer = OutputTarget::File(path.clone()).open().unwrap();
            writer.write_all(b"-x\n").unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "-x\n");
    }

    #[test]
    fn test_open_file_in_missing_dir() {
        let target = OutputTarget::File(PathBuf::from("/nonexistent/dir/out.txt"));
        assert!(target.open().is_err());
    }
}
