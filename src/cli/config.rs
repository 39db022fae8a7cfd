//! Config command handler.

use crate::config::{self, file, AppConfig};
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::Path;

/// Actions of the `config` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the search paths and the discovered file
    Path,
    /// Write an example `.nanodiff.yaml` into the current directory
    Init,
    /// Print the JSON schema of the config file
    Schema,
}

/// Run the config command, writing human-readable output to `out`.
pub fn run_config(
    action: ConfigAction,
    explicit_path: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = config::load_or_default(explicit_path);
            match loaded_from {
                Some(path) => writeln!(out, "# Loaded from {}", path.display())?,
                None => writeln!(out, "# No config file found; showing defaults")?,
            }
            write!(out, "{}", render_config(&config)?)?;
        }
        ConfigAction::Path => {
            writeln!(out, "Search order:")?;
            if let Some(path) = explicit_path {
                writeln!(out, "  {} (--config)", path.display())?;
            }
            for dir in file::search_dirs() {
                for name in file::CONFIG_FILE_NAMES {
                    writeln!(out, "  {}", dir.join(name).display())?;
                }
            }
            match config::discover_config_file(explicit_path) {
                Some(path) => writeln!(out, "Found: {}", path.display())?,
                None => writeln!(out, "Found: none")?,
            }
        }
        ConfigAction::Init => {
            let target = Path::new(file::CONFIG_FILE_NAMES[0]);
            init_config(target)?;
            writeln!(out, "Wrote {}", target.display())?;
        }
        ConfigAction::Schema => {
            writeln!(out, "{}", config::generate_json_schema()?)?;
        }
    }
    Ok(())
}

fn render_config(config: &AppConfig) -> Result<String> {
    serde_yaml::to_string(config).context("Failed to serialize configuration")
}

/// Write the example config to `target`, refusing to overwrite.
fn init_config(target: &Path) -> Result<()> {
    if target.exists() {
        bail!(
            "{} already exists. Remove it first to re-initialize.",
            target.display()
        );
    }
    std::fs::write(target, config::generate_example_config())
        .with_context(|| format!("Failed to write {}", target.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(action: ConfigAction, explicit: Option<&Path>) -> String {
        let mut out = Vec::new();
        run_config(action, explicit, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_show_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.yaml");
        std::fs::write(&path, "diff:\n  strategy: eager\n").unwrap();

        let out = run(ConfigAction::Show, Some(&path));
        assert!(out.starts_with("# Loaded from"));
        assert!(out.contains("strategy: eager"));
    }

    #[test]
    fn test_path_lists_explicit_first() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.yaml");
        std::fs::write(&path, "").unwrap();

        let out = run(ConfigAction::Path, Some(&path));
        let second_line = out.lines().nth(1).unwrap();
        assert!(second_line.contains("(--config)"));
        assert!(out.contains(&format!("Found: {}", path.display())));
    }

    #[test]
    fn test_schema() {
        let out = run(ConfigAction::Schema, None);
        assert!(out.contains("\"strategy\""));
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join(".nanodiff.yaml");

        init_config(&target).unwrap();
        let written: AppConfig =
            serde_yaml::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
        assert_eq!(written, AppConfig::default());

        assert!(init_config(&target).is_err());
    }
}
