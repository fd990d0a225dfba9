//! Runtime configuration resolved from the command line and environment.

use crate::cli::Cli;
use crate::output::Style;
use std::ffi::OsString;
use std::path::PathBuf;

/// Settings shared by every front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub color: bool,
}

impl Config {
    /// Build from parsed arguments, honouring `NO_COLOR`
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(cli, std::env::var_os("NO_COLOR"))
    }

    fn resolve(cli: &Cli, no_color_env: Option<OsString>) -> Self {
        let color_disabled_by_env = no_color_env.is_some_and(|v| !v.is_empty());
        Config {
            db_path: cli.db.clone(),
            color: !cli.no_color && !color_disabled_by_env,
        }
    }

    pub fn style(&self) -> Style {
        Style { color: self.color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DEFAULT_DB_FILE;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("todo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["list"]);
        let config = Config::resolve(&cli, None);
        // the database env var overrides the default when set
        if std::env::var_os("TODO_DB").is_none() {
            assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE));
        }
        assert!(config.color);
        assert_eq!(config.style(), Style::colored());
    }

    #[test]
    fn test_db_flag() {
        let cli = parse(&["--db", "/tmp/elsewhere.db", "list"]);
        let config = Config::resolve(&cli, None);
        assert_eq!(config.db_path, PathBuf::from("/tmp/elsewhere.db"));
    }

    #[test]
    fn test_no_color_flag() {
        let cli = parse(&["list", "--no-color"]);
        assert!(!Config::resolve(&cli, None).color);
    }

    #[test]
    fn test_no_color_env() {
        let cli = parse(&["list"]);
        assert!(!Config::resolve(&cli, Some(OsString::from("1"))).color);
        assert!(Config::resolve(&cli, Some(OsString::new())).color);
    }
}
