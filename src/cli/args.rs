//! Command-line argument parsing.

use crate::config::ShellConfig;
use crate::error::ConfigError;
use crate::theme::ThemePreference;

pub const USAGE: &str = "\
Usage: hrbuddie [OPTIONS]

Options:
  --route PATH         Start on PATH (default /dashboard)
  --theme THEME        light, dark or system (default system)
  --collapsed          Start with the sidebar collapsed
  --prefs FILE         Preference file location
  --nav FILE           Load navigation entries from a JSON file
  --breakpoint COLS    Narrow-layout width (default 80)
  -V, --version        Print version
  -h, --help           Print this help

Keys: ↑/↓ move  Enter open  Esc close  Ctrl+B sidebar  t theme  m menu  Backspace back  q quit";

/// What the binary should do.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Version,
    Help,
    /// Run the shell with this configuration
    Run(ShellConfig),
}

fn value<I>(flag: &str, args: &mut I) -> Result<String, ConfigError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or_else(|| ConfigError::MissingValue {
        flag: flag.to_string(),
    })
}

fn invalid(flag: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse arguments (program name first). Unknown flags are ignored.
///
/// ```
/// use hrbuddie::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["hrbuddie".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut config = ShellConfig::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--collapsed" => config = config.with_collapsed(true),
            "--route" => {
                let route = value(&arg, &mut args)?;
                if !route.starts_with('/') {
                    return Err(invalid(&arg, &route, "routes start with '/'"));
                }
                config = config.with_initial_route(route);
            }
            "--theme" => {
                let raw = value(&arg, &mut args)?;
                let theme = ThemePreference::parse(&raw)
                    .ok_or_else(|| invalid(&arg, &raw, "expected light, dark or system"))?;
                config = config.with_default_theme(theme);
            }
            "--prefs" => config = config.with_prefs_path(value(&arg, &mut args)?),
            "--nav" => config = config.with_nav_path(value(&arg, &mut args)?),
            "--breakpoint" => {
                let raw = value(&arg, &mut args)?;
                let columns = raw
                    .parse::<u16>()
                    .ok()
                    .filter(|c| *c > 0)
                    .ok_or_else(|| invalid(&arg, &raw, "expected a positive column count"))?;
                config = config.with_mobile_breakpoint(columns);
            }
            _ => {}
        }
    }
    Ok(CliCommand::Run(config))
}
