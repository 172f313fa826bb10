//! CLI argument parsing for per-crate debug flags
//!
//! Supports flags like `--debug-studentbus-roster` or `--debug-all` to turn on
//! debug output for selected crates while everything else stays at the base
//! level.

use std::collections::BTreeSet;
use std::env;

use crate::KNOWN_CRATES;

/// Environment variable listing crates to debug (comma-separated, or `all`)
pub const DEBUG_ENV: &str = "STUDENTBUS_DEBUG";

/// Per-crate debug switches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrateDebugFlags {
    pub enabled_crates: BTreeSet<String>,
}

impl CrateDebugFlags {
    /// Parse debug flags from command-line arguments
    ///
    /// Looks for arguments matching `--debug-{crate-name}`. `--debug-all`
    /// enables every known crate.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut flags = CrateDebugFlags::default();

        for arg in args {
            if arg == "--debug-all" {
                flags.enable_all();
                continue;
            }

            if let Some(crate_name) = arg.strip_prefix("--debug-") {
                flags.enabled_crates.insert(crate_name.to_string());
            }
        }

        flags
    }

    /// Merge a `STUDENTBUS_DEBUG`-style value (`all` or `a,b,c`)
    pub fn merge_env_value(&mut self, value: &str) {
        if value.trim() == "all" {
            self.enable_all();
            return;
        }
        for crate_name in value.split(',') {
            let crate_name = crate_name.trim();
            if !crate_name.is_empty() {
                self.enabled_crates.insert(crate_name.to_string());
            }
        }
    }

    fn enable_all(&mut self) {
        for crate_name in KNOWN_CRATES {
            self.enabled_crates.insert(crate_name.to_string());
        }
    }

    /// Check if debug is enabled for a specific crate
    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.enabled_crates.contains(crate_name)
    }

    /// Check if debug is enabled for any crate
    pub fn any_enabled(&self) -> bool {
        !self.enabled_crates.is_empty()
    }

    /// Build an `EnvFilter` directive string
    ///
    /// Crate names are converted to tracing targets (`-` becomes `_`).
    /// Format: `studentbus_roster=debug,info`, or just `base` if none enabled.
    pub fn to_filter_string(&self, base: &str) -> String {
        let mut filters: Vec<String> = self
            .enabled_crates
            .iter()
            .map(|name| format!("{}=debug", name.replace('-', "_")))
            .collect();
        filters.push(base.to_string());
        filters.join(",")
    }
}

/// Parse debug flags from process arguments and `STUDENTBUS_DEBUG`
pub fn parse_debug_flags() -> CrateDebugFlags {
    let mut flags = CrateDebugFlags::from_args(env::args());

    if let Ok(value) = env::var(DEBUG_ENV) {
        flags.merge_env_value(&value);
    }

    flags
}

/// Strip debug flags from an argument list so clap does not see them
pub fn strip_debug_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .filter(|arg| !arg.starts_with("--debug-"))
        .collect()
}

/// Generate help text for debug flags
pub fn debug_flags_help() -> String {
    format!(
        r#"Debug Flags:
  --debug-all                    Enable debug logging for all crates
  --debug-{{crate-name}}          Enable debug logging for specific crate

Available crates:
  {}

Environment Variable:
  {}={{crate-name}}[,{{crate-name}}]  Enable debug for crates (comma-separated)
  {}=all                               Enable debug for all crates
"#,
        KNOWN_CRATES.join(", "),
        DEBUG_ENV,
        DEBUG_ENV
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_crate_flag() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-studentbus-roster".to_string()]);
        assert!(flags.is_enabled("studentbus-roster"));
        assert!(!flags.is_enabled("studentbus-node"));
    }

    #[test]
    fn test_debug_all() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-all".to_string()]);
        for crate_name in KNOWN_CRATES {
            assert!(flags.is_enabled(crate_name), "{} should be enabled", crate_name);
        }
    }

    #[test]
    fn test_unrelated_args_ignored() {
        let flags = CrateDebugFlags::from_args(vec![
            "studentbus".to_string(),
            "--mode".to_string(),
            "server".to_string(),
        ]);
        assert!(!flags.any_enabled());
    }

    #[test]
    fn test_merge_env_value() {
        let mut flags = CrateDebugFlags::default();
        flags.merge_env_value(" studentbus-node , ,studentbus-config");
        assert!(flags.is_enabled("studentbus-node"));
        assert!(flags.is_enabled("studentbus-config"));
        assert_eq!(flags.enabled_crates.len(), 2);
    }

    #[test]
    fn test_filter_string() {
        let flags = CrateDebugFlags::from_args(vec![
            "--debug-studentbus-transports".to_string(),
            "--debug-studentbus-node".to_string(),
        ]);
        assert_eq!(
            flags.to_filter_string("warn"),
            "studentbus_node=debug,studentbus_transports=debug,warn"
        );
        assert_eq!(CrateDebugFlags::default().to_filter_string("info"), "info");
    }

    #[test]
    fn test_strip_debug_args() {
        let args = strip_debug_args(vec![
            "studentbus".to_string(),
            "--debug-all".to_string(),
            "-m".to_string(),
            "client".to_string(),
        ]);
        assert_eq!(args, vec!["studentbus", "-m", "client"]);
    }
}
