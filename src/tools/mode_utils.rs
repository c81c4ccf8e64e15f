//! Mode Utils
//!
//! A small front end over the `modemunch` library: apply mode strings to
//! numbers or files, inspect file modes, and read or change the umask.
//!
//! # Usage
//! ```sh
//! mode_utils apply 644 u+x          # 0o744 rwxr--r--
//! mode_utils chmod go-w a.txt b.txt
//! mode_utils show a.txt
//! mode_utils umask u=rwx,g=rx,o=
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use modemunch::{
    apply_mode_spec_with, chmod_with_spec, format_mode, get_mode, umask_with_spec, FileMode,
    MunchConfig,
};

#[derive(Debug, Parser, Clone)]
#[command(name = "mode_utils")]
struct CliOptions {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Reject trailing characters after a nine-character rwxrwxrwx mode
    #[arg(
        long,
        env = "MODEMUNCH_STRICT",
        global = true,
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    strict: bool,

    /// Print one JSON object per result instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand, Clone)]
enum Command {
    /// Apply SPEC to an octal CURRENT mode and print the result
    Apply {
        #[arg(value_parser = parse_octal_arg)]
        current: FileMode,
        spec: String,
    },
    /// Apply SPEC to each PATH
    Chmod {
        spec: String,
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the mode of each PATH
    Show {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the allowed permission set, changing it first if SPEC is given
    Umask { spec: Option<String> },
}

#[derive(Debug, Serialize)]
struct ModeReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    mode: FileMode,
    octal: String,
    symbolic: String,
}

fn parse_octal_arg(s: &str) -> Result<FileMode, String> {
    let digits = s.strip_prefix("0o").unwrap_or(s);
    FileMode::from_str_radix(digits, 8).map_err(|e| format!("not an octal mode: {}", e))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn render_report(json: bool, path: Option<&str>, mode: FileMode) -> Result<String> {
    let perms = mode & 0o7777;
    let entry = ModeReport {
        path,
        mode,
        octal: format!("0o{:o}", perms),
        symbolic: format_mode(perms),
    };
    if json {
        return Ok(serde_json::to_string(&entry)?);
    }
    Ok(match path {
        Some(path) => format!("{} {} {}", entry.octal, entry.symbolic, path),
        None => format!("{} {}", entry.octal, entry.symbolic),
    })
}

fn report(json: bool, path: Option<&str>, mode: FileMode) -> Result<()> {
    println!("{}", render_report(json, path, mode)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = CliOptions::parse();
    init_logging(cli.verbose);

    let config = MunchConfig {
        strict_rwx: cli.strict,
    };

    match &cli.command {
        Command::Apply { current, spec } => {
            let mode = apply_mode_spec_with(&config, *current, spec)
                .with_context(|| format!("cannot apply mode '{}'", spec))?;
            report(cli.json, None, mode)?;
        }
        Command::Chmod { spec, paths } => {
            for path in paths {
                let mode = chmod_with_spec(path, spec, &config)
                    .with_context(|| format!("changing permissions of '{}'", path))?;
                report(cli.json, Some(path), mode)?;
            }
        }
        Command::Show { paths } => {
            for path in paths {
                let mode = get_mode(path).with_context(|| format!("cannot stat '{}'", path))?;
                report(cli.json, Some(path), mode)?;
            }
        }
        Command::Umask { spec } => {
            let allowed = umask_with_spec(spec.as_deref(), &config)
                .with_context(|| format!("cannot set umask '{}'", spec.as_deref().unwrap_or("")))?;
            report(cli.json, None, allowed)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_octal_arg() {
        assert_eq!(parse_octal_arg("755"), Ok(0o755));
        assert_eq!(parse_octal_arg("0o755"), Ok(0o755));
        assert_eq!(parse_octal_arg("0"), Ok(0));
        assert!(parse_octal_arg("9").is_err());
        assert!(parse_octal_arg("0x1f").is_err());
        assert!(parse_octal_arg("").is_err());
    }

    #[test]
    fn test_render_report_text() {
        assert_eq!(render_report(false, None, 0o755).unwrap(), "0o755 rwxr-xr-x");
        assert_eq!(
            render_report(false, Some("a.txt"), 0o100644).unwrap(),
            "0o644 rw-r--r-- a.txt"
        );
    }

    #[test]
    fn test_render_report_json() {
        let line = render_report(true, Some("bin/tool"), 0o104755).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["path"], "bin/tool");
        assert_eq!(value["mode"].as_u64(), Some(0o104755));
        assert_eq!(value["octal"], "0o4755");
        assert_eq!(value["symbolic"], "rwsr-xr-x");

        let line = render_report(true, None, 0o750).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert!(value.get("path").is_none());
        assert_eq!(value["octal"], "0o750");
    }

    #[test]
    fn test_cli_subcommands() {
        let cli = CliOptions::try_parse_from(["mode_utils", "-vv", "--json", "apply", "0o600", "u+x"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        match cli.command {
            Command::Apply { current, spec } => {
                assert_eq!(current, 0o600);
                assert_eq!(spec, "u+x");
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cli = CliOptions::try_parse_from(["mode_utils", "chmod", "go-w", "a", "b"]).unwrap();
        match cli.command {
            Command::Chmod { spec, paths } => {
                assert_eq!(spec, "go-w");
                assert_eq!(paths, vec!["a", "b"]);
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cli = CliOptions::try_parse_from(["mode_utils", "umask"]).unwrap();
        assert!(matches!(cli.command, Command::Umask { spec: None }));

        assert!(CliOptions::try_parse_from(["mode_utils", "apply", "9", "u+x"]).is_err());
        assert!(CliOptions::try_parse_from(["mode_utils", "show"]).is_err());
    }

    // The only test that touches MODEMUNCH_STRICT, so nothing races on it
    #[test]
    fn test_cli_strict_flag_and_env() {
        std::env::remove_var("MODEMUNCH_STRICT");
        let cli = CliOptions::try_parse_from(["mode_utils", "show", "x"]).unwrap();
        assert!(!cli.strict);

        let cli = CliOptions::try_parse_from(["mode_utils", "--strict", "show", "x"]).unwrap();
        assert!(cli.strict);

        for (value, expected) in [("1", true), ("true", true), ("yes", true), ("0", false), ("false", false)] {
            std::env::set_var("MODEMUNCH_STRICT", value);
            let cli = CliOptions::try_parse_from(["mode_utils", "show", "x"]).unwrap();
            assert_eq!(cli.strict, expected, "MODEMUNCH_STRICT={}", value);
        }
        std::env::remove_var("MODEMUNCH_STRICT");

        let config = MunchConfig { strict_rwx: true };
        assert!(apply_mode_spec_with(&config, 0, "rwxr-xr-x junk").is_err());
    }
}
