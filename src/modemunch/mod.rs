//! Mode string parsing.
//!
//! A mode string comes in one of three shapes, picked by its first
//! character:
//!
//! - `r` or `-`: the nine-character `rwxrwxrwx` form (see [`rwx`]),
//! - `0`..`7`: an absolute octal mode (see [`octal`]),
//! - anything else: a comma-separated list of `ugoa+-=rwxs` clauses
//!   (see [`symbolic`]).
//!
//! Parsing never touches the filesystem and keeps no state between calls;
//! the caller passes the current mode in and gets the new one back.

pub mod errors;
pub mod octal;
pub mod rwx;
pub mod symbolic;

pub use errors::ModeError;
pub use rwx::format_mode;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Numeric file mode. Only the low twelve bits are interpreted; anything
/// above them (e.g. the file type bits of `st_mode`) is carried through.
pub type FileMode = u32;

/// Knobs for [`apply_mode_spec_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MunchConfig {
    /// Reject characters after the ninth in the `rwxrwxrwx` form instead
    /// of ignoring them.
    pub strict_rwx: bool,
}

impl MunchConfig {
    pub fn strict() -> Self {
        MunchConfig { strict_rwx: true }
    }
}

/// Which grammar a mode string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeForm {
    Rwx,
    Octal,
    Symbolic,
}

impl ModeForm {
    /// Classify `spec` by its first character.
    pub fn of(spec: &str) -> ModeForm {
        match spec.as_bytes().first() {
            Some(b'r') | Some(b'-') => ModeForm::Rwx,
            Some(b'0'..=b'7') => ModeForm::Octal,
            _ => ModeForm::Symbolic,
        }
    }
}

/// Apply `spec` to `current` with the default (permissive) configuration.
///
/// ```
/// use modemunch::apply_mode_spec;
///
/// assert_eq!(apply_mode_spec(0o777, "go-w"), Ok(0o755));
/// assert_eq!(apply_mode_spec(0o600, "rwxr-x---"), Ok(0o750));
/// assert_eq!(apply_mode_spec(0o600, "644"), Ok(0o644));
/// ```
pub fn apply_mode_spec(current: FileMode, spec: &str) -> Result<FileMode, ModeError> {
    apply_mode_spec_with(&MunchConfig::default(), current, spec)
}

/// Apply `spec` to `current`, returning the resulting mode.
pub fn apply_mode_spec_with(
    config: &MunchConfig,
    current: FileMode,
    spec: &str,
) -> Result<FileMode, ModeError> {
    let form = ModeForm::of(spec);
    trace!(?form, spec, current, "munching mode");

    let result = match form {
        ModeForm::Rwx => rwx::apply_rwx(current, spec, config.strict_rwx),
        ModeForm::Octal => octal::parse_octal(spec),
        ModeForm::Symbolic => symbolic::apply_symbolic(current, spec),
    };

    if let Err(err) = result {
        debug!(spec, ?form, %err, "rejected mode string");
    }
    result
}
