//! Host wrappers that feed mode strings to and from the filesystem.
//!
//! These are thin pass-throughs: each one calls straight into libc and
//! turns a negative return into an [`FsError`] carrying the errno.

use std::mem;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::constants::{S_IALLUGO, S_IRWXA};
use crate::interface::{get_errno, path_to_cstring};
use crate::modemunch::{apply_mode_spec_with, FileMode, ModeError, MunchConfig};

/// Failure of a filesystem mode operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error(transparent)]
    Mode(#[from] ModeError),

    #[error("{call} failed with errno {errno}")]
    Os { call: &'static str, errno: i32 },

    #[error("path contains an interior NUL byte")]
    InvalidPath,
}

impl FsError {
    /// errno a syscall-style caller should report for this failure.
    pub fn errno(&self) -> i32 {
        match self {
            FsError::Mode(err) => err.errno(),
            FsError::Os { errno, .. } => *errno,
            FsError::InvalidPath => libc::EINVAL,
        }
    }
}

fn handle_errno(call: &'static str) -> FsError {
    let errno = get_errno();
    warn!(call, errno, "host call failed");
    FsError::Os { call, errno }
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/stat.2.html
///
/// Returns the full `st_mode` of `path`, file type bits included.
#[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn get_mode<P: AsRef<Path>>(path: P) -> Result<FileMode, FsError> {
    let c_path = path_to_cstring(path.as_ref()).ok_or(FsError::InvalidPath)?;
    let mut statbuf: libc::stat = unsafe { mem::zeroed() };
    let ret = unsafe { libc::stat(c_path.as_ptr(), &mut statbuf) };
    if ret < 0 {
        return Err(handle_errno("stat"));
    }
    Ok(statbuf.st_mode as FileMode)
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/chmod.2.html
///
/// Only the permission bits of `mode` are passed to the host.
#[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display(), mode = mode))]
pub fn set_mode<P: AsRef<Path>>(path: P, mode: FileMode) -> Result<(), FsError> {
    let c_path = path_to_cstring(path.as_ref()).ok_or(FsError::InvalidPath)?;
    let ret = unsafe { libc::chmod(c_path.as_ptr(), (mode & S_IALLUGO) as libc::mode_t) };
    if ret < 0 {
        return Err(handle_errno("chmod"));
    }
    Ok(())
}

/// `chmod(1)` for a single path: read the current mode, apply `spec`,
/// write it back. Returns the new permission bits.
#[instrument(level = "debug", skip(path, config), fields(path = %path.as_ref().display()))]
pub fn chmod_with_spec<P: AsRef<Path>>(
    path: P,
    spec: &str,
    config: &MunchConfig,
) -> Result<FileMode, FsError> {
    let path = path.as_ref();
    let current = get_mode(path)? & S_IALLUGO;
    let mode = apply_mode_spec_with(config, current, spec)? & S_IALLUGO;
    set_mode(path, mode)?;
    debug!(from = current, to = mode, "changed mode");
    Ok(mode)
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/umask.2.html
///
/// Works on the allowed set (`!umask & 0o777`) rather than the raw mask, so
/// `u=rwx,g=rx,o=` means "new files may get at most 0o750". Without a
/// spec the umask is only read. Returns the allowed set in effect after
/// the call.
#[instrument(level = "debug", skip(config))]
pub fn umask_with_spec(spec: Option<&str>, config: &MunchConfig) -> Result<FileMode, FsError> {
    // umask(2) can only be read by setting it, so put the old one back
    let old = unsafe { libc::umask(0) } as FileMode;
    unsafe { libc::umask(old as libc::mode_t) };

    let previous = !old & S_IRWXA;
    let spec = match spec {
        Some(spec) => spec,
        None => return Ok(previous),
    };

    let allowed = apply_mode_spec_with(config, previous, spec)? & S_IRWXA;
    unsafe { libc::umask((!allowed & S_IRWXA) as libc::mode_t) };
    debug!(from = previous, to = allowed, "changed umask");
    Ok(allowed)
}

/// Reference to Linux: https://man7.org/linux/man-pages/man2/mkdir.2.html
///
/// `spec` is applied to a `0o777` base, so both `755` and `go-w` work.
/// The host umask still applies on top. Returns the mode passed to mkdir.
#[instrument(level = "debug", skip(path, config), fields(path = %path.as_ref().display()))]
pub fn mkdir_with_spec<P: AsRef<Path>>(
    path: P,
    spec: &str,
    config: &MunchConfig,
) -> Result<FileMode, FsError> {
    let mode = apply_mode_spec_with(config, S_IRWXA, spec)? & S_IALLUGO;
    let c_path = path_to_cstring(path.as_ref()).ok_or(FsError::InvalidPath)?;
    let ret = unsafe { libc::mkdir(c_path.as_ptr(), mode as libc::mode_t) };
    if ret < 0 {
        return Err(handle_errno("mkdir"));
    }
    Ok(mode)
}
