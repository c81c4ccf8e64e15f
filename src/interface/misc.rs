// Misc functions for interface
// errno access, path conversion
use std::ffi::CString;
use std::path::Path;

use std::os::unix::ffi::OsStrExt;

pub fn get_errno() -> i32 {
    std::io::Error::last_os_error()
        .raw_os_error()
        .unwrap_or(libc::EIO)
}

// Convert a host path into a C string for libc.
// Returns None if the path has an interior NUL byte.
pub fn path_to_cstring(path: &Path) -> Option<CString> {
    CString::new(path.as_os_str().as_bytes()).ok()
}
