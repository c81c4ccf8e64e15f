// modemunch - chmod-style file mode string handling
//
// This library turns mode-change strings (`u+x,go-w`, `rwxr-xr-x`, `0644`)
// into numeric file modes, and provides thin host wrappers that read and
// persist those modes through stat/chmod/umask/mkdir.

pub mod constants;
pub mod fs_calls;
pub mod interface;
pub mod modemunch;

mod tests;

// Re-export the parser entry points for callers and integration tests
pub use modemunch::{
    apply_mode_spec, apply_mode_spec_with, format_mode, FileMode, ModeError, MunchConfig,
};
pub use fs_calls::{chmod_with_spec, get_mode, mkdir_with_spec, set_mode, umask_with_spec, FsError};
