// Host helpers shared by the syscall wrappers
pub mod misc;

pub use misc::*;
