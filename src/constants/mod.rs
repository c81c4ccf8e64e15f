pub mod mode_constants;

pub use mode_constants::*;
