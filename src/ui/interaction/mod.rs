//! Pointer interaction for the shell.

mod hit_area;

pub use hit_area::{HitArea, HitAreaRegistry, ShellAction};
