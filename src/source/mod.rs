//! File access for the tailed log (impure).

pub mod tail;

pub use tail::read_lines;
