//! Library side of the `tidy` command-line tool.

pub mod logging;
pub mod options;
