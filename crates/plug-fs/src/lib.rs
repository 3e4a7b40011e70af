//! Filesystem primitives for pluglink
//!
//! Atomic, lock-protected writes and text I/O shared by the overlay
//! builder, the patcher and the CLI.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
