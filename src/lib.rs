//! dnaflip - batch reverse / complement / reverse-complement of DNA sequences
//!
//! The `sequence` module is the pure transformation core and works on any
//! text: IUPAC codes are complemented case-preservingly, everything else
//! passes through. The `app` and `ui` modules make up the terminal front end.

pub mod app;
pub mod clipboard;
pub mod logging;
pub mod sequence;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use sequence::{transform, Operation};
