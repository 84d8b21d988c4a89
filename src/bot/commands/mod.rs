//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Account commands - register, login, change-password
pub mod account;

/// General utility commands
pub mod general;

/// Rank lookup command
pub mod rank;

// Export commands
pub use account::*;
pub use general::*;
pub use rank::*;
