//! Core business logic - framework-agnostic operations behind the bot
//! commands. Nothing in this module touches Discord types, so everything
//! here is directly testable against an in-memory database.

/// Account registration, login, and password change
pub mod account;
/// Rank lookup by screen-scraping an external profile page
pub mod rank;
/// Discord-native timestamp formatting
pub mod timestamp;
