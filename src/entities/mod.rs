//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each guild store holds a single table, defined by the account entity.

pub mod account;

pub use account::{Column as AccountColumn, Entity as Account, Model as AccountModel};
