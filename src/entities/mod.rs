//! Entity module - Contains the SeaORM entity definitions for the database.

pub mod archive;

pub use archive::Entity as Archive;
