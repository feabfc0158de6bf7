//! Storage layer for guestbook signatures.
//!
//! Uses ReDB for embedded document storage with ACID transactions.
//! One database file holds the single `signatures` collection.

pub mod redb;

pub use self::redb::SignatureStore;
