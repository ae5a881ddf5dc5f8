//! Entity module - Contains the SeaORM entity definitions for the database.
//! The service stores a single collection: product transactions.

pub mod transaction;

pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
};
