//! Token persistence

mod token_store;

pub use token_store::{FileTokenStore, MemoryTokenStore};
