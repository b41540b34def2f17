//! Project cache with write-then-refetch consistency

pub mod ports;
mod store;

pub use store::ProjectStore;
