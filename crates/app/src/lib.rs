//! # OneFlow App
//!
//! Composition root for the OneFlow client: builds the gateway, the
//! resource collections, and the shared stores into one [`AppContext`] a
//! host shell (CLI, TUI, desktop) embeds. Also owns tracing setup.

pub mod context;
pub mod logging;

pub use context::AppContext;
