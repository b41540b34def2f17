//! # OneFlow Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The auth session and project cache (the domain context stores)
//! - Port interfaces (traits) the infrastructure adapters implement
//! - Creation-form schemas with client-side validation
//!
//! ## Architecture Principles
//! - Only depends on `oneflow-common` and `oneflow-domain`
//! - No HTTP, filesystem, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod auth;
pub mod forms;
pub mod projects;

// Re-export specific items to avoid ambiguity
pub use auth::ports::{AuthGateway, TokenStore, TokenStoreError};
pub use auth::AuthSession;
pub use forms::{
    ExpenseForm, InvoiceForm, ProjectForm, PurchaseOrderForm, SalesOrderForm, TaskForm,
    TimesheetForm, VendorBillForm,
};
pub use projects::ports::ProjectsGateway;
pub use projects::ProjectStore;
