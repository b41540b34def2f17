//! # OneFlow Infra
//!
//! Infrastructure adapters for the OneFlow client:
//! - HTTP gateway over reqwest (bearer auth, error normalization)
//! - One resource-collection client per backend entity
//! - Configuration loading (environment, probed files)
//! - Token persistence (file-backed, in-memory)
//!
//! Implements the port traits defined in `oneflow-core`.

pub mod api;
pub mod config;
pub mod http;
pub mod storage;

pub use api::{
    AnalyticsApi, AuthApi, ExpensesApi, InvoicesApi, ProjectsApi, PurchaseOrdersApi,
    SalesOrdersApi, TasksApi, TimesheetsApi, UsersApi, VendorBillsApi,
};
pub use http::HttpGateway;
pub use storage::{FileTokenStore, MemoryTokenStore};
