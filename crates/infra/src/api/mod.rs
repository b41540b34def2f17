//! Resource collections
//!
//! One client per backend resource, each a thin request/response mapper
//! over the shared [`HttpGateway`](crate::http::HttpGateway): fixed path,
//! named response envelope, errors passed through untouched. Views fetch
//! through these directly; only projects and auth sit behind core ports
//! (they back the shared stores).

mod analytics;
mod auth;
mod expenses;
mod invoices;
mod projects;
mod purchase_orders;
mod sales_orders;
mod tasks;
mod timesheets;
mod users;
mod vendor_bills;

pub use analytics::AnalyticsApi;
pub use auth::AuthApi;
pub use expenses::ExpensesApi;
pub use invoices::InvoicesApi;
pub use projects::ProjectsApi;
pub use purchase_orders::PurchaseOrdersApi;
pub use sales_orders::SalesOrdersApi;
pub use tasks::TasksApi;
pub use timesheets::TimesheetsApi;
pub use users::UsersApi;
pub use vendor_bills::VendorBillsApi;

/// Append `?projectId=<id>` when a filter is present.
fn scoped(path: &str, project_id: Option<&str>) -> String {
    match project_id {
        Some(id) => format!("{}?projectId={}", path, urlencoding::encode(id)),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_paths() {
        assert_eq!(scoped("/tasks", None), "/tasks");
        assert_eq!(scoped("/tasks", Some("1")), "/tasks?projectId=1");
        assert_eq!(scoped("/tasks", Some("a b")), "/tasks?projectId=a%20b");
    }
}
