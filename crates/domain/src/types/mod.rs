//! Domain data types
//!
//! Server-owned records and the wire payloads used to create and patch
//! them. The backend assigns every canonical id; creation payloads never
//! carry one. Wire JSON is camelCase, status enums are snake_case.

mod analytics;
mod billing;
mod expense;
mod orders;
mod project;
mod task;
mod timesheet;
mod user;

pub use analytics::AnalyticsSummary;
pub use billing::{
    CustomerInvoice, InvoicePatch, InvoiceStatus, NewInvoice, NewVendorBill, VendorBill,
    VendorBillPatch, VendorBillStatus,
};
pub use expense::{Expense, ExpensePatch, ExpenseStatus, NewExpense};
pub use orders::{
    NewPurchaseOrder, NewSalesOrder, PurchaseOrder, PurchaseOrderPatch, PurchaseOrderStatus,
    SalesOrder, SalesOrderPatch, SalesOrderStatus,
};
pub use project::{NewProject, Project, ProjectPatch, ProjectStatus};
pub use task::{NewTask, Task, TaskPatch, TaskPriority, TaskStatus};
pub use timesheet::{NewTimesheet, Timesheet, TimesheetPatch};
pub use user::{
    AuthResponse, AuthUser, Credentials, PasswordChange, ProfileUpdate, SignupRequest, UserRole,
};
