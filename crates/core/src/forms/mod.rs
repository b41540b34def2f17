//! Creation-form schemas
//!
//! One schema per creation dialog. A form holds the dialog's field state;
//! `validate()` either produces the typed creation payload or the
//! field-level messages that block submission. Nothing here touches the
//! network - a payload that fails validation never exists, so no request is
//! ever issued for it. After a successful submission the owning view calls
//! `reset()` and triggers its own refetch.
//!
//! Enum-valued fields (status, priority, role) are the domain enums, so
//! membership is enforced by the type system; `validate()` checks only
//! requiredness and numeric ranges.

use chrono::NaiveDate;
use oneflow_common::validation::{
    FieldValidator, RangeValidator, StringValidator, ValidationErrors,
};

mod expense;
mod invoice;
mod project;
mod purchase_order;
mod sales_order;
mod task;
mod timesheet;
mod vendor_bill;

pub use expense::ExpenseForm;
pub use invoice::InvoiceForm;
pub use project::ProjectForm;
pub use purchase_order::PurchaseOrderForm;
pub use sales_order::SalesOrderForm;
pub use task::TaskForm;
pub use timesheet::TimesheetForm;
pub use vendor_bill::VendorBillForm;

/// Record `message` under `field` when `value` is blank.
fn require_text(errors: &mut ValidationErrors, field: &str, value: &str, message: &str) {
    if StringValidator::new().not_empty().validate(&value).is_err() {
        errors.add(field, message);
    }
}

/// Record `message` under `field` when the date was never entered.
fn require_date(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<NaiveDate>,
    message: &str,
) {
    if value.is_none() {
        errors.add(field, message);
    }
}

/// Record `message` under `field` when `value` is negative.
fn check_non_negative(errors: &mut ValidationErrors, field: &str, value: f64, message: &str) {
    if RangeValidator::empty().min(0.0).validate(&value).is_err() {
        errors.add(field, message);
    }
}

/// Empty optional-id inputs are omitted from payloads, never sent as `""`.
fn optional_id(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
