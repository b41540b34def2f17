//! Customer invoices and vendor bills
//!
//! Both sides of project billing. An invoice may reference the sales order
//! it was raised from, a bill the purchase order it settles; the link is
//! optional and omitted from the wire when unset, never sent as an empty
//! string.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorBillStatus {
    Draft,
    Confirmed,
    Paid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInvoice {
    pub id: String,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_order_id: Option<String>,
    pub number: String,
    pub customer: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_order_id: Option<String>,
    pub number: String,
    pub customer: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorBill {
    pub id: String,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order_id: Option<String>,
    pub number: String,
    pub vendor: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: VendorBillStatus,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVendorBill {
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order_id: Option<String>,
    pub number: String,
    pub vendor: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: VendorBillStatus,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorBillPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VendorBillStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_sales_order_id_is_omitted() {
        let invoice = NewInvoice {
            project_id: "1".into(),
            sales_order_id: None,
            number: "INV-2025-001".into(),
            customer: "Acme".into(),
            amount: 1200.0,
            date: NaiveDate::from_ymd_opt(2025, 2, 1).expect("valid date"),
            due_date: NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date"),
            status: InvoiceStatus::Draft,
            description: String::new(),
        };
        let json = serde_json::to_value(&invoice).expect("serializes");
        assert!(json.get("salesOrderId").is_none());
    }

    #[test]
    fn test_set_purchase_order_id_is_sent() {
        let bill = NewVendorBill {
            project_id: "1".into(),
            purchase_order_id: Some("po-9".into()),
            number: "BILL-17".into(),
            vendor: "Supplies Co".into(),
            amount: 400.0,
            date: NaiveDate::from_ymd_opt(2025, 2, 1).expect("valid date"),
            due_date: NaiveDate::from_ymd_opt(2025, 2, 15).expect("valid date"),
            status: VendorBillStatus::Draft,
            description: String::new(),
        };
        let json = serde_json::to_value(&bill).expect("serializes");
        assert_eq!(json["purchaseOrderId"], "po-9");
    }
}
