use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice lifecycle status, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 4] = [
        InvoiceStatus::Pending,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
        InvoiceStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Cancelled => "Cancelled",
        }
    }

    /// Payment details (date, info) are collected only for paid
    /// invoices.
    pub fn requires_payment_details(&self) -> bool {
        matches!(self, InvoiceStatus::Paid)
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            "overdue" => Some(InvoiceStatus::Overdue),
            "cancelled" => Some(InvoiceStatus::Cancelled),
            _ => None,
        }
    }
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Pending
    }
}

/// One invoice line. `amount` is derived and must stay equal to
/// `quantity * unit_price`; use the draft setters so it never drifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub amount: Decimal,
}

impl InvoiceItem {
    pub fn empty() -> Self {
        Self {
            description: String::new(),
            quantity: 1,
            unit_price: Decimal::ZERO,
            amount: Decimal::ZERO,
        }
    }

    fn recompute_amount(&mut self) {
        self.amount = Decimal::from(self.quantity) * self.unit_price;
    }
}

/// Invoice response model. `total` is computed server-side and never
/// recalculated by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub customer_id: String,
    #[serde(default)]
    pub customer_name: String,
    pub date: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub payment_date: Option<String>,
    #[serde(default)]
    pub payment_info: Option<String>,
    pub status: InvoiceStatus,
    pub total: Decimal,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Payload for the table's quick status change: the full invoice
    /// with the status overwritten. Moving to `paid` stamps `today`
    /// into the payment date, but only when none is set yet; no other
    /// transition touches it.
    pub fn with_status(&self, status: InvoiceStatus, today: NaiveDate) -> Invoice {
        let mut updated = self.clone();
        updated.status = status;
        if status == InvoiceStatus::Paid && !has_payment_date(&self.payment_date) {
            updated.payment_date = Some(today.format("%Y-%m-%d").to_string());
        }
        updated
    }
}

fn has_payment_date(payment_date: &Option<String>) -> bool {
    payment_date.as_deref().is_some_and(|d| !d.is_empty())
}

/// Request body for creating or updating an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveInvoiceRequest {
    pub customer_id: String,
    pub date: String,
    pub due_date: String,
    pub payment_date: String,
    pub payment_info: String,
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceItem>,
}

/// Form state for the invoice modal. Seeded with one empty line so the
/// items section always has an editable row; lines are addressed by
/// index and keep insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub customer_id: String,
    pub date: String,
    pub due_date: String,
    pub payment_date: String,
    pub payment_info: String,
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceItem>,
}

impl InvoiceDraft {
    /// Fresh draft for the create form; the invoice date defaults to
    /// today, everything else starts empty.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            customer_id: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            due_date: String::new(),
            payment_date: String::new(),
            payment_info: String::new(),
            status: InvoiceStatus::Pending,
            items: vec![InvoiceItem::empty()],
        }
    }

    pub fn from_record(invoice: &Invoice) -> Self {
        Self {
            customer_id: invoice.customer_id.clone(),
            date: invoice.date.clone(),
            due_date: invoice.due_date.clone(),
            payment_date: invoice.payment_date.clone().unwrap_or_default(),
            payment_info: invoice.payment_info.clone().unwrap_or_default(),
            status: invoice.status,
            items: seed_items(&invoice.items),
        }
    }

    pub fn add_item(&mut self) {
        self.items.push(InvoiceItem::empty());
    }

    /// Description edits never touch the derived amount.
    pub fn set_item_description(&mut self, index: usize, description: String) {
        if let Some(item) = self.items.get_mut(index) {
            item.description = description;
        }
    }

    /// Quantities are floored at 1; a line always bills at least one
    /// unit.
    pub fn set_item_quantity(&mut self, index: usize, quantity: u32) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = quantity.max(1);
            item.recompute_amount();
        }
    }

    pub fn set_item_unit_price(&mut self, index: usize, unit_price: Decimal) {
        if let Some(item) = self.items.get_mut(index) {
            item.unit_price = unit_price;
            item.recompute_amount();
        }
    }

    pub fn to_request(&self) -> SaveInvoiceRequest {
        SaveInvoiceRequest {
            customer_id: self.customer_id.clone(),
            date: self.date.clone(),
            due_date: self.due_date.clone(),
            payment_date: self.payment_date.clone(),
            payment_info: self.payment_info.clone(),
            status: self.status,
            items: self.items.clone(),
        }
    }
}

fn seed_items(items: &[InvoiceItem]) -> Vec<InvoiceItem> {
    if items.is_empty() {
        vec![InvoiceItem::empty()]
    } else {
        items.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    fn sample_invoice(payment_date: Option<&str>) -> Invoice {
        Invoice {
            id: "4".into(),
            customer_id: "2".into(),
            customer_name: "Ada Lovelace".into(),
            date: "2026-08-01".into(),
            due_date: "2026-09-01".into(),
            payment_date: payment_date.map(str::to_string),
            payment_info: None,
            status: InvoiceStatus::Pending,
            total: Decimal::from(30),
            items: vec![],
        }
    }

    #[test]
    fn test_quantity_edit_recomputes_amount() {
        let mut draft = InvoiceDraft::new(today());
        draft.set_item_unit_price(0, Decimal::from(10));
        draft.set_item_quantity(0, 3);
        assert_eq!(draft.items[0].amount, Decimal::from(30));

        draft.set_item_quantity(0, 2);
        assert_eq!(draft.items[0].amount, Decimal::from(20));
    }

    #[test]
    fn test_quantity_edit_floors_at_one() {
        let mut draft = InvoiceDraft::new(today());
        draft.set_item_unit_price(0, Decimal::from(10));
        draft.set_item_quantity(0, 0);
        assert_eq!(draft.items[0].quantity, 1);
        assert_eq!(draft.items[0].amount, Decimal::from(10));
        // The floored value is what goes on the wire.
        assert_eq!(draft.to_request().items[0].quantity, 1);
    }

    #[test]
    fn test_description_edit_leaves_amount_unchanged() {
        let mut draft = InvoiceDraft::new(today());
        draft.set_item_quantity(0, 2);
        draft.set_item_unit_price(0, Decimal::from(10));
        draft.set_item_description(0, "Consulting".into());
        assert_eq!(draft.items[0].amount, Decimal::from(20));
        assert_eq!(draft.items[0].description, "Consulting");
    }

    #[test]
    fn test_item_edit_touches_only_the_addressed_line() {
        let mut draft = InvoiceDraft::new(today());
        draft.set_item_quantity(0, 2);
        draft.set_item_unit_price(0, Decimal::from(5));
        draft.add_item();
        draft.set_item_quantity(1, 2);
        draft.set_item_unit_price(1, Decimal::from(10));

        draft.set_item_quantity(1, 3);
        assert_eq!(draft.items[0].amount, Decimal::from(10));
        assert_eq!(draft.items[1].amount, Decimal::from(30));
    }

    #[test]
    fn test_new_draft_seeds_one_empty_line_dated_today() {
        let draft = InvoiceDraft::new(today());
        assert_eq!(draft.date, "2026-08-30");
        assert_eq!(draft.status, InvoiceStatus::Pending);
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].quantity, 1);
        assert_eq!(draft.items[0].amount, Decimal::ZERO);
    }

    #[test]
    fn test_draft_from_record_seeds_empty_items() {
        let draft = InvoiceDraft::from_record(&sample_invoice(None));
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.payment_date, "");
    }

    #[test]
    fn test_paid_transition_stamps_missing_payment_date() {
        let updated = sample_invoice(None).with_status(InvoiceStatus::Paid, today());
        assert_eq!(updated.status, InvoiceStatus::Paid);
        assert_eq!(updated.payment_date.as_deref(), Some("2026-08-30"));

        // An empty string counts as unset too.
        let updated = sample_invoice(Some("")).with_status(InvoiceStatus::Paid, today());
        assert_eq!(updated.payment_date.as_deref(), Some("2026-08-30"));
    }

    #[test]
    fn test_paid_transition_keeps_existing_payment_date() {
        let updated =
            sample_invoice(Some("2026-08-10")).with_status(InvoiceStatus::Paid, today());
        assert_eq!(updated.payment_date.as_deref(), Some("2026-08-10"));
    }

    #[test]
    fn test_non_paid_transitions_never_stamp_payment_date() {
        for status in [
            InvoiceStatus::Pending,
            InvoiceStatus::Overdue,
            InvoiceStatus::Cancelled,
        ] {
            let updated = sample_invoice(None).with_status(status, today());
            assert!(updated.payment_date.is_none(), "{:?}", status);
        }
    }

    #[test]
    fn test_only_paid_requires_payment_details() {
        for status in InvoiceStatus::ALL {
            assert_eq!(
                status.requires_payment_details(),
                status == InvoiceStatus::Paid,
                "{:?}",
                status
            );
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(InvoiceStatus::Overdue).unwrap(),
            "overdue"
        );
        let status: InvoiceStatus = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(status, InvoiceStatus::Paid);
    }

    #[test]
    fn test_invoice_deserializes_backend_floats() {
        let invoice: Invoice = serde_json::from_str(
            r#"{
                "id": "1", "customer_id": "2", "customer_name": "Ada Lovelace",
                "date": "2026-08-01", "due_date": "2026-09-01",
                "payment_date": null, "payment_info": null,
                "status": "pending", "total": 33.0,
                "items": [
                    {"description": "Consulting", "quantity": 3, "unit_price": 10.0, "amount": 30.0}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(invoice.total, Decimal::from(33));
        assert_eq!(invoice.items[0].quantity, 3);
        assert_eq!(invoice.items[0].amount, Decimal::from(30));
    }
}
