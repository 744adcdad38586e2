//! Common transport-layer types shared with the backend REST API.
//! These structs mirror the backend handlers' request/response payloads
//! so the frontend can deserialize API responses without duplicating shapes,
//! plus the small amount of client-side bookkeeping logic (form drafts,
//! invoice line-item math) that is worth keeping out of the view layer.

mod account;
mod customer;
mod invoice;
mod money;
mod reports;
mod session;

pub use account::{Account, AccountDraft, AccountKind, SaveAccountRequest};
pub use customer::{Customer, CustomerDraft, SaveCustomerRequest};
pub use invoice::{
    Invoice, InvoiceDraft, InvoiceItem, InvoiceStatus, SaveInvoiceRequest,
};
pub use money::format_currency;
pub use reports::{IncomeExpensesSeries, ProfitLossReport, SeriesDataset, TopCustomer};
pub use session::SessionUser;
