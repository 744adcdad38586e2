mod invoice_modal;
mod view;

pub use view::Invoices;
