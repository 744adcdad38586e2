mod customer_modal;
mod view;

pub use view::Customers;
