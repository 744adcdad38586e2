pub mod accounts;
pub mod customers;
pub mod dashboard;
pub mod data_management;
pub mod invoices;
pub mod layout;
pub mod login;
pub mod reports;
pub mod settings;
