pub mod charts;
mod view;

pub use view::Reports;
