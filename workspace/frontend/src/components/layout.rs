mod navbar;
mod sidebar;
mod view;

pub use view::Layout;
