mod menu;
mod price;

pub use menu::extract_menu;
