//! Scans a Studentenwerk menu page token by token. Each relevant start tag
//! tells what its next text token is (section, dish, price or canteen name).
mod classify;
mod location_page;
mod menu_page;
mod token;

pub use location_page::extract_canteen_name;
pub use menu_page::extract_menu;
