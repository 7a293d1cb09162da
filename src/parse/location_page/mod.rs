mod canteen_name;

pub use canteen_name::extract_canteen_name;
