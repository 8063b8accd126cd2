pub mod store;
pub mod value;
