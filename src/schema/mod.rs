pub mod normalize;
pub mod sample;
pub mod schema_model;
