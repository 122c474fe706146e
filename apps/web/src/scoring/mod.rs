pub mod category;
pub mod engine;
