pub mod lists;
pub mod product;
pub mod settings;
