pub mod editions;
pub mod features;
pub mod product;
