pub mod feature;
pub mod product;

pub use feature::*;
pub use product::*;
