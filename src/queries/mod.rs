//! Query helpers over a fetched [`Product`](crate::models::Product).
//!
//! Each query struct borrows from the product and returns references into
//! it; nothing is copied or re-fetched.

pub mod product;

pub use product::{DanglingRef, ProductQuery};
