//! Resolution engine for `product_deps` files: section scanning, product
//! list filtering, and qualifier table matching in a single forward pass.

pub mod resolver;
pub mod section;
