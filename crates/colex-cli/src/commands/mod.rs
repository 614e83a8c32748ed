pub mod check;
pub mod expr_loader;
pub mod fmt;
pub mod lint;
pub mod tokens;
pub mod tree;
