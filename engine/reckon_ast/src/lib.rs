//! Expression tree for the reckon expression engine.

pub mod tree;

pub use tree::TreeToken;
