// Thin re-export module: block structure in `blockchain/block.rs`, merkle
// tree computation in `blockchain/merkle.rs`.

pub mod block;
pub mod merkle;

pub use block::*;
pub use merkle::*;
