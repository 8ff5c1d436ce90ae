pub mod traits;
pub mod csr;
pub mod generators;

pub use traits::Graph;
pub use csr::{CsrGraph, CsrGraphBuf, Neighbors};
