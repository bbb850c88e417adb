pub mod error;
mod mst;
mod network;
mod pipe;
mod solve;
mod solve_options;
#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use mst::*;
pub use network::*;
pub use pipe::*;
pub use solve::*;
pub use solve_options::*;
