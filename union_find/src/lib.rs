mod error;
mod union_find;

pub use error::*;
pub use union_find::*;
