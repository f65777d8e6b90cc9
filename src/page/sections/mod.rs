//! Section renderers for the storefront page.

mod cart;
mod catalog;
mod footer;
mod hero;
mod updates;

pub use cart::*;
pub use catalog::*;
pub use footer::*;
pub use hero::*;
pub use updates::*;
