//! Storage layer for the read-only datasets

mod catalog;
mod locator;

pub use catalog::{Catalog, Dataset};
pub use locator::FileLocator;
