pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logging;
pub mod pipeline;

pub use domain::{FilterSpec, Wine, WineFamily, WineRecord};
pub use error::{Result, WineListError};
