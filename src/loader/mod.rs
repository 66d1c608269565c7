pub mod source;

pub use crate::error::LoadError;
pub use source::{load_building, load_roster};
