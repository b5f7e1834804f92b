pub mod builder;
pub mod catalog;
pub mod types;

pub use builder::{AvatarSource, BuildOutput, CardBuilder};
pub use catalog::{ActionKind, FactKind};
pub use types::*;
