pub mod resolvers;
pub mod types;

pub use resolvers::{StudioMutation, StudioQuery};
pub use types::Studio;
