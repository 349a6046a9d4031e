pub mod resolvers;
pub mod types;

pub use resolvers::{GameMutation, GameQuery};
pub use types::Game;
