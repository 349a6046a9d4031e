pub mod games;
pub mod studios;

pub use games::CreateGame;
pub use studios::CreateStudio;
