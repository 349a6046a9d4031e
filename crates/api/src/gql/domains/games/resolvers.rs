use async_graphql::{Context, Object, Result};

use crate::gql::domains::games::Game;
use crate::state::AppState;
use infra::repos::{games, CreateGame};

#[derive(Default)]
pub struct GameQuery;

#[Object]
impl GameQuery {
    /// list of games
    async fn games(&self, ctx: &Context<'_>) -> Result<Vec<Game>> {
        let state = ctx.data::<AppState>()?;
        Ok(games::list(&state.db).into_iter().map(Game::from).collect())
    }

    /// A single game
    async fn game(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Game>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;
        Ok(games::get_by_id(&state.db, id).map(Game::from))
    }
}

#[derive(Default)]
pub struct GameMutation;

#[Object]
impl GameMutation {
    /// Add a game
    async fn add_game(&self, ctx: &Context<'_>, name: String, dev_id: i32) -> Result<Game> {
        let state = ctx.data::<AppState>()?;

        let row = games::create(
            &state.db,
            CreateGame {
                name,
                studio_id: dev_id,
            },
        );
        tracing::info!(id = row.id, name = %row.name, dev_id = row.studio_id, "Game added");

        Ok(row.into())
    }
}
