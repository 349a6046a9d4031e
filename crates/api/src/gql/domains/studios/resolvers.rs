use async_graphql::{Context, Object, Result};

use crate::gql::domains::studios::Studio;
use crate::state::AppState;
use infra::repos::{studios, CreateStudio};

#[derive(Default)]
pub struct StudioQuery;

#[Object]
impl StudioQuery {
    /// list of devs
    async fn devs(&self, ctx: &Context<'_>) -> Result<Vec<Studio>> {
        let state = ctx.data::<AppState>()?;
        Ok(studios::list(&state.db)
            .into_iter()
            .map(Studio::from)
            .collect())
    }

    /// A single developer
    async fn dev(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Studio>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;
        Ok(studios::get_by_id(&state.db, id).map(Studio::from))
    }
}

#[derive(Default)]
pub struct StudioMutation;

#[Object]
impl StudioMutation {
    /// Add a developer
    async fn add_dev(&self, ctx: &Context<'_>, name: String) -> Result<Studio> {
        let state = ctx.data::<AppState>()?;

        let row = studios::create(&state.db, CreateStudio { name });
        tracing::info!(id = row.id, name = %row.name, "Dev added");

        Ok(row.into())
    }
}
