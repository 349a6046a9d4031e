use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};

use super::loaders::{GamesByStudioLoader, StudioLoader};
use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> AppSchema {
    // No cache: every request sees appends made by earlier ones
    let studio_loader = DataLoader::new(StudioLoader::new(state.db.clone()), tokio::spawn);
    let games_loader = DataLoader::new(GamesByStudioLoader::new(state.db.clone()), tokio::spawn);

    let introspection_enabled = state.config().introspection;

    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state) // available in resolvers via ctx.data::<AppState>()
    .data(studio_loader)
    .data(games_loader)
    .limit_depth(32)
    .limit_complexity(1000);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
