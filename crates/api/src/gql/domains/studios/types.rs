use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use crate::gql::domains::games::Game;
use crate::gql::error::ResultExt;
use crate::gql::loaders::GamesByStudioLoader;

/// Developer developing the game
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex, name = "Dev")]
pub struct Studio {
    pub id: i32,
    pub name: String,
}

impl From<infra::models::StudioRow> for Studio {
    fn from(row: infra::models::StudioRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

#[ComplexObject]
impl Studio {
    async fn games(&self, ctx: &Context<'_>) -> Result<Vec<Game>> {
        let loader = ctx.data::<DataLoader<GamesByStudioLoader>>()?;

        let rows = loader
            .load_one(self.id)
            .await
            .gql_err("Loading games failed")?
            .unwrap_or_default();

        Ok(rows.into_iter().map(Game::from).collect())
    }
}
