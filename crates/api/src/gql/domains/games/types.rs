use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use crate::gql::domains::studios::Studio;
use crate::gql::error::ResultExt;
use crate::gql::loaders::StudioLoader;

/// Game developed by developer
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Game {
    pub id: i32,
    pub name: String,
    pub dev_id: i32,
}

impl From<infra::models::GameRow> for Game {
    fn from(row: infra::models::GameRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            dev_id: row.studio_id,
        }
    }
}

#[ComplexObject]
impl Game {
    /// Null when `devId` points at no known developer.
    async fn dev(&self, ctx: &Context<'_>) -> Result<Option<Studio>> {
        let loader = ctx.data::<DataLoader<StudioLoader>>()?;

        match loader
            .load_one(self.dev_id)
            .await
            .gql_err("Loading dev failed")?
        {
            Some(row) => Ok(Some(row.into())),
            None => {
                tracing::debug!(
                    game_id = self.id,
                    dev_id = self.dev_id,
                    "Game has no matching dev"
                );
                Ok(None)
            }
        }
    }
}
