use async_graphql::dataloader::Loader;
use infra::{
    models::{GameRow, StudioRow},
    repos::{games, studios},
    Db,
};
use std::{collections::HashMap, convert::Infallible, future::Future};

// StudioLoader - batch load studios by ID
#[derive(Clone)]
pub struct StudioLoader {
    db: Db,
}

impl StudioLoader {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

impl Loader<i32> for StudioLoader {
    type Value = StudioRow;
    type Error = Infallible;

    fn load(
        &self,
        keys: &[i32],
    ) -> impl Future<Output = std::result::Result<HashMap<i32, Self::Value>, Self::Error>> + Send
    {
        let db = self.db.clone();
        let ids: Vec<i32> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }
            tracing::debug!(batch = ids.len(), "Loading devs");

            let mut by_id = HashMap::with_capacity(ids.len());
            for row in studios::get_by_ids(&db, &ids) {
                // first match wins, like a single-id lookup
                by_id.entry(row.id).or_insert(row);
            }
            Ok(by_id)
        }
    }
}

// GamesByStudioLoader - batch load the games of each studio ID
#[derive(Clone)]
pub struct GamesByStudioLoader {
    db: Db,
}

impl GamesByStudioLoader {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

impl Loader<i32> for GamesByStudioLoader {
    type Value = Vec<GameRow>;
    type Error = Infallible;

    fn load(
        &self,
        keys: &[i32],
    ) -> impl Future<Output = std::result::Result<HashMap<i32, Self::Value>, Self::Error>> + Send
    {
        let db = self.db.clone();
        let ids: Vec<i32> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }
            tracing::debug!(batch = ids.len(), "Loading games by dev");

            let mut by_studio: HashMap<i32, Vec<GameRow>> = HashMap::with_capacity(ids.len());
            for row in games::list_by_studios(&db, &ids) {
                by_studio.entry(row.studio_id).or_default().push(row);
            }
            Ok(by_studio)
        }
    }
}
