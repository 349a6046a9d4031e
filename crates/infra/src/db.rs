use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{GameRow, StudioRow};
use crate::seed;

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub studios: Vec<StudioRow>,
    pub games: Vec<GameRow>,
}

/// Handle to the in-memory tables. Clones share the same storage.
///
/// Rows are only ever appended, in insertion order. Every repo call takes the
/// lock once and never holds it across an `.await`.
#[derive(Clone, Debug, Default)]
pub struct Db {
    tables: Arc<RwLock<Tables>>,
}

impl Db {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the fixed catalogue of studios and games.
    pub fn seeded() -> Self {
        let tables = Tables {
            studios: seed::studios(),
            games: seed::games(),
        };
        tracing::debug!(
            studios = tables.studios.len(),
            games = tables.games.len(),
            "Seeded in-memory tables"
        );
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write()
    }
}

/// Ids are the table length after the append. Callers must hold the write lock.
pub(crate) fn next_id(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX).saturating_add(1)
}
