use crate::db::{next_id, Db};
use crate::models::GameRow;

#[derive(Debug, Clone)]
pub struct CreateGame {
    pub name: String,
    pub studio_id: i32,
}

pub fn list(db: &Db) -> Vec<GameRow> {
    db.read().games.clone()
}

pub fn get_by_id(db: &Db, id: i32) -> Option<GameRow> {
    db.read().games.iter().find(|g| g.id == id).cloned()
}

pub fn list_by_studio(db: &Db, studio_id: i32) -> Vec<GameRow> {
    list_by_studios(db, &[studio_id])
}

/// Games belonging to any of `studio_ids`, in insertion order.
pub fn list_by_studios(db: &Db, studio_ids: &[i32]) -> Vec<GameRow> {
    db.read()
        .games
        .iter()
        .filter(|g| studio_ids.contains(&g.studio_id))
        .cloned()
        .collect()
}

/// Appends a game. `studio_id` is stored as given, even if no such studio exists.
pub fn create(db: &Db, data: CreateGame) -> GameRow {
    let mut tables = db.write();
    let row = GameRow {
        id: next_id(tables.games.len()),
        name: data.name,
        studio_id: data.studio_id,
    };
    tables.games.push(row.clone());
    row
}
