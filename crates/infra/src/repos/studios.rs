use crate::db::{next_id, Db};
use crate::models::StudioRow;

#[derive(Debug, Clone)]
pub struct CreateStudio {
    pub name: String,
}

pub fn list(db: &Db) -> Vec<StudioRow> {
    db.read().studios.clone()
}

pub fn get_by_id(db: &Db, id: i32) -> Option<StudioRow> {
    db.read().studios.iter().find(|s| s.id == id).cloned()
}

/// Studios whose id is in `ids`, in insertion order.
pub fn get_by_ids(db: &Db, ids: &[i32]) -> Vec<StudioRow> {
    db.read()
        .studios
        .iter()
        .filter(|s| ids.contains(&s.id))
        .cloned()
        .collect()
}

pub fn create(db: &Db, data: CreateStudio) -> StudioRow {
    let mut tables = db.write();
    let row = StudioRow {
        id: next_id(tables.studios.len()),
        name: data.name,
    };
    tables.studios.push(row.clone());
    row
}
