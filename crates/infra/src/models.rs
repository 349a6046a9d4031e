#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioRow {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRow {
    pub id: i32,
    pub name: String,
    /// Not checked against existing studios; may dangle.
    pub studio_id: i32,
}
