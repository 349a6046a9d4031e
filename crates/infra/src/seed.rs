use crate::models::{GameRow, StudioRow};

const STUDIOS: &[(i32, &str)] = &[
    (1, "Namco-Bandai"),
    (2, "Illfonic"),
    (3, "Shift-eve"),
    (4, "Linceworks"),
    (5, "Ember Labs"),
    (6, "Guerilla"),
    (7, "Capcom"),
    (8, "Tango GameWorks"),
    (9, "Santa Monica"),
    (10, "Kojima"),
];

// (id, name, studio_id)
const GAMES: &[(i32, &str, i32)] = &[
    (1, "Tekken 7", 1),
    (2, "Arcadegeddon", 2),
    (3, "Project Eve", 3),
    (4, "Aragami 2", 4),
    (5, "Kena: Bridge of Spirits", 5),
    (6, "Horizon: Forbidden West", 6),
    (7, "Pragmata", 7),
    (8, "Ghostwire Tokyo", 8),
    (9, "God of War: Ragnarok", 9),
    (10, "Death Stranding", 10),
    (11, "God of War", 9),
    (12, "Tales of Arise", 1),
    (13, "Dragonball FightersZ", 1),
    (14, "Street Fighter V", 7),
    (15, "The Evil Within", 8),
    (16, "Resident Evil: Village", 7),
    (17, "Killzone", 6),
    (18, "Marvel Vs Capcom", 7),
    (19, "One Piece Pirate Warriors", 1),
];

pub fn studios() -> Vec<StudioRow> {
    STUDIOS
        .iter()
        .map(|&(id, name)| StudioRow {
            id,
            name: name.to_string(),
        })
        .collect()
}

pub fn games() -> Vec<GameRow> {
    GAMES
        .iter()
        .map(|&(id, name, studio_id)| GameRow {
            id,
            name: name.to_string(),
            studio_id,
        })
        .collect()
}
