mod common;

use api::gql::build_schema;
use common::*;

#[test]
fn test_schema_exposes_game_and_dev_types() {
    let sdl = build_schema(setup_state()).sdl();

    assert!(sdl.contains("type Game"), "{sdl}");
    assert!(sdl.contains("type Dev"), "{sdl}");
    assert!(sdl.contains("devId: Int!"), "{sdl}");
    assert!(sdl.contains("dev: Dev\n"), "{sdl}");
    assert!(sdl.contains("games: [Game!]!"), "{sdl}");
    assert!(sdl.contains("Game developed by developer"), "{sdl}");
    assert!(sdl.contains("Developer developing the game"), "{sdl}");
}

#[test]
fn test_schema_root_fields() {
    let sdl = build_schema(setup_state()).sdl();

    assert!(sdl.contains("game(id: Int): Game"), "{sdl}");
    assert!(sdl.contains("dev(id: Int): Dev"), "{sdl}");
    assert!(sdl.contains("addGame(name: String!, devId: Int!): Game!"), "{sdl}");
    assert!(sdl.contains("addDev(name: String!): Dev!"), "{sdl}");
    assert!(!sdl.contains("type Subscription"), "{sdl}");
}

#[test]
fn test_schema_root_field_descriptions() {
    let sdl = build_schema(setup_state()).sdl();

    for description in [
        "list of games",
        "list of devs",
        "A single game",
        "A single developer",
        "Add a game",
        "Add a developer",
    ] {
        assert!(sdl.contains(description), "missing {description:?} in {sdl}");
    }
}
