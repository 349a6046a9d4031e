//! Print the GraphQL schema as SDL.
//!
//! Usage: cargo run --bin export_schema [output_path]

use api::config::ServerConfig;
use api::gql::build_schema;
use api::AppState;
use infra::Db;

fn main() -> anyhow::Result<()> {
    let schema = build_schema(AppState::new(Db::new(), ServerConfig::default()));
    let sdl = schema.sdl();

    match std::env::args().nth(1) {
        Some(out_path) => {
            std::fs::write(&out_path, &sdl)?;
            eprintln!("Schema exported to {out_path} ({} bytes)", sdl.len());
        }
        None => print!("{sdl}"),
    }
    Ok(())
}
