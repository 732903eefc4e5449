//! Persistence module split across logical submodules.

mod connection;
mod error;
mod games;
mod store;

pub use connection::{database_path, ensure_schema, open_connection};
pub use error::StoreError;
pub use games::{
    delete_game, fetch_all_games, fetch_game, fetch_game_summaries, insert_game,
    update_game_field,
};
pub use store::Store;
