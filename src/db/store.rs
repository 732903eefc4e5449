//! `Store` is the handle the rest of the program holds on to. It owns the
//! single connection for the whole session and forwards each operation to the
//! query functions in `games`.

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::models::{Game, GameField, GameSummary};

use super::connection::{ensure_schema, open_connection};
use super::error::StoreError;
use super::games;

/// Owns the one SQLite connection for the whole session. The controller gets
/// a `Store` handed to it instead of reaching for a global handle.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the catalog file at `path`, creating the file and table on first
    /// run.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = open_connection(path)?;
        log::info!("opened catalog at {}", path.display());
        Ok(Self { conn })
    }

    /// A throwaway store for tests and dry runs.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
        ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Release the connection, surfacing anything SQLite reports while
    /// flushing.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, err)| err)
            .context("failed to close SQLite database")
    }

    pub fn insert_game(&self, name: &str, publisher: &str, date: &str) -> Result<Game, StoreError> {
        games::insert_game(&self.conn, name, publisher, date)
    }

    pub fn list_games(&self) -> Result<Vec<Game>, StoreError> {
        games::fetch_all_games(&self.conn)
    }

    pub fn list_summaries(&self) -> Result<Vec<GameSummary>, StoreError> {
        games::fetch_game_summaries(&self.conn)
    }

    pub fn fetch_game(&self, id: i64) -> Result<Game, StoreError> {
        games::fetch_game(&self.conn, id)
    }

    /// The multi-line description shown in the edit flow.
    pub fn describe_game(&self, id: i64) -> Result<String, StoreError> {
        self.fetch_game(id).map(|game| game.details())
    }

    pub fn update_field(&self, id: i64, field: GameField, value: &str) -> Result<(), StoreError> {
        games::update_game_field(&self.conn, id, field, value)
    }

    pub fn update_name(&self, id: i64, name: &str) -> Result<(), StoreError> {
        self.update_field(id, GameField::Name, name)
    }

    pub fn update_publisher(&self, id: i64, publisher: &str) -> Result<(), StoreError> {
        self.update_field(id, GameField::Publisher, publisher)
    }

    pub fn update_date(&self, id: i64, date: &str) -> Result<(), StoreError> {
        self.update_field(id, GameField::Date, date)
    }

    pub fn delete_game(&self, id: i64) -> Result<(), StoreError> {
        games::delete_game(&self.conn, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_formats_all_fields() {
        let store = Store::open_in_memory().unwrap();
        let game = store.insert_game("Doom", "id Software", "1993").unwrap();

        let description = store.describe_game(game.id).unwrap();
        assert_eq!(
            description,
            "Name - Doom\nPublisher - id Software\nRelease date - 1993\n"
        );
    }

    #[test]
    fn describe_missing_game_is_not_found() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.describe_game(7).unwrap_err().is_not_found());
    }

    #[test]
    fn named_updates_touch_their_own_column() {
        let store = Store::open_in_memory().unwrap();
        let game = store.insert_game("Doom", "id Software", "1993").unwrap();

        store.update_name(game.id, "Doom II").unwrap();
        store.update_publisher(game.id, "GT Interactive").unwrap();
        store.update_date(game.id, "1994").unwrap();

        let updated = store.fetch_game(game.id).unwrap();
        assert_eq!(updated.name, "Doom II");
        assert_eq!(updated.publisher, "GT Interactive");
        assert_eq!(updated.date, "1994");
    }

    #[test]
    fn close_releases_connection() {
        let store = Store::open_in_memory().unwrap();
        store.close().unwrap();
    }
}
