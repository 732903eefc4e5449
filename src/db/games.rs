//! One function per query against the `games` table. Each takes a borrowed
//! `Connection` so the same code runs against the on-disk file and the
//! in-memory databases the tests use. Statements touching a single row check
//! the affected-row count and report `NotFound` rather than succeeding
//! quietly; the menu relies on that to tell "gone" apart from "saved".
//!
//! Listings are ordered by `id`, which is insertion order because the table
//! uses `AUTOINCREMENT` and never hands out a deleted id again.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::models::{Game, GameField, GameSummary};

use super::error::StoreError;

type Result<T> = std::result::Result<T, StoreError>;

fn game_from_row(row: &Row<'_>) -> rusqlite::Result<Game> {
    Ok(Game {
        id: row.get(0)?,
        name: row.get(1)?,
        publisher: row.get(2)?,
        date: row.get(3)?,
    })
}

/// Insert a new game and echo the hydrated struct back, including the id
/// SQLite picked for it.
pub fn insert_game(conn: &Connection, name: &str, publisher: &str, date: &str) -> Result<Game> {
    conn.execute(
        "INSERT INTO games (name, publisher, date) VALUES (?1, ?2, ?3)",
        params![name, publisher, date],
    )?;

    let id = conn.last_insert_rowid();
    log::debug!("inserted game {id} ({name})");
    Ok(Game {
        id,
        name: name.to_string(),
        publisher: publisher.to_string(),
        date: date.to_string(),
    })
}

/// Every game with all of its fields, in insertion order. The search flow
/// works over this list.
pub fn fetch_all_games(conn: &Connection) -> Result<Vec<Game>> {
    let mut stmt = conn.prepare("SELECT id, name, publisher, date FROM games ORDER BY id")?;

    let games = stmt
        .query_map([], game_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    log::debug!("fetched {} games", games.len());
    Ok(games)
}

/// The `(id, name)` pairs backing the numbered lists, in insertion order.
pub fn fetch_game_summaries(conn: &Connection) -> Result<Vec<GameSummary>> {
    let mut stmt = conn.prepare("SELECT id, name FROM games ORDER BY id")?;

    let summaries = stmt
        .query_map([], |row| {
            Ok(GameSummary {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(summaries)
}

/// Load one game by id. A missing row is reported as `NotFound` instead of
/// being left to the caller to guess.
pub fn fetch_game(conn: &Connection, id: i64) -> Result<Game> {
    conn.query_row(
        "SELECT id, name, publisher, date FROM games WHERE id = ?1",
        params![id],
        game_from_row,
    )
    .optional()?
    .ok_or(StoreError::NotFound { id })
}

/// Overwrite a single column of one game. The other columns are never part
/// of the statement, so they cannot change.
pub fn update_game_field(conn: &Connection, id: i64, field: GameField, value: &str) -> Result<()> {
    let sql = match field {
        GameField::Name => "UPDATE games SET name = ?1 WHERE id = ?2",
        GameField::Publisher => "UPDATE games SET publisher = ?1 WHERE id = ?2",
        GameField::Date => "UPDATE games SET date = ?1 WHERE id = ?2",
    };

    let updated = conn.execute(sql, params![value, id])?;
    if updated == 0 {
        return Err(StoreError::NotFound { id });
    }

    log::debug!("updated {:?} of game {id}", field);
    Ok(())
}

/// Permanently delete a game.
pub fn delete_game(conn: &Connection, id: i64) -> Result<()> {
    let deleted = conn.execute("DELETE FROM games WHERE id = ?1", params![id])?;

    if deleted == 0 {
        Err(StoreError::NotFound { id })
    } else {
        log::debug!("deleted game {id}");
        Ok(())
    }
}
