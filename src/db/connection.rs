//! Locating, opening and initialising the SQLite file. The catalog lives next
//! to the executable so a copied install carries its data along; the home
//! directory is only a fallback for platforms that cannot report the binary's
//! path.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rusqlite::Connection;

/// Folder created next to the executable for application data.
const DATA_DIR_NAME: &str = "data";
/// SQLite file name stored inside the data directory.
const DB_FILE_NAME: &str = "games.sqlite";
/// Home-relative folder used when the executable location is unknown.
const FALLBACK_DIR_NAME: &str = ".game-catalog";

/// Resolve the database path relative to the running executable, so the
/// catalog travels with the program. Falls back to the user's home directory
/// when the platform cannot report where the binary lives.
pub fn database_path() -> Result<PathBuf> {
    match env::current_exe() {
        Ok(exe) => {
            let dir = exe
                .parent()
                .ok_or_else(|| anyhow!("executable path has no parent directory"))?;
            Ok(dir.join(DATA_DIR_NAME).join(DB_FILE_NAME))
        }
        Err(err) => {
            log::warn!("could not locate executable ({err}), using home directory");
            fallback_path()
        }
    }
}

fn fallback_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs
        .home_dir()
        .join(FALLBACK_DIR_NAME)
        .join(DB_FILE_NAME))
}

/// Open (creating if needed) the database file at `path` and make sure the
/// `games` table exists.
pub fn open_connection(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("failed to open SQLite database at {}", path.display()))?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Create the single `games` table if it is missing. Emptiness of the text
/// columns is checked by the menu layer, not here.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS games (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            publisher TEXT NOT NULL,
            date TEXT NOT NULL
        )",
        [],
    )
    .context("failed to create games table")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_path_ends_with_data_file() {
        let path = database_path().unwrap();
        assert!(path.ends_with(Path::new(DATA_DIR_NAME).join(DB_FILE_NAME)));
    }

    #[test]
    fn ensure_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();

        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='games')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists);
    }

    #[test]
    fn open_connection_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(DB_FILE_NAME);

        open_connection(&path).unwrap();
        assert!(path.exists());
    }
}
