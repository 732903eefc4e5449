//! Domain models that mirror the `games` table and get passed between the
//! store and the menu controller. They stay plain data holders so the other
//! layers can focus on persistence and presentation.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One catalog entry as stored in SQLite.
pub struct Game {
    /// Primary key assigned by SQLite on insert. Stable for the lifetime of
    /// the row, so the edit and delete flows carry it back to the store.
    pub id: i64,
    /// Title shown in every numbered list and the first field search checks.
    pub name: String,
    /// Publisher as typed. Kept as raw text, so "id Software" and
    /// "id software" are different publishers to the case-sensitive search.
    pub publisher: String,
    /// Free-form release date. No calendar validation happens anywhere; a
    /// year, a full date or "TBA" are all accepted.
    pub date: String,
}

impl Game {
    /// Multi-line description shown above the edit menu.
    pub fn details(&self) -> String {
        format!(
            "Name - {}\nPublisher - {}\nRelease date - {}\n",
            self.name, self.publisher, self.date
        )
    }

    /// Read a single field by selector.
    pub fn field(&self, field: GameField) -> &str {
        match field {
            GameField::Name => &self.name,
            GameField::Publisher => &self.publisher,
            GameField::Date => &self.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The brief `(id, name)` projection used by every numbered list.
pub struct GameSummary {
    /// Carried alongside the name so a list position can be turned back into
    /// a row id for the edit and delete flows.
    pub id: i64,
    pub name: String,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Editable columns. Each update touches exactly one of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameField {
    Name,
    Publisher,
    Date,
}

impl GameField {
    pub const ALL: [GameField; 3] = [GameField::Name, GameField::Publisher, GameField::Date];

    /// Label used in the edit menu.
    pub fn label(self) -> &'static str {
        match self {
            GameField::Name => "Name",
            GameField::Publisher => "Publisher",
            GameField::Date => "Release date",
        }
    }
}
