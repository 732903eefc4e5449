//! Menu controller. `App` sits between the console and the store: it checks
//! what the user typed before any query runs, and turns store results (or
//! store errors) into the messages printed back. Each public flow method maps
//! to one entry of the main menu, so `handle_choice` stays a flat dispatch.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::db::Store;
use crate::models::{GameField, GameSummary};

use super::helpers::{numbered_list, surface_error};
use super::prompt::{self, INVALID_INPUT};
use super::search::search;
use super::terminal::clear_screen;

pub(crate) const MENU_TEXT: &str = "Choose an action:\n\
    1. Add a game\n\
    2. Find a game\n\
    3. Edit a game\n\
    4. Delete a game\n\
    5. List games\n\
    6. Exit";

const DONE: &str = "Done!";
const GAME_NOT_FOUND: &str = "Game not found.";

/// Top-level menu entries.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Find,
    Edit,
    Delete,
    List,
    Exit,
}

impl MenuChoice {
    /// Map a typed line onto a menu entry. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Find),
            "3" => Some(MenuChoice::Edit),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::List),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Entries of the nested edit menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum EditChoice {
    Field(GameField),
    Back,
}

impl EditChoice {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(EditChoice::Field(GameField::Name)),
            "2" => Some(EditChoice::Field(GameField::Publisher)),
            "3" => Some(EditChoice::Field(GameField::Date)),
            "4" => Some(EditChoice::Back),
            _ => None,
        }
    }
}

/// How the field editor ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum EditOutcome {
    Back,
    /// The game was deleted or never existed.
    Missing,
}

/// Menu controller. Validates what the user types before anything reaches the
/// store, and formats store results for the console. Input and output are
/// generic so sessions can be scripted in tests.
pub struct App<R, W> {
    store: Store,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(store: Store, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Hand back the owned pieces so the caller can close the store.
    pub fn into_parts(self) -> (Store, R, W) {
        (self.store, self.input, self.output)
    }

    /// Show the main menu, read one choice and run it. Returns `true` when the
    /// user asked to exit.
    pub fn step(&mut self) -> Result<bool> {
        let raw = prompt::ask(&mut self.input, &mut self.output, MENU_TEXT)?;
        match MenuChoice::parse(&raw) {
            Some(choice) => self.handle_choice(choice),
            None => {
                self.clear()?;
                self.say(&format!("{INVALID_INPUT}\n"))?;
                Ok(false)
            }
        }
    }

    pub fn handle_choice(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::Add => self.add_game()?,
            MenuChoice::Find => self.find_game()?,
            MenuChoice::Edit => self.select_game_for_update()?,
            MenuChoice::Delete => self.select_game_for_deleting()?,
            MenuChoice::List => self.list_games()?,
            MenuChoice::Exit => return Ok(true),
        }
        Ok(false)
    }

    /// Ask for name, publisher and date, each until non-empty, then insert.
    pub fn add_game(&mut self) -> Result<()> {
        self.clear()?;
        let name = self.ask_non_empty("Enter the game name")?;
        let publisher = self.ask_non_empty("Enter the game publisher")?;
        let date = self.ask_non_empty("Enter the release date")?;

        self.store
            .insert_game(&name, &publisher, &date)
            .context("failed to add game")?;

        self.clear()?;
        self.say(DONE)
    }

    /// Free-text search over name, publisher and date.
    pub fn find_game(&mut self) -> Result<()> {
        self.clear()?;
        let query = prompt::ask(
            &mut self.input,
            &mut self.output,
            "Enter a name, publisher or release year",
        )?;
        let games = self.store.list_games().context("failed to load games")?;
        let found = search(&games, &query);

        self.clear()?;
        if found.is_empty() {
            return self.say("Nothing found for your query!");
        }

        let names: Vec<&str> = found.iter().map(|game| game.name.as_str()).collect();
        self.say("Found for your query:")?;
        self.say(&numbered_list(&names))
    }

    /// Pick a game from the numbered list, then enter the field editor.
    pub fn select_game_for_update(&mut self) -> Result<()> {
        self.clear()?;
        let Some(game) = self.pick_game("No games to edit.")? else {
            return Ok(());
        };

        self.edit_game(game.id)
    }

    /// Run the field editor and leave the screen in a readable state: cleared
    /// after "Back", or showing the not-found notice if the game vanished.
    fn edit_game(&mut self, id: i64) -> Result<()> {
        let outcome = self.update_game_info(id)?;
        self.clear()?;
        match outcome {
            EditOutcome::Back => Ok(()),
            EditOutcome::Missing => self.say(GAME_NOT_FOUND),
        }
    }

    /// Field editor for one game. Loops until the user picks "Back".
    fn update_game_info(&mut self, id: i64) -> Result<EditOutcome> {
        self.clear()?;
        loop {
            let details = match self.store.describe_game(id) {
                Ok(details) => details,
                Err(err) if err.is_not_found() => return Ok(EditOutcome::Missing),
                Err(err) => return Err(err).context("failed to load game"),
            };

            let menu = edit_menu_text(&details);
            let raw = prompt::ask(&mut self.input, &mut self.output, &menu)?;
            let field = match EditChoice::parse(&raw) {
                Some(EditChoice::Back) => return Ok(EditOutcome::Back),
                Some(EditChoice::Field(field)) => field,
                None => {
                    self.say(INVALID_INPUT)?;
                    continue;
                }
            };

            let value = self.ask_non_empty("Enter the new value")?;
            match self.store.update_field(id, field, &value) {
                Ok(()) => {}
                Err(err) if err.is_not_found() => return Ok(EditOutcome::Missing),
                Err(err) => return Err(err).context("failed to update game"),
            }

            self.clear()?;
            self.say(&format!("{DONE}\n"))?;
        }
    }

    /// Pick a game from the numbered list and delete it.
    pub fn select_game_for_deleting(&mut self) -> Result<()> {
        self.clear()?;
        let Some(game) = self.pick_game("No games to delete!")? else {
            return Ok(());
        };

        match self.store.delete_game(game.id) {
            Ok(()) => {}
            Err(err) if err.is_not_found() => {
                self.clear()?;
                return self.say(GAME_NOT_FOUND);
            }
            Err(err) => return Err(err).context("failed to delete game"),
        }

        self.clear()?;
        self.say("Game deleted!")
    }

    /// Print every game name as a numbered list.
    pub fn list_games(&mut self) -> Result<()> {
        self.clear()?;
        let games = self
            .store
            .list_summaries()
            .context("failed to load games")?;

        if games.is_empty() {
            return self.say("You have not added any games yet!\n");
        }
        self.say(&numbered_list(&games))
    }

    /// Print the failure that ended a flow. The menu keeps running afterwards.
    pub fn report_error(&mut self, err: &anyhow::Error) -> Result<()> {
        self.say(&format!("An error occurred: {}\n", surface_error(err)))
    }

    pub(crate) fn clear(&mut self) -> Result<()> {
        clear_screen(&mut self.output)
    }

    /// Show the numbered list and return the chosen game, or print
    /// `empty_message` when there is nothing to choose from.
    fn pick_game(&mut self, empty_message: &str) -> Result<Option<GameSummary>> {
        let mut games = self
            .store
            .list_summaries()
            .context("failed to load games")?;

        if games.is_empty() {
            self.say(&format!("{empty_message}\n"))?;
            return Ok(None);
        }

        self.say(&numbered_list(&games))?;
        let index = prompt::ask_index(
            &mut self.input,
            &mut self.output,
            "Enter the game number",
            games.len(),
        )?;
        Ok(Some(games.swap_remove(index)))
    }

    fn ask_non_empty(&mut self, prompt: &str) -> Result<String> {
        prompt::ask_non_empty(&mut self.input, &mut self.output, prompt)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("failed to write output")
    }
}

fn edit_menu_text(details: &str) -> String {
    let mut text = format!("{details}\nChoose a field to edit:\n");
    for (index, field) in GameField::ALL.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", index + 1, field.label()));
    }
    text.push_str(&format!("{}. Back", GameField::ALL.len() + 1));
    text
}
