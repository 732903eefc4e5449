//! Binary entry point: bring up logging and the SQLite store, run the menu on
//! stdin/stdout until the user exits, then close the store.
use std::io;

use game_catalog::{database_path, logging, run_app, App, Store};

fn main() -> anyhow::Result<()> {
    logging::init()?;

    let path = database_path()?;
    let store = Store::open(&path)?;

    let stdin = io::stdin();
    let mut app = App::new(store, stdin.lock(), io::stdout());
    let result = run_app(&mut app);

    let (store, _, _) = app.into_parts();
    store.close()?;
    result
}
