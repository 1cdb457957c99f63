use anyhow::Result;
use chrono::Local;
use tracing::error;

use crate::{
    app::AppContext,
    cli::args::{Cli, Command},
    cli::shell,
    db,
    domain::{book::NewBook, clipping::NewClipping},
    tryon,
};

pub(crate) fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Seed => seed(&mut AppContext::new()?),
        Command::Query => shell::run(&mut AppContext::new()?),
        Command::Ping => ping(&mut AppContext::new()?),
        Command::Tryon => tryon::run(),
    }
}

/// frank.py's top-level script: one sample book, one clipping attached to
/// it. A clipping failure after a successful book insert is reported, not
/// rolled back.
fn seed(app: &mut AppContext) -> Result<()> {
    let db = app.db_mut();
    db.connect()?;

    let now = Local::now();
    let book_id = db::create_book(db, &NewBook::sample(&now))?;
    println!("New book number {book_id}");

    let clipping_id = db::create_clipping(db, &NewClipping::sample(book_id, &now))?;
    println!("New clipping number {clipping_id}");

    db.disconnect();
    Ok(())
}

fn ping(app: &mut AppContext) -> Result<()> {
    let db = app.db_mut();
    if let Err(err) = db.connect() {
        error!(error = %err, "connection attempt failed");
    }

    if db.is_connected() {
        println!("Connection test successful.");
    } else {
        println!("No active connection. Please connect first.");
    }

    db.disconnect();
    Ok(())
}
