use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::resolve_subject;
use crate::error::Result;
use crate::fmt::friendly_date;
use crate::models::{COL_CONTENT, COL_DATE_POSTED, COL_LINK, COL_TITLE};
use crate::session::Session;
use crate::settings::{load_settings, marks_path};
use crate::store::{self, MarkStore};
use crate::views::{self, HubBoard};

const CONTENT_WIDTH: usize = 64;

pub fn run(id: Option<String>, file: Option<String>) -> Result<()> {
    let settings = load_settings();
    let subject = resolve_subject(id, None, &settings.creator_id);

    let mut session = Session::new(settings)?;
    let table = session.hub(file.as_deref().map(Path::new))?;
    let board = views::hub_board(&table);

    let marks = MarkStore::open(&marks_path());
    render(&board, subject.as_deref(), &marks);
    Ok(())
}

fn render(board: &HubBoard, subject: Option<&str>, marks: &MarkStore) {
    println!("{}", "Creator Hub".bold());
    println!();

    if board.updates.is_empty() && board.resources.is_empty() && board.bonus.is_empty() {
        println!("Nothing posted on the hub yet.");
        return;
    }

    if !board.updates.is_empty() {
        println!("{}", "Updates".bold());
        for (i, update) in board.updates.iter().enumerate() {
            let key = store::read_key(subject, update.get(COL_TITLE), update.get(COL_DATE_POSTED));
            let marker = if marks.is_set(&key) {
                "[read]".dimmed().to_string()
            } else {
                "[new]".yellow().bold().to_string()
            };
            let date = update.get(COL_DATE_POSTED);
            let dated = if date.is_empty() {
                String::new()
            } else {
                format!(" ({})", friendly_date(date))
            };
            println!("  {}. {marker} {}{dated}", i + 1, update.get(COL_TITLE));
            let content = update.get(COL_CONTENT);
            if !content.is_empty() {
                println!("{}", textwrap::indent(&textwrap::fill(content, CONTENT_WIDTH), "     "));
            }
            let link = update.get(COL_LINK);
            if !link.is_empty() {
                println!("     {link}");
            }
        }
        println!();
    }

    if !board.resources.is_empty() {
        println!("{}", "Resources".bold());
        println!("{}", listing(&board.resources));
        println!();
    }

    if !board.bonus.is_empty() {
        println!("{}", "Bonus opportunities".bold());
        println!("{}", listing(&board.bonus));
    }
}

fn listing(rows: &[crate::models::Record]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Title", "Details", "Link"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.get(COL_TITLE)),
            Cell::new(textwrap::fill(row.get(COL_CONTENT), CONTENT_WIDTH / 2)),
            Cell::new(row.get(COL_LINK)),
        ]);
    }
    table
}
