use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::resolve_subject;
use crate::error::Result;
use crate::filters;
use crate::fmt::{checkbox, display_name, friendly_date, plural, progress};
use crate::grouping;
use crate::models::{
    record_key, COL_ASSIGNMENT_ORDER, COL_CREATOR_ID, COL_CREATOR_NAME, COL_PRODUCT,
    COL_SCRIPT_NAME, COL_VIDEO_STYLE,
};
use crate::session::Session;
use crate::settings::{load_settings, marks_path};
use crate::store::{self, MarkStore};
use crate::views::{self, CreatorBoard};

pub fn run(
    id: Option<String>,
    creator_id: Option<String>,
    yesterday: bool,
    date: Option<String>,
    file: Option<String>,
) -> Result<()> {
    let settings = load_settings();
    let tz = settings.tz()?;
    let subject = resolve_subject(id, creator_id, &settings.creator_id);

    let target = match date {
        Some(d) => d,
        None => filters::civil_date(tz, if yesterday { -1 } else { 0 }),
    };
    let previous = filters::shift_date(&target, -1);

    let mut session = Session::new(settings)?;
    let table = session.assignments(file.as_deref().map(Path::new))?;
    let board = views::creator_board(&table, subject.as_deref(), &target, &previous);

    let mut marks = MarkStore::open(&marks_path());
    if marks.sweep(&filters::civil_date(tz, -store::RETENTION_DAYS)) > 0 {
        marks.save();
    }

    render(&board, subject.as_deref(), &marks);
    Ok(())
}

fn render(board: &CreatorBoard, subject: Option<&str>, marks: &MarkStore) {
    let name = board
        .rows
        .first()
        .map(|r| r.get(COL_CREATOR_NAME))
        .filter(|n| !n.is_empty())
        .or(subject)
        .unwrap_or("Creator");
    println!(
        "{} — {}",
        "Assignments".bold(),
        friendly_date(&board.date)
    );
    println!("Welcome back, {}!", display_name(name));
    println!();

    if board.rows.is_empty() {
        println!("No assignments for {}. Check back tomorrow for new work.", board.date);
        return;
    }

    println!(
        "{} for this day across {}",
        plural(board.rows.len(), "assignment"),
        plural(board.groups.len(), "account")
    );
    println!();

    let numbers = grouping::video_numbers(&board.groups);
    let mut filmed_count = 0usize;

    for (group, group_numbers) in board.groups.iter().zip(&numbers) {
        println!(
            "{} — {}",
            group.key.bold(),
            plural(group.indices.len(), "assignment")
        );

        let mut table = Table::new();
        table.set_header(vec!["#", "Filmed", "Product", "Style", "Script"]);
        for (&index, &number) in group.indices.iter().zip(group_numbers) {
            let row = &board.rows[index];
            let key = store::filmed_key(
                subject,
                &board.date,
                &record_key(row, COL_CREATOR_ID, COL_ASSIGNMENT_ORDER),
            );
            let filmed = marks.is_set(&key);
            if filmed {
                filmed_count += 1;
            }
            table.add_row(vec![
                Cell::new(number),
                Cell::new(checkbox(filmed)),
                Cell::new(row.get(COL_PRODUCT)),
                Cell::new(row.get(COL_VIDEO_STYLE)),
                Cell::new(row.get(COL_SCRIPT_NAME)),
            ]);
        }
        println!("{table}");
        println!();
    }

    println!("Filmed: {}", progress(filmed_count, board.rows.len()));
    if !board.yesterday_rows.is_empty() {
        println!(
            "Yesterday ({}): {}",
            board.yesterday,
            plural(board.yesterday_rows.len(), "assignment")
        );
    }

    let completion_key = store::complete_key(subject, &board.date);
    if let Some(completion) = marks.completion(&completion_key) {
        println!();
        println!("{}", "All uploads confirmed complete!".green().bold());
        println!("  Completed at {}", completion.completed_at);
        println!("  Confirmed by: {}", completion.confirmed_by);
    } else if filmed_count == board.rows.len() {
        println!();
        println!("All filmed. Run `opshub complete` once the uploads are in.");
    }
}
