use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::resolve_subject;
use crate::error::Result;
use crate::filters;
use crate::fmt::{checkbox, display_name, friendly_date, plural, progress};
use crate::models::{
    record_key, Record, COL_CAPTION, COL_CREATOR_NAME, COL_POSTING_DATE, COL_POSTING_ORDER,
    COL_PRODUCT, COL_PRODUCT_LINK, COL_VA_ID, COL_VA_STATUS, COL_VIDEO_FILE_LINK,
};
use crate::session::Session;
use crate::settings::{load_settings, marks_path};
use crate::store::{self, MarkStore};
use crate::views::{self, TaskBoard};

const CAPTION_WIDTH: usize = 64;

pub fn run(
    id: Option<String>,
    account: Option<String>,
    creator: Option<String>,
    date: Option<String>,
    file: Option<String>,
) -> Result<()> {
    let settings = load_settings();
    let tz = settings.tz()?;
    let subject = resolve_subject(id, None, &settings.va_id);

    let target = match date {
        Some(d) => d,
        None => filters::civil_date(tz, 0),
    };

    let mut session = Session::new(settings)?;
    let table = session.va_tasks(file.as_deref().map(Path::new))?;
    let board = views::task_board(&table, subject.as_deref(), &target);

    let mut marks = MarkStore::open(&marks_path());
    if marks.sweep(&filters::civil_date(tz, -store::RETENTION_DAYS)) > 0 {
        marks.save();
    }

    render(&board, subject.as_deref(), account.as_deref(), creator.as_deref(), &marks);
    Ok(())
}

fn creator_matches(row: &Record, filter: Option<&str>) -> bool {
    filter.map_or(true, |wanted| row.get(COL_CREATOR_NAME) == wanted)
}

fn render(
    board: &TaskBoard,
    subject: Option<&str>,
    account: Option<&str>,
    creator: Option<&str>,
    marks: &MarkStore,
) {
    println!("{} — {}", "VA Dashboard".bold(), friendly_date(&board.date));
    if !board.va_name.is_empty() {
        println!("Hi {}!", display_name(&board.va_name));
    }
    println!();

    if board.rows.is_empty() {
        println!("No videos to post for {}. Check back tomorrow.", board.date);
        return;
    }

    // Posted progress covers the whole board, not just the filtered view.
    let mut posted_count = 0usize;
    for row in &board.rows {
        let key = store::posted_key(
            subject,
            &board.date,
            &record_key(row, COL_VA_ID, COL_POSTING_ORDER),
        );
        if marks.is_set(&key) {
            posted_count += 1;
        }
    }

    println!(
        "You have {} to post across {}",
        plural(board.rows.len(), "video"),
        plural(board.groups.len(), "account")
    );
    if posted_count == board.rows.len() {
        println!("{}", "All done for today! Excellent work!".green().bold());
    } else {
        println!("Posted: {}", progress(posted_count, board.rows.len()));
    }
    println!();

    let mut shown = 0usize;
    for (group, numbers) in board.groups.iter().zip(&board.video_numbers) {
        if account.is_some_and(|wanted| wanted != group.key) {
            continue;
        }
        let members: Vec<(usize, u32)> = group
            .indices
            .iter()
            .zip(numbers)
            .filter(|(&index, _)| creator_matches(&board.rows[index], creator))
            .map(|(&index, &number)| (index, number))
            .collect();
        if members.is_empty() {
            continue;
        }
        shown += members.len();

        println!("{} — {}", group.key.bold(), plural(members.len(), "video"));
        let mut table = Table::new();
        table.set_header(vec!["Video #", "Posted", "Product", "Creator", "Status", "Post date"]);
        for &(index, number) in &members {
            let row = &board.rows[index];
            let key = store::posted_key(
                subject,
                &board.date,
                &record_key(row, COL_VA_ID, COL_POSTING_ORDER),
            );
            let posted = marks.is_set(&key);
            let status = if posted {
                "Posted".green().to_string()
            } else {
                let raw = row.get(COL_VA_STATUS);
                if raw.is_empty() { "pending".to_string() } else { raw.to_string() }
            };
            let posting_date = row.get(COL_POSTING_DATE);
            let post_date = if posting_date.is_empty() || posting_date == board.date {
                "today".to_string()
            } else {
                posting_date.to_string()
            };
            table.add_row(vec![
                Cell::new(number),
                Cell::new(checkbox(posted)),
                Cell::new(row.get(COL_PRODUCT)),
                Cell::new(row.get(COL_CREATOR_NAME)),
                Cell::new(status),
                Cell::new(post_date),
            ]);
        }
        println!("{table}");

        for &(index, number) in &members {
            let row = &board.rows[index];
            let caption = row.get(COL_CAPTION);
            if !caption.is_empty() {
                println!("  Video #{number} caption:");
                println!("{}", textwrap::indent(&textwrap::fill(caption, CAPTION_WIDTH), "    "));
            }
            let video_link = row.get(COL_VIDEO_FILE_LINK);
            if !video_link.is_empty() {
                println!("  Video #{number} file: {video_link}");
            }
            let product_link = row.get(COL_PRODUCT_LINK);
            if !product_link.is_empty() {
                println!("  Video #{number} product: {product_link}");
            }
        }
        println!();
    }

    if shown == 0 {
        println!("No tasks match the current filters.");
    }
}
