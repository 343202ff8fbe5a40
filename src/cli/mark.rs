use std::path::Path;

use chrono::Utc;

use crate::cli::resolve_subject;
use crate::error::{OpshubError, Result};
use crate::filters;
use crate::models::{
    record_key, COL_ASSIGNMENT_ORDER, COL_CREATOR_ID, COL_DATE_POSTED, COL_POSTING_ORDER,
    COL_PRODUCT, COL_TITLE, COL_VA_ID,
};
use crate::session::Session;
use crate::settings::{load_settings, marks_path};
use crate::store::{self, Completion, MarkStore};
use crate::views;

/// Toggle the filmed mark for a card on today's assignment board.
pub fn film(position: usize, undo: bool, id: Option<String>, file: Option<String>) -> Result<()> {
    let settings = load_settings();
    let tz = settings.tz()?;
    let subject = resolve_subject(id, None, &settings.creator_id);
    let today = filters::civil_date(tz, 0);
    let yesterday = filters::shift_date(&today, -1);

    let mut session = Session::new(settings)?;
    let table = session.assignments(file.as_deref().map(Path::new))?;
    let board = views::creator_board(&table, subject.as_deref(), &today, &yesterday);

    let index = views::position_index(&board.groups, position)
        .ok_or(OpshubError::UnknownPosition(position))?;
    let row = &board.rows[index];
    let key = store::filmed_key(
        subject.as_deref(),
        &today,
        &record_key(row, COL_CREATOR_ID, COL_ASSIGNMENT_ORDER),
    );

    let mut marks = MarkStore::open(&marks_path());
    marks.set(&key, !undo);
    marks.save();

    let verb = if undo { "Cleared filmed mark for" } else { "Filmed" };
    println!("{verb} #{position}: {}", row.get(COL_PRODUCT));
    Ok(())
}

/// Toggle the posted mark for a video on today's task board.
pub fn post(position: usize, undo: bool, id: Option<String>, file: Option<String>) -> Result<()> {
    let settings = load_settings();
    let tz = settings.tz()?;
    let subject = resolve_subject(id, None, &settings.va_id);
    let today = filters::civil_date(tz, 0);

    let mut session = Session::new(settings)?;
    let table = session.va_tasks(file.as_deref().map(Path::new))?;
    let board = views::task_board(&table, subject.as_deref(), &today);

    let index = views::position_index(&board.groups, position)
        .ok_or(OpshubError::UnknownPosition(position))?;
    let row = &board.rows[index];
    let key = store::posted_key(
        subject.as_deref(),
        &today,
        &record_key(row, COL_VA_ID, COL_POSTING_ORDER),
    );

    let mut marks = MarkStore::open(&marks_path());
    marks.set(&key, !undo);
    marks.save();

    let verb = if undo { "Cleared posted mark for" } else { "Posted" };
    println!("{verb} video #{position}: {}", row.get(COL_PRODUCT));
    Ok(())
}

/// Record the one-shot "all uploads done" confirmation for today.
pub fn complete(id: Option<String>) -> Result<()> {
    let settings = load_settings();
    let tz = settings.tz()?;
    let subject = resolve_subject(id, None, &settings.creator_id);
    let today = filters::civil_date(tz, 0);

    let now = Utc::now().with_timezone(&tz);
    let completion = Completion {
        completed_at: now.format("%-I:%M %p on %A, %B %-d").to_string(),
        confirmed_by: subject.clone().unwrap_or_else(|| "unknown".to_string()),
    };

    let mut marks = MarkStore::open(&marks_path());
    marks.set_completion(&store::complete_key(subject.as_deref(), &today), completion);
    marks.save();

    println!("All uploads confirmed complete for {today}.");
    Ok(())
}

/// Mark the Nth newest hub update as read. Read marks only ever go on.
pub fn read(position: usize, id: Option<String>, file: Option<String>) -> Result<()> {
    let settings = load_settings();
    let subject = resolve_subject(id, None, &settings.creator_id);

    let mut session = Session::new(settings)?;
    let table = session.hub(file.as_deref().map(Path::new))?;
    let board = views::hub_board(&table);

    let update = board
        .updates
        .get(position.wrapping_sub(1))
        .ok_or(OpshubError::UnknownPosition(position))?;
    let key = store::read_key(
        subject.as_deref(),
        update.get(COL_TITLE),
        update.get(COL_DATE_POSTED),
    );

    let mut marks = MarkStore::open(&marks_path());
    marks.set(&key, true);
    marks.save();

    println!("Marked as read: {}", update.get(COL_TITLE));
    Ok(())
}
