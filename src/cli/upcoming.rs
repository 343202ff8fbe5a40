use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::resolve_subject;
use crate::error::Result;
use crate::filters;
use crate::session::Session;
use crate::settings::load_settings;
use crate::views;

pub fn run(id: Option<String>, date: Option<String>, file: Option<String>) -> Result<()> {
    let settings = load_settings();
    let tz = settings.tz()?;
    let subject = resolve_subject(id, None, &settings.creator_id);

    let base = match date {
        Some(d) => d,
        None => filters::civil_date(tz, 0),
    };

    let mut session = Session::new(settings)?;
    let table = session.assignments(file.as_deref().map(Path::new))?;
    let days = views::upcoming(&table, subject.as_deref(), &base);

    println!("{} — next 3 days", "Upcoming Work".bold());
    let mut out = Table::new();
    out.set_header(vec!["Day", "Date", "Assignments"]);
    for day in &days {
        let count = if day.count == 0 {
            "—".to_string()
        } else {
            day.count.to_string()
        };
        out.add_row(vec![
            Cell::new(day.label),
            Cell::new(&day.date),
            Cell::new(count),
        ]);
    }
    println!("{out}");
    Ok(())
}
