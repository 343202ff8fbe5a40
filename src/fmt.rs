use colored::Colorize;

/// Checklist glyph for a card.
pub fn checkbox(on: bool) -> String {
    if on {
        "[x]".green().bold().to_string()
    } else {
        "[ ]".to_string()
    }
}

/// First letter upper, rest lower, for greeting lines.
pub fn display_name(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// "Friday, March 1" for a YYYY-MM-DD civil date; anything unparseable
/// passes through unchanged.
pub fn friendly_date(date: &str) -> String {
    match chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%A, %B %-d").to_string(),
        Err(_) => date.to_string(),
    }
}

/// "2 of 5 (40%)" progress summary.
pub fn progress(done: usize, total: usize) -> String {
    if total == 0 {
        return "0 of 0".to_string();
    }
    let pct = ((done as f64 / total as f64) * 100.0).round() as u32;
    format!("{done} of {total} ({pct}%)")
}

pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
