use crate::error::Result;
use crate::filters;
use crate::settings::{load_settings, marks_path, settings_path};
use crate::store::{self, MarkStore};

pub fn run() -> Result<()> {
    let settings = load_settings();
    let tz = settings.tz()?;

    println!("Settings:    {}", settings_path().display());
    println!("Time zone:   {}", settings.timezone);
    println!(
        "Creator id:  {}",
        if settings.creator_id.is_empty() { "(not set)" } else { &settings.creator_id }
    );
    println!(
        "VA id:       {}",
        if settings.va_id.is_empty() { "(not set)" } else { &settings.va_id }
    );
    println!("Today:       {}", filters::civil_date(tz, 0));

    let path = marks_path();
    println!();
    println!("Marks file:  {}", path.display());
    let mut marks = MarkStore::open(&path);
    let swept = marks.sweep(&filters::civil_date(tz, -store::RETENTION_DAYS));
    if swept > 0 {
        marks.save();
    }
    println!("Flags:       {}", marks.flag_count());
    println!("Completions: {}", marks.completion_count());
    println!("Swept:       {swept} expired");

    Ok(())
}
