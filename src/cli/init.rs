use chrono_tz::Tz;

use crate::error::{OpshubError, Result};
use crate::settings::{load_settings, save_settings, settings_path};

pub fn run(
    creator_id: Option<String>,
    va_id: Option<String>,
    timezone: Option<String>,
    assignments_url: Option<String>,
    va_tasks_url: Option<String>,
    hub_url: Option<String>,
) -> Result<()> {
    let mut settings = load_settings();

    if let Some(zone) = timezone {
        zone.parse::<Tz>()
            .map_err(|_| OpshubError::Timezone(zone.clone()))?;
        settings.timezone = zone;
    }
    if let Some(id) = creator_id {
        settings.creator_id = id;
    }
    if let Some(id) = va_id {
        settings.va_id = id;
    }
    if let Some(url) = assignments_url {
        settings.assignments_url = url;
    }
    if let Some(url) = va_tasks_url {
        settings.va_tasks_url = url;
    }
    if let Some(url) = hub_url {
        settings.hub_url = url;
    }

    save_settings(&settings)?;
    println!("Settings written to {}", settings_path().display());
    Ok(())
}
