use std::path::Path;

use crate::error::Result;
use crate::fetch::SheetClient;
use crate::models::Table;
use crate::settings::Settings;
use crate::sheet::{self, TableSpec};
use crate::state::Latest;

/// Holds the client and one latest-wins slot per tab. Every load begins a
/// new generation; only the newest generation's table sticks, so a stale
/// fetch that resolves late cannot replace fresher data.
pub struct Session {
    pub settings: Settings,
    client: SheetClient,
    assignments: Latest<Table>,
    va_tasks: Latest<Table>,
    hub: Latest<Table>,
}

impl Session {
    pub fn new(settings: Settings) -> Result<Self> {
        Ok(Self {
            client: SheetClient::new()?,
            settings,
            assignments: Latest::new(),
            va_tasks: Latest::new(),
            hub: Latest::new(),
        })
    }

    /// Assignments tab, from a local file when given (the offline
    /// equivalent of a fetched snapshot), otherwise over HTTP.
    pub fn assignments(&mut self, file: Option<&Path>) -> Result<Table> {
        let url = self.settings.assignments_url.clone();
        load(&self.client, &mut self.assignments, &url, &sheet::ASSIGNMENTS, file)
    }

    pub fn va_tasks(&mut self, file: Option<&Path>) -> Result<Table> {
        let url = self.settings.va_tasks_url.clone();
        load(&self.client, &mut self.va_tasks, &url, &sheet::VA_TASKS, file)
    }

    pub fn hub(&mut self, file: Option<&Path>) -> Result<Table> {
        let url = self.settings.hub_url.clone();
        load(&self.client, &mut self.hub, &url, &sheet::HUB_RESOURCES, file)
    }
}

fn load(
    client: &SheetClient,
    slot: &mut Latest<Table>,
    url: &str,
    spec: &TableSpec,
    file: Option<&Path>,
) -> Result<Table> {
    let generation = slot.begin();
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => client.fetch(url)?,
    };
    let table = sheet::parse_table(&text, spec);
    slot.accept(generation, table);
    Ok(slot.get().cloned().unwrap_or_default())
}
