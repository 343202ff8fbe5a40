use crate::filters;
use crate::grouping::{self, Group};
use crate::models::{
    Record, COL_ACCOUNT, COL_CREATOR_ID, COL_DATE, COL_DATE_POSTED, COL_POSTING_ORDER, COL_TYPE,
    COL_VA_ID, COL_VA_NAME,
};

/// Updates shown on the hub, newest first.
pub const UPDATE_LIMIT: usize = 3;

// ---------------------------------------------------------------------------
// Creator board
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct CreatorBoard {
    pub date: String,
    /// The filtered sequence; positions here are the global indices the
    /// groups refer to.
    pub rows: Vec<Record>,
    pub groups: Vec<Group>,
    pub yesterday: String,
    pub yesterday_rows: Vec<Record>,
}

/// Today's (and yesterday's) assignments for one creator, grouped by
/// account.
pub fn creator_board(
    table: &[Record],
    subject: Option<&str>,
    today: &str,
    yesterday: &str,
) -> CreatorBoard {
    let dated = filters::by_date(table, COL_DATE, today);
    let rows = filters::by_subject(&dated, COL_CREATOR_ID, subject);
    let groups = grouping::partition(&rows, COL_ACCOUNT);
    let yesterday_rows = filters::by_subject(
        &filters::by_date(table, COL_DATE, yesterday),
        COL_CREATOR_ID,
        subject,
    );
    CreatorBoard {
        date: today.to_string(),
        rows,
        groups,
        yesterday: yesterday.to_string(),
        yesterday_rows,
    }
}

// ---------------------------------------------------------------------------
// VA board
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct TaskBoard {
    pub date: String,
    pub rows: Vec<Record>,
    pub groups: Vec<Group>,
    /// Aligned with `groups`: the dense cross-group video number of each
    /// member.
    pub video_numbers: Vec<Vec<u32>>,
    pub va_name: String,
}

/// Today's posting tasks for one VA: grouped by account, posting order
/// applied within each group, video numbers dense across the board.
pub fn task_board(table: &[Record], subject: Option<&str>, today: &str) -> TaskBoard {
    let dated = filters::by_date(table, COL_DATE, today);
    let rows = filters::by_subject(&dated, COL_VA_ID, subject);
    let mut groups = grouping::partition(&rows, COL_ACCOUNT);
    grouping::order_by_posting(&rows, &mut groups, COL_POSTING_ORDER);
    let video_numbers = grouping::video_numbers(&groups);
    let va_name = rows
        .first()
        .map(|r| r.get(COL_VA_NAME).to_string())
        .filter(|name| !name.is_empty())
        .or_else(|| subject.map(str::to_string))
        .unwrap_or_default();
    TaskBoard {
        date: today.to_string(),
        rows,
        groups,
        video_numbers,
        va_name,
    }
}

/// Map a displayed card number (1-based, dense across groups in display
/// order) back to the record's global index.
pub fn position_index(groups: &[Group], position: usize) -> Option<usize> {
    if position == 0 {
        return None;
    }
    groups
        .iter()
        .flat_map(|g| g.indices.iter().copied())
        .nth(position - 1)
}

// ---------------------------------------------------------------------------
// Hub
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct HubBoard {
    /// Newest first, capped at UPDATE_LIMIT.
    pub updates: Vec<Record>,
    pub resources: Vec<Record>,
    pub bonus: Vec<Record>,
}

pub fn hub_board(table: &[Record]) -> HubBoard {
    let of_kind = |kind: &str| -> Vec<Record> {
        table
            .iter()
            .filter(|r| r.get(COL_TYPE).to_lowercase() == kind)
            .cloned()
            .collect()
    };
    let mut updates = of_kind("update");
    // date_posted is a civil-date string, so newest-first is a reverse
    // string sort; undated updates land at the back in sheet order.
    updates.sort_by(|a, b| b.get(COL_DATE_POSTED).cmp(a.get(COL_DATE_POSTED)));
    updates.truncate(UPDATE_LIMIT);
    HubBoard {
        updates,
        resources: of_kind("resource"),
        bonus: of_kind("bonus"),
    }
}

// ---------------------------------------------------------------------------
// Upcoming preview
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
pub struct UpcomingDay {
    pub label: &'static str,
    pub date: String,
    pub count: usize,
}

const UPCOMING_LABELS: [&str; 3] = ["Tomorrow", "In 2 days", "In 3 days"];

/// Assignment counts for the three days after `base`, for one creator.
pub fn upcoming(table: &[Record], subject: Option<&str>, base: &str) -> Vec<UpcomingDay> {
    let mine = filters::by_subject(table, COL_CREATOR_ID, subject);
    UPCOMING_LABELS
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let date = filters::shift_date(base, i as i64 + 1);
            let count = filters::by_date(&mine, COL_DATE, &date).len();
            UpcomingDay {
                label,
                date,
                count,
            }
        })
        .collect()
}
