use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn opshub(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("opshub").unwrap();
    // Settings and marks resolve under $HOME/.config/opshub; point them
    // at a throwaway directory so tests never touch real state.
    cmd.env("HOME", home);
    cmd
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn today_pst() -> String {
    chrono::Utc::now()
        .with_timezone(&chrono_tz::America::Los_Angeles)
        .format("%Y-%m-%d")
        .to_string()
}

const ASSIGNMENTS_FIXTURE: &str = "\
Creator Schedule,,,,,,
Published automatically,,,,,,
date_pst,creator_id,account_name,product_name,video_style,script_name,assignment_order
2025-03-01,alice,Acme,\"Serum, travel size\",talking head,serum_v2,1
2025-03-01,alice,Bloom,Face Mist,unboxing,mist_v1,2
2025-03-01,bob,Acme,Other Product,review,,1
2025-03-02,alice,Acme,Tomorrow Product,review,,1
,alice,Acme,No Date,review,,1
";

#[test]
fn test_assignments_filters_and_groups() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_file(dir.path(), "assignments.csv", ASSIGNMENTS_FIXTURE);

    opshub(dir.path())
        .args(["assignments", "--id", " Alice ", "--date", "2025-03-01"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Serum, travel size"))
        .stdout(predicate::str::contains("Face Mist"))
        .stdout(predicate::str::contains("2 assignments"))
        .stdout(predicate::str::contains("Acme"))
        .stdout(predicate::str::contains("Bloom"))
        .stdout(predicate::str::contains("Other Product").not())
        .stdout(predicate::str::contains("Tomorrow Product").not())
        .stdout(predicate::str::contains("No Date").not());
}

#[test]
fn test_assignments_empty_day() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_file(dir.path(), "assignments.csv", ASSIGNMENTS_FIXTURE);

    opshub(dir.path())
        .args(["assignments", "--id", "alice", "--date", "2099-01-01"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("No assignments for 2099-01-01"));
}

#[test]
fn test_assignments_header_never_found_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_file(dir.path(), "junk.csv", "just,some,cells\nwithout,a,header\n");

    opshub(dir.path())
        .args(["assignments", "--id", "alice", "--date", "2025-03-01"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("No assignments"));
}

#[test]
fn test_assignments_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    opshub(dir.path())
        .args(["assignments", "--id", "alice", "--file", "/nonexistent/tab.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_legacy_creator_id_flag() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_file(dir.path(), "assignments.csv", ASSIGNMENTS_FIXTURE);

    opshub(dir.path())
        .args(["assignments", "--creator-id", "bob", "--date", "2025-03-01"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Other Product"))
        .stdout(predicate::str::contains("Face Mist").not());
}

const VA_FIXTURE: &str = "\
date_pst,va_id,va_name,account_name,product_name,creator_name,posting_order,caption_text
2025-03-01,bo,Bo,Zeta,Later Video,alice,2,
2025-03-01,bo,Bo,Alpha,First Video,alice,1,\"New drop, link in bio\"
2025-03-01,bo,Bo,Zeta,Early Video,carol,1,
2025-03-01,kim,Kim,Alpha,Other VA Video,alice,1,
";

#[test]
fn test_tasks_orders_groups_and_videos() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_file(dir.path(), "va.csv", VA_FIXTURE);

    opshub(dir.path())
        .args(["tasks", "--id", "bo", "--date", "2025-03-01"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 videos"))
        .stdout(predicate::str::contains("New drop, link in bio"))
        .stdout(predicate::str::contains("Other VA Video").not())
        .stdout(predicate::function(|out: &str| {
            // Alpha group first, then Zeta ordered by posting_order.
            let first = out.find("First Video");
            let early = out.find("Early Video");
            let later = out.find("Later Video");
            matches!((first, early, later), (Some(f), Some(e), Some(l)) if f < e && e < l)
        }));
}

#[test]
fn test_tasks_account_filter() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_file(dir.path(), "va.csv", VA_FIXTURE);

    opshub(dir.path())
        .args(["tasks", "--id", "bo", "--date", "2025-03-01", "--account", "Zeta"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Early Video"))
        .stdout(predicate::str::contains("First Video").not());
}

const HUB_FIXTURE: &str = "\
type,title,content,link,date_posted
update,Oldest note,Old body,,2025-01-01
update,Newest note,Fresh body,,2025-03-01
update,Middle note,Mid body,,2025-02-01
update,Ancient note,Gone body,,2024-12-01
resource,Filming Guidelines,Best practices for video creation,https://example.com/guide,
bonus,February push,Extra rate this month,,2025-02-10
";

#[test]
fn test_hub_caps_updates_and_marks_read() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_file(dir.path(), "hub.csv", HUB_FIXTURE);

    opshub(dir.path())
        .args(["hub", "--id", "alice"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Newest note"))
        .stdout(predicate::str::contains("Middle note"))
        .stdout(predicate::str::contains("Oldest note"))
        .stdout(predicate::str::contains("Ancient note").not())
        .stdout(predicate::str::contains("[new]"))
        .stdout(predicate::str::contains("Filming Guidelines"))
        .stdout(predicate::str::contains("February push"));

    opshub(dir.path())
        .args(["read", "1", "--id", "alice"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked as read: Newest note"));

    opshub(dir.path())
        .args(["hub", "--id", "alice"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("[read]"));
}

#[test]
fn test_upcoming_counts() {
    let dir = tempfile::tempdir().unwrap();
    let csv = "\
date_pst,creator_id,account_name
2025-03-02,alice,Acme
2025-03-02,alice,Acme
2025-03-04,alice,Acme
2025-03-03,bob,Acme
";
    let fixture = write_file(dir.path(), "assignments.csv", csv);

    opshub(dir.path())
        .args(["upcoming", "--id", "alice", "--date", "2025-03-01"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tomorrow"))
        .stdout(predicate::str::contains("2025-03-02"))
        .stdout(predicate::str::contains("2"));
}

#[test]
fn test_film_mark_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let today = today_pst();
    let csv = format!(
        "date_pst,creator_id,account_name,product_name,video_style,script_name,assignment_order\n\
         {today},alice,Acme,Glow Serum,talking head,serum_v2,1\n"
    );
    let fixture = write_file(dir.path(), "assignments.csv", &csv);

    opshub(dir.path())
        .args(["film", "1", "--id", "alice"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Filmed #1: Glow Serum"));

    opshub(dir.path())
        .args(["assignments", "--id", "alice"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("[x]"))
        .stdout(predicate::str::contains("1 of 1 (100%)"));

    opshub(dir.path())
        .args(["film", "1", "--undo", "--id", "alice"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .success();

    opshub(dir.path())
        .args(["assignments", "--id", "alice"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 1 (0%)"));
}

#[test]
fn test_film_unknown_position_fails() {
    let dir = tempfile::tempdir().unwrap();
    let today = today_pst();
    let csv = format!(
        "date_pst,creator_id,account_name,product_name\n{today},alice,Acme,Glow Serum\n"
    );
    let fixture = write_file(dir.path(), "assignments.csv", &csv);

    opshub(dir.path())
        .args(["film", "9", "--id", "alice"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No card at position 9"));
}

#[test]
fn test_complete_then_banner() {
    let dir = tempfile::tempdir().unwrap();
    let today = today_pst();
    let csv = format!(
        "date_pst,creator_id,account_name,product_name\n{today},alice,Acme,Glow Serum\n"
    );
    let fixture = write_file(dir.path(), "assignments.csv", &csv);

    opshub(dir.path())
        .args(["complete", "--id", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("confirmed complete"));

    opshub(dir.path())
        .args(["assignments", "--id", "alice"])
        .arg("--file")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("All uploads confirmed complete!"))
        .stdout(predicate::str::contains("Confirmed by: alice"));
}

#[test]
fn test_init_then_status() {
    let dir = tempfile::tempdir().unwrap();

    opshub(dir.path())
        .args(["init", "--creator-id", "alice", "--va-id", "bo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written"));

    opshub(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creator id:  alice"))
        .stdout(predicate::str::contains("VA id:       bo"))
        .stdout(predicate::str::contains("Marks file:"));
}

#[test]
fn test_init_rejects_bad_timezone() {
    let dir = tempfile::tempdir().unwrap();

    opshub(dir.path())
        .args(["init", "--timezone", "Mars/Olympus_Mons"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown time zone"));
}
