use predicates::str::contains;
use std::fs;

mod common;
use common::{setup_config, setup_data, temp_out, ttk};

#[test]
fn test_report_writes_weekly_and_daily_sections() {
    let data = setup_data("report_sections");
    let cfg = setup_config("report_sections");
    common::seed_two_days(&data, &cfg);

    ttk()
        .args([
            "--data", &data, "--config", &cfg, "special", "vacation", "--minutes", "200",
            "--date", "2025-03-12",
        ])
        .assert()
        .success();

    let out = temp_out("report_sections", "csv");
    ttk()
        .args(["--data", &data, "--config", &cfg, "report", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV report written"));

    let content = fs::read_to_string(&out).expect("report file");
    assert!(content.contains("WEEKLY SUMMARY"));
    assert!(content.contains("DAILY DETAIL"));
    assert!(content.contains("Week 11,10/03/2025,16/03/2025"));
    assert!(content.contains("10/03/2025,Monday,Normal,09:00,17:30"));
    assert!(content.contains("12/03/2025,Wednesday,Vacation,-,-"));
    // 510 + 480 + 200 = 19h 50min against a 41h target
    assert!(content.contains("19h 50min,41h,-21h 10min,deficit"));

    fs::remove_file(&out).ok();
}

#[test]
fn test_report_refuses_to_overwrite_without_force() {
    let data = setup_data("report_force");
    let cfg = setup_config("report_force");
    common::seed_two_days(&data, &cfg);

    let out = temp_out("report_force", "csv");
    fs::write(&out, "existing").unwrap();

    ttk()
        .args(["--data", &data, "--config", &cfg, "report", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    ttk()
        .args([
            "--data", &data, "--config", &cfg, "report", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("WEEKLY SUMMARY"));

    fs::remove_file(&out).ok();
}

#[test]
fn test_report_on_empty_store_fails() {
    let data = setup_data("report_empty");
    let cfg = setup_config("report_empty");

    let out = temp_out("report_empty", "csv");
    ttk()
        .args(["--data", &data, "--config", &cfg, "report", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("No records to report"));
}

#[test]
fn test_config_set_and_print() {
    let data = setup_data("config_set");
    let cfg = setup_config("config_set");

    ttk()
        .args([
            "--data", &data, "--config", &cfg, "config", "--daily-hours", "8",
            "--daily-minutes", "0", "--weekly-hours", "40",
        ])
        .assert()
        .success()
        .stdout(contains("Settings saved"));

    ttk()
        .args(["--data", &data, "--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("daily_target:  8h 00min"))
        .stdout(contains("weekly_target: 40h"));

    // the new daily target drives holiday credit
    ttk()
        .args([
            "--data", &data, "--config", &cfg, "special", "holiday", "--date", "2025-03-12",
        ])
        .assert()
        .success()
        .stdout(contains("8h 00min credited"));

    fs::remove_file(&cfg).ok();
}
