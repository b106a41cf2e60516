use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn ledger(&self) -> PathBuf {
        self.dir.path().join("finances.json")
    }

    fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn wallet(&self) -> Command {
        let mut cmd = Command::cargo_bin("wallet").unwrap();
        cmd.env("WALLET_CLI_CONFIG_DIR", self.config_dir())
            .env_remove("WALLET_LEDGER_FILE")
            .current_dir(self.dir.path())
            .arg("--file")
            .arg(self.ledger());
        cmd
    }

    fn add(&self, date: &str, category: &str, amount: &str, description: &str) {
        self.wallet()
            .args([
                "add",
                "--date",
                date,
                "--category",
                category,
                "--amount",
                amount,
                "--description",
                description,
            ])
            .assert()
            .success();
    }

    fn seed(&self) {
        self.add("2024-04-01", "income", "5000", "Salary");
        self.add("2024-04-02", "expense", "1500", "Groceries");
        self.add("2024-04-03", "expense", "200", "Transport");
    }

    fn ledger_json(&self) -> Vec<Value> {
        read_ledger(&self.ledger())
    }
}

fn read_ledger(path: &Path) -> Vec<Value> {
    let raw = fs::read_to_string(path).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn add_writes_cyrillic_category_tokens() {
    let ws = Workspace::new();
    ws.seed();

    let ledger = ws.ledger_json();
    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger[0]["category"], "доход");
    assert_eq!(ledger[1]["category"], "расход");
    assert_eq!(ledger[0]["amount"].as_f64(), Some(5000.0));
    assert_eq!(ledger[2]["description"], "Transport");
}

#[test]
fn add_accepts_cyrillic_category_alias() {
    let ws = Workspace::new();
    ws.add("2024-04-04", "доход", "3000", "Продажа акций");

    let ledger = ws.ledger_json();
    assert_eq!(ledger[0]["category"], "доход");
    assert_eq!(ledger[0]["description"], "Продажа акций");
}

#[test]
fn balance_reports_totals() {
    let ws = Workspace::new();
    ws.seed();

    ws.wallet()
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:   5000.00 руб."))
        .stdout(predicate::str::contains("Expenses: 1700.00 руб."))
        .stdout(predicate::str::contains("Balance:  3300.00 руб."));
}

#[test]
fn balance_of_missing_ledger_is_zero_and_creates_file() {
    let ws = Workspace::new();

    ws.wallet()
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance:  0.00"));

    assert_eq!(fs::read_to_string(ws.ledger()).unwrap(), "[]");
}

#[test]
fn edit_replaces_record() {
    let ws = Workspace::new();
    ws.seed();

    ws.wallet()
        .args([
            "edit",
            "--index",
            "1",
            "--date",
            "2024-04-02",
            "--category",
            "expense",
            "--amount",
            "2000",
            "--description",
            "Restaurant",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated record: #1 2024-04-02"));

    let ledger = ws.ledger_json();
    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger[1]["amount"].as_f64(), Some(2000.0));
    assert_eq!(ledger[1]["description"], "Restaurant");
    assert_eq!(ledger[0]["description"], "Salary");
    assert_eq!(ledger[2]["description"], "Transport");
}

#[test]
fn edit_out_of_range_leaves_ledger_unchanged() {
    let ws = Workspace::new();
    ws.seed();
    let before = fs::read_to_string(ws.ledger()).unwrap();

    for index in ["3", "-1"] {
        ws.wallet()
            .arg("edit")
            .arg(format!("--index={}", index))
            .args([
                "--date",
                "2024-05-01",
                "--category",
                "income",
                "--amount",
                "1",
                "--description",
                "Nope",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "No record at index {}",
                index
            )));
    }

    assert_eq!(fs::read_to_string(ws.ledger()).unwrap(), before);
}

#[test]
fn search_by_category_returns_only_matches() {
    let ws = Workspace::new();
    ws.seed();

    ws.wallet()
        .args(["search", "--category", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found records:"))
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Groceries").not());
}

#[test]
fn search_by_amount_and_date() {
    let ws = Workspace::new();
    ws.seed();

    ws.wallet()
        .args(["search", "--amount", "1500", "--date", "2024-04-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Transport").not());
}

#[test]
fn search_without_matches_reports_not_found() {
    let ws = Workspace::new();
    ws.seed();

    ws.wallet()
        .args(["search", "--date", "1999-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching records found."));
}

#[test]
fn search_without_filters_lists_everything() {
    let ws = Workspace::new();
    ws.seed();

    ws.wallet()
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains("All records:"))
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Transport"));
}

#[test]
fn list_shows_all_records() {
    let ws = Workspace::new();
    ws.seed();

    ws.wallet()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 3 records"));
}

#[test]
fn invalid_category_is_rejected_by_parser() {
    let ws = Workspace::new();

    ws.wallet()
        .args([
            "add",
            "--date",
            "2024-04-01",
            "--category",
            "gift",
            "--amount",
            "10",
            "--description",
            "x",
        ])
        .assert()
        .failure()
        .code(2);

    assert!(!ws.ledger().exists());
}

#[test]
fn non_numeric_amount_is_rejected_by_parser() {
    let ws = Workspace::new();

    ws.wallet()
        .args([
            "add",
            "--date",
            "2024-04-01",
            "--category",
            "income",
            "--amount",
            "lots",
            "--description",
            "x",
        ])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn missing_required_flag_is_rejected_by_parser() {
    let ws = Workspace::new();

    ws.wallet()
        .args(["add", "--date", "2024-04-01", "--category", "income"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn malformed_ledger_is_fatal() {
    let ws = Workspace::new();
    fs::write(ws.ledger(), "{ not json").unwrap();

    ws.wallet()
        .arg("balance")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn unknown_categories_survive_a_rewrite() {
    let ws = Workspace::new();
    fs::write(
        ws.ledger(),
        r#"[{"date": "2024-04-01", "category": "перевод", "amount": 50, "description": "Transfer"}]"#,
    )
    .unwrap();

    ws.add("2024-04-02", "income", "10", "Gift");

    let ledger = ws.ledger_json();
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger[0]["category"], "перевод");

    let raw = fs::read_to_string(ws.ledger()).unwrap();
    assert!(raw.contains("\"amount\": 50,"));
    assert!(!raw.contains("50.0"));

    ws.wallet()
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance:  10.00"));
}

#[test]
fn search_finds_unknown_category_by_token() {
    let ws = Workspace::new();
    fs::write(
        ws.ledger(),
        r#"[
            {"date": "2024-04-01", "category": "перевод", "amount": 50, "description": "Transfer"},
            {"date": "2024-04-02", "category": "доход", "amount": 10, "description": "Gift"}
        ]"#,
    )
    .unwrap();

    ws.wallet()
        .args(["search", "--category", "перевод"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transfer"))
        .stdout(predicate::str::contains("Gift").not());

    ws.wallet()
        .args(["search", "--category", "gift"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching records found."));
}

#[test]
fn ledger_file_from_environment() {
    let ws = Workspace::new();
    let other = ws.dir.path().join("other.json");

    Command::cargo_bin("wallet")
        .unwrap()
        .env("WALLET_CLI_CONFIG_DIR", ws.config_dir())
        .env("WALLET_LEDGER_FILE", &other)
        .current_dir(ws.dir.path())
        .args([
            "add",
            "--date",
            "2024-04-01",
            "--category",
            "income",
            "--amount",
            "1",
            "--description",
            "env",
        ])
        .assert()
        .success();

    assert_eq!(read_ledger(&other).len(), 1);
    assert!(!ws.ledger().exists());
}

#[test]
fn audit_history_after_enabling() {
    let ws = Workspace::new();

    ws.wallet()
        .args(["config", "--audit", "true", "--currency-label", "EUR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit enabled:  true"));

    ws.seed();
    ws.wallet()
        .args([
            "edit",
            "--index",
            "0",
            "--date",
            "2024-04-01",
            "--category",
            "income",
            "--amount",
            "5500",
            "--description",
            "Salary",
        ])
        .assert()
        .success();

    ws.wallet()
        .args(["history", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE #2"))
        .stdout(predicate::str::contains("UPDATE #0"))
        .stdout(predicate::str::contains("amount: 5000 -> 5500"));

    ws.wallet()
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:   5500.00 EUR"));
}

#[test]
fn history_when_audit_disabled() {
    let ws = Workspace::new();

    ws.wallet()
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit logging is disabled"));
}
