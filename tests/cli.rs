use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "ledger";

fn ledger(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("ENVELOPE_LEDGER_DATA_DIR", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(dir: &TempDir, args: &[&str]) {
    ledger(dir).args(args).assert().success();
}

#[test]
fn init_creates_pool_and_groups() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete"));

    ledger(&dir)
        .args(["group", "list"])
        .assert()
        .success()
        .stdout(contains("Income").and(contains("Savings")));

    ledger(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already initialized"));
}

#[test]
fn budgeting_scenario_end_to_end() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["init"]);
    run(&dir, &["account", "create", "Checking", "-b", "100"]);

    ledger(&dir)
        .args(["account", "deposit", "Checking", "50", "-d", "2025-01-15"])
        .assert()
        .success()
        .stdout(contains("Account Checking: $100.00 -> $150.00"));

    run(&dir, &["envelope", "create", "Groceries", "-g", "Needs"]);

    ledger(&dir)
        .args(["envelope", "fund", "Groceries", "40"])
        .assert()
        .success()
        .stdout(contains("Envelope Income Pool: $150.00 -> $110.00"));

    ledger(&dir)
        .args([
            "account", "withdraw", "Checking", "Groceries", "25", "-m", "Market", "-d",
            "2025-01-15",
        ])
        .assert()
        .success()
        .stdout(contains("Recorded withdrawal of $25.00 on 2025-01-15 (Market)"));

    ledger(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("$125.00").and(contains("Ledger is balanced.")));

    ledger(&dir)
        .args(["transaction", "list", "--holder", "groceries"])
        .assert()
        .success()
        .stdout(contains("withdrawal").and(contains("transfer")));
}

#[test]
fn withdraw_beyond_envelope_fails() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["init"]);
    run(&dir, &["account", "create", "Checking", "-b", "125"]);
    run(&dir, &["envelope", "create", "Groceries", "-g", "Needs"]);
    run(&dir, &["envelope", "fund", "Groceries", "15"]);

    ledger(&dir)
        .args(["account", "withdraw", "Checking", "Groceries", "100"])
        .assert()
        .failure()
        .stderr(contains("Insufficient funds in Groceries"));

    ledger(&dir)
        .args(["envelope", "show", "Groceries"])
        .assert()
        .success()
        .stdout(contains("$15.00"));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["init"]);
    run(&dir, &["account", "create", "Checking"]);

    ledger(&dir)
        .args(["account", "deposit", "Checking", "10.005"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    ledger(&dir)
        .args(["account", "deposit", "Checking", "-5"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));
}

#[test]
fn unknown_account_is_reported() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["init"]);

    ledger(&dir)
        .args(["account", "deposit", "Nowhere", "10"])
        .assert()
        .failure()
        .stderr(contains("Account not found: Nowhere"));
}
