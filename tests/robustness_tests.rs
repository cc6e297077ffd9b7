use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_malformed_orders_are_skipped() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "customer, product, quantity").unwrap();
    writeln!(file, "1, Phone, 1").unwrap();
    writeln!(file, "abc, Phone, 1").unwrap(); // Non-integer customer
    writeln!(file, "1, Phone, -1").unwrap(); // Negative quantity
    writeln!(file, "1, Phone, lots").unwrap();
    writeln!(file, "1, Phone, 1").unwrap();

    let mut cmd = Command::new(cargo_bin!("marketplace-sim"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading order"))
        .stdout(predicate::str::contains("Remaining balance: 500"))
        .stdout(predicate::str::ends_with(
            "- Laptop, Price: 1000, Quantity: 5\n- Phone, Price: 500, Quantity: 8\n",
        ));
}

#[test]
fn test_unknown_customer_does_not_stop_run() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "customer, product, quantity").unwrap();
    writeln!(file, "99, Laptop, 1").unwrap();
    writeln!(file, "1, Laptop, 1").unwrap();

    let mut cmd = Command::new(cargo_bin!("marketplace-sim"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Purchase failed: Customer not found: 99"))
        .stdout(predicate::str::contains("- Laptop, Price: 1000, Quantity: 4"));
}

#[test]
fn test_empty_orders_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "customer, product, quantity").unwrap();

    let mut cmd = Command::new(cargo_bin!("marketplace-sim"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Success").not())
        .stdout(predicate::str::ends_with(
            "- Laptop, Price: 1000, Quantity: 5\n- Phone, Price: 500, Quantity: 10\n",
        ));
}
