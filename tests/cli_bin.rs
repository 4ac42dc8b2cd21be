use std::process::Command;

fn fleetfit(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_fleetfit"))
        .args(args)
        .output()
        .expect("failed to run fleetfit binary")
}

#[test]
fn deploy_json_smoke() {
    let output = fleetfit(&["deploy", "--seed", "1", "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["grid"].as_array().unwrap().len(), 10);
    assert_eq!(v["ships"].as_array().unwrap().len(), 10);
    assert!(v["attempts"].as_u64().unwrap() >= 1);
}

#[test]
fn deploy_text_uses_free_symbol() {
    let output = fleetfit(&[
        "deploy",
        "--seed",
        "3",
        "--height",
        "4",
        "--width",
        "6",
        "--ship",
        "Sloop:2:1",
        "--free-symbol",
        "~",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().take(4).filter(|l| l.contains('~')).count(), 4);
    assert!(stdout.contains("Sloop (2)"));
}

#[test]
fn check_reports_infeasible_with_failure_status() {
    let output = fleetfit(&["check", "--height", "3", "--width", "3", "--ship", "Carrier:5:1"]);
    assert!(!output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "infeasible");
}

#[test]
fn check_json_reports_feasible() {
    let output = fleetfit(&["check", "--seed", "5", "--json"]);
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["feasible"], serde_json::Value::Bool(true));
    assert_eq!(v["ships"], 10);
}

#[test]
fn malformed_ship_argument_is_rejected() {
    let output = fleetfit(&["check", "--ship", "Carrier:five:1"]);
    assert!(!output.status.success());
}

#[test]
fn oversized_map_is_rejected() {
    let output = fleetfit(&[
        "check", "--height", "200000", "--width", "200000", "--ship", "T:1:1",
    ]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
