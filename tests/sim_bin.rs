use std::process::Command;

#[test]
fn match_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_battleship-agent"))
        .args(["match", "--seed", "1", "--rounds", "3", "--json"])
        .output()
        .expect("failed to run battleship-agent binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["board_size"], 10);
    assert_eq!(v["summary"]["rounds"], 3);
    let wins = v["summary"]["wins"].as_array().expect("wins array");
    let total: u64 = wins.iter().filter_map(|w| w.as_u64()).sum();
    assert_eq!(total + v["summary"]["ties"].as_u64().unwrap_or(0), 3);
}

#[test]
fn maps_binary_prints_grids() {
    let output = Command::new(env!("CARGO_BIN_EXE_battleship-agent"))
        .args(["maps", "--seed", "5", "--rounds", "2", "--board-size", "8"])
        .output()
        .expect("failed to run battleship-agent binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("Attack map"));
    assert!(stdout.contains("Placement map"));
}
