use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("layerstack_cli_{name}_{nanos}"))
}

fn layerstack() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_layerstack"));
    cmd.arg("--block-glyphs")
        .arg("--config")
        .arg(temp_path("missing.toml"));
    cmd
}

#[test]
fn list_models_prints_builtins() {
    let output = layerstack().arg("--list-models").output().expect("run layerstack");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("osi: OSI Model (7 layers)"));
    assert!(stdout.contains("tcpip4:"));
    assert!(stdout.contains("tcpip5:"));
}

#[test]
fn script_drives_the_console_panel() {
    let script = temp_path("script.txt");
    std::fs::write(&script, "# comment\ninspect 3\nmodel tcpip4\nbogus\nquit\ninspect 1\n")
        .expect("write script");

    let output = layerstack()
        .arg("--script")
        .arg(&script)
        .output()
        .expect("run layerstack");
    let _ = std::fs::remove_file(&script);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    // Startup load clears the panel before anything else is printed.
    assert_eq!(lines[0], "  Name: -");
    assert!(stdout.contains("  Name: Network (Layer 3)"));
    assert!(stdout.contains("  Protocols: IP, ICMP, IGMP, OSPF"));
    assert!(stdout.contains("Showing tcpip4 with 4 layers"));
    assert!(stdout.contains("Error: Unknown command: bogus. Try help"));
    assert_eq!(lines.last().copied(), Some("Error: Unknown command: bogus. Try help"));
}

#[test]
fn export_dir_writes_labels_and_scene() {
    let dir = temp_path("export");
    let output = layerstack()
        .args(["--model", "tcpip5", "--export-dir"])
        .arg(&dir)
        .output()
        .expect("run layerstack");
    assert!(output.status.success());

    let scene: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.join("scene.json")).expect("scene.json written"),
    )
    .expect("valid json");
    assert_eq!(scene["model"], "tcpip5");
    let layers = scene["layers"].as_array().expect("layers array");
    assert_eq!(layers.len(), 5);
    for layer in layers {
        let file = layer["label"]["file"].as_str().expect("label file");
        assert!(dir.join(file).exists(), "missing {file}");
    }
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn warnings_go_to_stderr_not_the_panel_stream() {
    let script = temp_path("warn_script.txt");
    std::fs::write(&script, "model nope\n").expect("write script");

    let output = layerstack()
        .env_remove("RUST_LOG")
        .arg("--script")
        .arg(&script)
        .output()
        .expect("run layerstack");
    let _ = std::fs::remove_file(&script);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Unknown model: nope. Scene cleared"));
    assert!(!stdout.contains("WARN"), "log lines leaked into stdout:\n{stdout}");
    assert!(stderr.contains("Unknown model key"), "missing warning:\n{stderr}");
}
