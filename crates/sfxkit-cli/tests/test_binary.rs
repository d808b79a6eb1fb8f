//! Runs the `sfxkit` binary end to end.

use pretty_assertions::assert_eq;
use sfxkit_cli::commands::json_output::{GenerateOutput, ListOutput};
use std::process::Command;

fn sfxkit() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sfxkit"))
}

#[test]
fn test_generate_json_reports_every_file() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("se");

    let output = sfxkit()
        .args(["generate", "--json", "--seed", "9", "--out-dir"])
        .arg(&out_dir)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let report: GenerateOutput = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report.success);
    assert!(report.errors.is_empty());

    let result = report.result.unwrap();
    assert_eq!(result.seed, 9);
    assert_eq!(result.source, "builtin");
    let names: Vec<&str> = result.outputs.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["beep", "door_knock", "success", "fail", "pinpon", "bubuu"]
    );

    for file in &result.outputs {
        assert_eq!(file.format, "wav");
        let bytes = std::fs::read(&file.path).unwrap();
        assert_eq!(bytes.len() as u64, file.size_bytes);
        assert_eq!(
            sfxkit_audio::wav::compute_pcm_hash(&bytes).as_deref(),
            Some(file.pcm_hash.as_str())
        );
    }
}

#[test]
fn test_generate_json_validation_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let recipes = tmp.path().join("bad.json");
    std::fs::write(
        &recipes,
        r#"{"recipes": [{"name": "x", "file_stem": "x", "segments": [
            {"type": "tone", "frequency": -5.0, "duration_ms": 10, "volume_db": 0.0}
        ]}]}"#,
    )
    .unwrap();

    let output = sfxkit()
        .args(["generate", "--json", "--recipes"])
        .arg(&recipes)
        .arg("--out-dir")
        .arg(tmp.path().join("se"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: GenerateOutput = serde_json::from_slice(&output.stdout).unwrap();
    assert!(!report.success);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].code, "E006");
    assert_eq!(
        report.errors[0].path.as_deref(),
        Some("recipes[0].segments[0].frequency")
    );
}

#[test]
fn test_generate_human_reports_load_error() {
    let tmp = tempfile::tempdir().unwrap();

    let output = sfxkit()
        .args(["generate", "--only", "whistle", "--out-dir"])
        .arg(tmp.path().join("se"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown recipe 'whistle'"), "{}", stderr);
}

#[test]
fn test_list_json() {
    let output = sfxkit().args(["list", "--json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let list: ListOutput = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(list.presets.len(), 6);
    assert_eq!(list.presets[1].name, "door_knock");
    assert_eq!(list.presets[1].duration_ms, 200);
}
