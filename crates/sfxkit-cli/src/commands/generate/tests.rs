//! Tests for the generate command.

use super::run;
use pretty_assertions::assert_eq;
use sfxkit_audio::wav::{compute_pcm_hash, decode_wav};
use std::path::Path;
use std::process::ExitCode;

const PRESET_FILES: [&str; 6] = [
    "beep.wav",
    "door_knock.wav",
    "success.wav",
    "fail.wav",
    "pinpon.wav",
    "bubuu.wav",
];

fn out_dir(tmp: &tempfile::TempDir) -> String {
    tmp.path().join("se").to_str().unwrap().to_string()
}

fn write_recipes(tmp: &tempfile::TempDir, content: &str) -> String {
    let path = tmp.path().join("recipes.json");
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn generate_writes_all_presets() {
    let tmp = tempfile::tempdir().unwrap();
    let out = out_dir(&tmp);

    let code = run(&out, &[], Some(42), None, None, false).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    for name in PRESET_FILES {
        let bytes = std::fs::read(Path::new(&out).join(name)).unwrap();
        let buffer = decode_wav(&bytes).unwrap();
        assert_eq!(buffer.sample_rate(), 44100);
        assert!(!buffer.is_empty());
    }
}

#[test]
fn generate_json_writes_all_presets() {
    let tmp = tempfile::tempdir().unwrap();
    let out = out_dir(&tmp);

    let code = run(&out, &[], Some(42), Some(22050), None, true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let bytes = std::fs::read(Path::new(&out).join("success.wav")).unwrap();
    let buffer = decode_wav(&bytes).unwrap();
    assert_eq!(buffer.sample_rate(), 22050);
    assert_eq!(buffer.duration_ms(), 500.0);
}

#[test]
fn generate_only_writes_selected() {
    let tmp = tempfile::tempdir().unwrap();
    let out = out_dir(&tmp);

    let only = vec!["pinpon".to_string()];
    let code = run(&out, &only, Some(1), None, None, false).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let mut written: Vec<String> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, vec!["pinpon.wav".to_string()]);
}

#[test]
fn generate_is_reproducible_with_seed() {
    let tmp = tempfile::tempdir().unwrap();
    let first = tmp.path().join("a").to_str().unwrap().to_string();
    let second = tmp.path().join("b").to_str().unwrap().to_string();

    run(&first, &[], Some(7), None, None, false).unwrap();
    run(&second, &[], Some(7), None, None, true).unwrap();

    for name in PRESET_FILES {
        let a = std::fs::read(Path::new(&first).join(name)).unwrap();
        let b = std::fs::read(Path::new(&second).join(name)).unwrap();
        assert_eq!(a, b, "{} differs between runs", name);
    }
}

#[test]
fn generate_seed_changes_only_noise() {
    let tmp = tempfile::tempdir().unwrap();
    let first = tmp.path().join("a").to_str().unwrap().to_string();
    let second = tmp.path().join("b").to_str().unwrap().to_string();

    run(&first, &[], Some(1), None, None, false).unwrap();
    run(&second, &[], Some(2), None, None, false).unwrap();

    let hash = |dir: &str, name: &str| {
        compute_pcm_hash(&std::fs::read(Path::new(dir).join(name)).unwrap()).unwrap()
    };
    assert_ne!(hash(&first, "door_knock.wav"), hash(&second, "door_knock.wav"));
    assert_eq!(hash(&first, "beep.wav"), hash(&second, "beep.wav"));
}

#[test]
fn generate_unknown_only_is_invalid_input() {
    let tmp = tempfile::tempdir().unwrap();
    let out = out_dir(&tmp);
    let only = vec!["whistle".to_string()];

    assert_eq!(
        run(&out, &only, Some(1), None, None, true).unwrap(),
        ExitCode::from(1)
    );
    // Human mode surfaces load failures as errors for main to report
    assert!(run(&out, &only, Some(1), None, None, false).is_err());
    assert!(!Path::new(&out).exists());
}

#[test]
fn generate_rejects_bad_sample_rate() {
    let tmp = tempfile::tempdir().unwrap();
    let out = out_dir(&tmp);

    for json in [false, true] {
        let code = run(&out, &[], Some(1), Some(1000), None, json).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }
    assert!(!Path::new(&out).exists());
}

#[test]
fn generate_from_recipe_file() {
    let tmp = tempfile::tempdir().unwrap();
    let out = out_dir(&tmp);
    let recipes = write_recipes(
        &tmp,
        r#"{"recipes": [
            {"name": "chirp", "file_stem": "chirp", "sample_rate": 16000, "segments": [
                {"type": "tone", "frequency": 1200.0, "duration_ms": 80, "volume_db": -6.0},
                {"type": "silence", "duration_ms": 20},
                {"type": "noise", "duration_ms": 50, "volume_db": -9.0, "fade_out_ms": 50}
            ]}
        ]}"#,
    );

    let code = run(&out, &[], Some(3), None, Some(&recipes), false).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let bytes = std::fs::read(Path::new(&out).join("chirp.wav")).unwrap();
    let buffer = decode_wav(&bytes).unwrap();
    assert_eq!(buffer.sample_rate(), 16000);
    assert_eq!(buffer.len(), 1280 + 320 + 800);
    assert!(!Path::new(&out).join("beep.wav").exists());
}

#[test]
fn generate_invalid_recipe_file() {
    let tmp = tempfile::tempdir().unwrap();
    let out = out_dir(&tmp);
    let recipes = write_recipes(
        &tmp,
        r#"{"recipes": [{"name": "", "file_stem": "../escape", "segments": []}]}"#,
    );

    for json in [false, true] {
        let code = run(&out, &[], Some(3), None, Some(&recipes), json).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }
    assert!(!Path::new(&out).exists());
}

#[test]
fn generate_missing_recipe_file() {
    let tmp = tempfile::tempdir().unwrap();
    let out = out_dir(&tmp);
    let missing = tmp.path().join("missing.json");
    let missing = missing.to_str().unwrap();

    let err = run(&out, &[], Some(3), None, Some(missing), false).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to read file"));

    let code = run(&out, &[], Some(3), None, Some(missing), true).unwrap();
    assert_eq!(code, ExitCode::from(1));
}

#[test]
fn generate_unwritable_output_is_generation_error() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let out = blocker.to_str().unwrap();

    for json in [false, true] {
        let code = run(out, &[], Some(1), None, None, json).unwrap();
        assert_eq!(code, ExitCode::from(2));
    }
}

#[test]
fn generate_without_seed_still_succeeds() {
    let tmp = tempfile::tempdir().unwrap();
    let out = out_dir(&tmp);
    let only = vec!["door_knock".to_string()];

    let code = run(&out, &only, None, None, None, false).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    assert!(Path::new(&out).join("door_knock.wav").exists());
}
