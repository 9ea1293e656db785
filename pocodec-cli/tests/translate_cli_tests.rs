use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn pocodec() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("pocodec"))
}

const CATALOG: &str = r#"# Spanish catalog
msgid ""
msgstr ""
"Language: es\n"
"Plural-Forms: nplurals=2; plural=(n != 1);\n"

#: src/ui.c:3
msgid "Save"
msgstr "Guardar"

#, fuzzy
msgid "Close"
msgstr "Cerrar?"

msgid "Quit"
msgstr ""

msgid "%d file"
msgid_plural "%d files"
msgstr[0] "%d archivo"
msgstr[1] "%d archivos"
"#;

#[test]
fn test_stats_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("es.po");
    fs::write(&input, CATALOG).unwrap();

    let output = pocodec()
        .args(["stats", "-i", input.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["language"], "es");
    assert_eq!(v["total"], 4);
    assert_eq!(v["translated"], 2);
    assert_eq!(v["fuzzy"], 1);
    assert_eq!(v["untranslated"], 1);
    assert_eq!(v["plural"], 1);
}

#[test]
fn test_view_lists_messages() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("es.po");
    fs::write(&input, CATALOG).unwrap();

    let output = pocodec()
        .args(["view", "-i", input.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Language: es"));
    assert!(stdout.contains("=== Entries (4) ==="));
    assert!(stdout.contains("Entry 1: Save"));
    assert!(stdout.contains("Reference: src/ui.c:3"));
    assert!(stdout.contains("Flags: fuzzy"));
    assert!(stdout.contains("Value[1]: %d archivos"));
}

#[test]
fn test_view_rejects_non_po_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("strings.xml");
    fs::write(&input, "<resources/>").unwrap();

    let output = pocodec()
        .args(["view", "-i", input.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("expected .po"));
}

#[test]
fn test_translate_missing_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = pocodec()
        .args([
            "translate",
            "-c",
            temp_dir.path().join("absent.yml").to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error loading config"));
}

#[test]
fn test_translate_falls_back_when_backend_is_down() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("es.po");
    fs::write(&input, CATALOG).unwrap();

    let config = temp_dir.path().join("pocodec.yml");
    fs::write(
        &config,
        format!(
            "backend:\n  endpoint: http://127.0.0.1:9/translate\n  timeout_secs: 1\nfiles:\n  - path: {}\n    lang: es\n",
            input.to_str().unwrap()
        ),
    )
    .unwrap();

    let output = pocodec()
        .args(["translate", "-c", config.to_str().unwrap(), "--rewrite"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let rewritten = fs::read_to_string(&input).unwrap();
    assert!(!temp_dir.path().join("es_output.po").exists());
    // the fuzzy marker is gone and untranslated fields keep their source text
    assert!(rewritten.contains("\n\nmsgid \"Close\"\nmsgstr \"Close\"\n"));
    assert!(rewritten.contains("msgid \"Quit\"\nmsgstr \"Quit\"\n"));
    // translated entries are untouched
    assert!(rewritten.contains("#: src/ui.c:3\nmsgid \"Save\"\nmsgstr \"Guardar\"\n"));
    assert!(rewritten.ends_with("msgstr[1] \"%d archivos\"\n"));
}
