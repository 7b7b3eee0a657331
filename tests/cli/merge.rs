use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

const HOTEL_KEYS: &[&str] = &[
    "title",
    "view_details",
    "price_per_night",
    "about",
    "popular_amenities",
    "guest_reviews",
    "verified_guest",
    "book_now",
    "back_to_hotels",
    "best_price",
    "check_in",
    "guests",
    "select_date",
    "adults_room",
    "no_payment",
];

fn setup_config(test: &CliTest) -> Result<()> {
    test.write_file(".easerc.json", r#"{ "localesDir": "./locales" }"#)
}

fn parse(content: &str) -> Result<Value> {
    serde_json::from_str(content).context("JSON should be parseable")
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    let mut lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}

#[test]
fn test_merge_keeps_existing_and_adds_missing() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file(
        "locales/en.json",
        r#"{"navbar": {"smart_predictions": "Existing"}}"#,
    )?;

    assert_cmd_snapshot!(test.merge_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updated en.json

    ----- stderr -----
    ");

    let json = parse(&test.read_file("locales/en.json")?)?;
    assert_eq!(json["navbar"]["smart_predictions"], "Existing");
    assert_eq!(json["navbar"]["analytics"], "Analytics");
    assert_eq!(json["navbar"]["cabs"], "Cabs");

    let hotels = json["hotels"].as_object().context("hotels should be an object")?;
    let keys: Vec<&str> = hotels.keys().map(String::as_str).collect();
    assert_eq!(keys, HOTEL_KEYS);
    assert_eq!(hotels["no_payment"], "No payment charged yet");

    Ok(())
}

#[test]
fn test_merge_output_format() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file(
        "locales/hi.json",
        r#"{"navbar": {"smart_predictions": "स्मार्ट यात्रा", "analytics": "विश्लेषण", "cabs": "कैब"}, "hotels": {}}"#,
    )?;
    test.write_file(
        ".easerc.json",
        r#"{ "localesDir": "./locales", "newKeys": { "navbar": { "cabs": "Cabs" }, "hotels": { "title": "Stays" } } }"#,
    )?;

    let output = test.merge_command().output()?;
    assert!(output.status.success());

    let content = test.read_file("locales/hi.json")?;
    assert_eq!(
        content,
        "{\n    \"navbar\": {\n        \"smart_predictions\": \"स्मार्ट यात्रा\",\n        \"analytics\": \"विश्लेषण\",\n        \"cabs\": \"कैब\"\n    },\n    \"hotels\": {\n        \"title\": \"Stays\"\n    }\n}"
    );

    Ok(())
}

#[test]
fn test_merge_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/en.json", r#"{"common": {"ok": "OK"}}"#)?;
    test.write_file("locales/ja.json", "{\n  \"navbar\": {\n    \"cabs\": \"タクシー\"\n  }\n}\n")?;

    test.merge_command().output()?;
    let en_first = test.read_file("locales/en.json")?;
    let ja_first = test.read_file("locales/ja.json")?;

    let output = test.merge_command().output()?;
    assert!(output.status.success());
    assert_eq!(test.read_file("locales/en.json")?, en_first);
    assert_eq!(test.read_file("locales/ja.json")?, ja_first);
    assert!(ja_first.ends_with("    }\n}"));
    assert!(en_first.ends_with("    }\n}"));

    Ok(())
}

#[test]
fn test_merge_processes_every_json_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    for locale in ["en", "fr", "hi"] {
        test.write_file(&format!("locales/{}.json", locale), "{}")?;
    }

    let output = test.merge_command().output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["Updated en.json", "Updated fr.json", "Updated hi.json"]
    );

    for locale in ["en", "fr", "hi"] {
        let json = parse(&test.read_file(&format!("locales/{}.json", locale))?)?;
        assert_eq!(json["navbar"]["cabs"], "Cabs");
        assert_eq!(json["hotels"]["guests"], "Guests");
    }

    Ok(())
}

#[test]
fn test_merge_ignores_non_json_and_subdirectories() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/en.json", "{}")?;
    test.write_file("locales/README.md", "# Locales\n")?;
    test.write_file("locales/en.json.orig", "{}")?;
    test.write_file("locales/legacy/de.json", "{}")?;

    let output = test.merge_command().output()?;
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["Updated en.json"]);

    assert_eq!(test.read_file("locales/README.md")?, "# Locales\n");
    assert_eq!(test.read_file("locales/en.json.orig")?, "{}");
    assert_eq!(test.read_file("locales/legacy/de.json")?, "{}");

    Ok(())
}

#[test]
fn test_merge_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/en.json", "{}")?;

    let output = test.merge_command().arg("--dry-run").output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "Would update en.json\n");
    assert_eq!(test.read_file("locales/en.json")?, "{}");

    Ok(())
}

#[test]
fn test_merge_fails_fast_on_malformed_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/broken.json", "{ \"navbar\": ")?;

    let output = test.merge_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error: Failed to parse JSON"), "{}", stderr);
    assert!(stderr.contains("broken.json"));
    assert_eq!(test.read_file("locales/broken.json")?, "{ \"navbar\": ");

    Ok(())
}

#[test]
fn test_merge_fail_fast_leaves_remaining_files_untouched() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    let locales = ["de", "en", "fr", "hi", "ja"];
    for locale in locales {
        test.write_file(&format!("locales/{}.json", locale), "{}")?;
    }
    test.write_file("locales/broken.json", "{ \"navbar\": ")?;

    let output = test.merge_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let updated = stdout_lines(&output);
    for locale in locales {
        let name = format!("{}.json", locale);
        let content = test.read_file(&format!("locales/{}", name))?;
        if updated.contains(&format!("Updated {}", name)) {
            let json = parse(&content)?;
            assert_eq!(json["navbar"]["cabs"], "Cabs");
        } else {
            assert_eq!(content, "{}", "{} was rewritten but not reported", name);
        }
    }
    assert!(!updated.contains(&"Updated broken.json".to_string()));
    assert!(String::from_utf8(output.stderr)?.contains("broken.json"));
    assert_eq!(test.read_file("locales/broken.json")?, "{ \"navbar\": ");

    Ok(())
}

#[test]
fn test_merge_keep_going_isolates_broken_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/broken.json", "[]")?;
    test.write_file("locales/en.json", "{}")?;
    test.write_file("locales/fr.json", "{}")?;

    let output = test.merge_command().arg("--keep-going").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        vec!["Updated en.json", "Updated fr.json"]
    );

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("error: broken.json: Root of locale file must be an object"));
    assert!(stderr.contains("1 locale file(s) could not be merged"));

    assert_eq!(test.read_file("locales/broken.json")?, "[]");
    let fr = parse(&test.read_file("locales/fr.json")?)?;
    assert_eq!(fr["navbar"]["analytics"], "Analytics");

    Ok(())
}

#[test]
fn test_merge_non_object_section_is_error() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/en.json", r#"{"navbar": "Navigation"}"#)?;

    let output = test.merge_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Section \"navbar\" must be an object, found a string"));
    assert_eq!(test.read_file("locales/en.json")?, r#"{"navbar": "Navigation"}"#);

    Ok(())
}

#[test]
fn test_merge_missing_directory() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;

    let output = test.merge_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("does not exist"), "{}", stderr);
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_merge_locales_dir_flag_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("i18n/en.json", "{}")?;

    let output = test
        .merge_command()
        .args(["--locales-dir", "i18n"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "Updated en.json\n");

    Ok(())
}

#[test]
fn test_merge_resolves_locales_dir_from_config_location() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/en.json", "{}")?;
    test.write_file("client/src/App.jsx", "")?;

    let output = test
        .merge_command()
        .current_dir(test.root().join("client/src"))
        .output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8(output.stdout)?, "Updated en.json\n");

    Ok(())
}

#[test]
fn test_merge_verbose_lists_added_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".easerc.json",
        r#"{ "localesDir": "./locales", "newKeys": { "navbar": { "cabs": "Cabs", "analytics": "Analytics" } } }"#,
    )?;
    test.write_file("locales/en.json", r#"{"navbar": {"cabs": "Taxis"}}"#)?;

    let output = test.merge_command().arg("-v").output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "Updated en.json\n");

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("+ navbar.analytics"));
    assert!(!stderr.contains("+ navbar.cabs"));
    assert!(stderr.contains("Added 1 key(s) across 1 locale file"));

    Ok(())
}
