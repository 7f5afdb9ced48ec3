use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["sheetPath"], "./translations.csv");
    assert_eq!(parsed["assetsDir"], "./Locales");
    assert_eq!(parsed["translationTextRowStartIndex"], 1);
    assert_eq!(parsed["translationTextColumnIndexRange"], serde_json::json!([1, 1]));
    assert_eq!(parsed["styleDelimiter"], "|");
    assert_eq!(parsed["charactersExport"]["enabled"], false);

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "✓ Created .locsheetrc.json\n");

    assert!(test.root().join(".locsheetrc.json").exists());
    let content = test.read_file(".locsheetrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".locsheetrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "Error: .locsheetrc.json already exists\n");
    assert_eq!(test.read_file(".locsheetrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_file("translations.csv", "key,en\nhello,Hello\n")?;

    test.command().arg("init").output()?;

    let output = test.build_command().output()?;
    assert!(
        output.status.success(),
        "Build should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("Locales/en.bytes").exists());

    Ok(())
}
