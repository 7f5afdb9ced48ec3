use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

fn built_project() -> Result<CliTest> {
    let test = CliTest::basic_project()?;
    let output = test.build_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    Ok(test)
}

#[test]
fn test_lookup_found() -> Result<()> {
    let test = built_project()?;

    let output = test
        .lookup_command("zh_CN")
        .args(["hello", "mainMenu.title"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "hello = 你好\nmainMenu.title = 主菜单\n");
    assert_eq!(stderr(&output), "");

    Ok(())
}

#[test]
fn test_lookup_accepts_hyphenated_locale() -> Result<()> {
    let test = built_project()?;

    let output = test.lookup_command("zh-CN").arg("bye").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "bye = 再见\n");

    Ok(())
}

#[test]
fn test_lookup_trims_locale() -> Result<()> {
    let test = built_project()?;

    let output = test.lookup_command(" zh_CN ").arg("hello").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "hello = 你好\n");

    Ok(())
}

#[test]
fn test_lookup_missing_key() -> Result<()> {
    let test = built_project()?;

    let output = test.lookup_command("en").args(["hello", "nope"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "hello = Hello\nnope = NoString\n");
    assert_eq!(
        stderr(&output),
        "warning: No translation text for key [nope] of locale [en]\n\n✘ 1 of 2 keys not translated for locale en\n"
    );

    Ok(())
}

#[test]
fn test_lookup_locale_not_loaded() -> Result<()> {
    let test = built_project()?;

    let output = test.lookup_command("de").arg("hello").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "hello = NoString\n");
    assert!(stderr(&output).contains("warning: No translation texts for locale [de]"));

    Ok(())
}

#[test]
fn test_lookup_skips_corrupt_locale() -> Result<()> {
    let test = built_project()?;
    test.write_bytes("Locales/fr.bytes", b"LSTB\x09")?;

    let output = test.lookup_command("en").arg("bye").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "bye = Bye\n");
    assert!(
        stderr(&output).contains("unsupported asset format version 9 (expected 1)"),
        "{}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_lookup_verbose_lists_loaded_locales() -> Result<()> {
    let test = built_project()?;

    let output = test
        .lookup_command("en")
        .args(["--verbose", "hello"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("loaded: en, zh_CN"));

    Ok(())
}

#[test]
fn test_lookup_empty_locale() -> Result<()> {
    let test = built_project()?;

    let output = test.lookup_command(" ").arg("hello").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Invalid --locale"));

    Ok(())
}

#[test]
fn test_lookup_missing_assets_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.lookup_command("en").arg("hello").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Assets directory does not exist"));

    Ok(())
}
