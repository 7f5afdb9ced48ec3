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
fn test_inspect_directory() -> Result<()> {
    let test = built_project()?;

    let output = test.inspect_command().arg("Locales").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "en Locales/en.bytes (3 entries)
  hello           Hello
  bye             Bye
  mainMenu.title  Main Menu

zh_CN Locales/zh_CN.bytes (3 entries)
  hello           你好
  bye             再见
  mainMenu.title  主菜单

"
    );

    Ok(())
}

#[test]
fn test_inspect_filters_keys() -> Result<()> {
    let test = built_project()?;

    let output = test
        .inspect_command()
        .args(["Locales/zh_CN.bytes", "--key", "hello"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "zh_CN Locales/zh_CN.bytes (3 entries)\n  hello  你好\n\n"
    );

    Ok(())
}

#[test]
fn test_inspect_reports_corrupt_asset() -> Result<()> {
    let test = built_project()?;
    test.write_bytes("Locales/fr.bytes", b"NOPE\x01\x00\x00\x00\x00")?;

    let output = test.inspect_command().arg("Locales").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "error: Locales/fr.bytes: blob is not a locale asset (bad magic)\n"
    );
    // The valid assets are still listed.
    assert!(stdout(&output).contains("zh_CN Locales/zh_CN.bytes (3 entries)"));

    Ok(())
}

#[test]
fn test_inspect_missing_path() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.inspect_command().arg("nothing.bytes").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read asset: nothing.bytes"));

    Ok(())
}
