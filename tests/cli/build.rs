use anyhow::Result;
use locsheet::core::{Locale, TranslationStore, decode};
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_build_writes_assets_and_scripts() -> Result<()> {
    let test = CliTest::basic_project()?;

    let output = test.build_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.starts_with("✓ Imported 1 sheet from "), "{out}");
    assert!(out.contains(": 2 locales, 3 keys\n"), "{out}");
    assert!(out.contains("en.bytes (3 entries)"), "{out}");
    assert!(out.contains("zh_CN.bytes (3 entries)"), "{out}");

    let zh = decode(&test.read_bytes("Locales/zh_CN.bytes")?)?;
    let keys: Vec<&str> = zh.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["hello", "bye", "mainMenu.title"]);
    assert_eq!(zh["mainMenu.title"].text, "主菜单");

    let locales = test.read_file("src/generated/locales.rs")?;
    assert!(locales.starts_with("// @generated by locsheet"));
    assert!(locales.contains("pub const ENGLISH: &str = \"en\";"));
    assert!(locales.contains("pub const SIMPLIFIED_CHINESE: &str = \"zh_CN\";"));
    assert!(locales.contains("pub const ALL: &[&str] = &[ENGLISH, SIMPLIFIED_CHINESE];"));

    let keys = test.read_file("src/generated/translation_keys.rs")?;
    assert!(keys.contains("pub const HELLO: &str = \"hello\";"));
    assert!(keys.contains("pub const MAIN_MENU_TITLE: &str = \"mainMenu.title\";"));

    Ok(())
}

#[test]
fn test_build_assets_load_into_store() -> Result<()> {
    let test = CliTest::basic_project()?;
    test.build_command().output()?;

    let mut store = TranslationStore::new();
    store.load_locale_data(
        Locale::new("en")?,
        &test.read_bytes("Locales/en.bytes")?,
    )?;
    store.set_current_locale(Locale::new("en")?);

    assert_eq!(store.current_translation_text("bye")?, "Bye");
    assert_eq!(store.current_translation_text("missing")?, "NoString");

    Ok(())
}

#[test]
fn test_build_skip_scripts() -> Result<()> {
    let test = CliTest::basic_project()?;

    let output = test.build_command().arg("--skip-scripts").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("Locales/en.bytes").exists());
    assert!(!test.root().join("src/generated").exists());
    assert!(!stdout(&output).contains("generated"));

    Ok(())
}

#[test]
fn test_build_command_line_overrides() -> Result<()> {
    let test = CliTest::with_file("data/strings.csv", "key,fr\nyes,Oui\n")?;

    let output = test
        .build_command()
        .args(["--sheet", "data/strings.csv"])
        .args(["--assets-dir", "out/assets", "--scripts-dir", "out/scripts"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let fr = decode(&test.read_bytes("out/assets/fr.bytes")?)?;
    assert_eq!(fr["yes"].text, "Oui");
    assert!(test.root().join("out/scripts/translation_keys.rs").exists());

    Ok(())
}

#[test]
fn test_build_font_and_style_columns() -> Result<()> {
    let test = CliTest::with_file(
        "sheet.json",
        r#"[
  ["key", "en", "ja", "en.font", "ja.font", "en.style", "ja.style"],
  ["title", "Title", "タイトル", "Roboto", "", "Outline | Gold", ""],
  ["empty", "Empty", null, "", "", "", ""]
]"#,
    )?;
    test.write_file(
        ".locsheetrc.json",
        r#"{
  "sheetPath": "sheet.json",
  "translationTextColumnIndexRange": [1, 2],
  "fontColumnIndexRange": [3, 4],
  "styleColumnIndexRange": [5, 6]
}"#,
    )?;

    let output = test.build_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let en = decode(&test.read_bytes("Locales/en.bytes")?)?;
    assert_eq!(en["title"].font.as_deref(), Some("Roboto"));
    assert_eq!(en["title"].style, vec!["Outline", "Gold"]);
    assert_eq!(en["title"].material(), Some("Outline"));
    assert_eq!(en["title"].gradient(), Some("Gold"));

    let ja = decode(&test.read_bytes("Locales/ja.bytes")?)?;
    assert_eq!(ja["title"].font, None);
    assert!(ja["title"].style.is_empty());
    assert_eq!(ja["empty"].text, "NoString");

    let locales = test.read_file("src/generated/locales.rs")?;
    assert!(locales.contains("pub const JAPANESE: &str = \"ja\";"));

    Ok(())
}

#[test]
fn test_build_multiple_sheets() -> Result<()> {
    let test = CliTest::with_file(
        "book.json",
        r#"{
  "sheets": [
    { "name": "Menu", "rows": [["key", "en"], ["start", "Start"]] },
    { "name": "Dialog", "rows": [["key", "en"], ["ok", "OK"]] }
  ]
}"#,
    )?;

    let output = test.build_command().args(["--sheet", "book.json"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Imported 2 sheets"));

    let en = decode(&test.read_bytes("Locales/en.bytes")?)?;
    let keys: Vec<&str> = en.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["start", "ok"]);

    Ok(())
}

#[test]
fn test_build_duplicate_key_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("translations.csv", "key,en\nhello,Hello\nhello,Hi\n")?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let err = stderr(&output);
    assert!(err.starts_with("Error: Failed to import "), "{err}");
    assert!(
        err.contains(
            "found repeat translation key \"hello\" for locale \"en\" in cell 'A3' of sheet \"translations\""
        ),
        "{err}"
    );
    assert!(!test.root().join("Locales").exists());
    assert!(!test.root().join("src/generated").exists());

    Ok(())
}

#[test]
fn test_build_conflicting_constant_names() -> Result<()> {
    let test = CliTest::with_file(
        "translations.csv",
        "key,en\nmain.menu,Menu\nmain_menu,Menu\n",
    )?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("both map to the constant name `MAIN_MENU`"),
        "{}",
        stderr(&output)
    );
    assert!(!test.root().join("Locales").exists());

    Ok(())
}

#[test]
fn test_build_locale_row_out_of_range() -> Result<()> {
    let test = CliTest::basic_project()?;
    test.write_file(
        ".locsheetrc.json",
        r#"{
  "localeRowIndex": 5,
  "translationTextRowStartIndex": 6,
  "translationTextColumnIndexRange": [1, 2]
}"#,
    )?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("locale row 5 is outside sheet \"translations\", which has 4 row(s)"),
        "{}",
        stderr(&output)
    );
    assert!(!test.root().join("Locales").exists());

    Ok(())
}

#[test]
fn test_build_every_locale_filtered_out() -> Result<()> {
    let test = CliTest::basic_project()?;
    test.write_file(
        ".locsheetrc.json",
        r#"{
  "translationTextColumnIndexRange": [1, 2],
  "targetLocales": ["de"]
}"#,
    )?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("is filtered out by 'targetLocales'/'excludedLocales'"));
    assert!(!test.root().join("Locales").exists());

    Ok(())
}

#[test]
fn test_build_asset_write_failure_leaves_scripts_alone() -> Result<()> {
    let test = CliTest::basic_project()?;
    // A plain file where the assets directory should go.
    test.write_file("Locales", "not a directory")?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to create assets directory"));
    assert!(!test.root().join("src/generated").exists());

    Ok(())
}

#[test]
fn test_build_missing_sheet() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: "));
    assert!(stdout(&output).is_empty());

    Ok(())
}

#[test]
fn test_build_exports_characters() -> Result<()> {
    let test = CliTest::with_file("translations.csv", "key,en,zh_CN\nhi,ba,你好\nyo,ab,好\n")?;
    test.write_file(
        ".locsheetrc.json",
        r#"{
  "translationTextColumnIndexRange": [1, 2],
  "charactersExport": { "enabled": true, "exportDir": "fonts", "customCharacters": "!" }
}"#,
    )?;

    let output = test.build_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Characters.txt (5 characters)"));
    assert_eq!(test.read_file("fonts/Characters.txt")?, "!ab你好");

    Ok(())
}

#[test]
fn test_build_target_locales() -> Result<()> {
    let test = CliTest::basic_project()?;
    test.write_file(
        ".locsheetrc.json",
        r#"{
  "translationTextColumnIndexRange": [1, 2],
  "targetLocales": ["zh-CN "]
}"#,
    )?;

    let output = test.build_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("Locales/zh_CN.bytes").exists());
    assert!(!test.root().join("Locales/en.bytes").exists());

    Ok(())
}
