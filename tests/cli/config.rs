use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, framed, run};

#[test]
fn test_config_supplies_scan_parameters() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".hunterrc.json",
        r#"{
         "extensions": ["bat"],
         "phrases": ["REM setup"]
     }"#,
    )?;
    test.write_file("build.bat", "REM setup\nset PATH=C:\\tools\n\necho off\n")?;
    test.write_file("build.txt", "REM setup\nignored\n")?;

    let out = run(test.command().arg("."))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        framed(&["REM setup: 1 [50%]", "set PATH=C:\\tools: 1 [50%]"])
    );

    Ok(())
}

#[test]
fn test_cli_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".hunterrc.json",
        r#"{
         "extensions": ["bat"],
         "phrases": ["REM setup"],
         "logFile": "from-config.log",
         "output": "from-config.csv"
     }"#,
    )?;
    test.write_file("build.bat", "REM setup\nbat line\n")?;
    test.write_file("notes.txt", "REM setup\ntxt line\n")?;

    let out = run(test.command().args([".", "-e", "txt", "--csv"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        framed(&["REM setup: 1 [50%]", "txt line: 1 [50%]"])
    );
    assert!(test.read_file("from-config.log")?.contains("loaded configuration from"));
    assert!(test.read_file("from-config.csv")?.contains("\"txt line\",1,50"));

    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".hunterrc.json", "{ invalid")?;

    let out = run(test.command().args([".", "-e", "txt", "-p", "HEADER:"]))?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Failed to parse config file"));

    Ok(())
}
