use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_bare_csv_writes_output_csv() -> Result<()> {
    let test = CliTest::with_file("a.txt", "HEADER:\nx\n\nHEADER:\nx\n")?;

    let out = run(test.scan_command(&["txt"], &["HEADER:"]).arg("--csv"))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        test.read_file("output.csv")?,
        "\"line\",\"count\",\"percent\"\r\n\"HEADER:\",2,50\r\n\"x\",2,50\r\n"
    );

    Ok(())
}

#[test]
fn test_csv_path_and_overwrite() -> Result<()> {
    let test = CliTest::with_file("a.txt", "HEADER:\nx\n")?;
    test.write_file("out/heat.csv", "old contents\n")?;

    let out = run(test
        .scan_command(&["txt"], &["HEADER:"])
        .args(["--csv", "out/heat.csv"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        test.read_file("out/heat.csv")?,
        "\"line\",\"count\",\"percent\"\r\n\"HEADER:\",1,50\r\n\"x\",1,50\r\n"
    );
    assert!(!test.root().join("output.csv").exists());

    Ok(())
}

#[test]
fn test_no_csv_without_flag() -> Result<()> {
    let test = CliTest::with_file("a.txt", "HEADER:\nx\n")?;

    let out = run(&mut test.scan_command(&["txt"], &["HEADER:"]))?;

    assert_eq!(out.code, Some(0));
    assert!(!test.root().join("output.csv").exists());

    Ok(())
}
