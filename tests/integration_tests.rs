use anyhow::Result;
use contact_etl::adapters::csv_io::RecordSchema;
use contact_etl::domain::model::ProcessingStage;
use contact_etl::utils::validation::Validate;
use contact_etl::{run_contact_job, EtlError, RunSettings, TomlConfig};
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = "Adı Soyadı;Telefon;Email;p;Not;n;Lead Olusturulma Tarihi;Lead Olusruran Adı;ls;d;t;las;hf;r";

fn row(name: &str, phone: &str, email: &str) -> String {
    format!("{};{};{};;;;2024-05-01;Ayşe;;;;;;", name, phone, email)
}

fn write_input(dir: &Path, rows: &[String]) -> std::path::PathBuf {
    let path = dir.join("leads.csv");
    let mut content = format!("\u{feff}{}\n", HEADER);
    for r in rows {
        content.push_str(r);
        content.push('\n');
    }
    std::fs::write(&path, content).unwrap();
    path
}

fn base_config(dir: &Path, input: &Path, stages: Vec<ProcessingStage>) -> TomlConfig {
    let mut config = TomlConfig::default();
    config.input.path = Some(input.to_string_lossy().into_owned());
    config.output.path = Some(dir.join("out").join("clean.csv").to_string_lossy().into_owned());
    config.pipeline.process_types = Some(stages);
    config
}

fn settings(dir: &Path, input: &Path, stages: Vec<ProcessingStage>) -> RunSettings {
    let settings = RunSettings::from_toml(&base_config(dir, input, stages)).unwrap();
    settings.validate().unwrap();
    settings
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn test_end_to_end_name_and_number() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(
        temp_dir.path(),
        &[
            row("ada  lovelace", "tel: 0170-1234567 !!", "ada@example.com"),
            row("Cher", "0170 1234567", "cher@example.com"),
            row("Alan Turing", "12345", "alan@example.com"),
            row("李明", "0170 1234567", "li@example.com"),
            row("Jean-François Müller", "+49 171 2345678", "jf@example.com"),
        ],
    );
    let settings = settings(
        temp_dir.path(),
        &input,
        vec![ProcessingStage::Name, ProcessingStage::Number],
    );

    let summary = run_contact_job(&settings)?;

    assert_eq!(summary.records_read, 5);
    assert_eq!(summary.records_written, 2);
    assert_eq!(summary.report.invalid_numbers, vec!["12345"]);
    assert_eq!(summary.report.invalid_names, vec!["Cher"]);
    assert_eq!(summary.report.non_latin_names, vec!["李明"]);
    assert_eq!(
        summary.report.changed_names,
        vec!["ada  lovelace -> Ada Lovelace"]
    );

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(&settings.output)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    assert_eq!(headers, RecordSchema::default().headers);

    let rows = read_rows(&settings.output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "Ada Lovelace");
    assert_eq!(rows[0][1], "491701234567");
    assert_eq!(rows[0][2], "ada@example.com");
    assert_eq!(rows[0][6], "2024-05-01");
    assert_eq!(rows[1][0], "Jean-François Müller");
    assert_eq!(rows[1][1], "491712345678");
    Ok(())
}

#[test]
fn test_number_only_leaves_names_alone() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(
        temp_dir.path(),
        &[row("x", "0170 1234567", "x@example.com")],
    );
    let settings = settings(temp_dir.path(), &input, vec![ProcessingStage::Number]);

    let summary = run_contact_job(&settings)?;
    assert_eq!(summary.records_written, 1);

    let rows = read_rows(&settings.output);
    assert_eq!(rows[0][0], "x");
    assert_eq!(rows[0][1], "491701234567");
    Ok(())
}

#[test]
fn test_header_mismatch_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("leads.csv");
    std::fs::write(&input, "Name;Phone\nAda Lovelace;0170 1234567\n")?;
    let settings = settings(temp_dir.path(), &input, vec![ProcessingStage::Name]);

    let err = run_contact_job(&settings).unwrap_err();
    assert!(matches!(err, EtlError::HeaderMismatch { .. }));
    assert!(!settings.output.exists());
    Ok(())
}

#[test]
fn test_entity_check_with_blacklist_and_report_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(
        temp_dir.path(),
        &[
            row("hans köhler", "", "hans@example.com"),
            row("Schmidt", "", "s@example.com"),
            row("max testmann", "", "max@example.com"),
        ],
    );
    let blacklist = temp_dir.path().join("blacklist.txt");
    std::fs::write(&blacklist, "test\n\n")?;
    let report = temp_dir.path().join("report.json");

    let mut config = base_config(
        temp_dir.path(),
        &input,
        vec![ProcessingStage::Name, ProcessingStage::EntityCheck],
    );
    config.name.blacklist = Some(blacklist.to_string_lossy().into_owned());
    config.output.report_json = Some(report.to_string_lossy().into_owned());
    let settings = RunSettings::from_toml(&config)?;
    settings.validate()?;
    assert_eq!(settings.blacklist.as_deref(), Some(blacklist.as_path()));

    let summary = run_contact_job(&settings)?;
    assert_eq!(summary.records_written, 1);
    assert_eq!(summary.report.invalid_names, vec!["Schmidt", "max testmann"]);

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&report)?)?;
    assert_eq!(json["records_read"], 3);
    assert_eq!(json["records_written"], 1);
    assert_eq!(json["report"]["invalid_names"][1], "max testmann");
    assert!(json["generated_at"].is_string());
    Ok(())
}

#[test]
fn test_replace_non_latin_audit_only_for_kept_rows() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(
        temp_dir.path(),
        &[
            row("Anna Σmith", "0170 1234567", "a@example.com"),
            row("Βob Σmith", "12345", "b@example.com"),
            row("李明", "0170 1234567", "li@example.com"),
        ],
    );
    let mut settings = settings(
        temp_dir.path(),
        &input,
        vec![ProcessingStage::Name, ProcessingStage::Number],
    );
    settings.replace_non_latin = true;

    let summary = run_contact_job(&settings)?;
    assert_eq!(summary.records_written, 1);
    assert_eq!(summary.report.changed_names, vec!["Anna Σmith -> Anna ?mith"]);
    assert_eq!(summary.report.invalid_numbers, vec!["12345"]);
    assert_eq!(summary.report.non_latin_names, vec!["李明"]);

    let rows = read_rows(&settings.output);
    assert_eq!(rows[0][0], "Anna ?mith");
    Ok(())
}
