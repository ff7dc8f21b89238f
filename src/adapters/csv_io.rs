use crate::domain::model::Record;
use crate::domain::ports::{RecordSink, RecordSource};
use crate::utils::error::{EtlError, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

pub const DEFAULT_HEADERS: &[&str] = &[
    "Adı Soyadı",
    "Telefon",
    "Email",
    "p",
    "Not",
    "n",
    "Lead Olusturulma Tarihi",
    "Lead Olusruran Adı",
    "ls",
    "d",
    "t",
    "las",
    "hf",
    "r",
];
pub const DEFAULT_NAME_FIELD: &str = "Adı Soyadı";
pub const DEFAULT_PHONE_FIELD: &str = "Telefon";
pub const DEFAULT_DELIMITER: u8 = b';';

const UTF8_BOM: char = '\u{feff}';

/// The exact header contract of the input and output tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    pub headers: Vec<String>,
    pub name_field: String,
    pub phone_field: String,
    pub delimiter: u8,
}

impl Default for RecordSchema {
    fn default() -> Self {
        Self {
            headers: DEFAULT_HEADERS.iter().map(|h| h.to_string()).collect(),
            name_field: DEFAULT_NAME_FIELD.to_string(),
            phone_field: DEFAULT_PHONE_FIELD.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl RecordSchema {
    pub fn check_headers(&self, found: &[String]) -> Result<()> {
        if found != self.headers.as_slice() {
            return Err(EtlError::HeaderMismatch {
                expected: self.headers.clone(),
                found: found.to_vec(),
            });
        }
        Ok(())
    }
}

pub struct CsvSource<R: Read> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
    row: csv::StringRecord,
}

impl CsvSource<File> {
    /// Opens the input and verifies its header row before any data is read.
    pub fn open<P: AsRef<Path>>(path: P, schema: &RecordSchema) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file, schema)
    }
}

impl<R: Read> CsvSource<R> {
    pub fn from_reader(input: R, schema: &RecordSchema) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(schema.delimiter)
            .flexible(true)
            .from_reader(input);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches(UTF8_BOM).to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();
        schema.check_headers(&headers)?;

        Ok(Self {
            reader,
            headers,
            row: csv::StringRecord::new(),
        })
    }
}

impl<R: Read> RecordSource for CsvSource<R> {
    fn read_record(&mut self) -> Result<Option<Record>> {
        if !self.reader.read_record(&mut self.row)? {
            return Ok(None);
        }

        if self.row.len() != self.headers.len() {
            tracing::warn!(
                "Row {} has {} fields, expected {}",
                self.row.position().map(|p| p.line()).unwrap_or_default(),
                self.row.len(),
                self.headers.len()
            );
        }

        // 欄位不足時補空字串，多出的欄位捨棄
        let fields = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), self.row.get(i).unwrap_or_default().to_string()))
            .collect();
        Ok(Some(Record::new(fields)))
    }
}

pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    pub fn create<P: AsRef<Path>>(path: P, schema: &RecordSchema) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path.as_ref())?;
        Self::from_writer(file, schema)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(output: W, schema: &RecordSchema) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(schema.delimiter)
            .from_writer(output);
        writer.write_record(&schema.headers)?;
        Ok(Self { writer })
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| EtlError::IoError(e.into_error()))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        self.writer.write_record(record.values())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
