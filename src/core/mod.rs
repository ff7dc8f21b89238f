pub mod charset;
pub mod entity;
pub mod etl;
pub mod name;
pub mod phone;
pub mod pipeline;

pub use crate::domain::model::{ProcessingStage, Record, RunReport, Verdict};
pub use crate::domain::ports::{EntityRecognizer, PhoneNumbering, RecordSink, RecordSource};
pub use crate::utils::error::Result;
