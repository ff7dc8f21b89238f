use crate::core::pipeline::RecordPipeline;
use crate::domain::model::{RunReport, Verdict};
use crate::domain::ports::{EntityRecognizer, PhoneNumbering, RecordSink, RecordSource};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub records_read: usize,
    pub records_written: usize,
    pub report: RunReport,
}

impl RunSummary {
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json_data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json_data)?;
        Ok(())
    }
}

/// Streams records from a source through the pipeline into a sink.
pub struct EtlEngine<S, K, N, R>
where
    S: RecordSource,
    K: RecordSink,
    N: PhoneNumbering,
    R: EntityRecognizer,
{
    source: S,
    sink: K,
    pipeline: RecordPipeline<N, R>,
}

impl<S, K, N, R> EtlEngine<S, K, N, R>
where
    S: RecordSource,
    K: RecordSink,
    N: PhoneNumbering,
    R: EntityRecognizer,
{
    pub fn new(source: S, sink: K, pipeline: RecordPipeline<N, R>) -> Self {
        Self {
            source,
            sink,
            pipeline,
        }
    }

    pub fn run(mut self) -> Result<RunSummary> {
        tracing::info!("Starting run with stages {:?}", self.pipeline.stages());

        let mut report = RunReport::new();
        let mut records_read = 0;
        let mut records_written = 0;

        while let Some(record) = self.source.read_record()? {
            records_read += 1;
            let verdict = self.pipeline.process(record);
            if let Verdict::Accepted(cleaned) = &verdict {
                self.sink.write_record(&cleaned.record)?;
                records_written += 1;
            }
            report.record(&verdict);
        }
        self.sink.finish()?;

        tracing::info!(
            "Processed {} records: {} written, {} rejected",
            records_read,
            records_written,
            report.rejected_count()
        );

        Ok(RunSummary {
            generated_at: Utc::now(),
            records_read,
            records_written,
            report,
        })
    }
}
