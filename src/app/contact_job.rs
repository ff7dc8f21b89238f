use crate::adapters::blacklist::load_blacklist;
use crate::adapters::csv_io::{CsvSink, CsvSource};
use crate::adapters::numbering::LibPhoneNumbering;
use crate::adapters::recognizer::load_entity_recognizer;
use crate::config::RunSettings;
use crate::core::entity::EntityCheck;
use crate::core::etl::{EtlEngine, RunSummary};
use crate::core::phone::PhoneNormalizer;
use crate::core::pipeline::{PipelineOptions, RecordPipeline};
use crate::domain::model::ProcessingStage;
use crate::utils::error::Result;

/// Wires files, blacklist and recognizer into one run.
///
/// The input header is checked before the output file is created, so a
/// mismatch leaves nothing behind.
pub fn run_contact_job(settings: &RunSettings) -> Result<RunSummary> {
    let entity = if settings.has_stage(ProcessingStage::EntityCheck) {
        let blacklist = match &settings.blacklist {
            Some(path) => load_blacklist(path)?,
            None => Vec::new(),
        };
        let recognizer = load_entity_recognizer(&settings.locale, settings.lexicon.as_deref())?;
        Some(EntityCheck::new(blacklist, recognizer))
    } else {
        None
    };

    tracing::info!("📥 Reading {}", settings.input.display());
    let source = CsvSource::open(&settings.input, &settings.schema)?;
    let sink = CsvSink::create(&settings.output, &settings.schema)?;

    let pipeline = RecordPipeline::new(
        settings.stages.iter().copied(),
        PipelineOptions {
            replace_non_latin: settings.replace_non_latin,
        },
        settings.schema.name_field.clone(),
        settings.schema.phone_field.clone(),
        PhoneNormalizer::new(LibPhoneNumbering, settings.region.clone()),
        entity,
    );

    let summary = EtlEngine::new(source, sink, pipeline).run()?;
    tracing::info!("📁 Output saved to: {}", settings.output.display());

    if let Some(path) = &settings.report_json {
        summary.write_json(path)?;
        tracing::info!("🧾 Report written to: {}", path.display());
    }

    Ok(summary)
}
