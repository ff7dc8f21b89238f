// Adapters layer: concrete implementations for external systems (files, numbering plans, entity lexicons).

pub mod blacklist;
pub mod csv_io;
pub mod numbering;
pub mod recognizer;
