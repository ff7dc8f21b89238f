pub mod contact_job;

pub use contact_job::run_contact_job;
