pub mod discovery;
pub mod job_runner;
pub mod orchestrator;
pub mod output;
pub mod page_processor;
