pub mod app_orchestrator;
pub mod extraction_workflow;
