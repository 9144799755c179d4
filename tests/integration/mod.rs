//! Integration tests for the louvores catalog builder

mod binary_logging;
mod cli_contracts;
mod name_properties;
mod pipeline_scenarios;
mod writer_idempotence;
