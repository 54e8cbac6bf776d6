//! Shared fixtures for casemux integration tests.

#![allow(dead_code)]

use casemux::testing::CaseLog;
use casemux::{BoxError, Case, ListSource};

#[derive(Default)]
pub struct CaseA;

impl Case for CaseA {
    async fn execute(&self) -> Result<(), BoxError> {
        Ok(())
    }
}

#[derive(Default)]
pub struct CaseB;

impl Case for CaseB {
    async fn execute(&self) -> Result<(), BoxError> {
        Ok(())
    }
}

/// The `[("CASEA", CaseA), ("CASEB", CaseB)]` wiring, with executions
/// recorded into `log`.
pub fn recorded_source(log: &CaseLog) -> ListSource {
    ListSource::new("cases")
        .with(log.candidate("CASEA"))
        .with(log.candidate("CASEB"))
}

/// The same wiring without recording.
pub fn plain_source() -> ListSource {
    ListSource::new("cases")
        .case::<CaseA>("CASEA")
        .case::<CaseB>("CASEB")
}
