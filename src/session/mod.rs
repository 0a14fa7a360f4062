//! Interactive query session over a loaded observation table.

pub mod console;
pub mod error;
pub mod export;
pub mod input;
pub mod report;
pub mod session_log;

use crate::analysis::analyzer::analyze;
use crate::session::error::QueryError;
use crate::session::report::{lookup, render_report};
use crate::session::session_log::SessionLog;
use crate::types::observation::ObservationRecord;

/// Owns the read-only observation table and the reports produced so far.
#[derive(Debug, Default)]
pub struct QuerySession {
    table: Vec<ObservationRecord>,
    log: SessionLog,
}

impl QuerySession {
    pub fn new(table: Vec<ObservationRecord>) -> Self {
        Self {
            table,
            log: SessionLog::new(),
        }
    }

    pub fn table(&self) -> &[ObservationRecord] {
        &self.table
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Assesses the observation at `timestamp` and records the report.
    ///
    /// `timestamp` is expected to have passed [`input::parse_input`] already.
    /// On [`QueryError::NotFound`] the log is left untouched.
    pub fn query(&mut self, timestamp: &str) -> Result<String, QueryError> {
        let record = lookup(timestamp, &self.table)?;
        let assessment = analyze(record);
        let report = render_report(timestamp, record, &assessment);
        self.log.push(report.clone());
        Ok(report)
    }

    /// Ends the current session and starts a fresh log over the same table.
    pub fn take_log(&mut self) -> SessionLog {
        self.log.take()
    }

    pub fn finish(self) -> SessionLog {
        self.log
    }
}
