//! A passive log of the operations the shell has run.
//!
//! Records are never executed by the tracker; callers submit a record before
//! running an operation and report its outcome afterwards.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::utils::time::now;

/// Status of a process record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl ProcessStatus {
    /// `Completed` and `Failed` are final.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProcessStatus::Completed | ProcessStatus::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessStatus::Pending => "Pending",
            ProcessStatus::Running => "Running",
            ProcessStatus::Completed => "Completed",
            ProcessStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status name that is not one of the four known statuses.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown process status '{0}'. Use pending, running, completed or failed.")]
pub struct StatusParseError(pub String);

impl FromStr for ProcessStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(ProcessStatus::Pending),
            "running" => Ok(ProcessStatus::Running),
            "completed" => Ok(ProcessStatus::Completed),
            "failed" => Ok(ProcessStatus::Failed),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}

/// One entry of the process log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub id: u64,
    pub description: String,
    pub status: ProcessStatus,
    pub submitted_at: DateTime<Utc>,
    /// Set when the record reaches a terminal status.
    pub finished_at: Option<DateTime<Utc>>,
}

/// Append-ordered process log with monotonically increasing ids.
#[derive(Debug, Clone)]
pub struct ProcessTracker {
    records: Vec<ProcessRecord>,
    next_id: u64,
}

impl Default for ProcessTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTracker {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a `Pending` record and returns its id.
    pub fn submit(&mut self, description: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(ProcessRecord {
            id,
            description: description.into(),
            status: ProcessStatus::Pending,
            submitted_at: now(),
            finished_at: None,
        });
        id
    }

    /// Overwrites the status of record `id`.
    ///
    /// Returns `false` without changing anything when the id is unknown or
    /// the record is already terminal.
    pub fn set_status(&mut self, id: u64, status: ProcessStatus) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        if record.status.is_terminal() {
            return false;
        }
        record.status = status;
        if status.is_terminal() {
            record.finished_at = Some(now());
        }
        true
    }

    pub fn get(&self, id: u64) -> Option<&ProcessRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All records in submission order.
    pub fn list_all(&self) -> &[ProcessRecord] {
        &self.records
    }

    /// Removes every record with `status` and returns how many were removed.
    pub fn clear_by_status(&mut self, status: ProcessStatus) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.status != status);
        before - self.records.len()
    }

    /// Empties the log. Ids keep counting from the last one issued.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }

    /// The id the next [`ProcessTracker::submit`] will return.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
