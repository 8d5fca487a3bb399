use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    Running,
    Completed,
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub text: String,
    pub sequence: u64,
}

/// One press of "run": the source it ran and the output seen so far.
#[derive(Debug, Clone, Serialize)]
pub struct RunSession {
    pub id: SessionId,
    pub source: String,
    pub status: SessionStatus,
    records: Vec<OutputRecord>,
}

impl RunSession {
    pub fn new(id: SessionId, source: &str) -> Self {
        Self {
            id,
            source: source.to_string(),
            status: SessionStatus::Running,
            records: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Appends a record with the next sequence number. Records are never
    /// touched again once pushed.
    pub fn record(&mut self, text: String) -> &OutputRecord {
        let sequence = self.records.len() as u64;
        self.records.push(OutputRecord { text, sequence });
        &self.records[self.records.len() - 1]
    }

    pub fn records(&self) -> &[OutputRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_numbered_in_arrival_order() {
        let mut session = RunSession::new(SessionId(1), "src");
        session.record("a".to_string());
        session.record("b".to_string());
        let sequences: Vec<u64> = session.records().iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![0, 1]);
        assert_eq!(session.records()[1].text, "b");
        assert!(session.is_running());
    }
}
