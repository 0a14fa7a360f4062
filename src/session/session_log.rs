/// Reports rendered during one interactive session, in the order produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionLog {
    reports: Vec<String>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, report: String) {
        self.reports.push(report);
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn reports(&self) -> &[String] {
        &self.reports
    }

    /// All reports separated by a blank line.
    pub fn joined(&self) -> String {
        self.reports.join("\n\n")
    }

    /// Hands out the accumulated reports and leaves the log empty.
    pub fn take(&mut self) -> SessionLog {
        std::mem::take(self)
    }
}
