use colored::Colorize;

use crate::capability::PairOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
}

/// One human-readable pass/fail line.
#[derive(Debug, Clone)]
pub struct CheckLine {
    pub name: String,
    pub status: Status,
    pub detail: Option<String>,
}

impl CheckLine {
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Status::Pass,
            detail: None,
        }
    }

    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Status::Fail,
            detail: Some(detail.into()),
        }
    }

    pub fn from_pair(outcome: &PairOutcome) -> Self {
        let name = format!("{} exposes {}", outcome.component, outcome.operation);
        if outcome.present {
            Self::pass(name)
        } else {
            Self::fail(name, "operation not declared by component")
        }
    }

    fn render(&self) -> String {
        match self.status {
            Status::Pass => format!("{} {}", "✓".green(), self.name),
            Status::Fail => {
                let mark = "✗".red();
                match &self.detail {
                    Some(detail) => format!("{} {} ({})", mark, self.name, detail),
                    None => format!("{} {}", mark, self.name),
                }
            }
        }
    }
}

/// Results of one diagnostic suite. `error` holds a caught failure from
/// component loading or probing; its presence fails the suite outright.
#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub title: String,
    pub lines: Vec<CheckLine>,
    pub error: Option<String>,
}

impl SuiteReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            error: None,
        }
    }

    pub fn push(&mut self, line: CheckLine) {
        self.lines.push(line);
    }

    pub fn record_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn passed(&self) -> bool {
        self.error.is_none() && self.lines.iter().all(|l| l.status == Status::Pass)
    }
}

/// All suites from one invocation, plus the exit-code mapping.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub suites: Vec<SuiteReport>,
}

impl RunSummary {
    pub fn push(&mut self, suite: SuiteReport) {
        self.suites.push(suite);
    }

    pub fn passed(&self) -> bool {
        self.suites.iter().all(|s| s.passed())
    }

    /// 0 on overall success, 1 on any failure. Never anything else.
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for suite in &self.suites {
            out.push_str(&format!("{}\n", suite.title.bold()));
            for line in &suite.lines {
                out.push_str(&format!("  {}\n", line.render()));
            }
            if let Some(error) = &suite.error {
                out.push_str(&format!("  {} {}\n", "✗".red(), error));
            }
            let verdict = if suite.passed() {
                "PASS".green()
            } else {
                "FAIL".red()
            };
            out.push_str(&format!("  => {}\n\n", verdict));
        }
        if self.passed() {
            out.push_str(&format!("{}\n", "All checks passed.".green()));
        } else {
            out.push_str(&format!("{}\n", "Some checks failed.".red()));
        }
        out
    }
}
