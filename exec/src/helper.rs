use time::precise_time_ns;
use itertools::Itertools;
use errors::*;

pub struct Timer {
    start: u64,
    current_time: u64
}

impl Timer {
    pub fn start() -> Timer {
        let time = precise_time_ns();
        Timer {
            start: time,
            current_time: time
        }
    }

    pub fn lap_and_report(&mut self, message: &str) {
        let current_time = precise_time_ns();
        info!("[TIMER] --- Announcement: {}\n    + Time since last message: {:.5}s\n    + Time since started: {:.5}s",
            message, (current_time - self.current_time) as f64 * 1e-9, (current_time - self.start) as f64 * 1e-9);
        self.current_time = current_time;
    }
}

/// A parsed query: P(query | evidence), optionally with an explicit elimination order
#[derive(Debug, Clone, PartialEq)]
pub struct QueryArgs {
    pub query: Vec<String>,
    pub evidence: Vec<(String, bool)>,
    pub order: Option<Vec<String>>,
    pub brute_force: bool,
}

impl QueryArgs {
    pub fn query_refs(&self) -> Vec<&str> {
        self.query.iter().map(|v| v.as_str()).collect()
    }

    pub fn evidence_refs(&self) -> Vec<(&str, bool)> {
        self.evidence.iter().map(|&(ref v, value)| (v.as_str(), value)).collect()
    }

    /// E.g: P(Fraud | FP=true, IP=false)
    pub fn describe(&self) -> String {
        if self.evidence.is_empty() {
            format!("P({})", self.query.iter().join(", "))
        } else {
            format!("P({} | {})",
                    self.query.iter().join(", "),
                    self.evidence.iter().map(|&(ref v, value)| format!("{}={}", v, value)).join(", "))
        }
    }
}

/// Split a comma separated list of variables, e.g: "a, b" -> ["a", "b"]
pub fn parse_variables(s: &str) -> Vec<String> {
    s.split(',')
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_owned())
        .collect()
}

pub fn parse_bool(s: &str) -> Result<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "t" | "1" | "yes" => Ok(true),
        "false" | "f" | "0" | "no" => Ok(false),
        _ => bail!("Invalid boolean value: '{}'", s)
    }
}

/// Parse evidence bindings, e.g: "FP=true, IP=false". A bare name means true and a name prefixed
/// with `~` means false, so "FP,~IP" is the same evidence.
pub fn parse_evidence(s: &str) -> Result<Vec<(String, bool)>> {
    let mut evidence = Vec::new();
    for binding in s.split(',').map(|b| b.trim()).filter(|b| !b.is_empty()) {
        let (var, value) = match binding.find('=') {
            Some(idx) => (binding[..idx].trim(), parse_bool(&binding[idx + 1..])?),
            None if binding.starts_with('~') => (binding[1..].trim(), false),
            None => (binding, true)
        };

        if var.is_empty() {
            bail!("Invalid evidence binding: '{}'", binding);
        }
        if evidence.iter().any(|&(ref v, _): &(String, bool)| v == var) {
            bail!("Variable '{}' is observed more than once", var);
        }
        evidence.push((var.to_owned(), value));
    }

    Ok(evidence)
}
