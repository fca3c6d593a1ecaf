use chrono::Local;
use colored::*;

/// Timestamped event log for the CLI. The library itself never logs; the
/// binary narrates generation and solving at this level so the solver's
/// recursion stays silent.
pub struct EventLog {
    verbose: bool,
    color: bool,
}

impl EventLog {
    pub fn new(verbose: bool, color: bool) -> Self {
        Self { verbose, color }
    }

    pub fn event(&self, title: &str, details: &str) {
        if !self.verbose {
            return;
        }
        let ts = Local::now().format("%H:%M:%S");
        if self.color {
            println!("{} {} {}", format!("[{ts}]").dimmed(), "➤".blue().bold(), title.bold());
        } else {
            println!("[{ts}] ➤ {title}");
        }
        if !details.is_empty() {
            println!("{details}");
        }
    }
}
