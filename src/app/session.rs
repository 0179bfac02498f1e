// Attach/execute controller.
// - Drives the two bridge calls and keeps the attached flag in sync.
// - Guards execution: attached session, resolvable tab, non-blank script.
// - Appends every outcome to the run log in the start directory.
use std::{
    fs::OpenOptions,
    io,
    io::Write,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::model::Notice;

use super::App;

impl App {
    pub fn attach(&mut self) {
        self.commit_rename();

        match self.bridge.attach() {
            Ok(()) => {
                self.attached = true;
                self.raise_notice(Notice::info("Attached", "Attached to the target."));
                self.append_run_log("attach", &["outcome: ok".to_string()]);
            }
            Err(err) => {
                // A failed attach invalidates any earlier session.
                self.attached = false;
                let message = err.to_string();
                self.raise_notice(Notice::error(
                    "Attach Failed",
                    format!("Could not attach: {message}"),
                ));
                self.append_run_log("attach", &[format!("outcome: error: {message}")]);
            }
        }
    }

    pub fn execute(&mut self) {
        self.commit_rename();

        if !self.attached {
            self.raise_notice(Notice::warning(
                "Not Attached",
                "Attach to a target before executing a script.",
            ));
            return;
        }

        let Some(tab) = self.active_tab() else {
            self.raise_notice(Notice::warning(
                "No Tab",
                "Open a tab and write a script first.",
            ));
            return;
        };

        let title = tab.title.clone();
        let script = tab.buffer.text();
        if script.trim().is_empty() {
            self.raise_notice(Notice::warning(
                "Empty Script",
                "The active tab has no script to execute.",
            ));
            return;
        }

        match self.bridge.send_script(&script) {
            Ok(()) => {
                self.status_message = format!("Sent {} bytes from {title}.", script.len());
                self.append_run_log(
                    "execute",
                    &[
                        format!("tab: {title}"),
                        format!("bytes: {}", script.len()),
                        "outcome: ok".to_string(),
                    ],
                );
            }
            Err(err) => {
                let message = err.to_string();
                self.raise_notice(Notice::error(
                    "Execute Failed",
                    format!("The target did not accept the script: {message}"),
                ));
                self.append_run_log(
                    "execute",
                    &[
                        format!("tab: {title}"),
                        format!("bytes: {}", script.len()),
                        format!("outcome: error: {message}"),
                    ],
                );
            }
        }
    }

    // Best effort: a log write failure is reported on the status line and
    // never interrupts the session.
    fn append_run_log(&mut self, action: &str, detail: &[String]) {
        if let Err(err) = self.write_run_log_entry(action, detail) {
            self.status_message
                .push_str(&format!(" (log write failed: {err})"));
        }
    }

    fn write_run_log_entry(&self, action: &str, detail: &[String]) -> io::Result<()> {
        let log_path = self.start_dir.join("scriptpad_runs.log");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or(0);

        writeln!(file, "=== {action} @ {timestamp} ===")?;
        for line in detail {
            writeln!(file, "{line}")?;
        }
        writeln!(file, "=== end ===")?;
        writeln!(file)?;

        Ok(())
    }
}
