use chrono::{DateTime, Local};
use log::Level;

pub const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Placeholder job id used by local CLI runs, which have no service-issued job.
pub const CLI_ID: &str = "cli";
pub const UNKNOWN_ID: &str = "unknown_id";

/// Turns one log record into one newline-terminated line.
pub trait LineFormat {
    fn format_at(&self, time: DateTime<Local>, level: Level, msg: &str) -> String;

    fn format(&self, level: Level, msg: &str) -> String {
        self.format_at(Local::now(), level, msg)
    }
}

/// `<timestamp> <LEVEL> <message>`
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicFormatter;

impl LineFormat for BasicFormatter {
    fn format_at(&self, time: DateTime<Local>, level: Level, msg: &str) -> String {
        format!("{} {} {}\n", time.format(TIME_FORMAT), level, msg)
    }
}

/// `<timestamp> <LEVEL> <job_ID> <message>`, without the job token for CLI runs.
#[derive(Debug, Clone)]
pub struct JobFormatter {
    job_prefix: Option<String>,
}

impl JobFormatter {
    pub fn new(job_id: Option<&str>) -> JobFormatter {
        let job_prefix = match job_id {
            Some(CLI_ID) => None,
            Some(id) => Some(format!("<job_{id}>")),
            None => Some(format!("<job_{UNKNOWN_ID}>")),
        };
        JobFormatter { job_prefix }
    }

    pub fn job_prefix(&self) -> Option<&str> {
        self.job_prefix.as_deref()
    }
}

impl LineFormat for JobFormatter {
    fn format_at(&self, time: DateTime<Local>, level: Level, msg: &str) -> String {
        let timestamp = time.format(TIME_FORMAT).to_string();
        let level = level.to_string();
        let parts: Vec<&str> = [Some(timestamp.as_str()), Some(level.as_str()), self.job_prefix(), Some(msg)]
            .into_iter()
            .flatten()
            .collect();
        parts.join(" ") + "\n"
    }
}
