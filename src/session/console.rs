//! Line-oriented front end: prompt, read a timestamp, print the report, repeat.

use crate::session::export::{resolve_report_path, save_report};
use crate::session::input::{parse_input, SessionInput};
use crate::session::session_log::SessionLog;
use crate::session::QuerySession;
use chrono::Local;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const DEFAULT_BANNER: &str = "===== Bird migration lookup =====";

pub struct Console<R, W> {
    input: R,
    output: W,
    report_dir: PathBuf,
    banner: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, report_dir: PathBuf) -> Self {
        Self {
            input,
            output,
            report_dir,
            banner: DEFAULT_BANNER.to_string(),
        }
    }

    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the exit keyword or end of input, then offers to save.
    ///
    /// Returns the session's reports, whether or not they were saved. Only I/O
    /// failures on the console itself end the loop early.
    pub fn run(&mut self, session: &mut QuerySession) -> io::Result<SessionLog> {
        loop {
            writeln!(self.output, "{}", self.banner)?;
            writeln!(self.output, "Enter 'q' to finish.")?;
            write!(
                self.output,
                "Timestamp to analyse (YYYYMMDDHHmm, hour 00/06/12/18): "
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            match parse_input(&line) {
                Ok(SessionInput::Exit) => break,
                Ok(SessionInput::Lookup(timestamp)) => match session.query(&timestamp) {
                    Ok(report) => writeln!(self.output, "{}", report)?,
                    Err(e) => writeln!(self.output, "{}\n", e)?,
                },
                Err(e) => writeln!(self.output, "{}\n", e)?,
            }
        }

        let log = session.take_log();
        self.offer_save(&log)?;
        writeln!(self.output, "Exiting.")?;
        Ok(log)
    }

    fn offer_save(&mut self, log: &SessionLog) -> io::Result<()> {
        if log.is_empty() {
            return Ok(());
        }
        if !self.confirm("Save the printed reports? (y/n): ")? {
            writeln!(self.output, "Reports were not saved.")?;
            return Ok(());
        }

        write!(self.output, "File name (press Enter for the default): ")?;
        self.output.flush()?;
        let name = self.read_line()?;
        let path = resolve_report_path(
            &self.report_dir,
            name.as_deref(),
            Local::now().naive_local(),
        );

        match save_report(&path, log) {
            Ok(()) => writeln!(self.output, "Reports saved to {}", path.display()),
            Err(e) => writeln!(self.output, "Could not save reports: {}", e),
        }
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
