//! Terminal output for CLI commands.
//!
//! Status lines go to stderr; [`Output::data`] writes to stdout so rendered
//! configuration can be piped.

use console::{Style, Term};

pub(crate) struct Output {
    status: Term,
    stdout: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            stdout: Term::stdout(),
        }
    }

    fn line(&self, style: Option<Style>, msg: &str) {
        let _ = match style {
            Some(style) => self.status.write_line(&style.apply_to(msg).to_string()),
            None => self.status.write_line(msg),
        };
    }

    pub(crate) fn info(&self, msg: &str) {
        self.line(None, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(Some(Style::new().green()), msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(Some(Style::new().yellow()), msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(Some(Style::new().red()), msg);
    }

    /// Sidebar group headings in `check`.
    pub(crate) fn heading(&self, msg: &str) {
        self.line(Some(Style::new().cyan().bold()), msg);
    }

    /// Write command output to stdout, ending with a newline.
    pub(crate) fn data(&self, text: &str) -> std::io::Result<()> {
        self.stdout.write_str(text)?;
        if !text.ends_with('\n') {
            self.stdout.write_line("")?;
        }
        Ok(())
    }
}
