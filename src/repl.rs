use tracing::trace;

use crate::{Report, interpret};

/// The line that ends an interactive session.
pub const EXIT_COMMAND: &str = "salir";

/// What the session did with a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The line was added and the whole buffer re-evaluated.
    Evaluated(Report),
    /// The exit command was entered.
    Exit,
}

/// An interactive session.
///
/// Every line is appended to the lines entered before it and the whole
/// buffer is parsed and evaluated again from scratch, so earlier bindings
/// stay visible to later lines.
///
/// # Example
/// ```
/// use castellano::repl::{Session, Step};
///
/// let mut session = Session::new();
/// session.feed("a := 20");
///
/// match session.feed("a + 1") {
///     Step::Evaluated(report) => assert_eq!(report.output.as_deref(), Some("21")),
///     Step::Exit => unreachable!(),
/// }
/// assert_eq!(session.feed("salir"), Step::Exit);
/// assert_eq!(session.buffer(), "a := 20\na + 1");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Session {
    buffer: String,
}

impl Session {
    /// Creates a session with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one line of input.
    ///
    /// `salir` ends the session and is not added to the buffer.
    pub fn feed(&mut self, line: &str) -> Step {
        if line.trim() == EXIT_COMMAND {
            return Step::Exit;
        }

        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);

        trace!(bytes = self.buffer.len(), "re-evaluating session buffer");
        Step::Evaluated(interpret(&self.buffer))
    }

    /// The source accumulated so far.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}
