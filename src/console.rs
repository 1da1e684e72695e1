//! Diagnostic output channel for the page script.
//!
//! Every line the page emits goes through a [`Console`]. A browser's
//! `console.log(label, value)` prints its arguments separated by one space;
//! [`Console::log_labeled`] reproduces that.

use std::cell::RefCell;

use crate::config::CONSOLE_TARGET;

/// Line-oriented sink for page diagnostics.
pub trait Console {
    /// Writes one line.
    fn log(&self, line: &str);

    /// Writes `label` and `value` separated by a single space.
    fn log_labeled(&self, label: &str, value: &str) {
        self.log(&format!("{} {}", label, value));
    }
}

/// Forwards page output to the `log` facade at info level, target [`CONSOLE_TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogConsole;

impl Console for LogConsole {
    fn log(&self, line: &str) {
        log::info!(target: CONSOLE_TARGET, "{}", line);
    }
}

/// Captures page output in memory.
///
/// Used by tests and by the runner to keep a transcript of what the page printed.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: RefCell<Vec<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Number of lines written so far.
    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Drops captured lines, returning them.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }
}

impl Console for MemoryConsole {
    fn log(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

/// Writes every line to two consoles.
///
/// The runner tees page output to the logger and to a transcript.
pub struct TeeConsole<A, B> {
    first: A,
    second: B,
}

impl<A: Console, B: Console> TeeConsole<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Console, B: Console> Console for TeeConsole<A, B> {
    fn log(&self, line: &str) {
        self.first.log(line);
        self.second.log(line);
    }
}

impl<C: Console + ?Sized> Console for std::rc::Rc<C> {
    fn log(&self, line: &str) {
        (**self).log(line);
    }
}
