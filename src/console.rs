//! Where lessons write their output.
//!
//! Every lesson prints through a [`Console`] instead of calling `println!`
//! directly, so the binaries write to stdout while tests read back the exact
//! lines that were produced.

use std::cell::RefCell;

pub trait Console {
    fn write_line(&self, line: &str);
}

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Keeps every line in memory, in the order it was written.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: RefCell<Vec<String>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl Console for Transcript {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

impl<C: Console + ?Sized> Console for &C {
    fn write_line(&self, line: &str) {
        (**self).write_line(line);
    }
}
