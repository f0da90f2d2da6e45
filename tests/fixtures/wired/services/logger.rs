use std::cell::RefCell;

/// Keeps every logged message in memory
pub struct Logger {
    lines: RefCell<Vec<String>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            lines: RefCell::new(Vec::new()),
        }
    }

    pub fn log(&self, message: impl Into<String>) {
        self.lines.borrow_mut().push(message.into());
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}
