use std::rc::Rc;

use super::label::Label;
use super::logger::Logger;

pub struct Greeter {
    logger: Rc<Logger>,
    label: Label,
}

impl Greeter {
    /// Accepts the shared `Label` or a plain string.
    ///
    /// @param {Logger} logger
    /// @param {Label} label
    pub fn new(logger: Rc<Logger>, label: impl Into<Label>) -> Self {
        let label = label.into();
        logger.log(format!("greeter {} ready", label.as_str()));
        Self { logger, label }
    }

    pub fn greet(&self, name: &str) -> String {
        format!("[{}] hello, {}", self.label.as_str(), name)
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    pub fn logger(&self) -> Rc<Logger> {
        Rc::clone(&self.logger)
    }
}
