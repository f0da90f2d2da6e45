use std::rc::Rc;

use super::logger::Logger;

#[derive(Default)]
pub struct Settings {
    level: u8,
    initialized: bool,
}

impl Settings {
    pub const INJECT: &'static [&'static str] = &["Logger", "3"];

    pub fn init(&mut self, logger: Rc<Logger>, level: u8) {
        logger.log(format!("settings level {}", level));
        self.level = level;
        self.initialized = true;
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
