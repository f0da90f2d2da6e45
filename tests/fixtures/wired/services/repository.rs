use std::rc::Rc;

use super::logger::Logger;
use super::settings::Settings;

#[derive(Default)]
pub struct Repository {
    logger: Option<Rc<Logger>>,
    settings: Option<Rc<Settings>>,
}

impl Repository {
    pub const INJECT: &'static [&'static str] = &["Logger", "Settings"];

    pub fn init(&mut self, logger: Rc<Logger>, settings: Rc<Settings>) {
        self.logger = Some(logger);
        self.settings = Some(settings);
    }

    pub fn logger(&self) -> Option<Rc<Logger>> {
        self.logger.clone()
    }

    pub fn settings(&self) -> Option<Rc<Settings>> {
        self.settings.clone()
    }
}
