// @generated by diwire. Do not edit by hand.
//
// Each accessor builds its service on first use and hands out the cached
// instance afterwards. A context must only be used from one thread.

#![allow(dead_code, unused_imports, clippy::all)]

use std::cell::OnceCell;
use std::rc::Rc;

#[path = "./services/greeter.rs"]
pub mod greeter;

#[path = "./services/label.rs"]
pub mod label;

#[path = "./services/logger.rs"]
pub mod logger;

#[path = "./services/repository.rs"]
pub mod repository;

#[path = "./services/settings.rs"]
pub mod settings;

/// Lazily built service instances
#[derive(Default)]
pub struct Context {
    greeter: OnceCell<Rc<greeter::Greeter>>,
    label: OnceCell<Rc<label::Label>>,
    logger: OnceCell<Rc<logger::Logger>>,
    repository: OnceCell<Rc<repository::Repository>>,
    settings: OnceCell<Rc<settings::Settings>>,
    audit_greeter: OnceCell<Rc<greeter::Greeter>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared `Greeter`.
    pub fn greeter(&self) -> Rc<greeter::Greeter> {
        self.greeter
            .get_or_init(|| Rc::new(greeter::Greeter::new(self.logger(), self.label())))
            .clone()
    }

    /// Returns the shared `Label`.
    pub fn label(&self) -> Rc<label::Label> {
        self.label
            .get_or_init(|| Rc::new(label::Label::new()))
            .clone()
    }

    /// Returns the shared `Logger`.
    pub fn logger(&self) -> Rc<logger::Logger> {
        self.logger
            .get_or_init(|| Rc::new(logger::Logger::new()))
            .clone()
    }

    /// Returns the shared `Repository`.
    pub fn repository(&self) -> Rc<repository::Repository> {
        self.repository
            .get_or_init(|| {
                let mut value = repository::Repository::default();
                value.init(self.logger(), self.settings());
                Rc::new(value)
            })
            .clone()
    }

    /// Returns the shared `Settings`.
    pub fn settings(&self) -> Rc<settings::Settings> {
        self.settings
            .get_or_init(|| {
                let mut value = settings::Settings::default();
                value.init(self.logger(), 3);
                Rc::new(value)
            })
            .clone()
    }

    /// Returns the shared `auditGreeter` (a `Greeter`).
    pub fn audit_greeter(&self) -> Rc<greeter::Greeter> {
        self.audit_greeter
            .get_or_init(|| Rc::new(greeter::Greeter::new(self.logger(), "audit")))
            .clone()
    }
}

thread_local! {
    static CONTEXT: Context = Context::new();
}

/// Runs `f` with this thread's shared context.
pub fn with_context<R>(f: impl FnOnce(&Context) -> R) -> R {
    CONTEXT.with(f)
}
