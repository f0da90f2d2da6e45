// @generated by diwire. Do not edit by hand.
//
// Each accessor builds its service on first use and hands out the cached
// instance afterwards. A context must only be used from one thread.

#![allow(dead_code, unused_imports, clippy::all)]

use std::cell::OnceCell;
use std::rc::Rc;

#[path = "./services/your_funky_dependency1.rs"]
pub mod your_funky_dependency1;

#[path = "./services/your_funky_dependency2.rs"]
pub mod your_funky_dependency2;

#[path = "./services/your_funky_service1.rs"]
pub mod your_funky_service1;

#[path = "./services/your_funky_service2.rs"]
pub mod your_funky_service2;

/// Lazily built service instances
#[derive(Default)]
pub struct Context {
    your_funky_dependency1: OnceCell<Rc<your_funky_dependency1::YourFunkyDependency1>>,
    your_funky_dependency2: OnceCell<Rc<your_funky_dependency2::YourFunkyDependency2>>,
    your_funky_service1: OnceCell<Rc<your_funky_service1::YourFunkyService1>>,
    your_funky_service2: OnceCell<Rc<your_funky_service2::YourFunkyService2>>,
    scalar_service: OnceCell<Rc<your_funky_dependency2::YourFunkyDependency2>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared `YourFunkyDependency1`.
    pub fn your_funky_dependency1(&self) -> Rc<your_funky_dependency1::YourFunkyDependency1> {
        self.your_funky_dependency1
            .get_or_init(|| {
                let mut value = your_funky_dependency1::YourFunkyDependency1::default();
                value.init();
                Rc::new(value)
            })
            .clone()
    }

    /// Returns the shared `YourFunkyDependency2`.
    pub fn your_funky_dependency2(&self) -> Rc<your_funky_dependency2::YourFunkyDependency2> {
        self.your_funky_dependency2
            .get_or_init(|| Rc::new(your_funky_dependency2::YourFunkyDependency2::new(self.string())))
            .clone()
    }

    /// Returns the shared `YourFunkyService1`.
    pub fn your_funky_service1(&self) -> Rc<your_funky_service1::YourFunkyService1> {
        self.your_funky_service1
            .get_or_init(|| Rc::new(your_funky_service1::YourFunkyService1::new(self.your_funky_dependency1(), self.scalar_service())))
            .clone()
    }

    /// Returns the shared `YourFunkyService2`.
    pub fn your_funky_service2(&self) -> Rc<your_funky_service2::YourFunkyService2> {
        self.your_funky_service2
            .get_or_init(|| {
                let mut value = your_funky_service2::YourFunkyService2::default();
                value.init(self.your_funky_dependency1(), self.your_funky_dependency2());
                Rc::new(value)
            })
            .clone()
    }

    /// Returns the shared `scalarService` (a `YourFunkyDependency2`).
    pub fn scalar_service(&self) -> Rc<your_funky_dependency2::YourFunkyDependency2> {
        self.scalar_service
            .get_or_init(|| Rc::new(your_funky_dependency2::YourFunkyDependency2::new("funky-namespace")))
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
