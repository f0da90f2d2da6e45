use std::rc::Rc;

use super::your_funky_dependency1::YourFunkyDependency1;
use super::your_funky_service1::YourFunkyService1;

#[derive(Default)]
pub struct YourFunkyService2 {
    deps: Option<(Rc<YourFunkyDependency1>, Rc<YourFunkyService1>)>,
}

impl YourFunkyService2 {
    pub const INJECT: &'static [&'static str] = &["YourFunkyDependency1", "YourFunkyService1"];

    pub fn init(&mut self, dep1: Rc<YourFunkyDependency1>, service1: Rc<YourFunkyService1>) {
        self.deps = Some((dep1, service1));
    }
}
