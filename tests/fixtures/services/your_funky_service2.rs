use std::rc::Rc;

use super::your_funky_dependency1::YourFunkyDependency1;
use super::your_funky_dependency2::YourFunkyDependency2;

#[derive(Default)]
pub struct YourFunkyService2 {
    deps: Option<(Rc<YourFunkyDependency1>, Rc<YourFunkyDependency2>)>,
}

impl YourFunkyService2 {
    pub const INJECT: &'static [&'static str] = &["YourFunkyDependency1", "YourFunkyDependency2"];

    pub fn init(&mut self, dep1: Rc<YourFunkyDependency1>, dep2: Rc<YourFunkyDependency2>) {
        self.deps = Some((dep1, dep2));
    }
}
