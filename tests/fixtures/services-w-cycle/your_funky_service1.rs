use std::rc::Rc;

use super::your_funky_dependency1::YourFunkyDependency1;
use super::your_funky_service2::YourFunkyService2;

pub struct YourFunkyService1 {
    dep1: Rc<YourFunkyDependency1>,
    service2: Rc<YourFunkyService2>,
}

impl YourFunkyService1 {
    /// @param {YourFunkyDependency1} dep1
    /// @param {YourFunkyService2} service2
    pub fn new(dep1: Rc<YourFunkyDependency1>, service2: Rc<YourFunkyService2>) -> Self {
        Self { dep1, service2 }
    }
}
