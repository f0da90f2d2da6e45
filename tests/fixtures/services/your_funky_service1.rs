use std::rc::Rc;

use super::your_funky_dependency1::YourFunkyDependency1;
use super::your_funky_dependency2::YourFunkyDependency2;

pub struct YourFunkyService1 {
    dep1: Rc<YourFunkyDependency1>,
    dep2: Rc<YourFunkyDependency2>,
}

impl YourFunkyService1 {
    /// Creates the service.
    ///
    /// @param {YourFunkyDependency1} dep1
    /// @param {YourFunkyDependency2} scalarService
    pub fn new(dep1: Rc<YourFunkyDependency1>, scalar_service: Rc<YourFunkyDependency2>) -> Self {
        Self {
            dep1,
            dep2: scalar_service,
        }
    }
}
