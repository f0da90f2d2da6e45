#[derive(Debug, Default)]
pub struct YourFunkyDependency1 {
    ready: bool,
}

impl YourFunkyDependency1 {
    pub fn init(&mut self) {
        self.ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}
