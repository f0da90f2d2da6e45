#[derive(Debug)]
pub struct YourFunkyDependency2 {
    namespace: String,
}

impl YourFunkyDependency2 {
    /// @param {String} namespace
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}
