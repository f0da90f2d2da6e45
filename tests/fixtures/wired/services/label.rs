use std::rc::Rc;

pub struct Label(String);

impl Label {
    pub fn new() -> Self {
        Label("default".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label(value.to_string())
    }
}

impl From<Rc<Label>> for Label {
    fn from(value: Rc<Label>) -> Self {
        Label(value.0.clone())
    }
}
