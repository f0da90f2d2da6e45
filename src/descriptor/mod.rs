//! Service descriptors and the strategies that extract them from source units
//!
//! A [`ServiceUnit`] is an opaque source artifact (its path plus raw text). A
//! [`ServiceParser`] runs the registered [`DescriptorExtractor`] strategies over
//! it and produces a normalized [`ServiceDescriptor`]: the service name, the
//! type that backs it, where it lives, how it is constructed and which tokens
//! it depends on. Nothing downstream of this module looks at annotation syntax.

mod extract;
pub mod naming;

pub use extract::{
    ConstructorDocExtractor, DescriptorExtractor, InjectListExtractor, ServiceParser,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// How the generated accessor builds a service value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionStyle {
    /// Built with positional arguments: `Type::new(args...)`
    Instantiable,
    /// Default-constructed, then initialized in place: `value.init(args...)`
    Initializable,
}

impl fmt::Display for ConstructionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionStyle::Instantiable => write!(f, "instantiable"),
            ConstructionStyle::Initializable => write!(f, "initializable"),
        }
    }
}

/// One source unit handed to the extractors
#[derive(Debug, Clone)]
pub struct ServiceUnit {
    /// Location relative to the base directory, e.g. `services/logger.rs`
    pub path: PathBuf,
    pub source: String,
}

impl ServiceUnit {
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Normalized record of a discovered service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Unique graph key
    pub name: String,
    /// Type defined by the source unit; aliases keep their base's type
    pub type_name: String,
    pub source_path: PathBuf,
    pub style: ConstructionStyle,
    /// Raw dependency tokens in declaration order
    pub dependencies: Vec<String>,
}

impl ServiceDescriptor {
    pub fn new(
        name: impl Into<String>,
        source_path: impl Into<PathBuf>,
        style: ConstructionStyle,
        dependencies: Vec<String>,
    ) -> Self {
        let name = name.into();
        Self {
            type_name: name.clone(),
            name,
            source_path: source_path.into(),
            style,
            dependencies,
        }
    }

    /// Derives a service that shares this descriptor's type and source but
    /// takes a different argument list.
    pub fn derive(&self, name: impl Into<String>, dependencies: Vec<String>) -> Self {
        Self {
            name: name.into(),
            dependencies,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_name_as_type() {
        let desc = ServiceDescriptor::new(
            "Logger",
            "services/logger.rs",
            ConstructionStyle::Instantiable,
            vec![],
        );
        assert_eq!(desc.name, "Logger");
        assert_eq!(desc.type_name, "Logger");
    }

    #[test]
    fn test_derive_keeps_source_and_style() {
        let base = ServiceDescriptor::new(
            "Dep",
            "services/dep.rs",
            ConstructionStyle::Initializable,
            vec!["x".to_string()],
        );
        let derived = base.derive("scalar", vec!["'ns'".to_string()]);

        assert_eq!(derived.name, "scalar");
        assert_eq!(derived.type_name, "Dep");
        assert_eq!(derived.source_path, PathBuf::from("services/dep.rs"));
        assert_eq!(derived.style, ConstructionStyle::Initializable);
        assert_eq!(derived.dependencies, vec!["'ns'"]);
        assert_eq!(base.dependencies, vec!["x"]);
    }

    #[test]
    fn test_style_serializes_snake_case() {
        let json = serde_json::to_string(&ConstructionStyle::Initializable).unwrap();
        assert_eq!(json, "\"initializable\"");
        assert_eq!(ConstructionStyle::Instantiable.to_string(), "instantiable");
    }
}
