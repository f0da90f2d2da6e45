//! Extraction strategies for service units
//!
//! Two annotation conventions are understood:
//!
//! - Constructor style ([`ConstructorDocExtractor`]): the unit exposes
//!   `fn new(...)` and documents its parameters in the doc block directly above
//!   it with `/// @param {Type} name` lines.
//! - Injection-list style ([`InjectListExtractor`]): the unit declares
//!   `const INJECT: &[&str] = &["A", "B"];` and exposes `fn init(&mut self, ...)`.

use super::naming::{is_identifier, to_upper_camel_case};
use super::{ConstructionStyle, ServiceDescriptor, ServiceUnit};
use crate::error::{Result, WireError};
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, trace};

/// A pluggable strategy that recognizes one annotation convention
pub trait DescriptorExtractor: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Construction style of every unit this strategy accepts
    fn style(&self) -> ConstructionStyle;

    /// Whether this strategy recognizes the unit
    fn applies(&self, unit: &ServiceUnit) -> bool;

    /// Ordered dependency tokens declared by the unit.
    ///
    /// `known` holds every service name of the current build, so a strategy can
    /// bind a parameter by name instead of by type.
    fn dependencies(&self, unit: &ServiceUnit, known: &HashSet<String>) -> Result<Vec<String>>;
}

fn malformed(unit: &ServiceUnit, reason: impl Into<String>) -> WireError {
    WireError::MalformedService {
        path: unit.path.clone(),
        reason: reason.into(),
    }
}

/// Reads `@param` annotations from the doc block above `fn new(`
///
/// When the unit has an inherent `impl <ServiceName>` block, only constructors
/// inside that block are considered.
pub struct ConstructorDocExtractor {
    constructor_re: Regex,
    impl_re: Regex,
    param_re: Regex,
}

impl ConstructorDocExtractor {
    pub fn new() -> Self {
        Self {
            constructor_re: Regex::new(r"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:const\s+)?fn\s+new\s*[(<]")
                .expect("valid regex"),
            impl_re: Regex::new(r"^\s*impl\b").expect("valid regex"),
            param_re: Regex::new(r"@param\s+\{([^}]+)\}\s+(\w+)").expect("valid regex"),
        }
    }

    /// Line range of the inherent impl block for `type_name`, ending at the
    /// next `impl` header. Falls back to the whole unit.
    fn impl_block(&self, lines: &[&str], type_name: Option<&str>) -> (usize, usize) {
        let header = type_name
            .and_then(|name| {
                Regex::new(&format!(r"^\s*impl(?:\s*<[^>]*>)?\s+{}\b", regex::escape(name))).ok()
            })
            .and_then(|re| lines.iter().position(|l| re.is_match(l)));

        match header {
            Some(start) => {
                let end = lines[start + 1..]
                    .iter()
                    .position(|l| self.impl_re.is_match(l))
                    .map_or(lines.len(), |offset| start + 1 + offset);
                (start, end)
            }
            None => (0, lines.len()),
        }
    }

    /// Doc lines (without the `///` marker) directly preceding the constructor.
    /// Attributes between the docs and the signature are skipped.
    fn constructor_docs<'a>(
        &self,
        source: &'a str,
        type_name: Option<&str>,
    ) -> Option<Vec<&'a str>> {
        let lines: Vec<&str> = source.lines().collect();
        let (start, end) = self.impl_block(&lines, type_name);
        let ctor = start
            + lines[start..end]
                .iter()
                .position(|l| self.constructor_re.is_match(l))?;

        let mut docs = Vec::new();
        for line in lines[start..ctor].iter().rev() {
            let trimmed = line.trim_start();
            if let Some(doc) = trimmed.strip_prefix("///") {
                docs.push(doc);
            } else if trimmed.starts_with("#[") {
                continue;
            } else {
                break;
            }
        }
        docs.reverse();
        Some(docs)
    }
}

impl Default for ConstructorDocExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorExtractor for ConstructorDocExtractor {
    fn name(&self) -> &'static str {
        "constructor-doc"
    }

    fn style(&self) -> ConstructionStyle {
        ConstructionStyle::Instantiable
    }

    fn applies(&self, _unit: &ServiceUnit) -> bool {
        true
    }

    fn dependencies(&self, unit: &ServiceUnit, known: &HashSet<String>) -> Result<Vec<String>> {
        let type_name = ServiceParser::service_name(&unit.path).ok();
        let Some(docs) = self.constructor_docs(&unit.source, type_name.as_deref()) else {
            trace!(path = %unit.path.display(), "No constructor found, assuming no dependencies");
            return Ok(Vec::new());
        };

        let mut dependencies = Vec::new();
        for line in docs.iter().filter(|l| l.contains("@param")) {
            let caps = self
                .param_re
                .captures(line)
                .ok_or_else(|| malformed(unit, format!("unrecognized annotation '{}'", line.trim())))?;
            let ty = caps[1].trim();
            let param = &caps[2];

            if known.contains(param) {
                dependencies.push(param.to_string());
            } else {
                dependencies.push(ty.to_string());
            }
        }

        Ok(dependencies)
    }
}

/// Reads the `INJECT` list of an initializable unit
pub struct InjectListExtractor {
    declared_re: Regex,
    list_re: Regex,
    init_re: Regex,
    new_re: Regex,
}

impl InjectListExtractor {
    pub fn new() -> Self {
        Self {
            declared_re: Regex::new(r"\bconst\s+INJECT\s*:").expect("valid regex"),
            list_re: Regex::new(r"(?s)\bconst\s+INJECT\s*:[^=]*=\s*&?\s*\[(.*?)\]\s*;")
                .expect("valid regex"),
            init_re: Regex::new(r"\bfn\s+init\s*[(<]").expect("valid regex"),
            new_re: Regex::new(r"\bfn\s+new\s*[(<]").expect("valid regex"),
        }
    }
}

impl Default for InjectListExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorExtractor for InjectListExtractor {
    fn name(&self) -> &'static str {
        "inject-list"
    }

    fn style(&self) -> ConstructionStyle {
        ConstructionStyle::Initializable
    }

    fn applies(&self, unit: &ServiceUnit) -> bool {
        self.declared_re.is_match(&unit.source)
            || (self.init_re.is_match(&unit.source) && !self.new_re.is_match(&unit.source))
    }

    fn dependencies(&self, unit: &ServiceUnit, _known: &HashSet<String>) -> Result<Vec<String>> {
        if !self.declared_re.is_match(&unit.source) {
            return Ok(Vec::new());
        }

        let caps = self
            .list_re
            .captures(&unit.source)
            .ok_or_else(|| malformed(unit, "INJECT is not a list of string literals"))?;

        caps[1]
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                entry
                    .strip_prefix('"')
                    .and_then(|e| e.strip_suffix('"'))
                    .filter(|e| !e.is_empty())
                    .map(str::to_string)
                    .ok_or_else(|| malformed(unit, format!("INJECT entry {} is not a string", entry)))
            })
            .collect()
    }
}

/// Turns service units into descriptors using the first matching strategy
pub struct ServiceParser {
    extractors: Vec<Box<dyn DescriptorExtractor>>,
    known: HashSet<String>,
}

impl ServiceParser {
    /// Parser with the injection-list strategy tried before the constructor one
    pub fn new() -> Self {
        Self::with_extractors(vec![
            Box::new(InjectListExtractor::new()),
            Box::new(ConstructorDocExtractor::new()),
        ])
    }

    pub fn with_extractors(extractors: Vec<Box<dyn DescriptorExtractor>>) -> Self {
        Self {
            extractors,
            known: HashSet::new(),
        }
    }

    /// Registers the service names of the current build for by-name binding
    pub fn with_known_services<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known.extend(names.into_iter().map(Into::into));
        self
    }

    /// Service name for a unit path: the file stem in UpperCamelCase
    pub fn service_name(path: &Path) -> Result<String> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| is_identifier(s))
            .ok_or_else(|| WireError::MalformedService {
                path: path.to_path_buf(),
                reason: "file name is not a valid identifier".to_string(),
            })?;

        Ok(to_upper_camel_case(stem))
    }

    pub fn parse(&self, unit: &ServiceUnit) -> Result<ServiceDescriptor> {
        let name = Self::service_name(&unit.path)?;

        let extractor = self
            .extractors
            .iter()
            .find(|e| e.applies(unit))
            .ok_or_else(|| malformed(unit, "no extractor recognizes this unit"))?;

        let dependencies = extractor.dependencies(unit, &self.known)?;

        debug!(
            service = %name,
            extractor = extractor.name(),
            dependencies = dependencies.len(),
            "Extracted service descriptor"
        );

        Ok(ServiceDescriptor::new(
            name,
            unit.path.clone(),
            extractor.style(),
            dependencies,
        ))
    }
}

impl Default for ServiceParser {
    fn default() -> Self {
        Self::new()
    }
}
