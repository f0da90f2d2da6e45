use super::ServiceGraph;
use crate::descriptor::ServiceDescriptor;
use crate::error::{Result, WireError};
use tracing::debug;

/// A derived service cloned from a base service with a new argument list.
///
/// Parsed from a call-like signature such as `Dep('ns', 42)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDirective {
    pub name: String,
    pub base: String,
    pub arguments: Vec<String>,
}

impl AliasDirective {
    pub fn parse(name: &str, signature: &str) -> Result<Self> {
        let invalid = |reason: &str| WireError::InvalidAlias {
            alias: name.to_string(),
            reason: reason.to_string(),
        };

        let signature = signature.trim();
        let open = signature
            .find('(')
            .ok_or_else(|| invalid("expected a signature like `Base(arg, ...)`"))?;
        let body = signature[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| invalid("signature must end with `)`"))?;

        let base = signature[..open].trim();
        if base.is_empty() {
            return Err(invalid("missing base service name"));
        }

        let arguments = split_arguments(body).map_err(|reason| invalid(reason))?;

        Ok(Self {
            name: name.to_string(),
            base: base.to_string(),
            arguments,
        })
    }
}

/// Splits a comma separated argument list, ignoring commas inside quotes or
/// nested brackets.
fn split_arguments(body: &str) -> std::result::Result<Vec<String>, &'static str> {
    let mut arguments = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut escaped = false;

    for c in body.chars() {
        if let Some(q) = quote {
            current.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '\'' | '"' => {
                quote = Some(c);
                current.push(c);
            }
            '(' | '[' | '{' => {
                depth += 1;
                current.push(c);
            }
            ')' | ']' | '}' => {
                depth = depth.checked_sub(1).ok_or("unbalanced brackets")?;
                current.push(c);
            }
            ',' if depth == 0 => {
                arguments.push(take_argument(&mut current)?);
            }
            _ => current.push(c),
        }
    }

    if quote.is_some() {
        return Err("unterminated string literal");
    }
    if depth != 0 {
        return Err("unbalanced brackets");
    }

    if !current.trim().is_empty() || !arguments.is_empty() {
        arguments.push(take_argument(&mut current)?);
    }

    Ok(arguments)
}

fn take_argument(current: &mut String) -> std::result::Result<String, &'static str> {
    let argument = current.trim().to_string();
    current.clear();
    if argument.is_empty() {
        return Err("empty argument");
    }
    Ok(argument)
}

/// Folds descriptors and alias directives into a [`ServiceGraph`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: ServiceGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from base descriptors, then expands aliases in order
    pub fn build<I>(descriptors: I, aliases: &[AliasDirective]) -> Result<ServiceGraph>
    where
        I: IntoIterator<Item = ServiceDescriptor>,
    {
        let mut builder = Self::new();
        for descriptor in descriptors {
            builder.add_service(descriptor)?;
        }
        for alias in aliases {
            builder.add_alias(alias)?;
        }
        Ok(builder.finish())
    }

    pub fn add_service(&mut self, descriptor: ServiceDescriptor) -> Result<&mut Self> {
        self.graph.insert(descriptor)?;
        Ok(self)
    }

    /// Clones the base descriptor under the alias name with the alias arguments.
    /// The base must already be in the graph, so an alias may build on an
    /// earlier alias.
    pub fn add_alias(&mut self, alias: &AliasDirective) -> Result<&mut Self> {
        let base = self
            .graph
            .get(&alias.base)
            .ok_or_else(|| WireError::UnknownBaseService {
                alias: alias.name.clone(),
                base: alias.base.clone(),
            })?;

        let derived = base.derive(alias.name.clone(), alias.arguments.clone());
        debug!(
            alias = %alias.name,
            base = %alias.base,
            arguments = alias.arguments.len(),
            "Expanded alias"
        );
        self.graph.insert(derived)?;
        Ok(self)
    }

    pub fn finish(self) -> ServiceGraph {
        self.graph
    }
}
