use super::arguments::Argument;
use super::paths::relative_module_path;
use crate::descriptor::naming::{is_keyword, to_snake_case};
use crate::descriptor::{ConstructionStyle, ServiceDescriptor};
use crate::error::{Result, WireError};
use crate::graph::ServiceGraph;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const HEADER: &str = "\
// @generated by diwire. Do not edit by hand.
//
// Each accessor builds its service on first use and hands out the cached
// instance afterwards. A context must only be used from one thread.

#![allow(dead_code, unused_imports, clippy::all)]

use std::cell::OnceCell;
use std::rc::Rc;
";

const FOOTER: &str = "\
thread_local! {
    static CONTEXT: Context = Context::new();
}

/// Runs `f` with this thread's shared context.
pub fn with_context<R>(f: impl FnOnce(&Context) -> R) -> R {
    CONTEXT.with(f)
}
";

/// Names the generated `Context` already defines next to the accessors
const RESERVED_ACCESSORS: &[&str] = &["new", "default", "with_context"];

/// Crate roots the generated header imports from
const RESERVED_MODULES: &[&str] = &["std", "core", "alloc"];

/// Renders a validated [`ServiceGraph`] as a Rust context module
#[derive(Debug, Clone)]
pub struct ContextEmitter {
    base_dir: PathBuf,
    context_dir: PathBuf,
}

/// One `#[path] mod` declaration shared by every service from the same file
struct ModuleDecl {
    ident: String,
    path: String,
}

impl ContextEmitter {
    /// `base_dir` anchors descriptor source paths; `context_dir` is where the
    /// rendered module will be written.
    pub fn new(base_dir: impl Into<PathBuf>, context_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            context_dir: context_dir.into(),
        }
    }

    /// Rejects graphs whose services would produce clashing or unusable
    /// identifiers once converted to accessor, field and module names.
    pub fn check_names(graph: &ServiceGraph) -> Result<()> {
        let mut accessors: HashMap<String, &str> = HashMap::new();
        let mut modules: HashMap<String, (&Path, &str)> = HashMap::new();

        for service in graph.services() {
            let reserved = |ident: &str| WireError::ReservedName {
                name: service.name.clone(),
                ident: ident.to_string(),
            };

            let accessor = to_snake_case(&service.name);
            if is_keyword(&accessor) || RESERVED_ACCESSORS.contains(&accessor.as_str()) {
                return Err(reserved(&accessor));
            }
            if is_keyword(&service.type_name) {
                return Err(reserved(&service.type_name));
            }
            if let Some(first) = accessors.insert(accessor.clone(), service.name.as_str()) {
                return Err(WireError::NameCollision {
                    ident: accessor,
                    first: first.to_string(),
                    second: service.name.clone(),
                });
            }

            let module = module_ident(&service.source_path);
            if is_keyword(&module) || RESERVED_MODULES.contains(&module.as_str()) {
                return Err(reserved(&module));
            }
            match modules.get(&module) {
                Some((path, first)) if *path != service.source_path.as_path() => {
                    return Err(WireError::NameCollision {
                        ident: module,
                        first: first.to_string(),
                        second: service.name.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    modules.insert(module, (service.source_path.as_path(), service.name.as_str()));
                }
            }
        }
        Ok(())
    }

    pub fn render(&self, graph: &ServiceGraph) -> Result<String> {
        Self::check_names(graph)?;

        let modules = self.modules(graph);
        let mut out = String::from(HEADER);

        for module in modules.values() {
            out.push('\n');
            let _ = writeln!(out, "#[path = \"{}\"]", module.path);
            let _ = writeln!(out, "pub mod {};", module.ident);
        }

        out.push_str("\n/// Lazily built service instances\n");
        out.push_str("#[derive(Default)]\npub struct Context {\n");
        for service in graph.services() {
            let _ = writeln!(
                out,
                "    {}: OnceCell<Rc<{}>>,",
                to_snake_case(&service.name),
                type_path(&modules, service)
            );
        }
        out.push_str("}\n\nimpl Context {\n");
        out.push_str("    pub fn new() -> Self {\n        Self::default()\n    }\n");

        for service in graph.services() {
            out.push('\n');
            out.push_str(&self.render_accessor(graph, &modules, service));
        }

        out.push_str("}\n\n");
        out.push_str(FOOTER);

        debug!(
            services = graph.len(),
            modules = modules.len(),
            bytes = out.len(),
            "Rendered context"
        );
        Ok(out)
    }

    fn modules<'a>(&self, graph: &'a ServiceGraph) -> IndexMap<&'a Path, ModuleDecl> {
        let mut modules = IndexMap::new();
        for service in graph.services() {
            modules
                .entry(service.source_path.as_path())
                .or_insert_with(|| ModuleDecl {
                    ident: module_ident(&service.source_path),
                    path: relative_module_path(
                        &self.context_dir,
                        &self.base_dir.join(&service.source_path),
                    ),
                });
        }
        modules
    }

    fn render_accessor(
        &self,
        graph: &ServiceGraph,
        modules: &IndexMap<&Path, ModuleDecl>,
        service: &ServiceDescriptor,
    ) -> String {
        let accessor = to_snake_case(&service.name);
        let ty = type_path(modules, service);
        let args = service
            .dependencies
            .iter()
            .map(|token| {
                let arg = Argument::classify(token);
                if let Argument::Reference(name) = &arg {
                    if !graph.contains(name) {
                        warn!(
                            service = %service.name,
                            dependency = %name,
                            "Dependency is not a known service, emitting it as an accessor call"
                        );
                    }
                }
                arg.to_expression()
            })
            .collect::<Vec<_>>()
            .join(", ");

        let mut out = String::new();
        if service.name == service.type_name {
            let _ = writeln!(out, "    /// Returns the shared `{}`.", service.name);
        } else {
            let _ = writeln!(
                out,
                "    /// Returns the shared `{}` (a `{}`).",
                service.name, service.type_name
            );
        }
        let _ = writeln!(out, "    pub fn {}(&self) -> Rc<{}> {{", accessor, ty);
        let _ = writeln!(out, "        self.{}", accessor);

        match service.style {
            ConstructionStyle::Instantiable => {
                let _ = writeln!(out, "            .get_or_init(|| Rc::new({}::new({})))", ty, args);
            }
            ConstructionStyle::Initializable => {
                out.push_str("            .get_or_init(|| {\n");
                let _ = writeln!(out, "                let mut value = {}::default();", ty);
                let _ = writeln!(out, "                value.init({});", args);
                out.push_str("                Rc::new(value)\n");
                out.push_str("            })\n");
            }
        }

        out.push_str("            .clone()\n    }\n");
        out
    }
}

fn module_ident(source_path: &Path) -> String {
    let stem = source_path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    to_snake_case(&stem)
}

fn type_path(modules: &IndexMap<&Path, ModuleDecl>, service: &ServiceDescriptor) -> String {
    match modules.get(service.source_path.as_path()) {
        Some(module) => format!("{}::{}", module.ident, service.type_name),
        None => service.type_name.clone(),
    }
}
