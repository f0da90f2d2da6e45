//! Relative module paths for `#[path = "..."]` declarations

use std::path::{Component, Path, PathBuf};

/// Resolves `.` and `..` components without touching the filesystem
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal = matches!(out.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    out.pop();
                } else if !out.has_root() || out.components().count() > 1 {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Path of `target` as seen from directory `from`, using `/` separators and
/// always starting with `./` or `../`.
///
/// When the two paths share no common anchor (one absolute and one relative,
/// or different prefixes) the normalized target is returned unchanged.
pub fn relative_module_path(from: &Path, target: &Path) -> String {
    let from = normalize(from);
    let target = normalize(target);

    if from.has_root() != target.has_root() || prefix(&from) != prefix(&target) {
        return to_slashes(&target);
    }

    let from_parts: Vec<Component> = from.components().collect();
    let target_parts: Vec<Component> = target.components().collect();
    let common = from_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    for component in &from_parts[common..] {
        if !matches!(component, Component::ParentDir) {
            parts.push("..".to_string());
        }
    }
    parts.extend(
        target_parts[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    let joined = parts.join("/");
    if joined.starts_with("../") {
        joined
    } else {
        format!("./{}", joined)
    }
}

fn prefix(path: &Path) -> Option<Component<'_>> {
    path.components()
        .next()
        .filter(|c| matches!(c, Component::Prefix(_)))
}

fn to_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
