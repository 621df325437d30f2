//! Injected check for the external tools a scan relies on.
//!
//! Nothing in this crate looks at the filesystem or `PATH`; callers provide a
//! [DependencyCheck] and decide what to do with the tools it reports missing.

use crate::consts::EXTERNAL_DEPENDENCIES;

pub trait DependencyCheck {
    /// Whether `tool` can be invoked.
    fn is_available(&self, tool: &str) -> bool;
}

impl<F> DependencyCheck for F
where
    F: Fn(&str) -> bool,
{
    fn is_available(&self, tool: &str) -> bool {
        self(tool)
    }
}

///
/// Return the tools in `tools` that `checker` can't find, in input order.
///
/// An empty result means every dependency is satisfied.
///
pub fn check_dependencies<'a>(checker: &dyn DependencyCheck, tools: &[&'a str]) -> Vec<&'a str> {
    tools
        .iter()
        .copied()
        .filter(|tool| !checker.is_available(tool))
        .collect()
}

/// [check_dependencies] over `tabix`, `vg` and `dot`.
pub fn check_default_dependencies(checker: &dyn DependencyCheck) -> Vec<&'static str> {
    check_dependencies(checker, &EXTERNAL_DEPENDENCIES)
}
