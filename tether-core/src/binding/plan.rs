//! Binding Plan
//!
//! The plan is the compiled form of a component's schema: one entry per
//! bound property, in declaration order, carrying everything the listener
//! needs at run time. It is built once when a component binds and never
//! mutated afterwards; unbinding and rebinding a component builds a fresh
//! plan.

use crate::binding::schema::{PropertyKind, PropertySchema, StateSource};
use crate::diagnostics::Diagnostics;

/// One bound property, compiled.
#[derive(Debug, Clone)]
pub struct PlanEntry {
    pub name: String,
    pub source: StateSource,
    pub read_only: bool,
    pub kind: PropertyKind,
}

/// Compiled, immutable binding plan for one component instance.
#[derive(Debug, Clone, Default)]
pub struct BindingPlan {
    entries: Vec<PlanEntry>,
}

impl BindingPlan {
    /// Compile a schema into a plan.
    ///
    /// Unbound properties are skipped. A bound property that declares
    /// two-way notification without being read-only draws a warning through
    /// the diagnostics sink; the binding is still established, since state
    /// keeps flowing one way regardless.
    pub fn build(tag: &str, schema: &PropertySchema, diagnostics: &dyn Diagnostics) -> Self {
        let mut entries = Vec::new();
        for (name, spec) in schema.iter() {
            let Some(source) = spec.source() else {
                continue;
            };
            if spec.is_notify() && !spec.is_read_only() {
                diagnostics.warn(&format!(
                    "<{tag}>.{name} declares two-way notification, which works against one-way state flow"
                ));
            }
            entries.push(PlanEntry {
                name: name.to_string(),
                source: source.clone(),
                read_only: spec.is_read_only(),
                kind: spec.kind(),
            });
        }
        Self { entries }
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Number of bound properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the plan binds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::schema::PropertySpec;
    use crate::diagnostics::RecordingDiagnostics;

    #[test]
    fn unbound_properties_are_skipped() {
        let schema = PropertySchema::new()
            .with("bound", PropertySpec::value().path("a"))
            .with("local", PropertySpec::value());
        let sink = RecordingDiagnostics::new();

        let plan = BindingPlan::build("widget", &schema, &sink);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.entries()[0].name, "bound");
    }

    #[test]
    fn entries_keep_declaration_order() {
        let schema = PropertySchema::new()
            .with("c", PropertySpec::value().path("c"))
            .with("a", PropertySpec::array().path("a"))
            .with("b", PropertySpec::object().path("b"));
        let sink = RecordingDiagnostics::new();

        let plan = BindingPlan::build("widget", &schema, &sink);
        let names: Vec<&str> = plan.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn notify_without_read_only_warns_but_binds() {
        let schema = PropertySchema::new()
            .with("open", PropertySpec::value().path("ui.open").notify())
            .with(
                "title",
                PropertySpec::value().path("ui.title").notify().read_only(),
            );
        let sink = RecordingDiagnostics::new();

        let plan = BindingPlan::build("dialog", &schema, &sink);
        assert_eq!(plan.len(), 2, "warning must not abort binding");

        let warnings = sink.warnings();
        assert_eq!(warnings.len(), 1, "read-only notify is fine");
        assert!(warnings[0].contains("<dialog>.open"));
    }
}
