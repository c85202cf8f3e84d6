//! Component Binding
//!
//! This module connects declared component properties to the store:
//!
//! - `schema`: the explicit, ordered declaration of bindable properties.
//! - `component`: the narrow trait the host component implements.
//! - `plan`: the schema compiled into an immutable per-instance plan.
//! - `listener`: the run loop — resolve, diff, apply, signal.
//! - `subscription`: the bind/unbind lifecycle around the store
//!   subscription, guaranteeing at most one listener per component.

pub mod component;
pub mod listener;
pub mod plan;
pub mod schema;
pub mod subscription;

pub use component::{ActionCreator, Component};
pub use listener::Listener;
pub use plan::{BindingPlan, PlanEntry};
pub use schema::{PropertyKind, PropertySchema, PropertySpec, StateSource};
pub use subscription::{bind, unbind, BoundComponent};
