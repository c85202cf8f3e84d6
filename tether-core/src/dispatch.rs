//! Dispatch Adapter
//!
//! Components hand actions to the store in three shapes: by naming a local
//! action creator, by passing a ready action object, or by deferring to a
//! zero-argument creator invoked at dispatch time. The shapes are explicit
//! variants of [`ActionInput`] resolved by one exhaustive match; exactly one
//! action object reaches the store per dispatch, and the store's return
//! value travels back to the caller unchanged.

use std::fmt;

use serde_json::Value;

use crate::binding::Component;
use crate::error::{Error, Result};
use crate::store::Store;

/// An action on its way to the store, in one of the three accepted shapes.
pub enum ActionInput {
    /// A local action creator looked up by name on the component, invoked
    /// with `args`.
    Named { name: String, args: Vec<Value> },

    /// A ready action object, dispatched as-is.
    Plain(Value),

    /// A deferred creator, invoked with no arguments at dispatch time.
    Thunk(Box<dyn FnOnce() -> Value + Send>),
}

impl ActionInput {
    /// Name a local action creator, invoked with no arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Name a local action creator, invoked with `args`.
    pub fn named_with(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self::Named {
            name: name.into(),
            args,
        }
    }

    /// Wrap a ready action object.
    pub fn plain(action: Value) -> Self {
        Self::Plain(action)
    }

    /// Defer to a zero-argument action creator.
    pub fn thunk(create: impl FnOnce() -> Value + Send + 'static) -> Self {
        Self::Thunk(Box::new(create))
    }
}

impl From<Value> for ActionInput {
    fn from(action: Value) -> Self {
        Self::Plain(action)
    }
}

impl fmt::Debug for ActionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionInput::Named { name, args } => f
                .debug_struct("Named")
                .field("name", name)
                .field("args", args)
                .finish(),
            ActionInput::Plain(action) => f.debug_tuple("Plain").field(action).finish(),
            ActionInput::Thunk(_) => f.write_str("Thunk"),
        }
    }
}

/// Resolve an action input against a component and dispatch it.
///
/// A named input whose creator the component does not provide fails with
/// [`Error::MissingAction`] carrying the component tag and the action key;
/// nothing reaches the store in that case.
pub fn dispatch_action<C: Component>(
    component: &C,
    store: &dyn Store,
    input: ActionInput,
) -> Result<Value> {
    let action = match input {
        ActionInput::Named { name, args } => {
            let creator = component
                .action(&name)
                .ok_or_else(|| Error::MissingAction {
                    component: component.tag().to_string(),
                    action: name.clone(),
                })?;
            creator(&args)
        }
        ActionInput::Thunk(create) => create(),
        ActionInput::Plain(action) => action,
    };
    Ok(store.dispatch(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::schema::PropertySchema;
    use crate::binding::testing::RecordingComponent;
    use crate::store::ReducerStore;
    use serde_json::json;

    fn passthrough_store() -> ReducerStore {
        ReducerStore::new(json!({}), |_, action| action.clone())
    }

    #[test]
    fn named_action_resolves_through_the_component() {
        let store = passthrough_store();
        let component = RecordingComponent::new("counter", PropertySchema::new())
            .with_action("increment", |_| json!({"type": "INC"}));

        let returned =
            dispatch_action(&component, &store, ActionInput::named("increment")).unwrap();
        assert_eq!(returned, json!({"type": "INC"}));
    }

    #[test]
    fn named_action_receives_rest_arguments() {
        let store = passthrough_store();
        let component = RecordingComponent::new("todo-list", PropertySchema::new()).with_action(
            "add",
            |args| json!({"type": "ADD", "label": args[0], "done": args[1]}),
        );

        let returned = dispatch_action(
            &component,
            &store,
            ActionInput::named_with("add", vec![json!("milk"), json!(false)]),
        )
        .unwrap();
        assert_eq!(
            returned,
            json!({"type": "ADD", "label": "milk", "done": false})
        );
    }

    #[test]
    fn plain_action_reaches_the_store_unchanged() {
        let store = passthrough_store();
        let component = RecordingComponent::new("widget", PropertySchema::new());

        let action = json!({"type": "X", "payload": [1, 2]});
        let returned = dispatch_action(&component, &store, action.clone().into()).unwrap();
        assert_eq!(returned, action);
    }

    #[test]
    fn thunk_is_invoked_once_at_dispatch_time() {
        let store = passthrough_store();
        let component = RecordingComponent::new("widget", PropertySchema::new());

        let returned = dispatch_action(
            &component,
            &store,
            ActionInput::thunk(|| json!({"type": "DEFERRED"})),
        )
        .unwrap();
        assert_eq!(returned, json!({"type": "DEFERRED"}));
    }

    #[test]
    fn missing_action_names_component_and_key() {
        let store = passthrough_store();
        let component = RecordingComponent::new("counter", PropertySchema::new());

        let err = dispatch_action(&component, &store, ActionInput::named("reset")).unwrap_err();
        match err {
            Error::MissingAction { component, action } => {
                assert_eq!(component, "counter");
                assert_eq!(action, "reset");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_action_dispatches_nothing() {
        let store = ReducerStore::new(json!({"dispatched": 0}), |state, _| {
            json!({"dispatched": state["dispatched"].as_i64().unwrap() + 1})
        });
        let component = RecordingComponent::new("counter", PropertySchema::new());

        assert!(dispatch_action(&component, &store, ActionInput::named("nope")).is_err());
        assert_eq!(store.get_state(), json!({"dispatched": 0}));
    }
}
