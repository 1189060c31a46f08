//! Core [`Component`] trait and its type-erased counterpart.
//!
//! Every piece of data attached to an entity implements [`Component`]. An
//! entity keeps its components as boxed [`AnyComponent`] trait objects so one
//! store can hold any mix of types. Typed access goes back through
//! [`std::any::Any`] downcasts.
//!
//! ## Type Identity
//!
//! [`ComponentTypeId`] is derived from the component's **string name** using
//! FNV-1a 64-bit. It is stable across builds and processes and keys the
//! [`ComponentRegistry`](crate::ComponentRegistry). Scenes on disk carry the
//! name itself. In-process matching uses the Rust `TypeId` behind [`Any`], so
//! two types that happen to share a name are still told apart by the store.
//!
//! ## Saving
//!
//! [`AnyComponent::to_json`] only succeeds for values that load back as the
//! same type. JSON has no NaN or infinity, so a float field holding one would
//! be written as `null` and the scene could not be read again.

use std::any::Any;
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ComponentError;
use crate::registry::ComponentMeta;

/// A unique identifier for a component type, derived from its string name
/// using the FNV-1a 64-bit hash algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ComponentTypeId(pub u64);

impl ComponentTypeId {
    /// FNV-1a 64-bit offset basis.
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

    /// FNV-1a 64-bit prime.
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    /// Compute the [`ComponentTypeId`] for a component name.
    ///
    /// ```text
    /// hash = 0xcbf29ce484222325
    /// for each byte in name.as_bytes():
    ///     hash = (hash XOR byte) * 0x00000100000001b3
    /// ```
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = Self::FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(Self::FNV_PRIME);
            i += 1;
        }
        Self(hash)
    }

    /// Compute the [`ComponentTypeId`] for a Rust component type `T`.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self::from_name(T::type_name())
    }
}

/// The core component trait.
///
/// Components are plain data. They must be serialisable so that scenes can be
/// saved and loaded, and `Send + Sync` so a whole world can be handed to
/// another thread by its owner.
///
/// # Examples
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use engine_component::Component;
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Health {
///     current: f32,
///     max: f32,
/// }
///
/// impl Component for Health {
///     fn type_name() -> &'static str { "Health" }
/// }
/// ```
pub trait Component: Debug + Send + Sync + 'static + Serialize + DeserializeOwned {
    /// A human-readable name for this component type. Also the tag written
    /// into serialised scenes, so it must not change once data is on disk.
    fn type_name() -> &'static str;

    /// Returns the [`ComponentTypeId`] for this component.
    fn component_type_id() -> ComponentTypeId {
        ComponentTypeId::from_name(Self::type_name())
    }

    /// Returns the [`ComponentMeta`] descriptor used to rebuild this
    /// component from serialised data.
    fn meta() -> ComponentMeta {
        ComponentMeta {
            type_id: Self::component_type_id(),
            name: Self::type_name(),
            deserialize_fn: |value: serde_json::Value| -> Result<Box<dyn AnyComponent>, serde_json::Error> {
                let component: Self = serde_json::from_value(value)?;
                Ok(Box::new(component) as Box<dyn AnyComponent>)
            },
        }
    }
}

/// Object-safe view of a [`Component`].
///
/// Implemented for every `T: Component`; this is what a
/// [`ComponentStore`](crate::ComponentStore) actually holds.
pub trait AnyComponent: Debug + Send + Sync + 'static {
    /// The [`Component::type_name`] of the concrete type.
    fn name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Serialise the component's fields to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Serialize`] if the component's `Serialize`
    /// impl fails (e.g. a map with non-string keys), or
    /// [`ComponentError::Unrepresentable`] if the JSON would not load back,
    /// which is what a NaN or infinite float field produces.
    fn to_json(&self) -> Result<serde_json::Value, ComponentError>;
}

impl<T: Component> AnyComponent for T {
    fn name(&self) -> &'static str {
        <T as Component>::type_name()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn to_json(&self) -> Result<serde_json::Value, ComponentError> {
        let name = <T as Component>::type_name();
        let value = serde_json::to_value(self).map_err(|source| ComponentError::Serialize {
            name: name.to_string(),
            source,
        })?;
        serde_json::from_value::<T>(value.clone()).map_err(|source| {
            ComponentError::Unrepresentable {
                name: name.to_string(),
                source,
            }
        })?;
        Ok(value)
    }
}

impl dyn AnyComponent {
    /// Returns `true` if the concrete type is `T`.
    #[must_use]
    pub fn is<T: Component>(&self) -> bool {
        self.as_any().is::<T>()
    }

    #[must_use]
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    #[must_use]
    pub fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}
