//! # engine_component
//!
//! The entity/component core of the engine: what a component is, how an
//! entity holds its components, and how a world holds its entities.
//!
//! This crate provides:
//!
//! - [`Component`] trait: the contract all entity data must satisfy.
//! - [`AnyComponent`]: the type-erased form components are stored as.
//! - [`ComponentStore`]: ordered per-entity storage with first-match typed lookup.
//! - [`Entity`] / [`EntityId`]: named component containers and their handles.
//! - [`World`]: the ordered entity registry systems iterate over.
//! - [`ComponentRegistry`]: name to type mapping for loading serialised data.

pub mod component;
pub mod entity;
pub mod error;
pub mod registry;
pub mod store;
pub mod world;

pub use component::{AnyComponent, Component, ComponentTypeId};
pub use entity::{Entity, EntityId};
pub use error::{ComponentError, WorldError};
pub use registry::{ComponentMeta, ComponentRegistry};
pub use store::ComponentStore;
pub use world::World;
