//! Schema-governed property collections.
//!
//! A [`PropertyCollection`] holds properties of one kind (tasks, resources,
//! accounts, ...) that all share one attribute schema. Building a collection
//! happens in three strictly ordered phases:
//!
//! 1. register attribute types ([`PropertyCollection::add_attribute_type`]),
//! 2. admit properties ([`PropertyCollection::add_property`]),
//! 3. derive WBS codes ([`PropertyCollection::index`]).
//!
//! Registering an attribute type after the first property was admitted is an
//! error: the schema is frozen as soon as the collection holds data.
//!
//! The [`AttributeSchemaRegistry`] answers metadata queries for registered
//! attributes and for the built-in `id`, `name` and `seqno` attributes. The
//! [`wbs`] module computes the dotted WBS code and the fixed-width sortable
//! tree path of every property.

mod collection;
mod config;
mod error;
mod registry;
pub mod wbs;

pub use collection::PropertyCollection;
pub use config::{CollectionConfig, DuplicatePolicy, NamespacePolicy};
pub use error::{PropertySetError, PropertySetResult};
pub use registry::{AttributeSchemaRegistry, BUILTIN_ATTRIBUTES, BuiltinAttribute};
pub use wbs::WbsCode;
