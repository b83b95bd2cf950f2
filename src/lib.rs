//! # v-model Compiler
//!
//! Lowers two-way model binding attributes on JSX elements.
//!
//! ## Directive Names
//!
//! - `v-model={x}` binds `modelValue`.
//! - `v-model_trim_lazy={x}` binds `modelValue` with modifiers `trim` and `lazy`.
//! - `v-model-title={x}` binds the `title` property (components only).
//! - `v-model-title_trim={x}` binds `title` with modifier `trim`.
//!
//! ## Output Shapes
//!
//! 1. **Components** receive the bound value, an `onUpdate:<prop>` setter and,
//!    when modifiers are present, a `<prop>Modifiers` object.
//! 2. **Native controls** (`<input>`, `<textarea>`, `<select>`) keep only the
//!    setter in their props. The value and modifiers travel through a runtime
//!    directive tuple whose primitive is picked from the tag and the `type`
//!    attribute: `vModelText`, `vModelRadio`, `vModelCheckbox`,
//!    `vModelSelect` or `vModelDynamic`.
//!
//! ## Rejected Bindings
//!
//! Values that are not assignable expressions, malformed names, arguments on
//! native controls, unsupported tags, file inputs and a `value` attribute
//! next to a text binding are compile errors located at the offending
//! attribute.

mod builder;
mod collect;
mod directive;
mod error;
mod helpers;
mod native;
mod options;

#[cfg(test)]
mod collect_tests;

pub use builder::{CompiledModel, ElementTag, ModelBuilder};
pub use collect::{compile_models, ModelReport, ModelSite};
pub use directive::{
    is_model_attribute, model_attributes, parse_directive_name, ParsedDirective, DEFAULT_PROP,
    MODEL_PREFIX,
};
pub use error::*;
pub use helpers::{HelperRegistrar, HelperRegistry};
pub use native::{
    decide, find_attribute, has_spread, resolve_native_model, Decision, ModelPrimitive,
    NativeModel, NativeTag, TypeHint,
};
pub use options::ModelOptions;

#[cfg(feature = "napi")]
pub use collect::compile_models_native;
