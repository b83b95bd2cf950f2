//! Runtime primitive selection for native form controls.

use log::debug;
use oxc_ast::ast::{JSXAttribute, JSXAttributeItem, JSXAttributeValue};
use oxc_span::Span;

use crate::directive::attribute_name;
use crate::error::{ModelError, ModelErrorKind};

// ═══════════════════════════════════════════════════════════════════════════════
// TYPES
// ═══════════════════════════════════════════════════════════════════════════════

/// Runtime directives that implement two-way binding on native controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelPrimitive {
    Text,
    Radio,
    Checkbox,
    Dynamic,
    Select,
}

impl ModelPrimitive {
    pub fn helper_name(&self) -> &'static str {
        match self {
            ModelPrimitive::Text => "vModelText",
            ModelPrimitive::Radio => "vModelRadio",
            ModelPrimitive::Checkbox => "vModelCheckbox",
            ModelPrimitive::Dynamic => "vModelDynamic",
            ModelPrimitive::Select => "vModelSelect",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeTag {
    Input,
    Textarea,
    Select,
}

impl NativeTag {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "input" => Some(NativeTag::Input),
            "textarea" => Some(NativeTag::Textarea),
            "select" => Some(NativeTag::Select),
            _ => None,
        }
    }
}

/// Outcome of primitive selection. `Invalid` means no primitive can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeModel {
    Text,
    Radio,
    Checkbox,
    Dynamic,
    Select,
    Invalid,
}

impl NativeModel {
    pub fn primitive(&self) -> Option<ModelPrimitive> {
        match self {
            NativeModel::Text => Some(ModelPrimitive::Text),
            NativeModel::Radio => Some(ModelPrimitive::Radio),
            NativeModel::Checkbox => Some(ModelPrimitive::Checkbox),
            NativeModel::Dynamic => Some(ModelPrimitive::Dynamic),
            NativeModel::Select => Some(ModelPrimitive::Select),
            NativeModel::Invalid => None,
        }
    }
}

/// What the `type` attribute of an `<input>` says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint<'s> {
    Absent,
    Literal(&'s str),
    Dynamic,
    /// `type` without a string or expression value.
    Valueless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub model: NativeModel,
    /// A sibling `value` attribute would fight the binding.
    pub forbids_value: bool,
}

impl Decision {
    fn of(model: NativeModel, forbids_value: bool) -> Self {
        Decision {
            model,
            forbids_value,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DECISION TABLE
// ═══════════════════════════════════════════════════════════════════════════════

pub fn decide(tag: NativeTag, type_hint: TypeHint<'_>, has_spread: bool) -> Decision {
    match (tag, type_hint) {
        (NativeTag::Select, _) => Decision::of(NativeModel::Select, false),
        (NativeTag::Textarea, _) => Decision::of(NativeModel::Text, true),
        (NativeTag::Input, TypeHint::Dynamic) => Decision::of(NativeModel::Dynamic, false),
        (NativeTag::Input, TypeHint::Literal("radio")) => Decision::of(NativeModel::Radio, false),
        (NativeTag::Input, TypeHint::Literal("checkbox")) => {
            Decision::of(NativeModel::Checkbox, false)
        }
        (NativeTag::Input, TypeHint::Literal("file")) => Decision::of(NativeModel::Invalid, false),
        (NativeTag::Input, TypeHint::Literal(_)) => Decision::of(NativeModel::Text, true),
        (NativeTag::Input, TypeHint::Valueless) => Decision::of(NativeModel::Text, false),
        (NativeTag::Input, TypeHint::Absent) if has_spread => {
            Decision::of(NativeModel::Dynamic, false)
        }
        (NativeTag::Input, TypeHint::Absent) => Decision::of(NativeModel::Text, true),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RESOLVER
// ═══════════════════════════════════════════════════════════════════════════════

/// Picks the runtime primitive for a model binding on a native control.
///
/// File inputs fail with `ModelOnFileInput` at the `type` attribute, and a
/// `value` sibling next to a text binding fails with `RedundantValueAttribute`
/// at that `value` attribute.
pub fn resolve_native_model(
    tag: NativeTag,
    siblings: &[JSXAttributeItem<'_>],
) -> Result<NativeModel, ModelError> {
    let type_attr = if tag == NativeTag::Input {
        find_attribute(siblings, "type")
    } else {
        None
    };
    let type_hint = type_attr.map_or(TypeHint::Absent, type_hint_of);
    let decision = decide(tag, type_hint, has_spread(siblings));

    if decision.model == NativeModel::Invalid {
        let span = type_attr.map_or(Span::default(), |attr| attr.span);
        return Err(ModelErrorKind::ModelOnFileInput.at(span));
    }

    if decision.forbids_value {
        if let Some(value) = find_attribute(siblings, "value") {
            return Err(ModelErrorKind::RedundantValueAttribute.at(value.span));
        }
    }

    debug!(
        "Resolved model on {:?} (type {:?}) to {:?}",
        tag, type_hint, decision.model
    );
    Ok(decision.model)
}

fn type_hint_of<'s>(attr: &'s JSXAttribute<'_>) -> TypeHint<'s> {
    match &attr.value {
        Some(JSXAttributeValue::StringLiteral(s)) => TypeHint::Literal(s.value.as_str()),
        Some(JSXAttributeValue::ExpressionContainer(_)) => TypeHint::Dynamic,
        Some(JSXAttributeValue::Element(_)) | Some(JSXAttributeValue::Fragment(_)) | None => {
            TypeHint::Valueless
        }
    }
}

/// First attribute named `name`, in declaration order.
pub fn find_attribute<'s, 'a>(
    siblings: &'s [JSXAttributeItem<'a>],
    name: &str,
) -> Option<&'s JSXAttribute<'a>> {
    siblings.iter().find_map(|item| match item {
        JSXAttributeItem::Attribute(attr) if attribute_name(attr) == Some(name) => Some(&**attr),
        _ => None,
    })
}

/// Spread attributes may supply `type` under a key unknown at compile time.
pub fn has_spread(siblings: &[JSXAttributeItem<'_>]) -> bool {
    siblings
        .iter()
        .any(|item| matches!(item, JSXAttributeItem::SpreadAttribute(_)))
}
