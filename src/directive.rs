//! Model directive names.
//!
//! ```text
//! v-model            -> modelValue, []
//! v-model_trim       -> modelValue, [trim]
//! v-model-title      -> title, []
//! v-model-title_a_b  -> title, [a, b]
//! ```

use log::trace;
use oxc_ast::ast::{JSXAttribute, JSXAttributeItem, JSXAttributeName};

use crate::error::ModelErrorKind;

pub const MODEL_PREFIX: &str = "v-model";
pub const DEFAULT_PROP: &str = "modelValue";

const SHORTHAND_MARKER: char = '_';
const ARGUMENT_MARKER: char = '-';
const MODIFIER_SEPARATOR: char = '_';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDirective {
    pub prop_name: String,
    pub modifiers: Vec<String>,
}

impl ParsedDirective {
    pub fn is_default_prop(&self) -> bool {
        self.prop_name == DEFAULT_PROP
    }

    pub fn event_name(&self) -> String {
        format!("onUpdate:{}", self.prop_name)
    }

    /// Key of the modifiers object passed to components.
    pub fn modifiers_key(&self) -> String {
        if self.is_default_prop() {
            "modelModifiers".to_string()
        } else {
            format!("{}Modifiers", self.prop_name)
        }
    }
}

pub fn is_model_attribute(name: &str) -> bool {
    name.starts_with(MODEL_PREFIX)
}

pub fn parse_directive_name(raw: &str) -> Result<ParsedDirective, ModelErrorKind> {
    let suffix = raw
        .strip_prefix(MODEL_PREFIX)
        .ok_or(ModelErrorKind::InvalidArgumentSyntax)?;
    trace!("Parsing model directive {:?} (suffix {:?})", raw, suffix);

    let mut chars = suffix.chars();
    let parsed = match chars.next() {
        None => ParsedDirective {
            prop_name: DEFAULT_PROP.to_string(),
            modifiers: vec![],
        },
        Some(SHORTHAND_MARKER) => ParsedDirective {
            prop_name: DEFAULT_PROP.to_string(),
            modifiers: split_modifiers(chars.as_str()).collect(),
        },
        Some(ARGUMENT_MARKER) => {
            let mut tokens = chars.as_str().split(MODIFIER_SEPARATOR);
            let prop_name = match tokens.next() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => return Err(ModelErrorKind::MissingArgumentName),
            };
            ParsedDirective {
                prop_name,
                modifiers: tokens.map(str::to_string).collect(),
            }
        }
        Some(_) => return Err(ModelErrorKind::InvalidArgumentSyntax),
    };

    Ok(parsed)
}

/// Tokens are kept as split, so `v-model_` carries one empty modifier.
fn split_modifiers(tokens: &str) -> impl Iterator<Item = String> + '_ {
    tokens.split(MODIFIER_SEPARATOR).map(str::to_string)
}

pub fn attribute_name<'s>(attr: &'s JSXAttribute<'_>) -> Option<&'s str> {
    match &attr.name {
        JSXAttributeName::Identifier(id) => Some(id.name.as_str()),
        JSXAttributeName::NamespacedName(_) => None,
    }
}

/// Model attributes of an element, in declaration order.
pub fn model_attributes<'s, 'a>(
    items: &'s [JSXAttributeItem<'a>],
) -> impl Iterator<Item = &'s JSXAttribute<'a>> + 's {
    items.iter().filter_map(|item| match item {
        JSXAttributeItem::Attribute(attr) if attribute_name(attr).is_some_and(is_model_attribute) => {
            Some(&**attr)
        }
        _ => None,
    })
}
