//! Model binding lowering.
//!
//! A `v-model` attribute compiles to one of two shapes:
//!
//! - **Component**: `{ modelValue: x, "onUpdate:modelValue": $event => x = $event }`,
//!   plus a `modelModifiers` object when modifiers are present.
//! - **Native control**: only the update handler stays in the props; the bound
//!   value travels through a runtime directive tuple
//!   `[_vModelText, x, undefined, { trim: true }]`.

use indexmap::IndexSet;
use log::debug;
use oxc_allocator::{Allocator, CloneIn, Vec as ArenaVec};
use oxc_ast::ast::{
    ArrayExpression, ArrayExpressionElement, AssignmentTarget, Expression, FormalParameterKind,
    JSXAttribute, JSXAttributeItem, JSXAttributeValue, JSXElementName, ObjectPropertyKind,
    PropertyKey, PropertyKind, SimpleAssignmentTarget,
};
use oxc_ast::{AstBuilder, NONE};
use oxc_span::SPAN;
use oxc_syntax::operator::AssignmentOperator;
use std::fmt;

use crate::directive::{attribute_name, parse_directive_name, ParsedDirective};
use crate::error::{ModelError, ModelErrorKind};
use crate::helpers::HelperRegistrar;
use crate::native::{resolve_native_model, ModelPrimitive, NativeModel, NativeTag};

const EVENT_PARAM: &str = "$event";

// ═══════════════════════════════════════════════════════════════════════════════
// ELEMENT CONTEXT
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementTag {
    Component,
    Native(String),
}

impl ElementTag {
    /// Lowercase JSX names are native tags; references, member expressions and
    /// `this` resolve to components.
    pub fn of(name: &JSXElementName<'_>) -> Self {
        match name {
            JSXElementName::Identifier(id) => ElementTag::Native(id.name.to_string()),
            JSXElementName::NamespacedName(ns) => {
                ElementTag::Native(format!("{}:{}", ns.namespace.name, ns.name.name))
            }
            JSXElementName::IdentifierReference(_)
            | JSXElementName::MemberExpression(_)
            | JSXElementName::ThisExpression(_) => ElementTag::Component,
        }
    }

    pub fn is_component(&self) -> bool {
        matches!(self, ElementTag::Component)
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementTag::Component => f.write_str("component"),
            ElementTag::Native(name) => write!(f, "<{}>", name),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// OUTPUT
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub struct CompiledModel<'a> {
    pub directive: ParsedDirective,
    /// Entries to splice into the element's props object.
    pub entries: ArenaVec<'a, ObjectPropertyKind<'a>>,
    /// Tuple to append to the element's runtime directive list.
    pub directive_args: Option<ArrayExpression<'a>>,
    pub primitive: Option<ModelPrimitive>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// BUILDER
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy)]
pub struct ModelBuilder<'a> {
    pub ast: AstBuilder<'a>,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(allocator: &'a Allocator) -> Self {
        Self {
            ast: AstBuilder::new(allocator),
        }
    }

    /// Compiles one model attribute. `siblings` is the element's full
    /// attribute list and is only read.
    pub fn build(
        &self,
        attr: &JSXAttribute<'a>,
        siblings: &[JSXAttributeItem<'a>],
        tag: &ElementTag,
        helpers: &mut impl HelperRegistrar<'a>,
    ) -> Result<CompiledModel<'a>, ModelError> {
        let invalid_value = || ModelErrorKind::InvalidModelValue.at(attr.span);
        let invalid_name = || ModelErrorKind::InvalidArgumentSyntax.at(attr.span);

        let bound = bound_expression(attr).ok_or_else(invalid_value)?;
        let target = self.assignment_target(bound).ok_or_else(invalid_value)?;
        let raw_name = attribute_name(attr).ok_or_else(invalid_name)?;
        let directive = parse_directive_name(raw_name).map_err(|kind| kind.at(attr.span))?;
        let handler = self.handler_entry(&directive, target);

        let native_tag = match tag {
            ElementTag::Component => {
                let modifiers = (!directive.modifiers.is_empty()).then(|| {
                    self.entry(
                        &directive.modifiers_key(),
                        self.modifiers_object(&directive.modifiers),
                    )
                });
                let entries = self.ast.vec_from_iter(
                    [self.prop_entry(&directive, bound), handler]
                        .into_iter()
                        .chain(modifiers),
                );
                debug!("Compiled {} on {} to component props", raw_name, tag);
                return Ok(CompiledModel {
                    directive,
                    entries,
                    directive_args: None,
                    primitive: None,
                });
            }
            ElementTag::Native(name) => {
                if !directive.is_default_prop() {
                    return Err(ModelErrorKind::ArgumentOnNativeElement.at(attr.span));
                }
                NativeTag::from_name(name)
                    .ok_or_else(|| ModelErrorKind::InvalidElementTarget.at(attr.span))?
            }
        };

        let model = resolve_native_model(native_tag, siblings)?;
        debug!("Compiled {} on {} to {:?}", raw_name, tag, model);
        Ok(self.native_output(directive, bound, handler, model, helpers))
    }

    fn native_output(
        &self,
        directive: ParsedDirective,
        bound: &Expression<'a>,
        handler: ObjectPropertyKind<'a>,
        model: NativeModel,
        helpers: &mut impl HelperRegistrar<'a>,
    ) -> CompiledModel<'a> {
        let Some(primitive) = model.primitive() else {
            // No primitive applies: fall back to a plain prop/handler pair.
            let entries = self
                .ast
                .vec_from_iter([self.prop_entry(&directive, bound), handler]);
            return CompiledModel {
                directive,
                entries,
                directive_args: None,
                primitive: None,
            };
        };

        // The primitive reads the value from its binding, so the prop is omitted.
        let mut args = self.ast.vec();
        args.push(ArrayExpressionElement::from(helpers.register(primitive)));
        args.push(ArrayExpressionElement::from(
            bound.clone_in(self.ast.allocator),
        ));
        if !directive.modifiers.is_empty() {
            args.push(ArrayExpressionElement::from(
                self.ast.expression_identifier(SPAN, "undefined"),
            ));
            args.push(ArrayExpressionElement::from(
                self.modifiers_object(&directive.modifiers),
            ));
        }

        CompiledModel {
            directive,
            entries: self.ast.vec_from_iter([handler]),
            directive_args: Some(self.ast.array_expression(SPAN, args)),
            primitive: Some(primitive),
        }
    }

    fn prop_entry(&self, directive: &ParsedDirective, bound: &Expression<'a>) -> ObjectPropertyKind<'a> {
        self.entry(&directive.prop_name, bound.clone_in(self.ast.allocator))
    }

    /// `"onUpdate:<prop>": ($event) => <bound> = $event`
    fn handler_entry(
        &self,
        directive: &ParsedDirective,
        target: AssignmentTarget<'a>,
    ) -> ObjectPropertyKind<'a> {
        self.entry(&directive.event_name(), self.setter(target))
    }

    fn setter(&self, target: AssignmentTarget<'a>) -> Expression<'a> {
        let ast = self.ast;
        let assignment = ast.expression_assignment(
            SPAN,
            AssignmentOperator::Assign,
            target,
            ast.expression_identifier(SPAN, EVENT_PARAM),
        );

        let param = ast.plain_formal_parameter(
            SPAN,
            ast.binding_pattern_binding_identifier(SPAN, EVENT_PARAM),
        );
        let params = ast.formal_parameters(
            SPAN,
            FormalParameterKind::ArrowFormalParameters,
            ast.vec1(param),
            NONE,
        );
        let body = ast.function_body(
            SPAN,
            ast.vec(),
            ast.vec1(ast.statement_expression(SPAN, assignment)),
        );
        ast.expression_arrow_function(SPAN, true, false, NONE, params, NONE, body)
    }

    /// Identifiers and member expressions, optionally wrapped in parentheses
    /// or a TypeScript `as`, `satisfies`, `!` or `<T>` assertion.
    fn assignment_target(&self, expr: &Expression<'a>) -> Option<AssignmentTarget<'a>> {
        self.simple_target(expr).map(AssignmentTarget::from)
    }

    fn simple_target(&self, expr: &Expression<'a>) -> Option<SimpleAssignmentTarget<'a>> {
        let allocator = self.ast.allocator;
        match expr {
            Expression::Identifier(id) => Some(SimpleAssignmentTarget::AssignmentTargetIdentifier(
                id.clone_in(allocator),
            )),
            Expression::ParenthesizedExpression(paren) => self.simple_target(&paren.expression),
            Expression::TSAsExpression(ts) => {
                self.simple_target(&ts.expression)?;
                Some(SimpleAssignmentTarget::TSAsExpression(ts.clone_in(allocator)))
            }
            Expression::TSSatisfiesExpression(ts) => {
                self.simple_target(&ts.expression)?;
                Some(SimpleAssignmentTarget::TSSatisfiesExpression(ts.clone_in(allocator)))
            }
            Expression::TSNonNullExpression(ts) => {
                self.simple_target(&ts.expression)?;
                Some(SimpleAssignmentTarget::TSNonNullExpression(ts.clone_in(allocator)))
            }
            Expression::TSTypeAssertion(ts) => {
                self.simple_target(&ts.expression)?;
                Some(SimpleAssignmentTarget::TSTypeAssertion(ts.clone_in(allocator)))
            }
            _ => expr
                .as_member_expression()
                .map(|member| SimpleAssignmentTarget::from(member.clone_in(allocator))),
        }
    }

    /// `{ trim: true, lazy: true }`, one key per distinct modifier.
    fn modifiers_object(&self, modifiers: &[String]) -> Expression<'a> {
        let unique: IndexSet<&str> = modifiers.iter().map(String::as_str).collect();
        let properties = self.ast.vec_from_iter(
            unique
                .into_iter()
                .map(|m| self.entry(m, self.ast.expression_boolean_literal(SPAN, true))),
        );
        self.ast.expression_object(SPAN, properties)
    }

    fn entry(&self, key: &str, value: Expression<'a>) -> ObjectPropertyKind<'a> {
        let key = self.ast.allocator.alloc_str(key);
        self.ast.object_property_kind_object_property(
            SPAN,
            PropertyKind::Init,
            PropertyKey::StringLiteral(self.ast.alloc(self.ast.string_literal(SPAN, key, None))),
            value,
            false,
            false,
            false,
        )
    }
}

fn bound_expression<'s, 'a>(attr: &'s JSXAttribute<'a>) -> Option<&'s Expression<'a>> {
    match &attr.value {
        Some(JSXAttributeValue::ExpressionContainer(container)) => {
            container.expression.as_expression()
        }
        _ => None,
    }
}
