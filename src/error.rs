#[cfg(feature = "napi")]
use napi_derive::napi;
use oxc_span::Span;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// ERROR CODES
// ═══════════════════════════════════════════════════════════════════════════════

pub const ERR_SOURCE_SYNTAX: &str = "VMODEL000";
pub const ERR_INVALID_MODEL_VALUE: &str = "VMODEL001";
pub const ERR_INVALID_ARGUMENT_SYNTAX: &str = "VMODEL002";
pub const ERR_MISSING_ARGUMENT_NAME: &str = "VMODEL003";
pub const ERR_ARGUMENT_ON_NATIVE_ELEMENT: &str = "VMODEL004";
pub const ERR_INVALID_ELEMENT_TARGET: &str = "VMODEL005";
pub const ERR_MODEL_ON_FILE_INPUT: &str = "VMODEL006";
pub const ERR_REDUNDANT_VALUE_ATTRIBUTE: &str = "VMODEL007";

fn get_hint(code: &str) -> &'static str {
    match code {
        ERR_SOURCE_SYNTAX => "Fix the syntax error before model bindings can be compiled.",
        ERR_INVALID_MODEL_VALUE => "Bind an assignable expression, e.g. v-model={state.name}.",
        ERR_INVALID_ARGUMENT_SYNTAX => {
            "Use v-model-<prop> for a named target or v-model_<modifier> for modifiers."
        }
        ERR_MISSING_ARGUMENT_NAME => "Name the target property after the hyphen: v-model-<prop>.",
        ERR_ARGUMENT_ON_NATIVE_ELEMENT => {
            "Native form controls only bind their value. Drop the argument."
        }
        ERR_INVALID_ELEMENT_TARGET => "Wrap the element in a component that accepts modelValue.",
        ERR_MODEL_ON_FILE_INPUT => "Listen for the change event on file inputs instead.",
        ERR_REDUNDANT_VALUE_ATTRIBUTE => "Remove the value attribute; v-model already sets it.",
        _ => "Unknown model binding error.",
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// MODEL ERRORS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ModelErrorKind {
    #[error("v-model value must be an assignable expression in braces")]
    InvalidModelValue,

    #[error("v-model argument must start with `-` (named target) or `_` (modifiers)")]
    InvalidArgumentSyntax,

    #[error("v-model is missing the target property name after `-`")]
    MissingArgumentName,

    #[error("v-model argument is not supported on plain elements")]
    ArgumentOnNativeElement,

    #[error("v-model can only be used on <input>, <textarea> and <select> elements")]
    InvalidElementTarget,

    #[error("v-model cannot be used on file inputs since they are read-only")]
    ModelOnFileInput,

    #[error("unnecessary value binding used alongside v-model")]
    RedundantValueAttribute,
}

impl ModelErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ModelErrorKind::InvalidModelValue => ERR_INVALID_MODEL_VALUE,
            ModelErrorKind::InvalidArgumentSyntax => ERR_INVALID_ARGUMENT_SYNTAX,
            ModelErrorKind::MissingArgumentName => ERR_MISSING_ARGUMENT_NAME,
            ModelErrorKind::ArgumentOnNativeElement => ERR_ARGUMENT_ON_NATIVE_ELEMENT,
            ModelErrorKind::InvalidElementTarget => ERR_INVALID_ELEMENT_TARGET,
            ModelErrorKind::ModelOnFileInput => ERR_MODEL_ON_FILE_INPUT,
            ModelErrorKind::RedundantValueAttribute => ERR_REDUNDANT_VALUE_ATTRIBUTE,
        }
    }

    pub fn at(self, span: Span) -> ModelError {
        ModelError { kind: self, span }
    }
}

/// A failed model binding, located at the attribute that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ModelError {
    pub kind: ModelErrorKind,
    pub span: Span,
}

impl ModelError {
    pub fn to_compiler_error(&self, source: &str, file: &str) -> CompilerError {
        let (line, column) = line_column(source, self.span.start);
        CompilerError::new(self.kind.code(), &self.kind.to_string(), file, line, column)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// COMPILER ERROR
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct CompilerError {
    pub code: String,
    pub error_type: String,
    pub message: String,
    pub hint: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl CompilerError {
    pub fn new(code: &str, message: &str, file: &str, line: u32, column: u32) -> Self {
        CompilerError {
            code: code.to_string(),
            error_type: "MODEL_BINDING_ERROR".to_string(),
            message: message.to_string(),
            hint: get_hint(code).to_string(),
            file: file.to_string(),
            line,
            column,
        }
    }
}

impl std::fmt::Display for CompilerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}:{}:{} {}",
            self.code, self.file, self.line, self.column, self.message
        )
    }
}

impl std::error::Error for CompilerError {}

/// 1-based line and column of a byte offset.
pub(crate) fn line_column(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let before = source.get(..offset).unwrap_or_default();
    let line = before.matches('\n').count() as u32 + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() as u32 + 1;
    (line, column)
}
