#[cfg(feature = "napi")]
use napi_derive::napi;
use oxc_allocator::Allocator;
use oxc_ast::ast::{Expression, JSXOpeningElement};
use oxc_ast_visit::{walk, Visit};
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_span::{SourceType, SPAN};
use serde::{Deserialize, Serialize};

use crate::builder::{CompiledModel, ElementTag, ModelBuilder};
use crate::directive::model_attributes;
use crate::error::{line_column, CompilerError, ModelError, ERR_SOURCE_SYNTAX};
use crate::helpers::HelperRegistry;
use crate::options::ModelOptions;

// ═══════════════════════════════════════════════════════════════════════════════
// REPORT TYPES
// ═══════════════════════════════════════════════════════════════════════════════

/// One compiled model attribute, printed as JavaScript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSite {
    pub tag: String,
    pub prop_name: String,
    pub modifiers: Vec<String>,
    pub primitive: Option<String>,
    /// Props object holding only the generated entries.
    pub props: String,
    /// Runtime directive tuple, for native controls.
    pub directive: Option<String>,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ModelReport {
    pub sites: Vec<ModelSite>,
    pub helpers: Vec<String>,
    pub import: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// COLLECTOR
// ═══════════════════════════════════════════════════════════════════════════════

struct ModelCollector<'a, 's> {
    source: &'s str,
    builder: ModelBuilder<'a>,
    helpers: HelperRegistry<'a>,
    sites: Vec<ModelSite>,
    error: Option<ModelError>,
}

impl<'a, 's> ModelCollector<'a, 's> {
    fn new(allocator: &'a Allocator, source: &'s str, options: &ModelOptions) -> Self {
        let builder = ModelBuilder::new(allocator);
        Self {
            source,
            builder,
            helpers: HelperRegistry::new(builder.ast, options),
            sites: Vec::new(),
            error: None,
        }
    }

    fn compile_element(&mut self, element: &JSXOpeningElement<'a>) -> Result<(), ModelError> {
        let tag = ElementTag::of(&element.name);
        for attr in model_attributes(&element.attributes) {
            let compiled = self
                .builder
                .build(attr, &element.attributes, &tag, &mut self.helpers)?;
            let (line, column) = line_column(self.source, attr.span.start);
            let site = self.site(&tag, compiled, line, column);
            self.sites.push(site);
        }
        Ok(())
    }

    fn site(&self, tag: &ElementTag, compiled: CompiledModel<'a>, line: u32, column: u32) -> ModelSite {
        let ast = self.builder.ast;
        let props = print_expression(&ast.expression_object(SPAN, compiled.entries));
        let directive = compiled
            .directive_args
            .map(|args| print_expression(&Expression::ArrayExpression(ast.alloc(args))));

        ModelSite {
            tag: match tag {
                ElementTag::Component => "component".to_string(),
                ElementTag::Native(name) => name.clone(),
            },
            prop_name: compiled.directive.prop_name,
            modifiers: compiled.directive.modifiers,
            primitive: compiled.primitive.map(|p| p.helper_name().to_string()),
            props,
            directive,
            line,
            column,
        }
    }
}

impl<'a, 's> Visit<'a> for ModelCollector<'a, 's> {
    fn visit_jsx_opening_element(&mut self, element: &JSXOpeningElement<'a>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.compile_element(element) {
            self.error = Some(err);
            return;
        }
        walk::walk_jsx_opening_element(self, element);
    }
}

pub(crate) fn print_expression(expr: &Expression<'_>) -> String {
    let mut codegen = Codegen::new();
    codegen.print_expression(expr);
    codegen.into_source_text()
}

// ═══════════════════════════════════════════════════════════════════════════════
// ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Compiles every model attribute in a JSX/TSX source. The first invalid
/// binding aborts with its located error.
pub fn compile_models(
    source: &str,
    file_path: &str,
    options: &ModelOptions,
) -> Result<ModelReport, CompilerError> {
    let allocator = Allocator::default();
    let source_type = SourceType::default().with_jsx(true).with_typescript(true);

    let ret = Parser::new(&allocator, source, source_type).parse();
    if let Some(first) = ret.errors.first() {
        let offset = first
            .labels
            .as_ref()
            .and_then(|labels| labels.first())
            .map_or(0, |label| label.offset() as u32);
        let (line, column) = line_column(source, offset);
        return Err(CompilerError::new(
            ERR_SOURCE_SYNTAX,
            &first.message,
            file_path,
            line,
            column,
        ));
    }

    let mut collector = ModelCollector::new(&allocator, source, options);
    collector.visit_program(&ret.program);

    if let Some(err) = collector.error {
        return Err(err.to_compiler_error(source, file_path));
    }

    let helpers = collector
        .helpers
        .used()
        .map(|p| collector.helpers.local_name(p))
        .collect();
    let import = collector.helpers.import_statement(&options.runtime_module);
    Ok(ModelReport {
        sites: collector.sites,
        helpers,
        import,
    })
}

#[cfg(feature = "napi")]
#[napi]
pub fn compile_models_native(
    source: String,
    file_path: String,
    options_json: Option<String>,
) -> napi::Result<serde_json::Value> {
    let options = match options_json {
        Some(json) => ModelOptions::from_json(&json)
            .map_err(|e| napi::Error::from_reason(e.to_string()))?,
        None => ModelOptions::default(),
    };
    let report = compile_models(&source, &file_path, &options)
        .map_err(|e| napi::Error::from_reason(e.to_string()))?;
    serde_json::to_value(report).map_err(|e| napi::Error::from_reason(e.to_string()))
}
