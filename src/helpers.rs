use indexmap::IndexSet;
use log::debug;
use oxc_ast::ast::Expression;
use oxc_ast::AstBuilder;
use oxc_span::SPAN;

use crate::native::ModelPrimitive;
use crate::options::ModelOptions;

/// Hands out references to runtime model primitives for generated code.
///
/// Registering the same primitive twice must yield an equivalent reference.
pub trait HelperRegistrar<'a> {
    fn register(&mut self, primitive: ModelPrimitive) -> Expression<'a>;
}

/// Records the primitives a module uses, in first-use order, and references
/// each through a prefixed local alias (`_vModelText`).
pub struct HelperRegistry<'a> {
    ast: AstBuilder<'a>,
    prefix: String,
    used: IndexSet<ModelPrimitive>,
}

impl<'a> HelperRegistry<'a> {
    pub fn new(ast: AstBuilder<'a>, options: &ModelOptions) -> Self {
        Self {
            ast,
            prefix: options.helper_prefix.clone(),
            used: IndexSet::new(),
        }
    }

    pub fn local_name(&self, primitive: ModelPrimitive) -> String {
        format!("{}{}", self.prefix, primitive.helper_name())
    }

    pub fn used(&self) -> impl Iterator<Item = ModelPrimitive> + '_ {
        self.used.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// `import { vModelText as _vModelText } from "vue";`
    pub fn import_statement(&self, runtime_module: &str) -> Option<String> {
        if self.used.is_empty() {
            return None;
        }
        let specifiers: Vec<String> = self
            .used()
            .map(|p| format!("{} as {}", p.helper_name(), self.local_name(p)))
            .collect();
        Some(format!(
            "import {{ {} }} from \"{}\";",
            specifiers.join(", "),
            runtime_module
        ))
    }
}

impl<'a> HelperRegistrar<'a> for HelperRegistry<'a> {
    fn register(&mut self, primitive: ModelPrimitive) -> Expression<'a> {
        if self.used.insert(primitive) {
            debug!("Registered runtime helper {}", primitive.helper_name());
        }
        let name = self.ast.allocator.alloc_str(&self.local_name(primitive));
        self.ast.expression_identifier(SPAN, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_is_idempotent() {
        let allocator = Allocator::default();
        let mut registry = HelperRegistry::new(AstBuilder::new(&allocator), &ModelOptions::default());

        let first = registry.register(ModelPrimitive::Radio);
        let second = registry.register(ModelPrimitive::Radio);
        registry.register(ModelPrimitive::Text);

        for reference in [&first, &second] {
            match reference {
                Expression::Identifier(id) => assert_eq!(id.name.as_str(), "_vModelRadio"),
                other => panic!("expected an identifier, got {:?}", other),
            }
        }
        assert_eq!(
            registry.used().collect::<Vec<_>>(),
            vec![ModelPrimitive::Radio, ModelPrimitive::Text]
        );
    }

    #[test]
    fn test_import_statement() {
        let allocator = Allocator::default();
        let options = ModelOptions {
            helper_prefix: "$".to_string(),
            ..ModelOptions::default()
        };
        let mut registry = HelperRegistry::new(AstBuilder::new(&allocator), &options);
        assert_eq!(registry.import_statement("vue"), None);

        registry.register(ModelPrimitive::Select);
        registry.register(ModelPrimitive::Checkbox);
        assert_eq!(
            registry.import_statement("vue").as_deref(),
            Some("import { vModelSelect as $vModelSelect, vModelCheckbox as $vModelCheckbox } from \"vue\";")
        );
    }
}
