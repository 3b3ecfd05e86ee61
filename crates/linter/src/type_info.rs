//! Symbol resolution for type-aware rules
//!
//! Rules that need to know what a name refers to go through [`TypeResolver`].
//! The oxc implementation maps a name to the AST node that declares it.

use oxc_ast::ast::{
    Class, Function, IdentifierReference, TSEnumDeclaration, TSInterfaceDeclaration, TSTypeAliasDeclaration,
    VariableDeclarator,
};
use oxc_ast::AstKind;
use oxc_semantic::{Semantic, SymbolId};

/// The declaration a name resolves to
#[derive(Debug, Clone, Copy)]
pub enum Declaration<'a> {
    Class(&'a Class<'a>),
    Function(&'a Function<'a>),
    Variable(&'a VariableDeclarator<'a>),
    Interface(&'a TSInterfaceDeclaration<'a>),
    TypeAlias(&'a TSTypeAliasDeclaration<'a>),
    Enum(&'a TSEnumDeclaration<'a>),
}

/// Resolve names to their declarations
pub trait TypeResolver<'a> {
    fn resolve(&self, name: &str) -> Option<Declaration<'a>>;

    /// Declaration a reference binds to, honouring the scope it appears in
    fn resolve_reference(&self, ident: &IdentifierReference<'a>) -> Option<Declaration<'a>> {
        self.resolve(&ident.name)
    }
}

/// [`TypeResolver`] backed by oxc_semantic's symbol table.
///
/// References resolve through the binding oxc_semantic recorded for them, so
/// a local shadowing a module-level name wins. Bare names look at module-level
/// bindings first, then at the first declaration with that name in the file.
pub struct SemanticTypeResolver<'a> {
    semantic: &'a Semantic<'a>,
}

impl<'a> SemanticTypeResolver<'a> {
    pub fn new(semantic: &'a Semantic<'a>) -> Self {
        Self { semantic }
    }

    fn find_symbol(&self, name: &str) -> Option<SymbolId> {
        let scoping = self.semantic.scoping();
        scoping
            .find_binding(scoping.root_scope_id(), name)
            .or_else(|| scoping.symbol_ids().find(|id| scoping.symbol_name(*id) == name))
    }

    fn declaration_of(&self, symbol_id: SymbolId) -> Option<Declaration<'a>> {
        let node_id = self.semantic.scoping().symbol_declaration(symbol_id);
        match self.semantic.nodes().get_node(node_id).kind() {
            AstKind::Class(class) => Some(Declaration::Class(class)),
            AstKind::Function(func) => Some(Declaration::Function(func)),
            AstKind::VariableDeclarator(decl) => Some(Declaration::Variable(decl)),
            AstKind::TSInterfaceDeclaration(decl) => Some(Declaration::Interface(decl)),
            AstKind::TSTypeAliasDeclaration(decl) => Some(Declaration::TypeAlias(decl)),
            AstKind::TSEnumDeclaration(decl) => Some(Declaration::Enum(decl)),
            _ => None,
        }
    }
}

impl<'a> TypeResolver<'a> for SemanticTypeResolver<'a> {
    fn resolve(&self, name: &str) -> Option<Declaration<'a>> {
        let symbol_id = self.find_symbol(name)?;
        self.declaration_of(symbol_id)
    }

    fn resolve_reference(&self, ident: &IdentifierReference<'a>) -> Option<Declaration<'a>> {
        let Some(reference_id) = ident.reference_id.get() else {
            return self.resolve(&ident.name);
        };
        let symbol_id = self.semantic.scoping().get_reference(reference_id).symbol_id()?;
        self.declaration_of(symbol_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_semantic::SemanticBuilder;
    use oxc_span::SourceType;

    #[test]
    fn test_resolves_declarations() {
        let allocator = Allocator::default();
        let source = r#"
            interface Props { a: string }
            enum Color { Red }
            type Alias = { b: number };
            class Store {}
            const store = new Store();
            function helper() {}
        "#;
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        let semantic_ret = SemanticBuilder::new().build(&ret.program);
        let resolver = SemanticTypeResolver::new(&semantic_ret.semantic);

        assert!(matches!(resolver.resolve("Props"), Some(Declaration::Interface(_))));
        assert!(matches!(resolver.resolve("Color"), Some(Declaration::Enum(_))));
        assert!(matches!(resolver.resolve("Alias"), Some(Declaration::TypeAlias(_))));
        assert!(matches!(resolver.resolve("Store"), Some(Declaration::Class(_))));
        assert!(matches!(resolver.resolve("store"), Some(Declaration::Variable(_))));
        assert!(matches!(resolver.resolve("helper"), Some(Declaration::Function(_))));
        assert!(resolver.resolve("missing").is_none());
    }

    /// Declaration of the last `x` referenced in the program
    fn resolve_last_reference<'a>(
        resolver: &SemanticTypeResolver<'a>,
        program: &oxc_ast::ast::Program<'a>,
    ) -> Option<Declaration<'a>> {
        use oxc_ast_visit::Visit;

        struct LastReference<'r, 'a> {
            resolver: &'r SemanticTypeResolver<'a>,
            found: Option<Declaration<'a>>,
        }
        impl<'a> Visit<'a> for LastReference<'_, 'a> {
            fn visit_identifier_reference(&mut self, ident: &IdentifierReference<'a>) {
                if ident.name.as_str() == "x" {
                    self.found = self.resolver.resolve_reference(ident);
                }
            }
        }

        let mut visitor = LastReference { resolver, found: None };
        visitor.visit_program(program);
        visitor.found
    }

    #[test]
    fn test_reference_sees_shadowing_local() {
        let allocator = Allocator::default();
        let source = r#"
            class x {}
            function render() {
                const x = 1;
                return x;
            }
        "#;
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        let semantic_ret = SemanticBuilder::new().build(&ret.program);
        let resolver = SemanticTypeResolver::new(&semantic_ret.semantic);

        assert!(matches!(resolver.resolve("x"), Some(Declaration::Class(_))));
        assert!(matches!(
            resolve_last_reference(&resolver, &ret.program),
            Some(Declaration::Variable(_))
        ));
    }
}
