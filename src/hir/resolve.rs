//! Member tables built from a syntax tree.
//!
//! [`ModuleSymbols`] walks a tree once and builds, per module and per type
//! declaration, a table of named members. Construction follows an
//! index-then-query pattern:
//!
//! 1. **Indexing** - one pass over the tree collects every named
//!    declaration into per-module and per-type tables
//! 2. **Query-time lookup** - lookups fold the query name and hit the
//!    tables directly, so each query is a pair of hash probes
//!
//! Names are keyed by their case-folded form through the [`Interner`];
//! the descriptor keeps the spelling as first written. Tables preserve
//! declaration order, which makes the first-wins rule for duplicate
//! names observable and stable.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use smol_str::SmolStr;
use tracing::trace;

use crate::base::{Interner, Name};
use crate::syntax::scan::scan_section;
use crate::syntax::sections::{implementation_section_of, interface_section_of};
use crate::syntax::{NodeId, SyntaxKind, SyntaxTree};

use super::symbols::{MemberDescriptor, MemberKind, SymbolTable};

/// Members of one scope, in declaration order, keyed by folded name.
type MemberTable = IndexMap<Name, MemberDescriptor, FxBuildHasher>;

// ============================================================================
// MODULE SYMBOLS (Indexed once per tree snapshot)
// ============================================================================

/// Member tables for every module and type declaration in a tree.
///
/// Borrowing the tree keeps the tables valid exactly as long as the
/// snapshot they describe. The default [`SymbolTable`] implementation
/// answers all capability queries from these tables plus tree navigation.
pub struct ModuleSymbols<'t> {
    tree: &'t SyntaxTree,
    names: Interner,
    modules: FxHashMap<NodeId, MemberTable>,
    types: FxHashMap<NodeId, MemberTable>,
}

impl<'t> ModuleSymbols<'t> {
    /// Index every module reachable from `root`.
    pub fn new(tree: &'t SyntaxTree, root: NodeId) -> ModuleSymbols<'t> {
        let mut symbols = ModuleSymbols {
            tree,
            names: Interner::new(),
            modules: FxHashMap::default(),
            types: FxHashMap::default(),
        };
        symbols.index_subtree(root);
        trace!(
            modules = symbols.modules.len(),
            types = symbols.types.len(),
            "built member tables"
        );
        symbols
    }

    fn index_subtree(&mut self, node: NodeId) {
        let tree = self.tree;
        if tree.kind(node) == SyntaxKind::Module {
            self.index_module(node);
        }
        for &child in tree.children(node) {
            self.index_subtree(child);
        }
    }

    fn index_module(&mut self, module: NodeId) {
        let tree = self.tree;
        // Interface first so its declarations win ties against the
        // implementation section.
        let interface = interface_section_of(tree, module);
        for decl in scan_section(tree, interface, |_| true) {
            self.collect_declaration(module, decl);
        }
        let implementation = implementation_section_of(tree, module);
        for decl in scan_section(tree, implementation, |_| true) {
            self.collect_declaration(module, decl);
        }
    }

    fn collect_declaration(&mut self, module: NodeId, decl: NodeId) {
        let tree = self.tree;
        let Some(kind) = MemberKind::of(tree.kind(decl)) else {
            return;
        };
        let Some(name) = tree.name(decl) else {
            return;
        };
        let key = self.names.intern(name);
        self.modules
            .entry(module)
            .or_default()
            .entry(key)
            .or_insert_with(|| MemberDescriptor {
                name: SmolStr::new(name),
                kind,
                node: decl,
            });
        if tree.kind(decl) == SyntaxKind::TypeDecl {
            self.index_type(decl);
        }
    }

    fn index_type(&mut self, type_node: NodeId) {
        let tree = self.tree;
        for &member in tree.children(type_node) {
            let Some(kind) = MemberKind::of(tree.kind(member)) else {
                continue;
            };
            let Some(name) = tree.name(member) else {
                continue;
            };
            let key = self.names.intern(name);
            self.types
                .entry(type_node)
                .or_default()
                .entry(key)
                .or_insert_with(|| MemberDescriptor {
                    name: SmolStr::new(name),
                    kind,
                    node: member,
                });
            if tree.kind(member) == SyntaxKind::TypeDecl {
                self.index_type(member);
            }
        }
    }

    // ========================================================================
    // QUERIES (Case-insensitive, read-only)
    // ========================================================================

    /// The tree these tables were built from.
    pub fn tree(&self) -> &'t SyntaxTree {
        self.tree
    }

    /// The module-level member of `module` named `name`.
    pub fn module_member(&self, module: NodeId, name: &str) -> Option<&MemberDescriptor> {
        let key = self.names.probe(name)?;
        self.modules.get(&module)?.get(&key)
    }

    /// The member of the type declared at `type_node` named `name`.
    pub fn type_member(&self, type_node: NodeId, name: &str) -> Option<&MemberDescriptor> {
        let key = self.names.probe(name)?;
        self.types.get(&type_node)?.get(&key)
    }

    /// All module-level members of `module`, in declaration order.
    pub fn members_of(&self, module: NodeId) -> impl Iterator<Item = &MemberDescriptor> + '_ {
        self.modules
            .get(&module)
            .into_iter()
            .flat_map(|table| table.values())
    }
}

impl SymbolTable for ModuleSymbols<'_> {
    fn lookup_member(&self, type_node: NodeId, name: &str) -> Option<MemberDescriptor> {
        self.type_member(type_node, name).cloned()
    }

    fn module_of(&self, node: NodeId) -> Option<NodeId> {
        self.tree.nearest_module(node)
    }

    fn resolve_type_field(&self, module: NodeId, namespace: &str) -> Option<MemberDescriptor> {
        self.module_member(module, namespace).cloned()
    }

    fn owner_of(&self, routine: NodeId) -> Option<NodeId> {
        self.tree
            .ancestors(routine)
            .skip(1)
            .find(|&n| self.tree.kind(n) == SyntaxKind::TypeDecl)
    }
}

impl fmt::Debug for ModuleSymbols<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleSymbols")
            .field("modules", &self.modules.len())
            .field("types", &self.types.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TreeBuilder;

    struct Fixture {
        tree: SyntaxTree,
        module: NodeId,
        do_work_decl: NodeId,
        tfoo: NodeId,
        bar_decl: NodeId,
        do_work_impl: NodeId,
    }

    fn make_unit() -> Fixture {
        let mut b = TreeBuilder::new();
        let module = b.start_node(SyntaxKind::Module, Some("Sample"));

        b.start_node(SyntaxKind::InterfaceSection, None);
        b.leaf(SyntaxKind::UsesClause, None);
        let do_work_decl = b.leaf(SyntaxKind::ExportedRoutine, Some("DoWork"));
        b.leaf(SyntaxKind::ExportedRoutine, Some("Render"));
        b.start_node(SyntaxKind::DeclGroup, None);
        let tfoo = b.start_node(SyntaxKind::TypeDecl, Some("TFoo"));
        b.leaf(SyntaxKind::VarDecl, Some("FCount"));
        let bar_decl = b.leaf(SyntaxKind::ClassMethod, Some("Bar"));
        b.leaf(SyntaxKind::PropertyDecl, Some("Count"));
        b.finish_node();
        b.finish_node();
        b.finish_node();

        b.start_node(SyntaxKind::ImplementationSection, None);
        b.start_node(SyntaxKind::DeclGroup, None);
        let do_work_impl = b.start_node(SyntaxKind::RoutineImpl, Some("DoWork"));
        b.leaf(SyntaxKind::Block, None);
        b.finish_node();
        b.start_node(SyntaxKind::MethodImpl, Some("TFoo.Bar"));
        b.leaf(SyntaxKind::Block, None);
        b.finish_node();
        b.leaf(SyntaxKind::RoutineImpl, Some("Helper"));
        b.finish_node();
        b.finish_node();

        b.finish_node();
        Fixture {
            tree: b.finish().unwrap(),
            module,
            do_work_decl,
            tfoo,
            bar_decl,
            do_work_impl,
        }
    }

    #[test]
    fn test_module_lookup_is_case_insensitive() {
        let fx = make_unit();
        let symbols = ModuleSymbols::new(&fx.tree, fx.tree.root());

        let member = symbols.module_member(fx.module, "DOWORK").unwrap();
        assert_eq!(member.node, fx.do_work_decl);
        assert_eq!(member.kind, MemberKind::Routine);
        assert_eq!(member.name, "DoWork");

        assert_eq!(
            symbols.module_member(fx.module, "tfoo").map(|m| m.node),
            Some(fx.tfoo)
        );
        assert!(symbols.module_member(fx.module, "Missing").is_none());
    }

    #[test]
    fn test_interface_declaration_wins_ties() {
        let fx = make_unit();
        let symbols = ModuleSymbols::new(&fx.tree, fx.tree.root());

        // "DoWork" is declared in the interface and implemented below; the
        // module table keeps the interface declaration.
        let member = symbols.module_member(fx.module, "doWork").unwrap();
        assert_eq!(member.node, fx.do_work_decl);
        assert_ne!(member.node, fx.do_work_impl);
    }

    #[test]
    fn test_type_members() {
        let fx = make_unit();
        let symbols = ModuleSymbols::new(&fx.tree, fx.tree.root());

        let bar = symbols.type_member(fx.tfoo, "BAR").unwrap();
        assert_eq!(bar.node, fx.bar_decl);
        assert_eq!(bar.kind, MemberKind::Routine);

        assert_eq!(
            symbols.type_member(fx.tfoo, "fcount").map(|m| m.kind),
            Some(MemberKind::Field)
        );
        assert_eq!(
            symbols.type_member(fx.tfoo, "count").map(|m| m.kind),
            Some(MemberKind::Property)
        );
        assert!(symbols.type_member(fx.tfoo, "Baz").is_none());
    }

    #[test]
    fn test_members_preserve_declaration_order() {
        let fx = make_unit();
        let symbols = ModuleSymbols::new(&fx.tree, fx.tree.root());

        let names: Vec<_> = symbols
            .members_of(fx.module)
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["DoWork", "Render", "TFoo", "TFoo.Bar", "Helper"]);
    }

    #[test]
    fn test_capability_queries() {
        let fx = make_unit();
        let symbols = ModuleSymbols::new(&fx.tree, fx.tree.root());
        let table: &dyn SymbolTable = &symbols;

        assert_eq!(table.module_of(fx.bar_decl), Some(fx.module));
        assert_eq!(table.owner_of(fx.bar_decl), Some(fx.tfoo));
        assert_eq!(table.owner_of(fx.do_work_decl), None);
        assert_eq!(table.owner_of(fx.tfoo), None);

        let tfoo = table.resolve_type_field(fx.module, "TFOO").unwrap();
        assert_eq!(tfoo.kind, MemberKind::Type);
        let bar = table.lookup_member(tfoo.node, "bar").unwrap();
        assert_eq!(bar.node, fx.bar_decl);
    }

    #[test]
    fn test_nested_module_members_stay_separate() {
        let mut b = TreeBuilder::new();
        let outer = b.start_node(SyntaxKind::Module, Some("Outer"));
        b.start_node(SyntaxKind::InterfaceSection, None);
        b.leaf(SyntaxKind::ExportedRoutine, Some("OuterProc"));
        let inner = b.start_node(SyntaxKind::Module, Some("Inner"));
        b.start_node(SyntaxKind::InterfaceSection, None);
        b.leaf(SyntaxKind::ExportedRoutine, Some("InnerProc"));
        b.finish_node();
        b.finish_node();
        b.finish_node();
        b.finish_node();
        let tree = b.finish().unwrap();
        let symbols = ModuleSymbols::new(&tree, tree.root());

        assert!(symbols.module_member(outer, "OuterProc").is_some());
        assert!(symbols.module_member(outer, "InnerProc").is_none());
        assert!(symbols.module_member(inner, "InnerProc").is_some());
        assert!(symbols.module_member(inner, "OuterProc").is_none());
    }

    #[test]
    fn test_nested_type_members() {
        let mut b = TreeBuilder::new();
        b.start_node(SyntaxKind::Module, Some("Sample"));
        b.start_node(SyntaxKind::InterfaceSection, None);
        let touter = b.start_node(SyntaxKind::TypeDecl, Some("TOuter"));
        let tinner = b.start_node(SyntaxKind::TypeDecl, Some("TInner"));
        let method = b.leaf(SyntaxKind::ClassMethod, Some("M"));
        b.finish_node();
        b.finish_node();
        b.finish_node();
        b.finish_node();
        let tree = b.finish().unwrap();
        let symbols = ModuleSymbols::new(&tree, tree.root());

        assert_eq!(
            symbols.type_member(touter, "tinner").map(|m| m.node),
            Some(tinner)
        );
        assert_eq!(symbols.type_member(tinner, "m").map(|m| m.node), Some(method));
        assert!(symbols.type_member(touter, "m").is_none());
    }
}
