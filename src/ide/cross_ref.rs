//! Cross-references between routine declarations and implementations.
//!
//! The entry point is [`find_cross_reference_targets`]: given any node it
//! returns the counterpart routine nodes on the other side of the unit.
//! Dispatch is a four-way match on [`RoutineRole`]:
//!
//! - `ExportedRoutineDecl` - scan the implementation section for bodies
//!   with the same name
//! - `ClassMethodDecl` - find the owning type, scan the implementation
//!   section for `Owner.Method` bodies
//! - `RoutineImplementation` - scan the interface section for exported
//!   routines with the same name
//! - `MethodImplementation` - resolve the qualified `Type.Method` name
//!   through the symbol table back to the declaring member
//!
//! Every failure mode degrades to an empty result; callers never see an
//! error. Misses are still distinguished internally and logged at debug
//! level so a session trace can tell structural absence from a plain
//! lookup miss.

use tracing::debug;

use crate::base::ident;
use crate::hir::{MemberKind, SymbolTable};
use crate::syntax::scan::matching_declarations;
use crate::syntax::sections::{implementation_section_of, interface_section_of};
use crate::syntax::{NodeId, RoutineNode, RoutineRole, SyntaxKind, SyntaxTree};

/// Why a resolution produced no targets. Logged, never returned.
#[derive(Copy, Clone, Debug)]
enum Miss {
    /// A required structural element does not exist, e.g. the module has
    /// no implementation section or the method has no enclosing type.
    StructuralAbsence,
    /// The structure is in place but nothing matched the name.
    LookupMiss,
    /// The starting node lacks an expected name or the name does not have
    /// the expected shape.
    MalformedInput,
}

/// An ordered, duplicate-free set of cross-reference targets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchResult {
    targets: Vec<NodeId>,
}

impl MatchResult {
    /// The empty result.
    pub fn empty() -> MatchResult {
        MatchResult::default()
    }

    /// Build a result from raw targets, sorting and deduplicating.
    pub fn from_targets(mut targets: Vec<NodeId>) -> MatchResult {
        targets.sort_unstable();
        targets.dedup();
        MatchResult { targets }
    }

    /// Number of targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no target was found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Whether `node` is among the targets.
    pub fn contains(&self, node: NodeId) -> bool {
        self.targets.binary_search(&node).is_ok()
    }

    /// Iterate the targets in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.targets.iter().copied()
    }

    /// The targets as a slice.
    pub fn as_slice(&self) -> &[NodeId] {
        &self.targets
    }

    /// Consume the result, yielding the target vector.
    pub fn into_vec(self) -> Vec<NodeId> {
        self.targets
    }
}

impl IntoIterator for MatchResult {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchResult {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter().copied()
    }
}

/// Repeated cross-reference queries over one tree snapshot.
///
/// Carries only shared references, so it is `Copy` and safe to recreate
/// per query or per thread. One-off callers can use
/// [`find_cross_reference_targets`] instead.
#[derive(Copy, Clone)]
pub struct CrossRef<'a> {
    tree: &'a SyntaxTree,
    symbols: &'a dyn SymbolTable,
}

impl<'a> CrossRef<'a> {
    /// Create a matcher over `tree`, resolving members through `symbols`.
    pub fn new(tree: &'a SyntaxTree, symbols: &'a dyn SymbolTable) -> CrossRef<'a> {
        CrossRef { tree, symbols }
    }

    /// Targets for any node. Nodes without a routine role yield the empty
    /// result.
    pub fn targets(&self, node: NodeId) -> MatchResult {
        let Some(routine) = RoutineNode::cast(self.tree, node) else {
            return MatchResult::empty();
        };
        let targets = match routine.role() {
            RoutineRole::ExportedRoutineDecl => self.exported_routine_targets(routine),
            RoutineRole::ClassMethodDecl => self.class_method_targets(routine),
            RoutineRole::RoutineImplementation => self.routine_impl_targets(routine),
            RoutineRole::MethodImplementation => self.method_impl_targets(routine),
        };
        MatchResult::from_targets(targets)
    }

    /// Declaration side, free routine: every implementation-section body
    /// with the same name.
    fn exported_routine_targets(&self, routine: RoutineNode<'a>) -> Vec<NodeId> {
        let Some(name) = routine.name() else {
            return self.miss(routine, Miss::MalformedInput);
        };
        self.implementation_bodies_named(routine, name)
    }

    /// Declaration side, class method: the owning type's name qualifies
    /// the lookup, so `Bar` declared in `TFoo` matches `TFoo.Bar` bodies.
    fn class_method_targets(&self, routine: RoutineNode<'a>) -> Vec<NodeId> {
        let Some(name) = routine.name() else {
            return self.miss(routine, Miss::MalformedInput);
        };
        let Some(owner) = self.symbols.owner_of(routine.id()) else {
            return self.miss(routine, Miss::StructuralAbsence);
        };
        let Some(owner_name) = self.tree.name(owner) else {
            return self.miss(routine, Miss::MalformedInput);
        };
        self.implementation_bodies_named(routine, &format!("{owner_name}.{name}"))
    }

    /// Implementation side, free routine: every interface-section exported
    /// routine with the same name.
    fn routine_impl_targets(&self, routine: RoutineNode<'a>) -> Vec<NodeId> {
        let Some(name) = routine.name() else {
            return self.miss(routine, Miss::MalformedInput);
        };
        let Some(module) = self.symbols.module_of(routine.id()) else {
            return self.miss(routine, Miss::StructuralAbsence);
        };
        let Some(section) = interface_section_of(self.tree, module) else {
            return self.miss(routine, Miss::StructuralAbsence);
        };
        let targets =
            matching_declarations(self.tree, Some(section), &[SyntaxKind::ExportedRoutine], name);
        if targets.is_empty() {
            return self.miss(routine, Miss::LookupMiss);
        }
        targets
    }

    /// Implementation side, qualified method: resolve `Type.Method`
    /// through the symbol table to the declaring member. Yields at most
    /// one target.
    fn method_impl_targets(&self, routine: RoutineNode<'a>) -> Vec<NodeId> {
        let (Some(namespace), Some(part)) = (routine.namespace(), routine.name_part()) else {
            return self.miss(routine, Miss::MalformedInput);
        };
        if !ident::is_identifier(part) {
            return self.miss(routine, Miss::MalformedInput);
        }
        let Some(module) = self.symbols.module_of(routine.id()) else {
            return self.miss(routine, Miss::StructuralAbsence);
        };
        let Some(owner) = self.symbols.resolve_type_field(module, namespace) else {
            return self.miss(routine, Miss::LookupMiss);
        };
        if owner.kind != MemberKind::Type {
            return self.miss(routine, Miss::LookupMiss);
        }
        let Some(member) = self.symbols.lookup_member(owner.node, part) else {
            return self.miss(routine, Miss::LookupMiss);
        };
        if member.kind != MemberKind::Routine {
            return self.miss(routine, Miss::LookupMiss);
        }
        vec![member.node]
    }

    /// The shared declaration-to-body scan: every implementation-section
    /// routine body whose full name matches `name`.
    fn implementation_bodies_named(&self, routine: RoutineNode<'a>, name: &str) -> Vec<NodeId> {
        let Some(module) = self.symbols.module_of(routine.id()) else {
            return self.miss(routine, Miss::StructuralAbsence);
        };
        let Some(section) = implementation_section_of(self.tree, module) else {
            return self.miss(routine, Miss::StructuralAbsence);
        };
        let targets = matching_declarations(
            self.tree,
            Some(section),
            &[SyntaxKind::RoutineImpl, SyntaxKind::MethodImpl],
            name,
        );
        if targets.is_empty() {
            return self.miss(routine, Miss::LookupMiss);
        }
        targets
    }

    fn miss(&self, routine: RoutineNode<'a>, reason: Miss) -> Vec<NodeId> {
        debug!(
            node = %routine.id(),
            role = ?routine.role(),
            name = routine.name().unwrap_or(""),
            reason = ?reason,
            "no cross-reference targets"
        );
        Vec::new()
    }
}

/// Find the cross-reference targets of `node`.
///
/// Deterministic and total: any node is accepted, and every failure mode
/// yields an empty result rather than an error. The call is read-only and
/// safe to issue from many threads against the same snapshot.
pub fn find_cross_reference_targets(
    tree: &SyntaxTree,
    symbols: &dyn SymbolTable,
    node: NodeId,
) -> MatchResult {
    CrossRef::new(tree, symbols).targets(node)
}
