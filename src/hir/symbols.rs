//! Member descriptors and the symbol table capability.
//!
//! [`SymbolTable`] is the seam between the cross-reference analyses and
//! whatever indexes a host keeps: the analyses only ask for members by
//! name, never how the answers were computed. The default implementation
//! is [`ModuleSymbols`](super::ModuleSymbols); tests substitute their own.

use smol_str::SmolStr;

use crate::syntax::{NodeId, SyntaxKind};

/// The category of a named member.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// A routine declaration or implementation, free or method.
    Routine,
    /// A type declaration.
    Type,
    /// A variable or field declaration.
    Field,
    /// A property declaration.
    Property,
    /// A constant declaration.
    Constant,
}

impl MemberKind {
    /// The member category of a declaration kind, if it declares a member.
    pub fn of(kind: SyntaxKind) -> Option<MemberKind> {
        match kind {
            SyntaxKind::ExportedRoutine
            | SyntaxKind::ClassMethod
            | SyntaxKind::RoutineImpl
            | SyntaxKind::MethodImpl => Some(MemberKind::Routine),
            SyntaxKind::TypeDecl => Some(MemberKind::Type),
            SyntaxKind::VarDecl => Some(MemberKind::Field),
            SyntaxKind::PropertyDecl => Some(MemberKind::Property),
            SyntaxKind::ConstDecl => Some(MemberKind::Constant),
            _ => None,
        }
    }

    /// Short lowercase label for log output.
    pub fn display(self) -> &'static str {
        match self {
            MemberKind::Routine => "routine",
            MemberKind::Type => "type",
            MemberKind::Field => "field",
            MemberKind::Property => "property",
            MemberKind::Constant => "constant",
        }
    }
}

/// A named member of a module or type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberDescriptor {
    /// The name as first written in source.
    pub name: SmolStr,
    /// The member category.
    pub kind: MemberKind,
    /// The declaring node.
    pub node: NodeId,
}

/// Name-based member lookup over a fixed snapshot.
///
/// All lookups are case-insensitive and deterministic: the same arguments
/// against the same snapshot always yield the same answer. Implementations
/// must be `Sync` so analyses can fan out across threads.
pub trait SymbolTable: Sync {
    /// The member of the type declared at `type_node` named `name`.
    fn lookup_member(&self, type_node: NodeId, name: &str) -> Option<MemberDescriptor>;

    /// The nearest module enclosing `node`, including `node` itself.
    fn module_of(&self, node: NodeId) -> Option<NodeId>;

    /// The module-level member of `module` named `namespace`.
    fn resolve_type_field(&self, module: NodeId, namespace: &str) -> Option<MemberDescriptor>;

    /// The nearest type declaration strictly enclosing `routine`.
    fn owner_of(&self, routine: NodeId) -> Option<NodeId>;
}
