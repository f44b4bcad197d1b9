//! Node kinds and routine roles.

/// The kind of a syntax node.
///
/// The set is closed and models exactly the structural shapes a parsed
/// Pascal unit exposes to the analysis layers: a module with its two
/// sections, the declaration forms inside them, and the body blocks the
/// scans must never enter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SyntaxKind {
    /// A module (unit). A file's root, but a file can also syntactically
    /// contain nested module fragments.
    Module,
    /// `interface` section: signatures without bodies.
    InterfaceSection,
    /// `implementation` section: routine and method bodies.
    ImplementationSection,
    /// A declaration group within a section (type/var/const blocks).
    DeclGroup,
    /// `uses` clause.
    UsesClause,
    /// A named type declaration (class, record, ...). Its children are the
    /// type's member declarations.
    TypeDecl,
    /// A routine declared in the interface section.
    ExportedRoutine,
    /// A method signature declared inside a type declaration.
    ClassMethod,
    /// A plain routine body in the implementation section.
    RoutineImpl,
    /// A qualified `Type.Method` body in the implementation section.
    MethodImpl,
    /// A variable or field declaration.
    VarDecl,
    /// A constant declaration.
    ConstDecl,
    /// A property declaration inside a type.
    PropertyDecl,
    /// A routine body block; may contain nested local declarations, which
    /// are invisible to section scans.
    Block,
    /// A named identifier reference.
    Ident,
    /// An error node produced for unparseable input.
    Error,
}

impl SyntaxKind {
    /// Whether this kind is one of the two module sections.
    pub fn is_section(self) -> bool {
        matches!(
            self,
            SyntaxKind::InterfaceSection | SyntaxKind::ImplementationSection
        )
    }

    /// Whether this kind is a routine-like declaration or body.
    pub fn is_routine(self) -> bool {
        RoutineRole::from_kind(self).is_some()
    }
}

/// Structural classification of a routine-like node.
///
/// The role is fixed by the grammar production that built the node and
/// never changes afterwards; the matcher dispatches on it exhaustively.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoutineRole {
    /// A routine declared in the interface section.
    ExportedRoutineDecl,
    /// A method declared as a member of a type.
    ClassMethodDecl,
    /// A plain routine body.
    RoutineImplementation,
    /// A qualified `Type.Method` body.
    MethodImplementation,
}

impl RoutineRole {
    /// The role a node of `kind` carries, if any.
    pub fn from_kind(kind: SyntaxKind) -> Option<RoutineRole> {
        match kind {
            SyntaxKind::ExportedRoutine => Some(RoutineRole::ExportedRoutineDecl),
            SyntaxKind::ClassMethod => Some(RoutineRole::ClassMethodDecl),
            SyntaxKind::RoutineImpl => Some(RoutineRole::RoutineImplementation),
            SyntaxKind::MethodImpl => Some(RoutineRole::MethodImplementation),
            _ => None,
        }
    }

    /// Whether this role sits on the declaration (interface) side.
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            RoutineRole::ExportedRoutineDecl | RoutineRole::ClassMethodDecl
        )
    }

    /// Whether this role sits on the implementation side.
    pub fn is_implementation(self) -> bool {
        !self.is_declaration()
    }
}
