use crate::operation::FieldSelection;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use std::fmt::Write;

const INDENT: &str = "  ";

/// A single-field operation document generated for one root field.
///
/// Immutable once generated. The text form (see
/// [`GeneratedDocument::to_graphql_string()`]) is deterministic: two documents
/// built from the same schema render byte-identically.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedDocument {
    pub(super) operation_kind: OperationKind,
    pub(super) root_field: FieldSelection,
}
impl GeneratedDocument {
    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    /// The selection of the root field this document exercises (its
    /// arguments and selection set).
    pub fn root_field(&self) -> &FieldSelection {
        &self.root_field
    }

    /// Name of the root field; also names the files this document is
    /// persisted to.
    pub fn root_field_name(&self) -> &str {
        self.root_field.name()
    }

    /// Render this document with two-space indentation per nesting level and
    /// a trailing newline.
    pub fn to_graphql_string(&self) -> String {
        let mut out = String::new();
        out.push_str(self.operation_kind.keyword());
        out.push_str(" {\n");
        write_field(&mut out, &self.root_field, 1);
        out.push_str("}\n");
        out
    }
}
impl std::fmt::Display for GeneratedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql_string())
    }
}

fn write_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

fn write_field(out: &mut String, field: &FieldSelection, level: usize) {
    write_indent(out, level);
    out.push_str(field.name());
    if !field.arguments().is_empty() {
        out.push('(');
        for (idx, (arg_name, value)) in field.arguments().iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            // Writing into a `String` cannot fail.
            let _ = write!(out, "{arg_name}: {value}");
        }
        out.push(')');
    }
    match field.selection_set() {
        Some(selection_set) => {
            out.push(' ');
            write_selection_set(out, selection_set, level);
        },
        None => out.push('\n'),
    }
}

fn write_selection_set(out: &mut String, selection_set: &SelectionSet, level: usize) {
    out.push_str("{\n");
    for selection in selection_set.selections() {
        match selection {
            Selection::Field(field) => write_field(out, field, level + 1),
            Selection::InlineFragment(fragment) => {
                write_indent(out, level + 1);
                out.push_str("... on ");
                out.push_str(fragment.type_condition());
                out.push(' ');
                write_selection_set(out, fragment.selection_set(), level + 1);
            },
        }
    }
    write_indent(out, level);
    out.push_str("}\n");
}
