use crate::operation::FieldSelection;
use crate::operation::InlineFragmentSelection;

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    InlineFragment(InlineFragmentSelection),
}
impl Selection {
    pub fn as_field(&self) -> Option<&FieldSelection> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }

    pub fn as_inline_fragment(&self) -> Option<&InlineFragmentSelection> {
        if let Self::InlineFragment(fragment) = self {
            Some(fragment)
        } else {
            None
        }
    }
}
