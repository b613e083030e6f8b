use crate::types::Field;
use indexmap::IndexMap;

/// Behavior shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType): both declare an ordered set
/// of selectable fields.
pub trait ObjectOrInterfaceTypeTrait {
    /// The fields declared on this type, in the order the schema declares them.
    fn fields(&self) -> &IndexMap<String, Field>;

    /// Names of the interfaces this type implements.
    fn interface_names(&self) -> Vec<&str>;

    fn name(&self) -> &str;
}
