use crate::domain::model::{ClassUnit, ReferenceUnit};
use std::collections::{BTreeMap, BTreeSet};

/// Method qualified name → qualified names of the local properties it references.
pub type AccessMap = BTreeMap<String, BTreeSet<String>>;

/// Projects every bodied method's references onto the properties declared on `class`.
///
/// A method that touches no local property still gets an (empty) entry. Overloads share a
/// qualified name; the last one declared replaces the entries of earlier ones.
pub fn map_local_accesses(class: &ClassUnit) -> AccessMap {
    let local = class.local_property_names();
    let mut accesses = AccessMap::new();

    for (method, references) in class.bodied_methods() {
        let accessed = references
            .iter()
            .filter_map(ReferenceUnit::property)
            .filter(|target| local.contains(target.qualified_name.as_str()))
            .map(|target| target.qualified_name.clone())
            .collect();
        accesses.insert(method.qualified_name.clone(), accessed);
    }

    accesses
}
