use crate::domain::model::{ClassUnit, ReferenceUnit};
use std::collections::BTreeSet;

/// Access To Foreign Data: for each bodied method, the number of distinct foreign classes whose
/// non-constant properties it reads or writes, summed over all methods.
///
/// An owner touched by two methods counts twice.
pub fn access_to_foreign_data(class: &ClassUnit) -> u32 {
    class
        .bodied_methods()
        .map(|(_, references)| foreign_data_providers(references, &class.qualified_name).len())
        .fold(0u32, |total, count| {
            total.saturating_add(u32::try_from(count).unwrap_or(u32::MAX))
        })
}

/// Distinct owners of the foreign, non-constant properties referenced in one method body.
/// Properties without an owner (top-level) and properties of `container` are not foreign.
pub fn foreign_data_providers<'a>(
    references: &'a [ReferenceUnit],
    container: &str,
) -> BTreeSet<&'a str> {
    references
        .iter()
        .filter_map(ReferenceUnit::property)
        .filter(|target| !target.is_constant)
        .filter_map(|target| target.owner.as_deref())
        .filter(|owner| *owner != container)
        .collect()
}
