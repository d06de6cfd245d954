//! Test fixture generators for integration tests.
#![allow(dead_code)]

use godclass::domain::model::{
    ClassModel, ClassUnit, MethodBody, MethodUnit, PropertyOrigin, PropertyTarget, PropertyUnit,
    ReferenceTarget, ReferenceUnit, SourceLocation, SourceRange,
};

pub fn property(owner: &str, name: &str) -> PropertyUnit {
    PropertyUnit {
        qualified_name: format!("{owner}.{name}"),
        owner: owner.to_string(),
        is_constant: false,
        origin: PropertyOrigin::Declared,
    }
}

pub fn constructor_property(owner: &str, name: &str) -> PropertyUnit {
    PropertyUnit {
        origin: PropertyOrigin::Constructor,
        ..property(owner, name)
    }
}

pub fn constant_property(owner: &str, name: &str) -> PropertyUnit {
    PropertyUnit {
        is_constant: true,
        ..property(owner, name)
    }
}

/// Reference to a non-constant property declared on `owner`.
pub fn read(owner: &str, name: &str) -> ReferenceUnit {
    property_reference(Some(owner), name, false)
}

pub fn read_constant(owner: &str, name: &str) -> ReferenceUnit {
    property_reference(Some(owner), name, true)
}

/// Reference to a top-level property (no owning class).
pub fn read_top_level(package: &str, name: &str) -> ReferenceUnit {
    ReferenceUnit {
        name: name.to_string(),
        target: ReferenceTarget::Property(PropertyTarget {
            qualified_name: format!("{package}.{name}"),
            owner: None,
            is_constant: false,
        }),
    }
}

pub fn unresolved(name: &str) -> ReferenceUnit {
    ReferenceUnit {
        name: name.to_string(),
        target: ReferenceTarget::Unresolved,
    }
}

fn property_reference(owner: Option<&str>, name: &str, is_constant: bool) -> ReferenceUnit {
    let owner = owner.map(String::from);
    ReferenceUnit {
        name: name.to_string(),
        target: ReferenceTarget::Property(PropertyTarget {
            qualified_name: match &owner {
                Some(o) => format!("{o}.{name}"),
                None => name.to_string(),
            },
            owner,
            is_constant,
        }),
    }
}

pub fn method(
    class: &str,
    name: &str,
    complexity: Option<u32>,
    references: Vec<ReferenceUnit>,
) -> MethodUnit {
    MethodUnit {
        qualified_name: format!("{class}.{name}"),
        complexity,
        body: MethodBody::Block { references },
    }
}

pub fn abstract_method(class: &str, name: &str) -> MethodUnit {
    MethodUnit {
        qualified_name: format!("{class}.{name}"),
        complexity: None,
        body: MethodBody::Absent,
    }
}

pub fn class(name: &str, properties: Vec<PropertyUnit>, methods: Vec<MethodUnit>) -> ClassUnit {
    ClassUnit {
        qualified_name: name.to_string(),
        location: Some(SourceLocation {
            file_path: format!("{}.kt", name.rsplit('.').next().unwrap_or(name)),
            range: SourceRange {
                start_line: 2,
                start_column: 6,
                end_line: 2,
                end_column: 6 + name.len() as u32,
            },
        }),
        methods,
        properties,
    }
}

/// Small stack with six short methods that only touch its own state.
/// WMC = 7, ATFD = 0, TCC = 9/15.
pub fn stack_class() -> ClassUnit {
    const C: &str = "app.Stack";
    class(
        C,
        vec![
            constructor_property(C, "size"),
            constructor_property(C, "test"),
            property(C, "array"),
            property(C, "top"),
            property(C, "bla"),
        ],
        vec![
            method(
                C,
                "isEmpty",
                Some(2),
                vec![read(C, "top"), read(C, "bla"), unresolved("println")],
            ),
            method(C, "size", Some(1), vec![read(C, "size"), unresolved("println")]),
            method(C, "vTop", Some(1), vec![read(C, "array"), read(C, "top")]),
            method(
                C,
                "push",
                Some(1),
                vec![read(C, "top"), read(C, "size"), read(C, "array")],
            ),
            method(C, "pop", Some(1), vec![read(C, "top"), read(C, "bla")]),
            method(C, "clear", Some(1), vec![read(C, "array")]),
        ],
    )
}

/// Eight methods of complexity 6 (WMC 48), each owning one field (only m0/m1 share one, so
/// TCC = 1/28), six of them reaching into a distinct foreign class (ATFD 6).
pub fn dispatcher_class() -> ClassUnit {
    const C: &str = "app.Dispatcher";
    let properties = (0..8).map(|i| property(C, &format!("p{i}"))).collect();
    let methods = (0..8)
        .map(|i| {
            let mut refs = vec![read(C, &format!("p{i}")), unresolved("log")];
            if i == 1 {
                refs.push(read(C, "p0"));
            }
            if i < 6 {
                refs.push(read(&format!("ext.Service{i}"), "state"));
            }
            if i == 0 {
                refs.push(read_constant("ext.Limits", "MAX"));
                refs.push(read_top_level("ext", "globalFlag"));
            }
            method(C, &format!("m{i}"), Some(6), refs)
        })
        .collect();
    class(C, properties, methods)
}

pub fn model_json(model: &ClassModel) -> String {
    serde_json::to_string_pretty(model).expect("serialize class model")
}
