use std::fmt::Display;

/// Type annotation in the AST.
///
/// Types are structural: two types are equal iff their shapes match
/// recursively, which the derived `PartialEq` gives us directly. Array
/// element types are owned exclusively by their parent, so arbitrarily
/// nested array-of-array types are represented as nested boxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Int,
    Array(Box<Type>),
}

impl Type {
    /// Writes the canonical debug form of the type into `out`.
    ///
    /// Examples: `IntTy {}`, `ArrayTy {IntTy {}}`.
    pub fn dump(&self, out: &mut String) {
        match self {
            Type::Int => out.push_str("IntTy {}"),
            Type::Array(element) => {
                out.push_str("ArrayTy {");
                element.dump(out);
                out.push('}');
            }
        }
    }
}

impl Display for Type {
    /// Renders the type in source form: `int`, `[int]`, `[[int]]`, ...
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Array(element) => write!(f, "[{}]", element),
        }
    }
}
