use std::fmt::Display;

/// Runtime value.
///
/// `Value` deliberately does not implement `Clone`: values are move-only,
/// and the one place that needs an independent copy (reading a variable
/// slot) must say so explicitly with [`Value::deep_clone`]. Array values
/// own their backing storage exclusively; no two live values ever share
/// it.
#[derive(Debug, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Array(Vec<Value>),
}

impl Value {
    /// Recursively copies the value into an independently owned one.
    pub fn deep_clone(&self) -> Value {
        match self {
            Value::Int(value) => Value::Int(*value),
            Value::Array(items) => {
                Value::Array(items.iter().map(Value::deep_clone).collect())
            }
        }
    }
}

impl Default for Value {
    /// The valid-but-empty state left behind when a value is moved out
    /// of a slot.
    fn default() -> Self {
        Value::Int(0)
    }
}

impl Display for Value {
    /// Renders integers in decimal and arrays as `[v1, v2, ...]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Array(items) => {
                write!(f, "[")?;
                let mut sep = "";
                for item in items {
                    write!(f, "{}{}", sep, item)?;
                    sep = ", ";
                }
                write!(f, "]")
            }
        }
    }
}
