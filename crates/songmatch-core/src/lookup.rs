use serde_json::Value;

/// One step of a walk through untyped upstream JSON
///
/// Each accessor either moves to the child value or stays [`Lookup::Missing`],
/// so a chain like `.key("results").key("channels").first()` never panics
/// on an absent level, a wrong type, or an empty array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Value),
    Missing,
}

impl<'a> Lookup<'a> {
    pub const fn new(value: &'a Value) -> Self {
        Self::Found(value)
    }

    /// Step into an object member
    pub fn key(self, key: &str) -> Self {
        self.step(|value| value.as_object().and_then(|object| object.get(key)))
    }

    /// Step into an array element
    pub fn index(self, index: usize) -> Self {
        self.step(|value| value.as_array().and_then(|array| array.get(index)))
    }

    /// Step into the first array element
    pub fn first(self) -> Self {
        self.index(0)
    }

    pub const fn value(self) -> Option<&'a Value> {
        match self {
            Self::Found(value) => Some(value),
            Self::Missing => None,
        }
    }

    pub fn as_str(self) -> Option<&'a str> {
        self.value().and_then(Value::as_str)
    }

    fn step(self, f: impl FnOnce(&'a Value) -> Option<&'a Value>) -> Self {
        match self {
            Self::Found(value) => f(value).map_or(Self::Missing, Self::Found),
            Self::Missing => Self::Missing,
        }
    }
}
