//! The [`toon!`](crate::toon) macro for building [`Value`](crate::Value)
//! literals.

/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use toon_codec::toon;
///
/// let value = toon!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["rust", "serde"]
/// });
/// assert!(value.is_object());
/// ```
#[macro_export]
macro_rules! toon {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::toon!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ToonMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ToonMap::new();
        $(
            object.insert($key.to_string(), $crate::toon!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for expressions: numbers, strings, and anything serializable.
    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}
