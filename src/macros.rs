/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Braces and brackets nest recursively and `null` maps to
/// [`Value::Null`](crate::Value::Null). Every other token — booleans,
/// numbers, strings, arbitrary expressions — is lowered through
/// [`to_value`](crate::to_value).
///
/// # Examples
///
/// ```rust
/// use serde_con::con;
///
/// let data = con!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["rust", "serde"]
/// });
/// assert!(data.is_object());
/// ```
#[macro_export]
macro_rules! con {
    (null) => {
        $crate::Value::Null
    };

    ([ $($element:tt),* $(,)? ]) => {
        $crate::Value::Array(::std::vec![ $($crate::con!($element)),* ])
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {
        $crate::Value::Object(
            ::std::vec![ $( (($key).to_string(), $crate::con!($value)) ),* ]
                .into_iter()
                .collect(),
        )
    };

    // anything else is an ordinary expression; the value serializer decides
    // its shape, and a value it cannot represent degrades to null
    ($expr:expr) => {
        $crate::to_value(&$expr).unwrap_or_default()
    };
}
