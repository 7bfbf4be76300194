//! The [`toon!`] value-construction macro.

/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use toon_core::toon;
///
/// let data = toon!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["rust", "llm"],
///     "extra": null
/// });
/// assert!(data.is_object());
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
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::toon!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Value};

    #[test]
    fn primitives() {
        assert_eq!(toon!(null), Value::Null);
        assert_eq!(toon!(true), Value::Bool(true));
        assert_eq!(toon!(false), Value::Bool(false));
        assert_eq!(toon!(42), Value::Number(42.0));
        assert_eq!(toon!(3.5), Value::Number(3.5));
        assert_eq!(toon!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn collections() {
        assert_eq!(toon!([]), Value::Array(vec![]));
        assert_eq!(toon!({}), Value::Object(Map::new()));

        let arr = toon!([1, "two", null]);
        assert_eq!(
            arr,
            Value::Array(vec![
                Value::Number(1.0),
                Value::String("two".to_string()),
                Value::Null
            ])
        );
    }

    #[test]
    fn nested() {
        let value = toon!({
            "user": { "name": "Ada", "admin": true },
            "scores": [1, 2, 3]
        });
        let obj = value.as_object().unwrap();
        let user = obj.get("user").unwrap().as_object().unwrap();
        assert_eq!(user.get("name").and_then(Value::as_str), Some("Ada"));
        assert_eq!(obj.get("scores").unwrap().as_array().unwrap().len(), 3);
    }
}
