/// Builds a [`Value`](crate::Value) from JSON-like literal syntax.
///
/// ```rust
/// use toon_codec::toon;
///
/// let value = toon!({
///     "name": "Ann",
///     "scores": [90, 85],
///     "active": true,
/// });
/// assert_eq!(toon_codec::encode(&value), "name: Ann\nscores[2]: 90,85\nactive: true");
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

    // Fallback for any other expression that serializes to a value.
    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, ToonMap, Value};

    #[test]
    fn scalars() {
        assert_eq!(toon!(null), Value::Null);
        assert_eq!(toon!(true), Value::Bool(true));
        assert_eq!(toon!(false), Value::Bool(false));
        assert_eq!(toon!(42), Value::Number(Number::Integer(42)));
        assert_eq!(toon!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(toon!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn arrays() {
        assert_eq!(toon!([]), Value::Array(vec![]));
        assert_eq!(
            toon!([1, "two", null]),
            Value::Array(vec![
                Value::Number(Number::Integer(1)),
                Value::String("two".to_string()),
                Value::Null,
            ])
        );
    }

    #[test]
    fn objects() {
        assert_eq!(toon!({}), Value::Object(ToonMap::new()));

        let obj = toon!({"name": "Alice", "nested": {"ok": true}});
        let Value::Object(map) = obj else {
            panic!("expected object");
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
        assert_eq!(map.get("nested"), Some(&toon!({"ok": true})));
    }

    #[test]
    fn expressions_fall_back_to_serde() {
        let xs = vec![1u8, 2, 3];
        assert_eq!(toon!(xs), toon!([1, 2, 3]));
    }
}
