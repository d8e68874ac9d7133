use serde_json::Value;

/// Conditional coercion of a value to a boolean.
///
/// `false`, zero, `NaN`, empty text, `None`, `()` and JSON `null` are falsy.
/// Everything else is truthy, including empty collections.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! int_truthy {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

int_truthy! { i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize }

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f.is_truthy()),
            Value::String(s) => s.is_truthy(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Truthy;
    use serde_json::json;

    #[test]
    fn test_falsy_values() {
        assert!(!0i32.is_truthy());
        assert!(!(-0.0f64).is_truthy());
        assert!(!f64::NAN.is_truthy());
        assert!(!"".is_truthy());
        assert!(!false.is_truthy());
        assert!(!None::<i32>.is_truthy());
        assert!(!Some(0u8).is_truthy());
        assert!(!().is_truthy());
        assert!(!json!(null).is_truthy());
        assert!(!json!(0).is_truthy());
    }

    #[test]
    fn test_truthy_values() {
        assert!((-1i64).is_truthy());
        assert!("0".is_truthy());
        assert!(Vec::<i32>::new().is_truthy());
        assert!(Some(3u8).is_truthy());
        assert!(json!([]).is_truthy());
        assert!(json!({}).is_truthy());
    }
}
