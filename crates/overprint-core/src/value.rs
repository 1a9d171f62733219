//! Tagged print arguments.
//!
//! [`Value`] carries one argument together with the category it was passed
//! as. The `From` impls below pick the category from the static Rust type of
//! the argument, so `printer.print(&x)` and `printer.print(x)` land on
//! different overloads the same way the C++ calls do.

use crate::category::Category;

/// A single argument to `print`, tagged with its category.
///
/// Pointer and reference categories borrow the caller's value for the
/// duration of the call; there is no null.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Int(i32),
    ConstIntPtr(&'a i32),
    UnsignedRef(&'a u32),
    ConstUnsignedRef(&'a u32),
    LongPtr(&'a i64),
    Short(i16),
    Double(f64),
    Bool(bool),
    Char(char),
    CStr(&'a str),
    Owned(String),
}

impl Value<'_> {
    /// The overload category this value binds to.
    pub fn category(&self) -> Category {
        match self {
            Value::Int(_) => Category::Int,
            Value::ConstIntPtr(_) => Category::ConstIntPtr,
            Value::UnsignedRef(_) => Category::UnsignedRef,
            Value::ConstUnsignedRef(_) => Category::ConstUnsignedRef,
            Value::LongPtr(_) => Category::LongPtr,
            Value::Short(_) => Category::Short,
            Value::Double(_) => Category::Double,
            Value::Bool(_) => Category::Bool,
            Value::Char(_) => Category::Char,
            Value::CStr(_) => Category::CString,
            Value::Owned(_) => Category::String,
        }
    }

    /// The rendered value, without label.
    pub fn body(&self) -> String {
        match self {
            Value::Int(x) => x.to_string(),
            Value::ConstIntPtr(x) => x.to_string(),
            Value::UnsignedRef(x) | Value::ConstUnsignedRef(x) => x.to_string(),
            Value::LongPtr(x) => x.to_string(),
            Value::Short(x) => x.to_string(),
            Value::Double(x) => x.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Char(c) => c.to_string(),
            Value::CStr(s) => (*s).to_string(),
            Value::Owned(s) => s.clone(),
        }
    }
}

impl std::fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.category().label(), self.body())
    }
}

impl From<i32> for Value<'_> {
    fn from(x: i32) -> Self {
        Value::Int(x)
    }
}

impl<'a> From<&'a i32> for Value<'a> {
    fn from(x: &'a i32) -> Self {
        Value::ConstIntPtr(x)
    }
}

impl<'a> From<&'a mut u32> for Value<'a> {
    fn from(x: &'a mut u32) -> Self {
        Value::UnsignedRef(x)
    }
}

impl<'a> From<&'a u32> for Value<'a> {
    fn from(x: &'a u32) -> Self {
        Value::ConstUnsignedRef(x)
    }
}

impl<'a> From<&'a mut i64> for Value<'a> {
    fn from(x: &'a mut i64) -> Self {
        Value::LongPtr(x)
    }
}

impl From<i16> for Value<'_> {
    fn from(x: i16) -> Self {
        Value::Short(x)
    }
}

impl From<f64> for Value<'_> {
    fn from(x: f64) -> Self {
        Value::Double(x)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value<'_> {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::CStr(s)
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Owned(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_type_selects_category() {
        let x: i32 = 10;
        let mut y: u32 = 20;
        let mut long_value: i64 = 30;

        assert_eq!(Value::from(x).category(), Category::Int);
        assert_eq!(Value::from(&x).category(), Category::ConstIntPtr);
        assert_eq!(Value::from(&mut y).category(), Category::UnsignedRef);
        assert_eq!(Value::from(&y).category(), Category::ConstUnsignedRef);
        assert_eq!(Value::from(&mut long_value).category(), Category::LongPtr);
        assert_eq!(Value::from(50i16).category(), Category::Short);
        assert_eq!(Value::from(3.14_f64).category(), Category::Double);
        assert_eq!(Value::from(true).category(), Category::Bool);
        assert_eq!(Value::from('A').category(), Category::Char);
        assert_eq!(Value::from("text").category(), Category::CString);
        assert_eq!(Value::from(String::from("text")).category(), Category::String);
    }

    #[test]
    fn pointer_categories_render_the_pointee() {
        let x: i32 = -7;
        let mut long_value: i64 = 9_000_000_000;
        assert_eq!(Value::from(&x).to_string(), "Const Int* : -7");
        assert_eq!(Value::from(&mut long_value).to_string(), "Long* : 9000000000");
    }

    #[test]
    fn reference_categories_render_identically() {
        let mut y: u32 = 20;
        assert_eq!(Value::from(&mut y).body(), "20");
        assert_eq!(Value::from(&y).body(), "20");
        assert_eq!(Value::from(&y).to_string(), "Const Unsigned Int& : 20");
    }

    #[test]
    fn double_uses_default_float_formatting() {
        assert_eq!(Value::from(3.14_f64).to_string(), "Double: 3.14");
        assert_eq!(Value::from(3.0_f64).to_string(), "Double: 3");
        assert_eq!(Value::from(-0.5_f64).to_string(), "Double: -0.5");
    }

    #[test]
    fn scalar_and_text_bodies() {
        assert_eq!(Value::from(false).to_string(), "Bool: false");
        assert_eq!(Value::from('é').to_string(), "Char: é");
        assert_eq!(Value::from(i16::MIN).to_string(), "Short: -32768");
        assert_eq!(Value::from("").to_string(), "C-string: ");
        assert_eq!(
            Value::from(String::from("C++ string")).to_string(),
            "String: C++ string"
        );
    }
}
