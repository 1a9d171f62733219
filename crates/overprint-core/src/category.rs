//! The overload set: one `print` overload per accepted argument category.

use serde::{Deserialize, Serialize};

use crate::error::{OverprintError, Result};
use crate::param::ParamType;

/// One of the eleven argument categories a `print` overload accepts.
///
/// Variants are declared in the fixed order the demo driver invokes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// `int`
    Int,
    /// `const int*`
    ConstIntPtr,
    /// `unsigned int&`
    UnsignedRef,
    /// `const unsigned int&`
    ConstUnsignedRef,
    /// `long*`
    LongPtr,
    /// `short`
    Short,
    /// `double`
    Double,
    /// `bool`
    Bool,
    /// `char`
    Char,
    /// `const char*`
    CString,
    /// `std::string`
    String,
}

impl Category {
    /// Every category, in invocation order.
    pub const ALL: [Category; 11] = [
        Category::Int,
        Category::ConstIntPtr,
        Category::UnsignedRef,
        Category::ConstUnsignedRef,
        Category::LongPtr,
        Category::Short,
        Category::Double,
        Category::Bool,
        Category::Char,
        Category::CString,
        Category::String,
    ];

    /// Label written in front of the rendered value.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Int => "Int: ",
            Category::ConstIntPtr => "Const Int* : ",
            Category::UnsignedRef => "Unsigned Int& : ",
            Category::ConstUnsignedRef => "Const Unsigned Int& : ",
            Category::LongPtr => "Long* : ",
            Category::Short => "Short: ",
            Category::Double => "Double: ",
            Category::Bool => "Bool: ",
            Category::Char => "Char: ",
            Category::CString => "C-string: ",
            Category::String => "String: ",
        }
    }

    /// Stable identifier, as used on the command line and in JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Int => "int",
            Category::ConstIntPtr => "const-int-ptr",
            Category::UnsignedRef => "unsigned-ref",
            Category::ConstUnsignedRef => "const-unsigned-ref",
            Category::LongPtr => "long-ptr",
            Category::Short => "short",
            Category::Double => "double",
            Category::Bool => "bool",
            Category::Char => "char",
            Category::CString => "c-string",
            Category::String => "string",
        }
    }

    /// Parse a category from its identifier.
    pub fn parse(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| OverprintError::UnknownCategory {
                name: s.to_string(),
            })
    }

    /// Declared parameter type of the overload.
    pub fn parameter(&self) -> ParamType {
        use ParamType::{Const, Pointer, Reference};

        match self {
            Category::Int => ParamType::Int,
            Category::ConstIntPtr => Pointer(Box::new(Const(Box::new(ParamType::Int)))),
            Category::UnsignedRef => Reference(Box::new(ParamType::UnsignedInt)),
            Category::ConstUnsignedRef => {
                Reference(Box::new(Const(Box::new(ParamType::UnsignedInt))))
            }
            Category::LongPtr => Pointer(Box::new(ParamType::Long)),
            Category::Short => ParamType::Short,
            Category::Double => ParamType::Double,
            Category::Bool => ParamType::Bool,
            Category::Char => ParamType::Char,
            Category::CString => Pointer(Box::new(Const(Box::new(ParamType::Char)))),
            Category::String => ParamType::StdString,
        }
    }

    /// Full overload declaration, e.g. `void print(const int* x)`.
    pub fn declaration(&self) -> String {
        let param_name = match self {
            Category::Bool | Category::CString | Category::String => "s",
            Category::Char => "c",
            _ => "x",
        };
        format!("void print({} {param_name})", self.parameter())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Category {
    type Err = OverprintError;

    fn from_str(s: &str) -> Result<Self> {
        Category::parse(s)
    }
}
