//! Hand-written parser for C++ parameter and argument types.
//!
//! Handles the fundamental arithmetic types, `std::string`, const qualifiers,
//! pointers and lvalue references. Does NOT handle arrays, function pointers,
//! templates other than `std::string`, or rvalue references.

use crate::error::{OverprintError, Result};

/// A C++ type as it appears in a parameter or argument declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    Void,
    Bool,
    Char,
    SignedChar,
    UnsignedChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    Double,
    LongDouble,
    /// `std::string`.
    StdString,
    /// Pointer to another type.
    Pointer(Box<ParamType>),
    /// Const-qualified type.
    Const(Box<ParamType>),
    /// Lvalue reference to another type.
    Reference(Box<ParamType>),
}

impl ParamType {
    /// Parse a type declaration, tolerating a trailing parameter name.
    ///
    /// Examples:
    /// - `"int"`
    /// - `"const unsigned int& x"`
    /// - `"char* const"`
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(invalid("empty type"));
        }

        let tokens = tokenize(input);
        let (base_type, consumed) = parse_base_type(&tokens)?;
        parse_declarator(base_type, &tokens[consumed..])
    }

    /// Strip const qualifiers from outer level.
    pub fn strip_const(&self) -> &ParamType {
        match self {
            ParamType::Const(inner) => inner.strip_const(),
            other => other,
        }
    }

    /// Strip an outer reference, yielding the referred-to type.
    pub fn strip_reference(&self) -> &ParamType {
        match self {
            ParamType::Reference(inner) => inner,
            other => other,
        }
    }

    /// Whether the outer level is const-qualified.
    pub fn is_const(&self) -> bool {
        matches!(self, ParamType::Const(_))
    }

    /// The pointed-to type, if this is a (possibly const) pointer.
    pub fn pointee(&self) -> Option<&ParamType> {
        match self.strip_const() {
            ParamType::Pointer(inner) => Some(inner),
            _ => None,
        }
    }

    /// Whether this is one of the fundamental arithmetic types (bool included).
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            ParamType::Bool
                | ParamType::Char
                | ParamType::SignedChar
                | ParamType::UnsignedChar
                | ParamType::Short
                | ParamType::UnsignedShort
                | ParamType::Int
                | ParamType::UnsignedInt
                | ParamType::Long
                | ParamType::UnsignedLong
                | ParamType::LongLong
                | ParamType::UnsignedLongLong
                | ParamType::Float
                | ParamType::Double
                | ParamType::LongDouble
        )
    }

    /// Whether an integral promotion converts this type to `int`.
    pub fn promotes_to_int(&self) -> bool {
        matches!(
            self,
            ParamType::Bool
                | ParamType::Char
                | ParamType::SignedChar
                | ParamType::UnsignedChar
                | ParamType::Short
                | ParamType::UnsignedShort
        )
    }
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamType::Void => write!(f, "void"),
            ParamType::Bool => write!(f, "bool"),
            ParamType::Char => write!(f, "char"),
            ParamType::SignedChar => write!(f, "signed char"),
            ParamType::UnsignedChar => write!(f, "unsigned char"),
            ParamType::Short => write!(f, "short"),
            ParamType::UnsignedShort => write!(f, "unsigned short"),
            ParamType::Int => write!(f, "int"),
            ParamType::UnsignedInt => write!(f, "unsigned int"),
            ParamType::Long => write!(f, "long"),
            ParamType::UnsignedLong => write!(f, "unsigned long"),
            ParamType::LongLong => write!(f, "long long"),
            ParamType::UnsignedLongLong => write!(f, "unsigned long long"),
            ParamType::Float => write!(f, "float"),
            ParamType::Double => write!(f, "double"),
            ParamType::LongDouble => write!(f, "long double"),
            ParamType::StdString => write!(f, "std::string"),
            ParamType::Pointer(inner) => write!(f, "{inner}*"),
            // East const for the pointer itself: `int* const`.
            ParamType::Const(inner) if matches!(inner.as_ref(), ParamType::Pointer(_)) => {
                write!(f, "{inner} const")
            }
            ParamType::Const(inner) => write!(f, "const {inner}"),
            ParamType::Reference(inner) => write!(f, "{inner}&"),
        }
    }
}

impl std::str::FromStr for ParamType {
    type Err = OverprintError;

    fn from_str(s: &str) -> Result<Self> {
        ParamType::parse(s)
    }
}

fn invalid(detail: impl Into<String>) -> OverprintError {
    OverprintError::InvalidType {
        detail: detail.into(),
    }
}

/// Parse a type specifier from the front of a token sequence.
fn parse_base_type(tokens: &[&str]) -> Result<(ParamType, usize)> {
    if tokens.is_empty() {
        return Err(invalid("expected type"));
    }

    let mut pos = 0;
    let mut is_const = false;

    // Handle leading `const`
    if tokens[pos] == "const" {
        is_const = true;
        pos += 1;
        if pos >= tokens.len() {
            return Err(invalid("expected type after 'const'"));
        }
    }

    // Handle `unsigned`/`signed` modifiers
    let is_unsigned = tokens[pos] == "unsigned";
    let is_signed = tokens[pos] == "signed";

    let pt = if is_unsigned || is_signed {
        pos += 1;
        match tokens.get(pos).copied() {
            Some("char") => {
                pos += 1;
                if is_unsigned { ParamType::UnsignedChar } else { ParamType::SignedChar }
            }
            Some("short") => {
                pos += 1;
                pos += skip_int(tokens, pos);
                if is_unsigned { ParamType::UnsignedShort } else { ParamType::Short }
            }
            Some("int") => {
                pos += 1;
                if is_unsigned { ParamType::UnsignedInt } else { ParamType::Int }
            }
            Some("long") => {
                pos += 1;
                // Check for `long long`
                let long_long = tokens.get(pos) == Some(&"long");
                if long_long {
                    pos += 1;
                }
                pos += skip_int(tokens, pos);
                match (long_long, is_unsigned) {
                    (true, true) => ParamType::UnsignedLongLong,
                    (true, false) => ParamType::LongLong,
                    (false, true) => ParamType::UnsignedLong,
                    (false, false) => ParamType::Long,
                }
            }
            // bare `unsigned` or `signed` means `unsigned int` / `signed int`
            _ => {
                if is_unsigned { ParamType::UnsignedInt } else { ParamType::Int }
            }
        }
    } else {
        let pt = match tokens[pos] {
            "void" => ParamType::Void,
            "bool" => ParamType::Bool,
            "char" => ParamType::Char,
            "short" => {
                pos += skip_int(tokens, pos + 1);
                ParamType::Short
            }
            "int" => ParamType::Int,
            "long" => match tokens.get(pos + 1).copied() {
                Some("long") => {
                    pos += 1;
                    pos += skip_int(tokens, pos + 1);
                    ParamType::LongLong
                }
                Some("double") => {
                    pos += 1;
                    ParamType::LongDouble
                }
                _ => {
                    pos += skip_int(tokens, pos + 1);
                    ParamType::Long
                }
            },
            "float" => ParamType::Float,
            "double" => ParamType::Double,
            "std::string" => ParamType::StdString,
            other => {
                return Err(invalid(format!("unknown type '{other}'")));
            }
        };
        pos += 1;
        pt
    };

    let pt = if is_const { ParamType::Const(Box::new(pt)) } else { pt };
    Ok((pt, pos))
}

/// Consume an optional trailing `int` as in `long int` or `unsigned short int`.
fn skip_int(tokens: &[&str], pos: usize) -> usize {
    usize::from(tokens.get(pos) == Some(&"int"))
}

/// Apply `const`, `*` and `&` declarators following the base type.
fn parse_declarator(base_type: ParamType, remaining: &[&str]) -> Result<ParamType> {
    let mut result_type = base_type;
    let mut is_reference = false;
    let mut name: Option<&str> = None;

    for tok in remaining {
        if let Some(name) = name {
            return Err(invalid(format!("unexpected '{tok}' after name '{name}'")));
        }
        match *tok {
            "*" => {
                if is_reference {
                    return Err(invalid("pointer to reference is not allowed"));
                }
                result_type = ParamType::Pointer(Box::new(result_type));
            }
            "&" => {
                if is_reference {
                    return Err(invalid("reference to reference is not allowed"));
                }
                is_reference = true;
                result_type = ParamType::Reference(Box::new(result_type));
            }
            "const" => {
                if is_reference {
                    return Err(invalid("'const' cannot qualify a reference"));
                }
                if result_type.is_const() {
                    return Err(invalid("duplicate 'const'"));
                }
                result_type = ParamType::Const(Box::new(result_type));
            }
            ident if is_identifier(ident) => name = Some(ident),
            other => {
                return Err(invalid(format!("unexpected '{other}'")));
            }
        }
    }

    Ok(result_type)
}

fn is_identifier(tok: &str) -> bool {
    const KEYWORDS: &[&str] = &[
        "void", "bool", "char", "short", "int", "long", "float", "double", "signed", "unsigned",
    ];
    let mut chars = tok.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.contains(&tok)
}

/// Tokenize a declaration, splitting on whitespace but keeping `*` and `&` as separate tokens.
fn tokenize(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for part in s.split_whitespace() {
        let mut remaining = part;
        while !remaining.is_empty() {
            if let Some(sym_pos) = remaining.find(['*', '&']) {
                if sym_pos > 0 {
                    tokens.push(&remaining[..sym_pos]);
                }
                tokens.push(&remaining[sym_pos..sym_pos + 1]);
                remaining = &remaining[sym_pos + 1..];
            } else {
                tokens.push(remaining);
                break;
            }
        }
    }
    tokens
}
