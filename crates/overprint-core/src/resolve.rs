//! Overload selection for a `print` call.
//!
//! Models which overload a C++ call `d.print(arg)` binds, given the declared
//! type of an lvalue argument. Each overload gets an implicit conversion
//! rank; the best rank wins, and a tie is ambiguous unless it is the
//! `unsigned int&` / `const unsigned int&` pair, where the less qualified
//! reference wins.

use log::debug;
use serde::Serialize;

use crate::category::Category;
use crate::error::{OverprintError, Result};
use crate::param::ParamType;

/// Implicit conversion sequence rank, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rank {
    /// Identity, qualification adjustment or direct reference binding.
    Exact,
    /// Integral promotion to `int` or `float` to `double`.
    Promotion,
    /// Arithmetic or boolean conversion, including binding a const reference
    /// to a converted temporary.
    Conversion,
    /// Conversion through a constructor (`const char*` to `std::string`).
    UserDefined,
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Exact => write!(f, "exact"),
            Rank::Promotion => write!(f, "promotion"),
            Rank::Conversion => write!(f, "conversion"),
            Rank::UserDefined => write!(f, "user-defined"),
        }
    }
}

/// A viable overload for some argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub category: Category,
    pub rank: Rank,
}

/// The outcome of overload resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The argument type that was resolved.
    pub argument: ParamType,
    /// The overload the call binds to.
    pub selected: Category,
    /// Every viable overload, in declaration order.
    pub candidates: Vec<Candidate>,
}

/// Rank `category` for an lvalue argument of type `arg`, or `None` if not viable.
pub fn rank(category: Category, arg: &ParamType) -> Option<Rank> {
    let lvalue = arg.strip_reference();
    let is_const = lvalue.is_const();
    let ty = lvalue.strip_const();
    let pointee = ty.pointee();

    match category {
        Category::Int => match ty {
            ParamType::Int => Some(Rank::Exact),
            t if t.promotes_to_int() => Some(Rank::Promotion),
            t => arithmetic_conversion(t),
        },
        Category::Short => exact_or_conversion(ty, &ParamType::Short),
        Category::Double => match ty {
            ParamType::Double => Some(Rank::Exact),
            ParamType::Float => Some(Rank::Promotion),
            t => arithmetic_conversion(t),
        },
        Category::Bool => match ty {
            ParamType::Bool => Some(Rank::Exact),
            _ if pointee.is_some() => Some(Rank::Conversion),
            t => arithmetic_conversion(t),
        },
        Category::Char => exact_or_conversion(ty, &ParamType::Char),
        // A non-const lvalue reference only binds to a non-const lvalue of the same type.
        Category::UnsignedRef => {
            (*ty == ParamType::UnsignedInt && !is_const).then_some(Rank::Exact)
        }
        Category::ConstUnsignedRef => exact_or_conversion(ty, &ParamType::UnsignedInt),
        Category::ConstIntPtr => pointee
            .filter(|p| *p.strip_const() == ParamType::Int)
            .map(|_| Rank::Exact),
        Category::LongPtr => pointee
            .filter(|p| **p == ParamType::Long)
            .map(|_| Rank::Exact),
        Category::CString => pointee
            .filter(|p| *p.strip_const() == ParamType::Char)
            .map(|_| Rank::Exact),
        Category::String => match (ty, pointee) {
            (ParamType::StdString, _) => Some(Rank::Exact),
            (_, Some(p)) if *p.strip_const() == ParamType::Char => Some(Rank::UserDefined),
            _ => None,
        },
    }
}

fn exact_or_conversion(ty: &ParamType, target: &ParamType) -> Option<Rank> {
    if ty == target {
        Some(Rank::Exact)
    } else {
        arithmetic_conversion(ty)
    }
}

fn arithmetic_conversion(ty: &ParamType) -> Option<Rank> {
    ty.is_arithmetic().then_some(Rank::Conversion)
}

/// Select the `print` overload for an lvalue argument of type `arg`.
pub fn resolve(arg: &ParamType) -> Result<Resolution> {
    let candidates: Vec<Candidate> = Category::ALL
        .into_iter()
        .filter_map(|category| rank(category, arg).map(|rank| Candidate { category, rank }))
        .collect();

    debug!(
        "resolving print({arg}): {} viable of {}",
        candidates.len(),
        Category::ALL.len()
    );

    let best = candidates
        .iter()
        .map(|c| c.rank)
        .min()
        .ok_or_else(|| OverprintError::NoViableOverload {
            arg: arg.to_string(),
        })?;

    let tied: Vec<Category> = candidates
        .iter()
        .filter(|c| c.rank == best)
        .map(|c| c.category)
        .collect();

    let selected = match tied.as_slice() {
        [only] => *only,
        [Category::UnsignedRef, Category::ConstUnsignedRef] => Category::UnsignedRef,
        _ => {
            return Err(OverprintError::Ambiguous {
                arg: arg.to_string(),
                candidates: tied.iter().map(|c| c.declaration()).collect(),
            });
        }
    };

    debug!("print({arg}) binds {} ({best})", selected.declaration());

    Ok(Resolution {
        argument: arg.clone(),
        selected,
        candidates,
    })
}
