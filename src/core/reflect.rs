//! Best-effort name resolution over the standard reflection facilities.
//!
//! Everything here is built on `std::any::type_name`, which documents its
//! output as a best-effort diagnostic string. The resolvers therefore degrade
//! to the [`UNKNOWN_NAME`] sentinel instead of failing: a name that cannot be
//! resolved must never block the forwarded call.

use std::any::{type_name, type_name_of_val};

/// Sentinel substituted when a name cannot be resolved.
pub const UNKNOWN_NAME: &str = "<unknown>";

/// Path separator used when composing qualified names.
pub const SEPARATOR: &str = "::";

/// Resolve the path of a callable type, typically a function item.
///
/// Function items carry their definition path in their type name
/// (`mylib::util::frobnicate`); closures and other non-path callables do not
/// and resolve to `None`.
pub fn callable_name<F>() -> Option<&'static str> {
    let name = type_name::<F>();
    is_nominal_type_name(name).then_some(name)
}

/// Fully qualified display name of a type.
pub fn qualified_type_name<T: ?Sized>() -> &'static str {
    type_name::<T>()
}

/// Simple (last-segment, generics-stripped) display name of a type.
pub fn type_basename<T: ?Sized>() -> &'static str {
    simple_name(type_name::<T>())
}

/// Simple display name of a live receiver's type.
pub fn type_basename_of_val<T: ?Sized>(value: &T) -> &'static str {
    simple_name(type_name_of_val(value))
}

/// Whether an attribute name already carries a qualifying path.
pub fn is_fully_qualified(name: &str) -> bool {
    name.contains(SEPARATOR)
}

/// Reduce a raw type name to its simple display form.
///
/// Strips generic arguments and leading path segments; degrades to
/// [`UNKNOWN_NAME`] when nothing displayable remains.
pub fn simple_name(raw: &str) -> &str {
    let without_generics = match raw.find('<') {
        Some(idx) => &raw[..idx],
        None => raw,
    };
    let tail = without_generics
        .rsplit(SEPARATOR)
        .next()
        .unwrap_or(without_generics)
        .trim();
    if tail.is_empty() || tail.contains("{{closure}}") {
        UNKNOWN_NAME
    } else {
        tail
    }
}

/// Whether a resolved type name refers to a nominal type.
///
/// Closures, function pointers, references, raw pointers, tuples, slices,
/// trait objects, and `impl Trait` are rejected; primitives and all path
/// types pass.
pub fn is_nominal_type_name(name: &str) -> bool {
    if name.is_empty() || name.contains("{{closure}}") {
        return false;
    }
    if name.starts_with("fn(")
        || name.starts_with("unsafe fn(")
        || name.starts_with("extern ")
        || name.starts_with("dyn ")
        || name.starts_with("impl ")
    {
        return false;
    }
    !matches!(name.as_bytes()[0], b'&' | b'*' | b'(' | b'[')
}
