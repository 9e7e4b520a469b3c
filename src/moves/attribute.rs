//! Announcers for instance methods and properties that moved within a type.
//!
//! Methods and properties differ from free functions in one way: the owning
//! type is only knowable once the old accessor executes on a live receiver.
//! A [`MovedAttribute`] therefore resolves the receiver's type name and
//! formats its message at each call instead of precomputing it.

use crate::core::config::MoveOpts;
use crate::core::emit::deprecation;
use crate::core::message::{Kind, MoveDescriptor, CALLABLE_POSTFIX};
use crate::core::reflect;

/// Announcer for an instance method or property that moved to a new name.
///
/// Built with [`moved_method`] or [`moved_property`] and embedded in the
/// retained old accessor, which calls [`announce`](MovedAttribute::announce)
/// and then forwards to the new implementation itself:
///
/// ```rust
/// use movewarn::{moved_method, MovedAttribute};
/// use once_cell::sync::Lazy;
///
/// static RPM_MOVED: Lazy<MovedAttribute> = Lazy::new(|| moved_method("rpm", "speed"));
///
/// struct Turntable;
///
/// impl Turntable {
///     fn speed(&self) -> u32 {
///         33
///     }
///
///     fn rpm(&self) -> u32 {
///         RPM_MOVED.announce(self);
///         self.speed()
///     }
/// }
///
/// assert_eq!(Turntable.rpm(), 33);
/// ```
#[derive(Debug, Clone)]
pub struct MovedAttribute {
    kind: Kind,
    old_name: String,
    new_name: String,
    fully_qualified: bool,
    opts: MoveOpts,
}

impl MovedAttribute {
    fn new(kind: Kind, old_name: &str, new_name: &str, postfix: Option<&str>, opts: MoveOpts) -> Self {
        let old_name = apply_postfix(old_name, postfix);
        let fully_qualified = reflect::is_fully_qualified(&old_name);
        Self {
            kind,
            old_name,
            new_name: apply_postfix(new_name, postfix),
            fully_qualified,
            opts,
        }
    }

    /// Emit the deprecation warning for one access through the old name.
    ///
    /// The receiver supplies the owning type: a simple old name is qualified
    /// as `<Receiver>::<old>` and the new name as `<Receiver>::<new>`; an
    /// already-qualified old name is kept as given. The caller forwards to
    /// the new implementation afterwards.
    pub fn announce<T: ?Sized>(&self, receiver: &T) {
        let base = reflect::type_basename_of_val(receiver);
        let old_name = if self.fully_qualified {
            self.old_name.clone()
        } else {
            join(base, &self.old_name)
        };
        let descriptor = MoveDescriptor::new(
            self.kind,
            old_name,
            join(base, &self.new_name),
            self.opts.clone(),
        );
        deprecation(
            &descriptor.render(),
            self.opts.stacklevel,
            Some(&self.opts.category),
        );
    }

    /// Kind of the moved attribute.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The old attribute name, postfixed for methods.
    pub fn old_name(&self) -> &str {
        &self.old_name
    }

    /// The new attribute name, postfixed for methods.
    pub fn new_name(&self) -> &str {
        &self.new_name
    }
}

fn apply_postfix(name: &str, postfix: Option<&str>) -> String {
    match postfix {
        Some(postfix) if !name.ends_with(postfix) => format!("{name}{postfix}"),
        _ => name.to_string(),
    }
}

fn join(base: &str, attribute: &str) -> String {
    format!("{base}{}{attribute}", reflect::SEPARATOR)
}

/// Announcer for an instance method that moved to another name.
///
/// Both names are forced to end in `()`; a name already carrying the postfix
/// is left alone.
pub fn moved_method(old_method_name: &str, new_method_name: &str) -> MovedAttribute {
    moved_method_with_opts(old_method_name, new_method_name, MoveOpts::default())
}

/// [`moved_method`] with explicit options.
pub fn moved_method_with_opts(
    old_method_name: &str,
    new_method_name: &str,
    opts: MoveOpts,
) -> MovedAttribute {
    MovedAttribute::new(
        Kind::Method,
        old_method_name,
        new_method_name,
        Some(CALLABLE_POSTFIX),
        opts,
    )
}

/// Announcer for an instance property that moved to another name.
///
/// Property names pass through without the callable postfix.
pub fn moved_property(old_property_name: &str, new_property_name: &str) -> MovedAttribute {
    moved_property_with_opts(old_property_name, new_property_name, MoveOpts::default())
}

/// [`moved_property`] with explicit options.
pub fn moved_property_with_opts(
    old_property_name: &str,
    new_property_name: &str,
    opts: MoveOpts,
) -> MovedAttribute {
    MovedAttribute::new(Kind::Property, old_property_name, new_property_name, None, opts)
}
