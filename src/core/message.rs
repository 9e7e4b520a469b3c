//! Deprecation message templates and rendering.
//!
//! The rendered strings are a compatibility surface: deprecation-scraping
//! tooling may parse them, so the templates and punctuation here are fixed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::MoveOpts;

/// Suffix appended to rendered names that denote callables.
pub const CALLABLE_POSTFIX: &str = "()";

/// The kind of entity a move refers to.
///
/// The display label appears verbatim in the emitted message prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    /// An instance method
    Method,
    /// An instance property accessor
    Property,
    /// A free function
    Function,
    /// A type
    Class,
    /// A read-only property accessor
    ReadOnlyProperty,
}

impl Kind {
    /// The label rendered into the message prefix.
    pub fn label(self) -> &'static str {
        match self {
            Self::Method => "Method",
            Self::Property => "Property",
            Self::Function => "Function",
            Self::Class => "Class",
            Self::ReadOnlyProperty => "Read-only property",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fully resolved move: what kind of entity, where it lived, where it
/// lives now, and how the notice should be decorated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// Kind of the moved entity
    pub kind: Kind,
    /// Old qualified name, as it should appear in the notice
    pub old_name: String,
    /// New qualified name, as it should appear in the notice
    pub new_name: String,
    /// Message decoration and emission options
    pub opts: MoveOpts,
}

impl MoveDescriptor {
    /// Create a descriptor from resolved names and options.
    pub fn new(
        kind: Kind,
        old_name: impl Into<String>,
        new_name: impl Into<String>,
        opts: MoveOpts,
    ) -> Self {
        Self {
            kind,
            old_name: old_name.into(),
            new_name: new_name.into(),
            opts,
        }
    }

    /// The fixed move-notice prefix, before optional decorations.
    pub fn prefix(&self) -> String {
        format!(
            "{} '{}' has moved to '{}'",
            self.kind, self.old_name, self.new_name
        )
    }

    /// Render the complete deprecation message.
    pub fn render(&self) -> String {
        generate_message(
            &self.prefix(),
            self.opts.message.as_deref(),
            self.opts.version.as_deref(),
            self.opts.removal_version.as_deref(),
        )
    }
}

/// Compose the final deprecation text from a prefix and optional decorations.
///
/// The output is `prefix` alone when no optional field is present. Present
/// fields are appended in fixed order — custom message first, then version
/// info — each introduced by `". "`. Version info renders as
/// `in version <version>`; a present `removal_version` continues with
/// ` and will be removed in <removal_version>`, except the literal sentinel
/// `"?"`, which renders as ` and will be removed in a future version`.
pub fn generate_message(
    prefix: &str,
    message: Option<&str>,
    version: Option<&str>,
    removal_version: Option<&str>,
) -> String {
    let mut out = String::from(prefix);
    if let Some(message) = message {
        out.push_str(". ");
        out.push_str(message);
    }
    if let Some(version) = version {
        out.push_str(". in version ");
        out.push_str(version);
    }
    if let Some(removal_version) = removal_version {
        // The removal clause normally continues the version clause; without a
        // version it still has to be introduced on its own.
        out.push_str(if version.is_some() { " " } else { ". " });
        out.push_str("and will be removed in ");
        out.push_str(if removal_version == "?" {
            "a future version"
        } else {
            removal_version
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(Kind::Method.label(), "Method");
        assert_eq!(Kind::Property.label(), "Property");
        assert_eq!(Kind::Function.label(), "Function");
        assert_eq!(Kind::Class.label(), "Class");
        assert_eq!(Kind::ReadOnlyProperty.label(), "Read-only property");
    }

    #[test]
    fn test_prefix_templates() {
        let descriptor = MoveDescriptor::new(
            Kind::Class,
            "mylib::OldWidget",
            "mylib::widgets::Widget",
            MoveOpts::default(),
        );
        assert_eq!(
            descriptor.prefix(),
            "Class 'mylib::OldWidget' has moved to 'mylib::widgets::Widget'"
        );

        let descriptor = MoveDescriptor::new(
            Kind::ReadOnlyProperty,
            "Widget::size",
            "Widget::extent",
            MoveOpts::default(),
        );
        assert_eq!(
            descriptor.prefix(),
            "Read-only property 'Widget::size' has moved to 'Widget::extent'"
        );
    }

    #[test]
    fn test_prefix_alone_without_options() {
        let msg = generate_message("Function 'a()' has moved to 'b()'", None, None, None);
        assert_eq!(msg, "Function 'a()' has moved to 'b()'");
    }

    #[test]
    fn test_custom_message_precedes_version_info() {
        let msg = generate_message("P", Some("use the batch API"), Some("1.0"), None);
        assert_eq!(msg, "P. use the batch API. in version 1.0");
    }

    #[test]
    fn test_version_and_removal_version() {
        let msg = generate_message("P", None, Some("1.0"), Some("2.0"));
        assert!(msg.ends_with("in version 1.0 and will be removed in 2.0"));
    }

    #[test]
    fn test_unknown_removal_version_sentinel() {
        let msg = generate_message("P", None, Some("1.0"), Some("?"));
        assert!(msg.ends_with("in version 1.0 and will be removed in a future version"));
    }

    #[test]
    fn test_removal_version_without_version() {
        let msg = generate_message("P", None, None, Some("2.0"));
        assert_eq!(msg, "P. and will be removed in 2.0");
    }

    #[test]
    fn test_render_combines_prefix_and_options() {
        let descriptor = MoveDescriptor::new(
            Kind::Function,
            "mylib::frob()",
            "mylib::util::frobnicate()",
            MoveOpts::default()
                .with_message("the new name is clearer")
                .with_version("1.4")
                .with_removal_version("2.0"),
        );
        assert_eq!(
            descriptor.render(),
            "Function 'mylib::frob()' has moved to 'mylib::util::frobnicate()'. \
             the new name is clearer. in version 1.4 and will be removed in 2.0"
        );
    }
}
