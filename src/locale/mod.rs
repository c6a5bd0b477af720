//! Localization: the swappable catalog, `{placeholder}` substitution and the static
//! text bindings re-applied on every language switch.

mod bindings;
mod catalog;
mod template;

pub use bindings::{
    BindingKind, TextBinding, apply_default_text, apply_static_bindings, static_bindings,
};
pub use catalog::LanguageCatalog;
pub use template::{substitute, substitute_one};
