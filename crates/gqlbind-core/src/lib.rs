pub mod ast;
pub mod binding;
mod config;
mod directive;
pub mod loc;
pub mod model;
mod named_ref;
pub mod naming;
pub mod types;
mod value;

pub use config::Config;
pub use config::ConfigError;
pub use config::ExecConfig;
pub use config::FieldOverride;
pub use config::NativeKind;
pub use config::NativeMember;
pub use config::TypeMapEntry;
pub use directive::Directive;
pub use directive::DirectiveArgumentDef;
pub use directive::DirectiveDef;
pub use directive::DirectiveResolutionError;
pub use directive::DirectiveResolver;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use value::LiteralError;
pub use value::Value;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod tests;
