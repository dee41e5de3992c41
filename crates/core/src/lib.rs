pub mod config;
pub mod convert;
pub mod dimension;
pub mod error;
pub mod fluid;
pub mod merge;
pub mod properties;
pub mod registry;
pub mod text;
pub mod theme;
pub mod types;

// Re-export commonly used types
pub use config::{load_config_from_json, FluidConfig};
pub use convert::{convert_to_rem, convert_unit};
pub use dimension::{Dimension, FontOptions, Magnitude, Token, Unit};
pub use error::FluidError;
pub use fluid::{make_from, make_to, FluidRange, VIEWPORT_SCALE};
pub use properties::{get_descriptor, PropertyDescriptor, ThemeScale, PROPERTIES};
pub use registry::{GeneratedRule, GeneratedRules, Utility, UtilityKind, UtilityRegistry};
pub use text::fluid_text;
pub use theme::{load_theme_from_json, Theme};
pub use types::{Declaration, DeclarationSet, Diagnostic, Direction};
