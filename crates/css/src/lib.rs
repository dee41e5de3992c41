pub mod emit;
pub mod ir;

// Re-export main functions
pub use emit::{emit_css, render_rules};
pub use ir::{
    create_qualified_rule, create_rules_stylesheet, create_stylesheet, create_swc_declaration,
    css_property_name,
};

// Re-export SWC CSS types
pub use swc_css_ast::Stylesheet;
