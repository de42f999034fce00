//! Plan display formatting.
//!
//! # Example
//!
//! ```ignore
//! use stid_codegen::schema::{DisplayStyle, PlanDisplay};
//!
//! let display = PlanDisplay::new(&computed).style(DisplayStyle::TreeBox);
//! println!("{}", display);
//! ```

use std::fmt;

use super::{ComputedData, ComputedType};

/// Display style for artifact plans.
#[derive(Debug, Clone, Copy, Default)]
pub enum DisplayStyle {
    /// One line per type.
    ///
    /// ```text
    /// Shop.OrderId  System.Guid  Guid
    /// Shop.Sku      Shop.Code    Fallback
    /// ```
    #[default]
    Simple,

    /// Every type with the sections of both artifacts.
    ///
    /// ```text
    /// Shop.OrderId (System.Guid, Guid)
    /// ├─ partial: DebuggerDisplay attribute, From(string), ...
    /// └─ support: JSON converter, type converter, extensions
    /// ```
    TreeBox,
}

/// Declarative formatter for [`ComputedData`].
#[derive(Debug, Clone)]
pub struct PlanDisplay<'a> {
    computed: &'a ComputedData,
    style: DisplayStyle,
}

impl<'a> PlanDisplay<'a> {
    pub fn new(computed: &'a ComputedData) -> Self {
        Self {
            computed,
            style: DisplayStyle::default(),
        }
    }

    pub fn style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    pub fn render(&self) -> String {
        let mut output = String::new();
        match self.style {
            DisplayStyle::Simple => self.render_simple(&mut output),
            DisplayStyle::TreeBox => self.render_tree_box(&mut output),
        }
        output
    }

    fn render_simple(&self, output: &mut String) {
        let name_width = self.width(|t| t.qualified_name.len());
        let value_width = self.width(|t| t.descriptor.underlying_type.len());

        for ty in &self.computed.types {
            output.push_str(&format!(
                "{:<name_width$}  {:<value_width$}  {}\n",
                ty.qualified_name, ty.descriptor.underlying_type, ty.category
            ));
        }
    }

    fn render_tree_box(&self, output: &mut String) {
        for ty in &self.computed.types {
            output.push_str(&format!(
                "{} ({}, {})\n",
                ty.qualified_name, ty.descriptor.underlying_type, ty.category
            ));

            let partial: Vec<_> = ty.plan.partial.iter().map(|s| s.as_str()).collect();
            let support: Vec<_> = ty.plan.support.iter().map(|s| s.as_str()).collect();

            output.push_str(&format!("├─ partial: {}\n", partial.join(", ")));
            if support.is_empty() {
                output.push_str("└─ support: (empty)\n");
            } else {
                output.push_str(&format!("└─ support: {}\n", support.join(", ")));
            }
        }
    }

    fn width(&self, f: impl Fn(&ComputedType) -> usize) -> usize {
        self.computed.types.iter().map(f).max().unwrap_or(0)
    }
}

impl fmt::Display for PlanDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
