//! Property-style access to layout and zoom, for scripting front ends.

use crate::{controller::LayoutController, env::Env};
use lighttable_types::{LayoutMode, ParseLayoutError};

pub const LAYOUT: &str = "layout";
pub const ZOOM_LEVEL: &str = "zoom_level";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Layout(LayoutMode),
    Int(i32),
    /// A layout given by name, as registered by [`layout_names`].
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    #[error("unknown property `{0}`")]
    Unknown(String),
    #[error("property `{property}` expects {expected}")]
    TypeMismatch {
        property: &'static str,
        expected: &'static str,
    },
    #[error(transparent)]
    Layout(#[from] ParseLayoutError),
}

/// Every layout a script may name, including the preview overlay.
pub fn layout_names() -> impl Iterator<Item = (&'static str, LayoutMode)> {
    LayoutMode::ALL.iter().map(|layout| (layout.name(), *layout))
}

impl LayoutController {
    /// Reads a property and, if `value` is given, assigns it afterwards.
    /// Returns the value held before the assignment.
    pub fn property(
        &mut self,
        env: &mut Env<'_>,
        name: &str,
        value: Option<PropertyValue>,
    ) -> Result<PropertyValue, PropertyError> {
        match name {
            LAYOUT => {
                let previous = PropertyValue::Layout(self.layout());
                if let Some(value) = value {
                    let target = match value {
                        PropertyValue::Layout(layout) => layout,
                        PropertyValue::Name(name) => name.parse::<LayoutMode>()?,
                        PropertyValue::Int(_) => {
                            return Err(PropertyError::TypeMismatch {
                                property: LAYOUT,
                                expected: "a layout",
                            });
                        }
                    };
                    self.request_layout(env, target);
                }
                Ok(previous)
            }
            ZOOM_LEVEL => {
                let previous = PropertyValue::Int(self.current_zoom());
                if let Some(value) = value {
                    let PropertyValue::Int(zoom) = value else {
                        return Err(PropertyError::TypeMismatch {
                            property: ZOOM_LEVEL,
                            expected: "an integer",
                        });
                    };
                    self.set_zoom(env, zoom);
                }
                Ok(previous)
            }
            other => Err(PropertyError::Unknown(other.to_string())),
        }
    }
}
