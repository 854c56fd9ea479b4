//! Indicator variants
//!
//! | Variant | Marker class      | Foundation       |
//! | Bar     | `indicator--bar`  | `BarFoundation`  |
//! | Icon    | `indicator--icon` | `IconFoundation` |

use serde::{Deserialize, Serialize};

use indicator_foundation::CssClasses;
use indicator_surface::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorVariant {
    /// Sliding underline
    Bar,
    /// Scaling icon
    Icon,
}

impl IndicatorVariant {
    /// Read the variant marker off `root`. A root carrying both markers is a bar.
    pub fn detect(root: &Element, classes: &CssClasses) -> Option<Self> {
        if root.has_class(&classes.bar) {
            Some(IndicatorVariant::Bar)
        } else if root.has_class(&classes.icon) {
            Some(IndicatorVariant::Icon)
        } else {
            None
        }
    }

    pub fn marker_class<'a>(&self, classes: &'a CssClasses) -> &'a str {
        match self {
            IndicatorVariant::Bar => &classes.bar,
            IndicatorVariant::Icon => &classes.icon,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorVariant::Bar => "bar",
            IndicatorVariant::Icon => "icon",
        }
    }
}

impl std::fmt::Display for IndicatorVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for IndicatorVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bar" => Ok(IndicatorVariant::Bar),
            "icon" => Ok(IndicatorVariant::Icon),
            _ => Err(format!("Unknown indicator variant: {}", s)),
        }
    }
}
