//! Surface color inputs.
//!
//! A box's faces are colored either by one color for everything or by a
//! map of faces to colors, where `all` fills in any face left out.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, IntoStaticStr};
use tinct_color::Color;

/// A surface entry: the `all` fallback or one of the six faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Surface {
    /// Fallback for faces without their own color
    All,
    /// Top face
    Top,
    /// Bottom face
    Bottom,
    /// Front face
    Front,
    /// Back face
    Back,
    /// Left face
    Left,
    /// Right face
    Right,
}

impl Surface {
    /// The six faces, without [`Surface::All`].
    pub const FACES: [Self; 6] = [
        Self::Top,
        Self::Bottom,
        Self::Front,
        Self::Back,
        Self::Left,
        Self::Right,
    ];

    /// Short suffix used by the flat layout: `--s{suffix}`.
    #[must_use]
    pub const fn short_suffix(self) -> &'static str {
        match self {
            Self::All => "a",
            Self::Top => "t",
            Self::Bottom => "b",
            Self::Front => "f",
            Self::Back => "bk",
            Self::Left => "l",
            Self::Right => "r",
        }
    }
}

/// Per-face colors. Every entry is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SideColors {
    /// Used for any face without its own entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<Color>,
    /// Top face
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Color>,
    /// Bottom face
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Color>,
    /// Front face
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front: Option<Color>,
    /// Back face
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back: Option<Color>,
    /// Left face
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Color>,
    /// Right face
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Color>,
}

impl SideColors {
    /// Only an `all` entry.
    #[must_use]
    pub const fn all(color: Color) -> Self {
        Self {
            all: Some(color),
            top: None,
            bottom: None,
            front: None,
            back: None,
            left: None,
            right: None,
        }
    }

    /// The entry written for `surface`, without fallback.
    #[must_use]
    pub const fn get(&self, surface: Surface) -> Option<&Color> {
        match surface {
            Surface::All => self.all.as_ref(),
            Surface::Top => self.top.as_ref(),
            Surface::Bottom => self.bottom.as_ref(),
            Surface::Front => self.front.as_ref(),
            Surface::Back => self.back.as_ref(),
            Surface::Left => self.left.as_ref(),
            Surface::Right => self.right.as_ref(),
        }
    }

    /// The color for `surface`, falling back to `all` when the face has no
    /// entry of its own.
    #[must_use]
    pub fn resolve(&self, surface: Surface) -> Option<&Color> {
        self.get(surface).or(self.all.as_ref())
    }
}

/// Colors for a box's surfaces: one color, or a per-face map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SurfaceColors {
    /// The same color on every face
    Single(Color),
    /// Face-specific colors
    Sides(SideColors),
}

impl Default for SurfaceColors {
    /// Red on every face.
    fn default() -> Self {
        Self::Single(Color::from("red"))
    }
}

impl SurfaceColors {
    /// Normalize to the per-face form: a single color becomes `all`.
    #[must_use]
    pub fn into_sides(self) -> SideColors {
        match self {
            Self::Single(color) => SideColors::all(color),
            Self::Sides(sides) => sides,
        }
    }
}

impl From<Color> for SurfaceColors {
    fn from(color: Color) -> Self {
        Self::Single(color)
    }
}
