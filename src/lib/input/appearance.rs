//! Input type, variant and size options.

use ratatui::widgets::{BorderType, Borders, Padding};
use strum::{Display, EnumString};

/// Whether the field shows its text or obscures it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum InputType {
    /// Plain text
    #[default]
    Text,
    /// Obscured text that can be revealed
    Password,
}

/// Visual style of the input box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    /// Filled background without a border
    Filled,
    /// Full rounded border
    #[default]
    Outlined,
    /// Bottom border only
    Ghost,
}

impl Variant {
    /// Every variant.
    pub const ALL: [Variant; 3] =
        [Variant::Filled, Variant::Outlined, Variant::Ghost];

    /// Borders drawn around the input box.
    pub fn borders(self) -> Borders {
        match self {
            Variant::Filled => Borders::NONE,
            Variant::Outlined => Borders::ALL,
            Variant::Ghost => Borders::BOTTOM,
        }
    }

    /// Border line style.
    pub fn border_type(self) -> BorderType {
        match self {
            Variant::Outlined => BorderType::Rounded,
            _ => BorderType::Plain,
        }
    }

    /// Rows taken by the top and bottom borders.
    pub fn border_height(self) -> u16 {
        match self {
            Variant::Filled => 0,
            Variant::Outlined => 2,
            Variant::Ghost => 1,
        }
    }
}

/// Size of the input box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
pub enum Size {
    /// Compact, no vertical padding
    #[strum(serialize = "sm")]
    Small,
    /// Default size
    #[default]
    #[strum(serialize = "md")]
    Medium,
    /// Tall, with a blank line above and below the text
    #[strum(serialize = "lg")]
    Large,
}

impl Size {
    /// Every size.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Padding inside the input box.
    pub fn padding(self) -> Padding {
        match self {
            Size::Small => Padding::horizontal(1),
            Size::Medium => Padding::horizontal(2),
            Size::Large => Padding::symmetric(3, 1),
        }
    }

    /// Rows taken by the text line and its vertical padding.
    pub fn content_height(self) -> u16 {
        match self {
            Size::Large => 3,
            _ => 1,
        }
    }
}
