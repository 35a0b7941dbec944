use core::str::FromStr;

use serde::{Deserialize, Serialize};

use closet_core::{DomainError, Entity, Money, ProductId};

/// Garment color, drawn from the brand's fixed palette.
///
/// Serialized as the display label (`"Gold Accent"`), which is also what
/// filter selections and cart lines carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
    Gray,
    Navy,
    #[serde(rename = "Gold Accent")]
    GoldAccent,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
            Color::Gray => "Gray",
            Color::Navy => "Navy",
            Color::GoldAccent => "Gold Accent",
        }
    }

    /// Swatch hex value for UI rendering.
    pub fn hex(self) -> &'static str {
        match self {
            Color::Black => "#1D1D1F",
            Color::White => "#FAFAFA",
            Color::Gray => "#9CA3AF",
            Color::Navy => "#1E3A5F",
            Color::GoldAccent => "#D4AF37",
        }
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Black" => Ok(Color::Black),
            "White" => Ok(Color::White),
            "Gray" => Ok(Color::Gray),
            "Navy" => Ok(Color::Navy),
            "Gold Accent" => Ok(Color::GoldAccent),
            other => Err(DomainError::validation(format!(
                "unknown color: {other:?} (expected one of: Black, White, Gray, Navy, Gold Accent)"
            ))),
        }
    }
}

/// A catalog product.
///
/// Immutable reference data: defined at process start, never mutated. Sizes
/// keep their catalog order (display order matters, set semantics do not).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Unit price, VAT-inclusive.
    pub price: Money,
    pub sizes: Vec<String>,
    pub colors: Vec<Color>,
    pub image: String,
    pub description: String,
}

impl Product {
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    pub fn offers_color(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
