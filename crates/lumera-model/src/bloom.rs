use serde::{Deserialize, Serialize};
use strum::EnumIter;
use thiserror::Error;
use utoipa::openapi::{RefOr, Schema};
use utoipa::{PartialSchema, ToSchema, schema};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("bloom level {0} is outside 1..=6")]
pub struct InvalidBloomLevel(pub i64);

/// Bloom's taxonomy stage, numbered 1 (remember) to 6 (create).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum BloomLevel {
    Remember = 1,
    Understand = 2,
    Apply = 3,
    Analyze = 4,
    Evaluate = 5,
    Create = 6,
}

impl BloomLevel {
    pub const LOWEST: Self = Self::Remember;
    pub const HIGHEST: Self = Self::Create;

    #[must_use]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Saturates at [`BloomLevel::LOWEST`] and [`BloomLevel::HIGHEST`].
    #[must_use]
    pub fn clamped(level: i64) -> Self {
        match level {
            i64::MIN..=1 => Self::Remember,
            2 => Self::Understand,
            3 => Self::Apply,
            4 => Self::Analyze,
            5 => Self::Evaluate,
            _ => Self::Create,
        }
    }

    #[must_use]
    pub fn raise(self) -> Self {
        Self::clamped(i64::from(self.number()) + 1)
    }

    #[must_use]
    pub fn lower(self) -> Self {
        Self::clamped(i64::from(self.number()) - 1)
    }

    /// Display name used in learner facing texts.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Remember => "Recordar",
            Self::Understand => "Comprender",
            Self::Apply => "Aplicar",
            Self::Analyze => "Analizar",
            Self::Evaluate => "Evaluar",
            Self::Create => "Crear",
        }
    }
}

impl From<BloomLevel> for u8 {
    fn from(level: BloomLevel) -> Self {
        level.number()
    }
}

impl From<BloomLevel> for i16 {
    fn from(level: BloomLevel) -> Self {
        i16::from(level.number())
    }
}

impl TryFrom<i64> for BloomLevel {
    type Error = InvalidBloomLevel;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=6).contains(&value) {
            Ok(Self::clamped(value))
        } else {
            Err(InvalidBloomLevel(value))
        }
    }
}

impl TryFrom<u8> for BloomLevel {
    type Error = InvalidBloomLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<i16> for BloomLevel {
    type Error = InvalidBloomLevel;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl PartialSchema for BloomLevel {
    fn schema() -> RefOr<Schema> {
        schema!(u8).into()
    }
}

impl ToSchema for BloomLevel {}
