//! Strategy selectors and option bundles for `chunk` and `zip`.
//!
//! Strategy names use the camelCase spelling (`dropEnd`, `keepEnd`, ...)
//! both for [`FromStr`] and, with the `serde` feature, on the wire.

use std::fmt;
use std::str::FromStr;

use crate::SeqError;

/// What `chunk` does with a trailing partial group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ChunkStrategy {
    /// Discard it.
    #[default]
    DropEnd,
    /// Emit it shorter than `size`.
    KeepEnd,
    /// Fill the missing slots with the fill value.
    PadEnd,
    /// Fail with [`SeqError::IncompleteChunk`].
    Strict,
}

impl ChunkStrategy {
    /// Canonical name of the strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            ChunkStrategy::DropEnd => "dropEnd",
            ChunkStrategy::KeepEnd => "keepEnd",
            ChunkStrategy::PadEnd => "padEnd",
            ChunkStrategy::Strict => "strict",
        }
    }
}

impl fmt::Display for ChunkStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChunkStrategy {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dropEnd" => Ok(ChunkStrategy::DropEnd),
            "keepEnd" => Ok(ChunkStrategy::KeepEnd),
            "padEnd" => Ok(ChunkStrategy::PadEnd),
            "strict" => Ok(ChunkStrategy::Strict),
            other => {
                tracing::debug!(value = other, "rejected chunk strategy");
                Err(SeqError::UnknownStrategy {
                    kind: "chunk",
                    value: other.to_string(),
                })
            }
        }
    }
}

/// How `zip` treats iterables of different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ZipStrategy {
    /// Stop at the first exhausted iterable.
    #[default]
    Shortest,
    /// Continue until every iterable is exhausted, filling gaps.
    Longest,
    /// Fail with [`SeqError::ZipLengthMismatch`] on unequal lengths.
    Strict,
}

impl ZipStrategy {
    /// Canonical name of the strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            ZipStrategy::Shortest => "shortest",
            ZipStrategy::Longest => "longest",
            ZipStrategy::Strict => "strict",
        }
    }
}

impl fmt::Display for ZipStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZipStrategy {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shortest" => Ok(ZipStrategy::Shortest),
            "longest" => Ok(ZipStrategy::Longest),
            "strict" => Ok(ZipStrategy::Strict),
            other => {
                tracing::debug!(value = other, "rejected zip strategy");
                Err(SeqError::UnknownStrategy {
                    kind: "zip",
                    value: other.to_string(),
                })
            }
        }
    }
}

/// Options for [`chunk`](crate::chunk).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChunkOptions<T> {
    /// Trailing-group policy (default `dropEnd`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub strategy: ChunkStrategy,
    /// Value used by `padEnd`.
    pub fill_value: Option<T>,
}

impl<T> Default for ChunkOptions<T> {
    fn default() -> Self {
        Self {
            strategy: ChunkStrategy::default(),
            fill_value: None,
        }
    }
}

impl<T> ChunkOptions<T> {
    /// `dropEnd` options.
    pub fn drop_end() -> Self {
        Self::default()
    }

    /// `keepEnd` options.
    pub fn keep_end() -> Self {
        Self::default().with_strategy(ChunkStrategy::KeepEnd)
    }

    /// `padEnd` options filling with `fill`.
    pub fn pad_end(fill: T) -> Self {
        Self::default()
            .with_strategy(ChunkStrategy::PadEnd)
            .with_fill_value(fill)
    }

    /// `strict` options.
    pub fn strict() -> Self {
        Self::default().with_strategy(ChunkStrategy::Strict)
    }

    /// Replace the strategy.
    pub fn with_strategy(mut self, strategy: ChunkStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the fill value.
    pub fn with_fill_value(mut self, fill: T) -> Self {
        self.fill_value = Some(fill);
        self
    }
}

/// Options for [`zip`](crate::zip).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ZipOptions<T> {
    /// Length policy (default `shortest`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub strategy: ZipStrategy,
    /// Value used by `longest` for exhausted iterables.
    pub fill_value: Option<T>,
}

impl<T> Default for ZipOptions<T> {
    fn default() -> Self {
        Self {
            strategy: ZipStrategy::default(),
            fill_value: None,
        }
    }
}

impl<T> ZipOptions<T> {
    /// `shortest` options.
    pub fn shortest() -> Self {
        Self::default()
    }

    /// `longest` options filling with `fill`.
    pub fn longest(fill: T) -> Self {
        Self::default()
            .with_strategy(ZipStrategy::Longest)
            .with_fill_value(fill)
    }

    /// `strict` options.
    pub fn strict() -> Self {
        Self::default().with_strategy(ZipStrategy::Strict)
    }

    /// Replace the strategy.
    pub fn with_strategy(mut self, strategy: ZipStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the fill value.
    pub fn with_fill_value(mut self, fill: T) -> Self {
        self.fill_value = Some(fill);
        self
    }
}
