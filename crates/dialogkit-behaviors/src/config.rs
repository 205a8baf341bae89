#![forbid(unsafe_code)]

//! Presentation configuration.
//!
//! Builder-style structs with sensible defaults. With the `policy-config`
//! feature a [`BehaviorConfig`] can be loaded from TOML:
//!
//! ```toml
//! presentation = "bottom_sheet"
//!
//! [sheet]
//! peek_ratio = 0.3
//!
//! [style]
//! background = 0xFFFFFFFF
//! corner_radius = 16.0
//! cancel_on_touch_outside = true
//! ```

use dialogkit_core::PackedRgba;

use crate::error::{BehaviorError, Result};
use crate::strategy::PresentationKind;

/// Peek height inputs of a bottom sheet.
///
/// At most one of the two is meaningful; `peek_ratio` wins when both are
/// set. With neither, the sheet peeks at 60% of the window height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetConfig {
    /// Minimum peek height in pixels.
    pub peek_height: Option<u32>,
    /// Minimum peek height as a fraction of the window height, in `(0, 1]`.
    pub peek_ratio: Option<f32>,
}

impl SheetConfig {
    pub fn peek_height(mut self, px: u32) -> Self {
        self.peek_height = Some(px);
        self
    }

    pub fn peek_ratio(mut self, ratio: f32) -> Self {
        self.peek_ratio = Some(ratio);
        self
    }

    /// Check both inputs, whichever are set.
    pub fn validate(&self) -> Result<()> {
        if let Some(ratio) = self.peek_ratio {
            validate_peek_ratio(ratio)?;
        }
        if let Some(px) = self.peek_height {
            validate_peek_height(px)?;
        }
        Ok(())
    }
}

pub(crate) fn validate_peek_ratio(ratio: f32) -> Result<f32> {
    if ratio.is_finite() && ratio > 0.0 && ratio <= 1.0 {
        Ok(ratio)
    } else {
        Err(BehaviorError::InvalidPeekRatio(ratio))
    }
}

pub(crate) fn validate_peek_height(px: u32) -> Result<u32> {
    if px == 0 {
        Err(BehaviorError::InvalidPeekHeight(px))
    } else {
        Ok(px)
    }
}

/// Appearance and window inputs the dialog controller hands to a strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DialogStyle {
    /// Background fill.
    pub background: PackedRgba,
    /// Corner radius in pixels.
    pub corner_radius: f32,
    /// Width cap. `None` uses the strategy default; `Some(0)` postpones
    /// window sizing until [`DialogController::relayout`](crate::DialogController::relayout).
    pub max_width: Option<u32>,
    /// Whether a tap outside the dialog content cancels it.
    pub cancel_on_touch_outside: bool,
}

impl Default for DialogStyle {
    fn default() -> Self {
        Self {
            background: PackedRgba::WHITE,
            corner_radius: 4.0,
            max_width: None,
            cancel_on_touch_outside: true,
        }
    }
}

impl DialogStyle {
    pub fn background(mut self, color: PackedRgba) -> Self {
        self.background = color;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn max_width(mut self, max_width: Option<u32>) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn cancel_on_touch_outside(mut self, cancel: bool) -> Self {
        self.cancel_on_touch_outside = cancel;
        self
    }
}

/// Everything needed to build and style one dialog presentation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorConfig {
    pub presentation: PresentationKind,
    pub sheet: SheetConfig,
    pub style: DialogStyle,
}

impl BehaviorConfig {
    pub fn presentation(mut self, kind: PresentationKind) -> Self {
        self.presentation = kind;
        self
    }

    pub fn sheet(mut self, sheet: SheetConfig) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn style(mut self, style: DialogStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(feature = "policy-config")]
impl BehaviorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|err| BehaviorError::Config(err.to_string()))?;
        config.sheet.validate()?;
        tracing::debug!(
            presentation = %config.presentation,
            "loaded presentation config"
        );
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|err| BehaviorError::Config(format!("{}: {err}", path.display())))?;
        Self::from_toml_str(&source)
    }
}
