#![forbid(unsafe_code)]

//! Error type for presentation behaviors.

use dialogkit_core::ViewId;

/// Errors from behavior configuration and view construction.
///
/// Conditions that are part of normal teardown (missing references after a
/// dismissal, a postponed width, double dismissal) are not errors and never
/// surface here.
#[derive(Debug, Clone, PartialEq)]
pub enum BehaviorError {
    /// Peek ratio outside `(0.0, 1.0]` or not finite.
    InvalidPeekRatio(f32),
    /// Absolute peek height of zero.
    InvalidPeekHeight(u32),
    /// The inflated layout lacks a view the behavior needs.
    MissingView(ViewId),
    /// `create_view` was called while the behavior is still presented.
    AlreadyPresented,
    /// A configuration document could not be parsed.
    Config(String),
}

impl std::fmt::Display for BehaviorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPeekRatio(ratio) => {
                write!(f, "peek height ratio {ratio} is outside (0, 1]")
            }
            Self::InvalidPeekHeight(px) => write!(f, "peek height {px}px must be non-zero"),
            Self::MissingView(id) => write!(f, "layout has no view '{id}'"),
            Self::AlreadyPresented => write!(f, "behavior is already presenting a dialog"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for BehaviorError {}

/// Result alias for behavior operations.
pub type Result<T> = std::result::Result<T, BehaviorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            BehaviorError::InvalidPeekRatio(1.5).to_string(),
            "peek height ratio 1.5 is outside (0, 1]"
        );
        assert_eq!(
            BehaviorError::MissingView(ViewId::BOTTOM_SHEET_PANEL).to_string(),
            "layout has no view 'bottom_sheet_panel'"
        );
    }
}
