//! StoryCraft color palette.
//!
//! The same values appear as CSS custom properties in `styles.rs`; these
//! constants exist for inline styles and programmatic color work.

#![allow(dead_code)]

// === INK (Light-mode text and chrome) ===
pub const INK: &str = "#1f2433";
pub const INK_SOFT: &str = "rgba(31, 36, 51, 0.72)";
pub const INK_MUTED: &str = "rgba(31, 36, 51, 0.5)";

// === PARCHMENT (Light-mode surfaces) ===
pub const PARCHMENT: &str = "#f8f7fc";
pub const PARCHMENT_CARD: &str = "#ffffff";
pub const PARCHMENT_BORDER: &str = "#e4e2f0";

// === NIGHT (Dark-mode surfaces) ===
pub const NIGHT: &str = "#12101c";
pub const NIGHT_CARD: &str = "#1b1828";
pub const NIGHT_BORDER: &str = "#2b2740";

// === VIOLET (Brand, primary actions) ===
pub const VIOLET: &str = "#7c5cff";
pub const VIOLET_DEEP: &str = "#5a3fd4";
pub const VIOLET_GLOW: &str = "rgba(124, 92, 255, 0.35)";

// === ACCENTS (Stat gradients, covers) ===
pub const SKY: &str = "#4aa8ff";
pub const ORCHID: &str = "#b96bff";
pub const FERN: &str = "#3fc98a";
pub const EMBER: &str = "#ff9d6b";
