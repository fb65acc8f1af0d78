//! StoryCraft Core Library
//!
//! Coordination state for the StoryCraft client: theme resolution, the
//! auth-gated navigation gate, responsive surface selection, and transient
//! dock tooltips. The identity provider, router, and persisted storage are
//! capabilities supplied by the surrounding app; presentational components
//! consume this crate's outputs and carry no decision logic of their own.
//!
//! ## Core Principles
//!
//! - **Single-flight tooltips**: at most one dock tooltip is active per dock,
//!   and a superseded expiry timer can never clear a newer tooltip
//! - **Idempotent theme application**: resolving the theme twice observes the
//!   same mode; persisted storage and visual state agree after every mutation
//! - **Deferred-action gating**: gated destinations open the sign-in prompt
//!   instead of navigating; the prompt's own flow owns what happens next
//!
//! ## Quick Start
//!
//! ```ignore
//! use storycraft_core::{
//!     marketing_catalog, AuthGatedNavigator, DockController, DockEntry,
//! };
//!
//! let gate = AuthGatedNavigator::new(identity, router);
//! let entries = marketing_catalog()
//!     .destinations()
//!     .iter()
//!     .map(|d| DockEntry::Destination(*d))
//!     .collect();
//! let mut dock = DockController::new(gate, entries);
//!
//! // One user gesture: tooltip + gate evaluation in the same turn.
//! let (ticket, effect) = dock.tap("Dashboard", Instant::now()).unwrap();
//! ```

pub mod catalog;
pub mod dock;
pub mod error;
pub mod navigator;
pub mod settings;
pub mod surface;
pub mod theme;
pub mod tooltip;

// Re-exports
pub use catalog::{marketing_catalog, sidebar_catalog, NavDestination, NavigationCatalog};
pub use dock::{DockController, DockEffect, DockEntry};
pub use error::CoreError;
pub use navigator::{AuthGatedNavigator, IdentityProvider, NavEffect, NavigationHandler};
pub use settings::{JsonFileSettings, MemorySettings, Settings};
pub use surface::{ResponsiveSurfaceSelector, SurfaceMode, WIDE_LAYOUT_MIN_WIDTH};
pub use theme::{AppearanceSink, ThemeController, ThemeMode, THEME_STORAGE_KEY};
pub use tooltip::{TooltipScheduler, TooltipTicket, TOOLTIP_VISIBLE_FOR};
