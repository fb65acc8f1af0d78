//! UI components for StoryCraft.

mod community;
mod cta_banner;
mod dashboard_content;
mod features;
mod footer;
mod hero;
pub mod icons;
mod nav_dock;
mod nav_header;
mod sidebar;
mod sign_in_modal;

pub use community::Community;
pub use cta_banner::CtaBanner;
pub use dashboard_content::{ActivityEntry, DashboardContent, Story};
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav_dock::NavDock;
pub use nav_header::Header;
pub use sidebar::SidebarShell;
pub use sign_in_modal::SignInModal;
