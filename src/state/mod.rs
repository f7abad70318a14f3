//! Client-side UI state containers.
//!
//! State lives in explicit stores built at startup and handed to consumers,
//! never in ambient globals. Stores notify observers through watch channels,
//! so a late subscriber sees only the latest snapshot.

pub mod sidebar;

pub use sidebar::{SidebarState, SidebarStore};
