pub mod frame;
pub mod sidebar;

pub use frame::FrameLoadState;
pub use sidebar::SidebarState;
