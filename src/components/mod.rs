pub mod app;
pub mod breadcrumb;
pub mod footer;
pub mod game_card;
pub mod game_frame;
pub mod layout;
pub mod sidebar;

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests;

pub use app::App;
pub use breadcrumb::Breadcrumb;
pub use footer::Footer;
pub use game_card::GameCard;
pub use game_frame::GameFrame;
pub use layout::Layout;
pub use sidebar::Sidebar;
