pub mod about;
pub mod contact;
pub mod game;
pub mod games;
pub mod home;
pub mod legal;
pub mod not_found;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use game::GamePage;
pub use games::GamesPage;
pub use home::HomePage;
pub use legal::{LegalKind, LegalPage};
pub use not_found::NotFoundPage;
