//! Game catalog data model.
//!
//! One `GameRecord` per playable game page. Records are produced offline by
//! the content pipeline and compiled in as an immutable catalog; nothing at
//! runtime ever mutates them.

/// Base URL of the third-party game provider's embed endpoint. The embedded
/// document is opaque; we only ever construct its URL.
pub const EMBED_BASE_URL: &str = "https://slotslaunch.com/iframe";

/// Per-game metadata used to render a game page and its listing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub title: &'static str,
    pub slug: &'static str,
    /// Provider-side numeric id, used to build the embed URL.
    pub game_id: u32,
    /// Listing-card thumbnail, relative to the site root.
    pub thumb: &'static str,
    pub featured: bool,
    pub new_arrival: bool,
}

impl GameRecord {
    /// Site-local canonical path of this game's page.
    pub fn canonical_path(&self) -> String {
        format!("/games/{}", self.slug)
    }

    /// Full provider embed URL including the access token. The token is
    /// issued externally; we pass it through verbatim.
    pub fn iframe_url(&self, token: &str) -> String {
        format!("{}/{}?token={}", EMBED_BASE_URL, self.game_id, token)
    }
}

/// The compiled-in catalog. Order matters: listing pages render in this
/// order.
pub const CATALOG: &[GameRecord] = &[
    GameRecord {
        title: "15 Coins Grand Gold Edition",
        slug: "15-coins-grand-gold-edition",
        game_id: 19764,
        thumb: "/images/games/15-coins-grand-gold-edition.jpg",
        featured: true,
        new_arrival: true,
    },
    GameRecord {
        title: "Golden Pharaoh's Fortune",
        slug: "golden-pharaoh",
        game_id: 18102,
        thumb: "/images/games/golden-pharaoh.jpg",
        featured: true,
        new_arrival: false,
    },
    GameRecord {
        title: "Diamond Destiny",
        slug: "diamond-destiny",
        game_id: 17455,
        thumb: "/images/games/diamond-destiny.jpg",
        featured: true,
        new_arrival: false,
    },
    GameRecord {
        title: "Vegas Lightning",
        slug: "vegas-lightning",
        game_id: 16340,
        thumb: "/images/games/vegas-lightning.jpg",
        featured: true,
        new_arrival: false,
    },
    GameRecord {
        title: "Dragon's Fire",
        slug: "dragons-fire",
        game_id: 15918,
        thumb: "/images/games/dragons-fire.jpg",
        featured: true,
        new_arrival: false,
    },
    GameRecord {
        title: "Ocean Treasures",
        slug: "ocean-treasures",
        game_id: 15511,
        thumb: "/images/games/ocean-treasures.jpg",
        featured: true,
        new_arrival: false,
    },
    GameRecord {
        title: "Wild West Gold Rush",
        slug: "wild-west-gold",
        game_id: 20033,
        thumb: "/images/games/wild-west-gold.jpg",
        featured: false,
        new_arrival: true,
    },
    GameRecord {
        title: "Space Adventure",
        slug: "space-adventure",
        game_id: 20187,
        thumb: "/images/games/space-adventure.jpg",
        featured: false,
        new_arrival: true,
    },
    GameRecord {
        title: "Mystical Forest",
        slug: "mystical-forest",
        game_id: 20241,
        thumb: "/images/games/mystical-forest.jpg",
        featured: false,
        new_arrival: true,
    },
];

/// Look a game up by its URL slug.
pub fn find_game(slug: &str) -> Option<&'static GameRecord> {
    CATALOG.iter().find(|g| g.slug == slug)
}

pub fn featured_games() -> impl Iterator<Item = &'static GameRecord> {
    CATALOG.iter().filter(|g| g.featured)
}

pub fn new_arrivals() -> impl Iterator<Item = &'static GameRecord> {
    CATALOG.iter().filter(|g| g.new_arrival)
}
