//! Site-wide configuration shared through the component tree.

/// Static site identity plus the provider embed token. Built once at startup
/// and provided via `ContextProvider`; pages only ever read it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_name: String,
    pub domain: String,
    pub tagline: String,
    /// Access token appended to every provider iframe URL. Issued by the
    /// game provider; its validity/expiry is not verifiable here.
    pub embed_token: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Jonsslots".into(),
            domain: "jonsslots.com".into(),
            tagline: "Experience the thrill of Las Vegas with our exciting slot machines, massive jackpots, and non-stop entertainment.".into(),
            embed_token: "demo-preview-token".into(),
        }
    }
}
