// Small shared helpers.

/// Browser tab title for a game page, e.g. "Diamond Destiny - Jonsslots".
pub fn page_title(game_title: &str, site_name: &str) -> String {
    format!("{} - {}", game_title, site_name)
}

/// Sets the document title; no-op outside a browser context.
pub fn set_document_title(title: &str) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}

/// Current year for the footer copyright line.
pub fn copyright_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_title_contains_game_and_site() {
        let title = page_title("15 Coins Grand Gold Edition", "Jonsslots");
        assert!(title.contains("15 Coins Grand Gold Edition"));
        assert_eq!(title, "15 Coins Grand Gold Edition - Jonsslots");
    }
}
