//! Section navigation helpers.

pub const DEFAULT_SECTION: &str = "hero";
/// Distance above the viewport bottom at which scroll reveals trigger.
pub const REVEAL_OFFSET_PX: f64 = 150.0;
pub const REVEAL_STAGGER_MS: i32 = 100;
pub const SCROLL_DEBOUNCE_MS: i32 = 50;

/// Section id from a nav link href (`"#products"` → `"products"`).
pub fn section_from_href(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Section to show for a popped history entry.
pub fn section_for_history(state_page: Option<&str>) -> &str {
    match state_page {
        Some(page) if !page.is_empty() && page != "main" => page,
        _ => DEFAULT_SECTION,
    }
}

#[inline]
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_OFFSET_PX
}

/// Delay for the `index`-th element of a staggered reveal.
#[inline]
pub fn stagger_delay_ms(index: usize, base_ms: i32) -> i32 {
    index as i32 * REVEAL_STAGGER_MS + base_ms
}

/// Which enter keys open the site from the intro.
#[inline]
pub fn is_enter_key(code: &str) -> bool {
    matches!(code, "Enter" | "Space")
}
