// Page hooks and timing constants for the web front-end

// Element ids
pub const INTRO_CANVAS_ID: &str = "intro-canvas";
pub const INTRO_CONTAINER_ID: &str = "intro-container";
pub const CAN_CONTAINER_ID: &str = "can-container";
pub const CAN_CONTAINER_CLASS: &str = "can-model-container";
pub const HERO_ID: &str = "hero";
pub const PRODUCTS_ID: &str = "products";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const THEME_SWITCH_ID: &str = "theme-switch";

// Selectors
pub const LOADER_SELECTOR: &str = ".loader-container";
pub const PROGRESS_SELECTOR: &str = ".progress";
pub const MAIN_CONTENT_SELECTOR: &str = ".main-content";
pub const ENTER_BUTTON_SELECTOR: &str = ".enter-btn";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = ".section";
pub const NAV_LIST_SELECTOR: &str = "nav ul";
pub const MOBILE_TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";
pub const CART_COUNT_SELECTOR: &str = ".cart-count";
pub const STORE_BUTTON_SELECTOR: &str = ".store-card .btn";
pub const PRODUCT_BUTTON_SELECTOR: &str = ".product-card .btn";
pub const SCROLL_REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub const MAIN_REVEAL_SELECTOR: &str =
    ".main-content h1, .main-content p, .main-content .product-item";
pub const SECTION_REVEAL_SELECTOR: &str = ".slide-up, .slide-down, .fade-in";

// Body class toggled by the theme switch
pub const LIGHT_THEME_CLASS: &str = "light-theme";

// Timings (ms)
pub const LOADER_FADE_MS: i32 = 500;
pub const INTRO_FADE_MS: i32 = 1000;
pub const CONTACT_RESTORE_MS: i32 = 5000;
pub const POPUP_REMOVE_MS: i32 = 300;
pub const POPUP_SHOW_MS: i32 = 100;
pub const RESIZE_DEBOUNCE_MS: i32 = 250;

// Longest simulation step after a stall (tab switch, debugger pause)
pub const MAX_FRAME_DELTA_SEC: f32 = 0.25;
