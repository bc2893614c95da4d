// Host-side tests for theme tables and persistence values.

use simba_core::constants::*;
use simba_core::theme::*;

#[test]
fn storage_round_trip() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(Theme::from_storage(Some(theme.as_storage_str())), theme);
    }
    // Missing or garbage values fall back to dark
    assert_eq!(Theme::from_storage(None), Theme::Dark);
    assert_eq!(Theme::from_storage(Some("sepia")), Theme::Dark);
}

#[test]
fn toggle_flips_and_restores() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    assert!(Theme::from_is_light(true).is_light());
    assert!(!Theme::from_is_light(false).is_light());
}

#[test]
fn apply_theme_is_idempotent_and_reversible() {
    let dark = apply_theme(Theme::Dark);
    let light = apply_theme(Theme::Light);
    assert_eq!(apply_theme(Theme::Dark), dark);
    assert_ne!(dark, light);
    // Light then dark restores every dark value
    let _ = apply_theme(Theme::Light);
    assert_eq!(apply_theme(Theme::Dark), dark);
}

#[test]
fn light_theme_is_brighter_but_blooms_less() {
    let dark = apply_theme(Theme::Dark);
    let light = apply_theme(Theme::Light);
    assert_eq!(dark.background, hex_to_rgb(DARK_BACKGROUND_HEX));
    assert_eq!(light.background, hex_to_rgb(LIGHT_BACKGROUND_HEX));
    assert!(light.ambient_intensity > dark.ambient_intensity);
    assert!(light.exposure > dark.exposure);
    assert!(light.bloom_strength < dark.bloom_strength);
    assert_eq!(dark.fog_color, dark.background);
}

#[test]
fn viewer_tables_differ_per_theme() {
    let dark = ViewerLighting::for_theme(Theme::Dark);
    let light = ViewerLighting::for_theme(Theme::Light);
    assert_eq!(dark.exposure, 1.5);
    assert_eq!(light.exposure, 1.2);
    assert!(light.ambient_intensity > dark.ambient_intensity);
}
