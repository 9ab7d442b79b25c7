//! Unit tests for the screen navigator.

use qio::managers::navigation::{Navigator, NavigatorTrait};
use qio::types::navigation::{Screen, TAB_SCREENS};

#[test]
fn test_initial_route_is_generator() {
    let nav = Navigator::new();
    assert_eq!(nav.current(), Screen::Generator);
    assert!(!nav.can_go_back());
}

#[test]
fn test_activate_tab_resets_stack() {
    let mut nav = Navigator::new();
    nav.activate_tab(Screen::Settings).unwrap();
    nav.push(Screen::About);
    assert_eq!(nav.stack().len(), 2);

    nav.activate_tab(Screen::History).unwrap();
    assert_eq!(nav.current(), Screen::History);
    assert_eq!(nav.stack(), &[Screen::History]);
}

#[test]
fn test_about_is_not_a_tab() {
    let mut nav = Navigator::new();
    assert!(nav.activate_tab(Screen::About).is_err());
    // Failed activation leaves the stack untouched
    assert_eq!(nav.current(), Screen::Generator);

    for tab in TAB_SCREENS {
        assert!(tab.is_tab());
    }
    assert!(!Screen::About.is_tab());
}

#[test]
fn test_push_and_pop() {
    let mut nav = Navigator::new();
    nav.activate_tab(Screen::Settings).unwrap();
    nav.push(Screen::About);

    assert_eq!(nav.current(), Screen::About);
    assert!(nav.can_go_back());

    assert!(nav.pop());
    assert_eq!(nav.current(), Screen::Settings);
}

#[test]
fn test_pop_at_root_is_noop() {
    let mut nav = Navigator::new();
    assert!(!nav.pop());
    assert_eq!(nav.current(), Screen::Generator);
}

#[test]
fn test_pushing_current_screen_is_noop() {
    let mut nav = Navigator::new();
    nav.push(Screen::About);
    nav.push(Screen::About);
    assert_eq!(nav.stack().len(), 2);
}

#[test]
fn test_screen_name_roundtrip() {
    for screen in [
        Screen::Generator,
        Screen::Scanner,
        Screen::History,
        Screen::Settings,
        Screen::About,
    ] {
        assert_eq!(Screen::from_str(screen.as_str()), Some(screen));
    }
    assert_eq!(Screen::from_str("nonsense"), None);
}
