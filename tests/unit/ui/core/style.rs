use super::*;

#[test]
fn bold_is_the_only_attribute() {
    assert!(Mod::BOLD.contains(Mod::BOLD));
    assert!(Mod::BOLD.contains(Mod::NONE));
    assert!(!Mod::NONE.contains(Mod::BOLD));
    assert_eq!(Style::default().add_mod(Mod::BOLD).add_mod(Mod::BOLD).mods, Mod::BOLD);
}

#[test]
fn style_builder_sets_fields() {
    let s = Style::default().fg(Color::Indexed(3)).bg(Color::Reset);
    assert_eq!(s.fg, Some(Color::Indexed(3)));
    assert_eq!(s.bg, Some(Color::Reset));
    assert_eq!(s.mods, Mod::NONE);
}

#[test]
fn session_styles_are_distinct() {
    let s = Styles::default();
    assert_ne!(s.default, s.inverted);
    assert_ne!(s.default, s.bold);
    assert_ne!(s.default, s.box_line);
    assert!(s.bold.mods.contains(Mod::BOLD));
    assert_eq!(s.inverted.fg, Some(Color::BLACK));
    assert_eq!(s.inverted.bg, Some(Color::LIGHT_GRAY));
    assert_eq!(s.box_line.fg, Some(Color::GREEN));
}
