use crate::Colors;

#[test]
fn off_by_default() {
    let colors = Colors::default();
    assert_eq!(colors, Colors::OFF);
    assert!(!colors.is_enabled());
}

#[test]
fn new_selects_palette() {
    assert_eq!(Colors::new(true), Colors::ON);
    assert_eq!(Colors::new(false), Colors::OFF);
    assert!(Colors::new(true).is_enabled());
}

#[test]
fn paint_wraps_only_when_enabled() {
    let on = Colors::ON;
    assert_eq!(on.paint(on.green, "abc"), "\x1b[32mabc\x1b[0m");

    let off = Colors::OFF;
    assert_eq!(off.paint(off.green, "abc"), "abc");
}
