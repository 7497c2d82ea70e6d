use super::*;

#[test]
fn parses_theme_names() {
    assert_eq!(Theme::from_string("Emerald"), Theme::Emerald);
    assert_eq!(Theme::from_string("Red"), Theme::Red);
    assert_eq!(Theme::from_string("Plaid"), Theme::Blue);
}

#[test]
fn theme_names_round_trip_through_display() {
    for theme in Theme::iter() {
        assert_eq!(Theme::from_string(&theme.to_string()), theme);
    }
}

#[test]
fn next_theme_wraps_around() {
    assert_eq!(Theme::Blue.next(), Theme::Emerald);
    assert_eq!(Theme::Indigo.next(), Theme::Red);
    assert_eq!(Theme::Red.next(), Theme::Blue);
}

#[test]
fn basic_colors_without_true_color() {
    let colors = Theme::Emerald.colors(false);
    assert_eq!(colors.bar_bg, Color::Green);
    assert_eq!(colors.highlight, Color::LightYellow);
}

#[test]
fn tailwind_colors_with_true_color() {
    let colors = Theme::Indigo.colors(true);
    assert_eq!(colors.bar_bg, tailwind::INDIGO.c900);
    assert_eq!(colors.highlight, tailwind::AMBER.c400);
}

#[test]
fn every_theme_has_distinct_basic_bar() {
    let bars = Theme::iter()
        .map(|t| t.colors(false).bar_bg)
        .collect::<Vec<Color>>();

    assert_eq!(
        bars,
        vec![Color::Blue, Color::Green, Color::Magenta, Color::Red]
    );
    assert_eq!(Theme::Red.colors(false).page_title, Color::LightRed);
}
