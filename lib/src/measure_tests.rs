use super::*;

#[test]
fn cell_width_counts_display_cells() {
    assert_eq!(CellWidth.measure("Inbox"), 5.0);
    assert_eq!(CellWidth.measure(""), 0.0);
}

#[test]
fn cell_width_counts_wide_characters_twice() {
    // CJK ideographs occupy two terminal cells each
    assert_eq!(CellWidth.measure("日本"), 4.0);
}

#[test]
fn closures_measure_text() {
    let measure = |text: &str| text.len() as f32 * 7.5;
    assert_eq!(measure.measure("ab"), 15.0);
}
