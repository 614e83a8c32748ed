use rowan::TextSize;

use crate::line_index::LineIndex;

#[test]
fn single_line() {
    let index = LineIndex::new("1 + 2");
    assert_eq!(index.position(0), (1, 0));
    assert_eq!(index.position(4), (1, 4));
    assert_eq!(index.line_count(), 1);
}

#[test]
fn newline_starts_next_line() {
    let index = LineIndex::new("a\nbc\n\nd");
    assert_eq!(index.position(1), (1, 1));
    assert_eq!(index.position(2), (2, 0));
    assert_eq!(index.position(3), (2, 1));
    assert_eq!(index.position(5), (3, 0));
    assert_eq!(index.position(6), (4, 0));
    assert_eq!(index.line_count(), 4);
}

#[test]
fn columns_count_characters() {
    let source = "'é' + 1";
    let index = LineIndex::new(source);
    let plus = source.find('+').unwrap();
    assert_eq!(plus, 5);
    assert_eq!(index.position(plus), (1, 4));
}

#[test]
fn offsets_past_end_clamp() {
    let index = LineIndex::new("ab\nc");
    assert_eq!(index.position(4), (2, 1));
    assert_eq!(index.position(100), (2, 1));
    assert_eq!(index.position_at(TextSize::from(3)), (2, 0));
}

#[test]
fn empty_source() {
    let index = LineIndex::new("");
    assert_eq!(index.position(0), (1, 0));
    assert_eq!(index.line_count(), 1);
}
