use super::*;
use crate::buffer::VecBuffer;
use pretty_assertions::assert_eq;

fn settings() -> Settings {
    Settings::default()
}

fn range(sl: usize, sc: usize, el: usize, ec: usize) -> Range {
    Range::new(Position::new(sl, sc), Position::new(el, ec))
}

#[test]
fn test_resolve_exclusive_passes_through() {
    let buf = VecBuffer::from_text("hello world");
    let r = resolve_range(&buf, range(0, 2, 0, 7), RangeKind::Exclusive);
    assert_eq!(r, range(0, 2, 0, 7));
}

#[test]
fn test_resolve_inclusive_extends_end() {
    let buf = VecBuffer::from_text("hello world");
    let r = resolve_range(&buf, range(0, 2, 0, 7), RangeKind::Inclusive);
    assert_eq!(r, range(0, 2, 0, 8));
    // Inclusive end clamps at end of line rather than swallowing the
    // terminator.
    let r = resolve_range(&buf, range(0, 2, 0, 11), RangeKind::Inclusive);
    assert_eq!(r, range(0, 2, 0, 11));
}

#[test]
fn test_resolve_normalizes_backward_ranges() {
    let buf = VecBuffer::from_text("hello world");
    let r = resolve_range(&buf, range(0, 7, 0, 2), RangeKind::Exclusive);
    assert_eq!(r, range(0, 2, 0, 7));
}

#[test]
fn test_resolve_linewise_snaps_full_lines() {
    let buf = VecBuffer::from_text("one\ntwo\nthree");
    let r = resolve_range(&buf, range(1, 2, 1, 0), RangeKind::Linewise);
    assert_eq!(r, range(1, 0, 2, 0));
}

#[test]
fn test_resolve_linewise_at_buffer_end_takes_previous_terminator() {
    let buf = VecBuffer::from_text("one\ntwo\nthree");
    let r = resolve_range(&buf, range(1, 1, 2, 0), RangeKind::Linewise);
    assert_eq!(r, range(0, 3, 2, 5));
}

#[test]
fn test_delete_charwise() {
    let buf = VecBuffer::from_text("hello world");
    let effect = Operator::Delete.apply(&buf, range(0, 0, 0, 6), RangeKind::Exclusive, &settings());
    assert_eq!(effect.yanked.as_deref(), Some("hello "));
    assert_eq!(effect.cursor, Some(Position::new(0, 0)));
    assert!(!effect.enter_insert);

    let mut after = buf.clone();
    after.apply(effect.edit.as_ref().unwrap());
    assert_eq!(after.to_text(), "world");
}

#[test]
fn test_delete_cursor_clamps_to_shortened_line() {
    let buf = VecBuffer::from_text("hello");
    let effect = Operator::Delete.apply(&buf, range(0, 3, 0, 5), RangeKind::Exclusive, &settings());
    // "hel" remains; the cursor cannot rest past its last character.
    assert_eq!(effect.cursor, Some(Position::new(0, 2)));
}

#[test]
fn test_delete_linewise() {
    let buf = VecBuffer::from_text("one\n  two\nthree");
    let effect = Operator::Delete.apply(&buf, range(1, 3, 1, 1), RangeKind::Linewise, &settings());
    assert_eq!(effect.yanked.as_deref(), Some("  two\n"));

    let mut after = buf.clone();
    after.apply(effect.edit.as_ref().unwrap());
    assert_eq!(after.to_text(), "one\nthree");
    assert_eq!(effect.cursor, Some(Position::new(1, 0)));
}

#[test]
fn test_delete_is_pure_over_a_snapshot() {
    // Applying the computed edit and re-inserting the captured text
    // restores the original content exactly.
    let buf = VecBuffer::from_text("alpha beta gamma");
    let r = range(0, 6, 0, 11);
    let effect = Operator::Delete.apply(&buf, r, RangeKind::Exclusive, &settings());

    let mut roundtrip = buf.clone();
    roundtrip.apply(effect.edit.as_ref().unwrap());
    roundtrip.apply(&BufferEdit::Insert {
        at: r.start,
        text: effect.yanked.clone().unwrap(),
    });
    assert_eq!(roundtrip.to_text(), buf.to_text());

    // The source snapshot itself was never touched.
    assert_eq!(buf.to_text(), "alpha beta gamma");
}

#[test]
fn test_change_charwise_enters_insert() {
    let buf = VecBuffer::from_text("hello world");
    let effect = Operator::Change.apply(&buf, range(0, 6, 0, 10), RangeKind::Inclusive, &settings());
    assert!(effect.enter_insert);
    assert_eq!(effect.cursor, Some(Position::new(0, 6)));

    let mut after = buf.clone();
    after.apply(effect.edit.as_ref().unwrap());
    assert_eq!(after.to_text(), "hello ");
}

#[test]
fn test_change_linewise_keeps_an_empty_line() {
    let buf = VecBuffer::from_text("aa\nbb\ncc");
    let effect = Operator::Change.apply(&buf, range(0, 1, 1, 0), RangeKind::Linewise, &settings());
    assert!(effect.enter_insert);
    assert_eq!(effect.cursor, Some(Position::new(0, 0)));
    assert_eq!(effect.yanked.as_deref(), Some("aa\nbb\n"));

    let mut after = buf.clone();
    after.apply(effect.edit.as_ref().unwrap());
    assert_eq!(after.to_text(), "\ncc");
}

#[test]
fn test_yank_never_edits() {
    let buf = VecBuffer::from_text("hello world");
    let effect = Operator::Yank.apply(&buf, range(0, 0, 0, 5), RangeKind::Exclusive, &settings());
    assert_eq!(effect.edit, None);
    assert_eq!(effect.yanked.as_deref(), Some("hello"));
    assert_eq!(effect.cursor, Some(Position::new(0, 0)));
}

#[test]
fn test_yank_linewise_includes_terminator() {
    let buf = VecBuffer::from_text("one\ntwo");
    let effect = Operator::Yank.apply(&buf, range(1, 0, 1, 0), RangeKind::Linewise, &settings());
    assert_eq!(effect.yanked.as_deref(), Some("two\n"));
}

#[test]
fn test_yank_cursor_configurable() {
    let buf = VecBuffer::from_text("hello");
    let mut s = settings();
    s.yank_moves_cursor = false;
    let effect = Operator::Yank.apply(&buf, range(0, 1, 0, 4), RangeKind::Exclusive, &s);
    assert_eq!(effect.cursor, None);
}

#[test]
fn test_indent_widens_to_lines() {
    let buf = VecBuffer::from_text("fn main() {\nbody\n}");
    // A characterwise range still indents whole lines.
    let effect = Operator::Indent.apply(&buf, range(1, 2, 1, 3), RangeKind::Exclusive, &settings());
    let mut after = buf.clone();
    after.apply(effect.edit.as_ref().unwrap());
    assert_eq!(after.to_text(), "fn main() {\n    body\n}");
    assert_eq!(effect.cursor, Some(Position::new(1, 4)));
}

#[test]
fn test_indent_skips_empty_lines() {
    let buf = VecBuffer::from_text("a\n\nb");
    let effect = Operator::Indent.apply(&buf, range(0, 0, 2, 0), RangeKind::Linewise, &settings());
    let mut after = buf.clone();
    after.apply(effect.edit.as_ref().unwrap());
    assert_eq!(after.to_text(), "    a\n\n    b");
}

#[test]
fn test_outdent_strips_spaces_and_tabs() {
    let buf = VecBuffer::from_text("    a\n\tb\n  c");
    let effect = Operator::Outdent.apply(&buf, range(0, 0, 2, 0), RangeKind::Linewise, &settings());
    let mut after = buf.clone();
    after.apply(effect.edit.as_ref().unwrap());
    assert_eq!(after.to_text(), "a\nb\nc");
}
