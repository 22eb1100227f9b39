use super::*;
use crate::buffer::VecBuffer;
use crate::config::DEFAULT_WORD_SEPARATORS;

const SEPS: &str = DEFAULT_WORD_SEPARATORS;

fn apply(motion: Motion, buf: &VecBuffer, pos: Position, count: u32) -> MotionOutcome {
    motion.apply(buf, pos, count, MotionTarget::Normal, SEPS)
}

#[test]
fn test_classify_against_separator_set() {
    assert_eq!(classify('a', SEPS), CharKind::Word);
    assert_eq!(classify('_', SEPS), CharKind::Word);
    assert_eq!(classify('-', SEPS), CharKind::Punct);
    assert_eq!(classify(' ', SEPS), CharKind::Space);
    // Separator sets are host-configurable; '_' can become punctuation.
    assert_eq!(classify('_', "_"), CharKind::Punct);
    assert_eq!(classify('-', "_"), CharKind::Word);
}

#[test]
fn test_classify_big_ignores_punctuation() {
    assert_eq!(classify_big('-'), CharKind::Word);
    assert_eq!(classify_big('\t'), CharKind::Space);
}

#[test]
fn test_char_motions_clamp() {
    let buf = VecBuffer::from_text("abc\nx");
    assert_eq!(
        apply(Motion::Left, &buf, Position::new(0, 0), 1),
        MotionOutcome {
            pos: Position::new(0, 0),
            moved: false
        }
    );
    assert_eq!(apply(Motion::Right, &buf, Position::new(0, 1), 5).pos, Position::new(0, 2));
    // Down clamps the column to the shorter line.
    assert_eq!(apply(Motion::Down, &buf, Position::new(0, 2), 1).pos, Position::new(1, 0));
    assert_eq!(apply(Motion::Up, &buf, Position::new(1, 0), 9).pos, Position::new(0, 0));
}

#[test]
fn test_right_does_not_wrap() {
    let buf = VecBuffer::from_text("ab\ncd");
    assert_eq!(apply(Motion::Right, &buf, Position::new(0, 1), 3).pos, Position::new(0, 1));
}

#[test]
fn test_line_end_target_parameterization() {
    let buf = VecBuffer::from_text("hello");
    let normal = Motion::LineEnd.apply(&buf, Position::new(0, 0), 1, MotionTarget::Normal, SEPS);
    let operator = Motion::LineEnd.apply(&buf, Position::new(0, 0), 1, MotionTarget::Operator, SEPS);
    assert_eq!(normal.pos.col, 4);
    assert_eq!(operator.pos.col, 5);
}

#[test]
fn test_first_non_blank_and_goto() {
    let buf = VecBuffer::from_text("one\n   two\nthree");
    assert_eq!(apply(Motion::FirstNonBlank, &buf, Position::new(1, 7), 1).pos, Position::new(1, 3));
    assert_eq!(apply(Motion::GotoLine(2), &buf, Position::new(0, 0), 1).pos, Position::new(1, 3));
    assert_eq!(apply(Motion::GotoLine(99), &buf, Position::new(0, 0), 1).pos, Position::new(2, 0));
    assert_eq!(apply(Motion::FileEnd, &buf, Position::new(0, 0), 1).pos, Position::new(2, 0));
    assert_eq!(apply(Motion::FileStart, &buf, Position::new(2, 0), 1).pos, Position::new(0, 0));
}

#[test]
fn test_word_forward_stops_at_class_changes() {
    let buf = VecBuffer::from_text("foo->bar baz");
    let w = Motion::WordForward { big: false };
    assert_eq!(apply(w, &buf, Position::new(0, 0), 1).pos, Position::new(0, 3));
    assert_eq!(apply(w, &buf, Position::new(0, 3), 1).pos, Position::new(0, 5));
    assert_eq!(apply(w, &buf, Position::new(0, 5), 1).pos, Position::new(0, 9));
    // count composes the single steps
    assert_eq!(apply(w, &buf, Position::new(0, 0), 3).pos, Position::new(0, 9));
}

#[test]
fn test_big_word_forward_skips_punctuation() {
    let buf = VecBuffer::from_text("foo->bar baz");
    let w = Motion::WordForward { big: true };
    assert_eq!(apply(w, &buf, Position::new(0, 0), 1).pos, Position::new(0, 9));
}

#[test]
fn test_word_forward_crosses_lines() {
    let buf = VecBuffer::from_text("one\n\ntwo");
    let w = Motion::WordForward { big: false };
    assert_eq!(apply(w, &buf, Position::new(0, 0), 1).pos, Position::new(2, 0));
}

#[test]
fn test_word_back() {
    let buf = VecBuffer::from_text("foo->bar baz");
    let b = Motion::WordBack { big: false };
    assert_eq!(apply(b, &buf, Position::new(0, 9), 1).pos, Position::new(0, 5));
    assert_eq!(apply(b, &buf, Position::new(0, 5), 1).pos, Position::new(0, 3));
    assert_eq!(apply(b, &buf, Position::new(0, 0), 1).moved, false);
}

#[test]
fn test_word_end() {
    let buf = VecBuffer::from_text("foo bar");
    let e = Motion::WordEnd { big: false };
    assert_eq!(apply(e, &buf, Position::new(0, 0), 1).pos, Position::new(0, 2));
    assert_eq!(apply(e, &buf, Position::new(0, 2), 1).pos, Position::new(0, 6));
}

#[test]
fn test_word_end_crosses_lines() {
    let buf = VecBuffer::from_text("foo \nbar");
    let e = Motion::WordEnd { big: false };
    assert_eq!(apply(e, &buf, Position::new(0, 2), 1).pos, Position::new(1, 2));
}

#[test]
fn test_word_round_trip_never_overshoots() {
    let buf = VecBuffer::from_text("alpha beta gamma");
    let w = Motion::WordForward { big: false };
    let b = Motion::WordBack { big: false };
    for col in 0..16 {
        let origin = Position::new(0, col);
        let fwd = apply(w, &buf, origin, 1).pos;
        let back = apply(b, &buf, fwd, 1).pos;
        assert!(back <= origin, "w then b from col {col} overshot: {back:?}");
    }
}

#[test]
fn test_monotonic_count_equivalence() {
    // M(P, 1) applied n times equals M(P, n) for motions without
    // line-crossing special cases.
    let buf = VecBuffer::from_text("the quick brown fox jumps");
    for motion in [
        Motion::Right,
        Motion::WordForward { big: false },
        Motion::WordEnd { big: false },
    ] {
        let mut stepped = Position::new(0, 0);
        for _ in 0..3 {
            stepped = apply(motion, &buf, stepped, 1).pos;
        }
        assert_eq!(stepped, apply(motion, &buf, Position::new(0, 0), 3).pos, "{motion:?}");
    }
}

#[test]
fn test_find_and_till() {
    let buf = VecBuffer::from_text("abcabc");
    let f = |kind, ch| Motion::Find { ch, kind };
    assert_eq!(apply(f(FindKind::Find, 'c'), &buf, Position::new(0, 0), 1).pos, Position::new(0, 2));
    assert_eq!(apply(f(FindKind::Find, 'c'), &buf, Position::new(0, 0), 2).pos, Position::new(0, 5));
    assert_eq!(apply(f(FindKind::Till, 'c'), &buf, Position::new(0, 0), 1).pos, Position::new(0, 1));
    assert_eq!(apply(f(FindKind::FindBack, 'a'), &buf, Position::new(0, 5), 1).pos, Position::new(0, 3));
    assert_eq!(apply(f(FindKind::TillBack, 'a'), &buf, Position::new(0, 5), 1).pos, Position::new(0, 4));
}

#[test]
fn test_find_failure_does_not_move() {
    let buf = VecBuffer::from_text("abc\nxyz");
    let out = apply(Motion::Find { ch: 'x', kind: FindKind::Find }, &buf, Position::new(0, 0), 1);
    // Find scans the current line only.
    assert!(!out.moved);
    assert_eq!(out.pos, Position::new(0, 0));
}

#[test]
fn test_find_metadata() {
    assert!(Motion::Find { ch: 'x', kind: FindKind::Find }.is_inclusive());
    assert!(Motion::Find { ch: 'x', kind: FindKind::Till }.is_inclusive());
    assert!(!Motion::Find { ch: 'x', kind: FindKind::FindBack }.is_inclusive());
    assert!(Motion::Find { ch: 'x', kind: FindKind::Find }.aborts_operator_on_failure());
    assert!(!Motion::Right.aborts_operator_on_failure());
}

#[test]
fn test_linewise_metadata() {
    assert!(Motion::Down.is_linewise());
    assert!(Motion::GotoLine(3).is_linewise());
    assert!(!Motion::WordForward { big: false }.is_linewise());
    assert!(Motion::WordEnd { big: false }.is_inclusive());
    assert!(!Motion::WordForward { big: false }.is_inclusive());
}
