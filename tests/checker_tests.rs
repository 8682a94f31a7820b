mod common;

use common::{rectangle_answer, seg};
use mirrorgrid::canonical::{canonicalize, CanonicalKey};
use mirrorgrid::checker::{check, check_segments};
use mirrorgrid::geometry::{Grid, GridPoint};
use mirrorgrid::shapes::{all_shapes, KnownShape};
use rstest::rstest;

#[test]
fn test_rectangle_expected_edges() {
    let grid = Grid::default();
    let shape = KnownShape::Rectangle.definition();
    let expected = canonicalize(&shape.expected_segments(&grid), grid.center_col());

    // Rows 2 and 8 from column 5 to 8, plus column 8 from row 2 to 8.
    assert_eq!(expected.len(), 3 + 3 + 6);
    assert!(expected
        .iter()
        .all(|k| (5..=8).contains(&k.a.col) && (2..=8).contains(&k.a.row)));
}

#[test]
fn test_rectangle_drawn_in_three_strokes_is_correct() {
    let grid = Grid::default();
    let shape = KnownShape::Rectangle.definition();

    let verdict = check(&rectangle_answer(), &shape, &grid);
    assert!(verdict.correct);
    assert!(verdict.missing.is_empty());
    assert!(verdict.extra.is_empty());
    assert_eq!(verdict.score(), 1.0);
}

#[test]
fn test_stray_segment_is_reported_as_extra() {
    let grid = Grid::default();
    let shape = KnownShape::Rectangle.definition();
    let mut strokes = rectangle_answer();
    strokes.push(seg(6, 9, 6, 10));

    let verdict = check(&strokes, &shape, &grid);
    assert!(!verdict.correct);
    assert!(verdict.missing.is_empty());
    assert_eq!(
        verdict.extra,
        vec![CanonicalKey::new(GridPoint::new(6, 9), GridPoint::new(6, 10))]
    );
}

#[test]
fn test_missing_side_is_reported() {
    let grid = Grid::default();
    let shape = KnownShape::Rectangle.definition();
    let strokes = vec![seg(5, 2, 8, 2), seg(8, 8, 5, 8)];

    let verdict = check(&strokes, &shape, &grid);
    assert!(!verdict.correct);
    assert!(verdict.extra.is_empty());
    assert_eq!(verdict.missing.len(), 6);
    assert!(verdict.missing.iter().all(|k| k.a.col == 8 && k.b.col == 8));
    assert_eq!(verdict.score(), 0.5);
}

#[test]
fn test_empty_drawing_misses_everything() {
    let grid = Grid::default();
    for shape in all_shapes() {
        let expected = canonicalize(&shape.expected_segments(&grid), grid.center_col());
        let verdict = check(&[], &shape, &grid);
        assert!(!verdict.correct, "{}", shape.name);
        assert!(verdict.extra.is_empty());
        assert_eq!(verdict.missing, expected.iter().copied().collect::<Vec<_>>());
    }
}

#[test]
fn test_drawing_on_the_given_side_is_wrong() {
    let grid = Grid::default();
    let shape = KnownShape::Rectangle.definition();
    let verdict = check(&shape.left_segments(), &shape, &grid);
    assert!(!verdict.correct);
    assert_eq!(verdict.extra.len(), verdict.missing.len());
}

#[test]
fn test_axis_overdraw_does_not_count_against_user() {
    let grid = Grid::default();
    let shape = KnownShape::Rectangle.definition();
    let mut strokes = rectangle_answer();
    strokes.push(seg(5, 2, 5, 8));
    assert!(check(&strokes, &shape, &grid).correct);
}

#[rstest]
#[case(KnownShape::Rectangle)]
#[case(KnownShape::Steps)]
#[case(KnownShape::ThickT)]
#[case(KnownShape::Pedestal)]
#[case(KnownShape::Spool)]
#[case(KnownShape::SteppedPyramid)]
#[case(KnownShape::NotchedRectangle)]
#[case(KnownShape::CastleWall)]
#[case(KnownShape::Key)]
#[case(KnownShape::PixelStep)]
fn test_mirrored_answer_passes(#[case] known: KnownShape) {
    let grid = Grid::default();
    let shape = known.definition();
    shape.validate(&grid).unwrap();

    let mut answer = shape.expected_segments(&grid);
    answer.reverse();
    let answer: Vec<_> = answer.iter().map(|s| s.reversed()).collect();

    let verdict = check(&answer, &shape, &grid);
    assert!(verdict.correct, "{} failed: {:?}", known, verdict);
}

#[test]
fn test_check_segments_is_symmetric_in_roles() {
    let a = vec![seg(6, 1, 8, 1)];
    let b = vec![seg(6, 1, 7, 1), seg(8, 4, 8, 5)];
    let ab = check_segments(&a, &b, 5);
    let ba = check_segments(&b, &a, 5);
    assert_eq!(ab.missing, ba.extra);
    assert_eq!(ab.extra, ba.missing);
}
