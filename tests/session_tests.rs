mod common;

use common::{px, Drag};
use mirrorgrid::attempts::AttemptLog;
use mirrorgrid::config::AttemptConfig;
use mirrorgrid::geometry::Grid;
use mirrorgrid::recorder::PointerEvent;
use mirrorgrid::session::{Advance, AttemptRecord, Feedback, QuizSession};
use mirrorgrid::shapes::{all_shapes, KnownShape};

fn two_shape_session(attempt: AttemptConfig) -> QuizSession {
    QuizSession::new(
        Grid::default(),
        vec![
            KnownShape::Rectangle.definition(),
            KnownShape::Pedestal.definition(),
        ],
        attempt,
    )
}

fn feed(session: &mut QuizSession, events: Vec<PointerEvent>) {
    for e in events {
        session.pointer(e);
    }
}

#[test]
fn test_full_session_flow() {
    let attempt = AttemptConfig {
        user_id: Some(17),
        session_id: Some("sess-1".to_string()),
        ..Default::default()
    };
    let mut session = two_shape_session(attempt);
    assert_eq!(session.progress_label(), "Symmetry 1 / 2");

    feed(&mut session, Drag::from(5, 2).to(8, 2).to(8, 8).to(5, 8).release());
    session.tick(12);
    let sub = session.submit().unwrap();

    assert_eq!(sub.question, 0);
    assert!(sub.verdict.correct);
    assert_eq!(sub.feedback, Feedback::Mastered);
    assert_eq!(
        sub.attempt,
        AttemptRecord {
            user_id: Some(17),
            session_id: Some("sess-1".to_string()),
            skill_id: 9007,
            difficulty_level: "Medium".to_string(),
            question_text: "Draw Symmetry".to_string(),
            is_correct: true,
            time_spent_seconds: 12,
        }
    );

    assert_eq!(session.advance(), Advance::Next(1));
    assert!(session.drawing().strokes().is_empty());
    assert!(!session.drawing().is_submitted());
    assert_eq!(session.progress_label(), "Symmetry 2 / 2");

    // Only the top of the pedestal.
    feed(&mut session, Drag::from(5, 2).to(6, 2).release());
    session.tick(8);
    let sub = session.submit().unwrap();
    assert!(!sub.verdict.correct);
    assert_eq!(sub.feedback.to_string(), "Not quite! Check your lines.");
    // The clock is session-wide.
    assert_eq!(sub.attempt.time_spent_seconds, 20);

    assert_eq!(session.advance(), Advance::Finished);
    assert_eq!(session.results(), &[true, false]);
}

#[test]
fn test_submit_needs_strokes() {
    let mut session = two_shape_session(AttemptConfig::default());
    assert!(session.submit().is_none());
    session.pointer(PointerEvent::down(px(5, 2)));
    session.pointer(PointerEvent::moved(px(6, 2)));
    assert_eq!(session.undo().map(|s| s.c2), Some(6));
    assert!(session.submit().is_none());
}

#[test]
fn test_clear_then_redraw() {
    let mut session = two_shape_session(AttemptConfig::default());
    feed(&mut session, Drag::from(9, 9).to(10, 9).to(10, 8).release());
    assert_eq!(session.clear(), 2);
    feed(&mut session, Drag::from(5, 2).to(8, 2).to(8, 8).to(5, 8).release());
    assert!(session.submit().unwrap().verdict.correct);
}

#[test]
fn test_empty_session_finishes_immediately() {
    let mut session = QuizSession::new(Grid::default(), vec![], AttemptConfig::default());
    assert!(session.current_shape().is_none());
    assert!(session.submit().is_none());
    assert_eq!(session.advance(), Advance::Finished);
}

#[test]
fn test_default_session_walks_all_shapes() {
    let mut session = QuizSession::new(Grid::default(), all_shapes(), AttemptConfig::default());
    let mut seen = vec![session.current_shape().unwrap().name.clone()];
    loop {
        // A stray stroke is enough to make the question submittable.
        feed(&mut session, Drag::from(9, 9).to(10, 9).release());
        assert!(session.submit().is_some());
        match session.advance() {
            Advance::Next(_) => seen.push(session.current_shape().unwrap().name.clone()),
            other => {
                assert_eq!(other, Advance::Finished);
                break;
            }
        }
    }
    assert_eq!(seen.len(), 10);
    assert_eq!(seen[0], "rectangle");
    assert_eq!(seen[9], "pixel_step");
    assert_eq!(session.results(), &[false; 10]);
}

#[test]
fn test_advance_waits_for_submit() {
    let mut session = two_shape_session(AttemptConfig::default());
    assert_eq!(session.advance(), Advance::Pending);

    // Drawn but not submitted still holds the question.
    feed(&mut session, Drag::from(5, 2).to(8, 2).release());
    for _ in 0..3 {
        assert_eq!(session.advance(), Advance::Pending);
    }
    assert_eq!(session.index(), 0);
    assert_eq!(session.drawing().strokes().len(), 1);
    assert!(session.results().is_empty());

    session.submit().unwrap();
    assert_eq!(session.advance(), Advance::Next(1));
    assert_eq!(session.advance(), Advance::Pending);
    assert_eq!(session.results().len(), 1);
}

#[test]
fn test_mastered_feedback_text() {
    assert_eq!(Feedback::Mastered.to_string(), "✨ Symmetry Mastered! ✨");
}

#[test]
fn test_attempt_record_json_field_names() {
    let record = AttemptRecord {
        user_id: Some(3),
        session_id: None,
        skill_id: 9007,
        difficulty_level: "Medium".to_string(),
        question_text: "Draw Symmetry".to_string(),
        is_correct: false,
        time_spent_seconds: 41,
    };
    let json: serde_json::Value = serde_json::to_value(&record).unwrap();
    assert_eq!(json["user_id"], 3);
    assert_eq!(json["is_correct"], false);
    assert_eq!(json["time_spent_seconds"], 41);
    assert!(json["session_id"].is_null());
}

#[test]
fn test_attempt_log_appends_across_opens() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("attempts.csv");

    let first = AttemptRecord {
        user_id: Some(1),
        session_id: Some("a".to_string()),
        skill_id: 9007,
        difficulty_level: "Medium".to_string(),
        question_text: "Draw Symmetry".to_string(),
        is_correct: true,
        time_spent_seconds: 5,
    };
    let second = AttemptRecord {
        user_id: None,
        is_correct: false,
        time_spent_seconds: 9,
        ..first.clone()
    };

    AttemptLog::open(&path).unwrap().append(&first).unwrap();
    {
        let mut log = AttemptLog::open(&path).unwrap();
        assert_eq!(log.path(), path.as_path());
        log.append(&second).unwrap();
    }

    let records = AttemptLog::read_all(&path).unwrap();
    assert_eq!(records, vec![first, second]);

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.matches("user_id").count(), 1, "header written once");
}
