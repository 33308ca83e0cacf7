//! Property tests for the GPA engine.

use proptest::prelude::*;
use studyhub_core::{GpaEngine, Grade, SubjectUpdate};

fn grade() -> impl Strategy<Value = Grade> {
    prop::sample::select(Grade::ALL.to_vec())
}

fn subjects() -> impl Strategy<Value = Vec<(String, u32, Grade)>> {
    prop::collection::vec(("[A-Za-z]{1,12}", 1u32..=10, grade()), 0..20)
}

proptest! {
    #[test]
    fn add_grows_by_one_with_table_points(name in "[A-Za-z ]{0,5}[A-Za-z]", credits in 1u32..=10, g in grade()) {
        let mut engine = GpaEngine::new();
        engine.add_subject("Existing", 3, Grade::B);
        let before = engine.subjects().len();

        let id = engine.add_subject(&name, credits, g).and_then(|e| e.record_id()).unwrap();

        prop_assert_eq!(engine.subjects().len(), before + 1);
        prop_assert_eq!(engine.get(id).unwrap().grade_points(), g.points());
    }

    #[test]
    fn cgpa_is_weighted_mean(rows in subjects()) {
        let mut engine = GpaEngine::new();
        for (name, credits, g) in &rows {
            engine.add_subject(name, *credits, *g);
        }

        let credits: u64 = rows.iter().map(|r| u64::from(r.1)).sum();
        let points: u64 = rows.iter().map(|r| u64::from(r.1) * u64::from(r.2.points())).sum();

        prop_assert_eq!(engine.total_credits(), credits);
        if credits == 0 {
            prop_assert_eq!(engine.cgpa(), 0.0);
        } else {
            let expected = points as f64 / credits as f64;
            prop_assert!((engine.cgpa() - expected).abs() < 1e-9);
        }
        prop_assert!(!engine.cgpa().is_nan());
    }

    #[test]
    fn huge_credits_never_overflow(rows in prop::collection::vec((1u32.., grade()), 1..8)) {
        let mut engine = GpaEngine::new();
        for (credits, g) in &rows {
            engine.add_subject("Bulk", *credits, *g);
        }
        let credits: u64 = rows.iter().map(|r| u64::from(r.0)).sum();
        prop_assert_eq!(engine.total_credits(), credits);
        prop_assert!(engine.cgpa() >= 0.0 && engine.cgpa() <= 10.0 + 1e-9);
    }

    #[test]
    fn grade_update_keeps_points_in_sync(rows in subjects(), pick in any::<prop::sample::Index>(), g in grade()) {
        prop_assume!(!rows.is_empty());
        let mut engine = GpaEngine::new();
        for (name, credits, grade) in &rows {
            engine.add_subject(name, *credits, *grade);
        }
        let id = engine.subjects()[pick.index(rows.len())].id();

        engine.update_subject(id, SubjectUpdate::Grade(g));

        for subject in engine.subjects() {
            prop_assert_eq!(subject.grade_points(), subject.grade().points());
        }
        prop_assert_eq!(engine.get(id).unwrap().grade(), g);
    }
}

#[test]
fn end_to_end_math_and_physics() {
    let mut engine = GpaEngine::new();
    engine.add_subject("Math", 4, Grade::A);
    engine.add_subject("Physics", 3, Grade::B);

    let summary = engine.summary();
    assert_eq!(summary.total_credits, 7);
    assert_eq!(summary.cgpa_display(), "7.14");
    assert_eq!(summary.classification.label(), "Very Good");
}
