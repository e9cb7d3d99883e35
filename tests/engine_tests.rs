//! Integration tests for the grade engine

use gpa_calc::core::models::{AcademicStanding, CourseList, LetterGrade, WeightedComponent};
use gpa_calc::core::{
    cumulative_gpa, possible_gpa, required_future_grade, weighted_average, ErrorKind,
    GradeError, RequiredGrade, WeightSumPolicy,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn components(scores: [f64; 3], weights: [f64; 3]) -> Vec<WeightedComponent> {
    ["first", "second", "third"]
        .iter()
        .zip(scores.iter().zip(weights))
        .map(|(label, (score, weight))| WeightedComponent::new(*label, *score, weight))
        .collect()
}

#[test]
fn cumulative_gpa_stays_on_scale() {
    let grades: Vec<LetterGrade> = LetterGrade::all().collect();
    let mut list = CourseList::new();
    for (idx, grade) in grades.iter().enumerate() {
        let hours = u32::try_from(idx % 6).unwrap() + 1;
        list.add(format!("Course {idx}"), hours, *grade);

        let gpa = cumulative_gpa(list.courses()).unwrap();
        assert!((0.0..=4.0).contains(&gpa), "gpa {gpa} out of range");
    }
}

#[test]
fn cumulative_gpa_all_f_and_all_a() {
    let mut fails = CourseList::new();
    fails.add("One".to_string(), 3, LetterGrade::F);
    fails.add("Two".to_string(), 4, LetterGrade::F);
    assert_close(cumulative_gpa(fails.courses()).unwrap(), 0.0);

    let mut tops = CourseList::new();
    tops.add("One".to_string(), 3, LetterGrade::APlus);
    tops.add("Two".to_string(), 4, LetterGrade::A);
    assert_close(cumulative_gpa(tops.courses()).unwrap(), 4.0);
}

#[test]
fn cumulative_gpa_after_removal() {
    let mut list = CourseList::new();
    list.add("Keep".to_string(), 3, LetterGrade::B);
    let dropped = list.add("Drop".to_string(), 3, LetterGrade::F);
    assert_close(cumulative_gpa(list.courses()).unwrap(), 1.5);

    assert!(list.remove(dropped));
    assert_close(cumulative_gpa(list.courses()).unwrap(), 3.0);

    let keep = list.courses()[0].id;
    assert!(list.remove(keep));
    assert_eq!(
        cumulative_gpa(list.courses()).unwrap_err(),
        GradeError::NoCourses
    );
}

#[test]
fn weighted_average_full_marks() {
    let result = weighted_average(
        &components([100.0, 100.0, 100.0], [30.0, 30.0, 40.0]),
        WeightSumPolicy::Exact,
    )
    .unwrap();
    assert_eq!(format!("{result:.2}"), "100.00");
}

#[test]
fn weighted_average_is_linear_in_scores() {
    let weights = [25.0, 35.0, 40.0];
    let base = weighted_average(
        &components([80.0, 60.0, 90.0], weights),
        WeightSumPolicy::default(),
    )
    .unwrap();

    for k in [0.0, 0.5, 1.1] {
        let scaled = weighted_average(
            &components([80.0 * k, 60.0 * k, 90.0 * k], weights),
            WeightSumPolicy::default(),
        )
        .unwrap();
        assert_close(scaled, base * k);
    }
}

#[test]
fn weighted_average_rejects_bad_weight_sums() {
    for weights in [[30.0, 30.0, 39.0], [30.0, 30.0, 41.0]] {
        for policy in [WeightSumPolicy::Exact, WeightSumPolicy::default()] {
            let err =
                weighted_average(&components([90.0, 90.0, 90.0], weights), policy).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::WeightSum);
        }
    }
}

#[test]
fn weighted_average_tolerance_absorbs_rounding() {
    let weights = [33.33, 33.33, 33.34];
    let result = weighted_average(
        &components([90.0, 90.0, 90.0], weights),
        WeightSumPolicy::default(),
    )
    .unwrap();
    assert!((result - 90.0).abs() < 1e-6);
}

#[test]
fn weighted_average_rejects_out_of_range_scores() {
    let err = weighted_average(
        &components([100.5, 90.0, 90.0], [30.0, 30.0, 40.0]),
        WeightSumPolicy::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let err = weighted_average(
        &components([-1.0, 90.0, 90.0], [30.0, 30.0, 40.0]),
        WeightSumPolicy::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn required_grade_unreachable() {
    let standing = AcademicStanding::new(3.0, 60).unwrap();
    let result = required_future_grade(&standing, 15, 3.5).unwrap();

    match result {
        RequiredGrade::Unreachable { required_average } => assert_close(required_average, 5.5),
        other => panic!("expected unreachable, got {other:?}"),
    }
}

#[test]
fn required_grade_picks_minimum_sufficient() {
    let standing = AcademicStanding::new(3.8, 90).unwrap();
    let result = required_future_grade(&standing, 15, 3.5).unwrap();

    assert_eq!(result.grade(), Some(LetterGrade::C));
    assert!((result.required_average() - 1.7).abs() < 1e-6);
    assert_eq!(result.to_string(), "C (1.70 points at least)");
}

#[test]
fn required_grade_trivially_met() {
    let standing = AcademicStanding::new(3.9, 120).unwrap();
    let result = required_future_grade(&standing, 12, 2.0).unwrap();
    assert!(matches!(result, RequiredGrade::TriviallyMet { .. }));
    assert!(result.grade().is_none());
}

#[test]
fn required_grade_range_errors() {
    let standing = AcademicStanding::new(3.0, 60).unwrap();
    let err = required_future_grade(&standing, 15, 4.2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let err = AcademicStanding::new(5.0, 60).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn possible_gpa_with_straight_a() {
    let standing = AcademicStanding::new(3.0, 60).unwrap();
    assert_close(possible_gpa(&standing, 15, LetterGrade::A), 3.2);
}

#[test]
fn possible_gpa_never_leaves_scale() {
    let standing = AcademicStanding::new(2.5, 45).unwrap();
    for grade in LetterGrade::all() {
        let gpa = possible_gpa(&standing, 18, grade);
        assert!((0.0..=4.0).contains(&gpa));
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let standing = AcademicStanding::new(3.37, 77).unwrap();
    let first = possible_gpa(&standing, 13, LetterGrade::BPlus);
    let second = possible_gpa(&standing, 13, LetterGrade::BPlus);
    assert_eq!(first.to_bits(), second.to_bits());

    let a = required_future_grade(&standing, 13, 3.45).unwrap();
    let b = required_future_grade(&standing, 13, 3.45).unwrap();
    assert_eq!(a.required_average().to_bits(), b.required_average().to_bits());
    assert_eq!(a.grade(), b.grade());

    let parts = components([88.5, 91.25, 79.0], [30.0, 30.0, 40.0]);
    let x = weighted_average(&parts, WeightSumPolicy::Exact).unwrap();
    let y = weighted_average(&parts, WeightSumPolicy::Exact).unwrap();
    assert_eq!(x.to_bits(), y.to_bits());
}
