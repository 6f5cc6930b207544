// File: crates/field-core/tests/parsing.rs
// Purpose: Charge text, grid fields and level count validation, including error ordering.

use field_core::{ChargeSet, GridSpec, LineFault, PlotInputs, PlotRequest, PointCharge, ValidationError};

#[test]
fn parses_whitespace_separated_lines_and_skips_blanks() {
    let set = ChargeSet::parse("  1 0 1\n\n-1\t0   -1\n   \n").expect("valid charges");
    assert_eq!(set.len(), 2);
    assert_eq!(set.as_slice()[0], PointCharge::new(1.0, 0.0, 1.0));
    assert_eq!(set.as_slice()[1], PointCharge::new(-1.0, 0.0, -1.0));
}

#[test]
fn accepts_scientific_notation() {
    let set = ChargeSet::parse("1e-1 -2.5E0 3").expect("valid charges");
    assert_eq!(set.as_slice()[0], PointCharge::new(0.1, -2.5, 3.0));
}

#[test]
fn two_tokens_report_line_one() {
    let err = ChargeSet::parse("0 0\n").unwrap_err();
    assert_eq!(err, ValidationError::MalformedChargeLine { line: 1, fault: LineFault::TokenCount(2) });
    assert_eq!(err.line(), Some(1));
    assert!(err.to_string().contains("line 1"), "message: {err}");
}

#[test]
fn line_numbers_count_blank_lines() {
    let err = ChargeSet::parse("1 0 1\n\n0 0 x\n").unwrap_err();
    assert_eq!(err, ValidationError::MalformedChargeLine { line: 3, fault: LineFault::NotANumber });
}

#[test]
fn too_many_tokens_rejected() {
    let err = ChargeSet::parse("1 2 3 4").unwrap_err();
    assert_eq!(err.line(), Some(1));
    assert!(matches!(err, ValidationError::MalformedChargeLine { fault: LineFault::TokenCount(4), .. }));
}

#[test]
fn non_finite_values_rejected() {
    for text in ["nan 0 1", "0 inf 1", "0 0 -infinity"] {
        let err = ChargeSet::parse(text).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedChargeLine { line: 1, fault: LineFault::NotANumber }), "{text}: {err:?}");
    }
}

#[test]
fn empty_or_blank_input_is_empty() {
    assert_eq!(ChargeSet::parse("").unwrap_err(), ValidationError::EmptyInput);
    assert_eq!(ChargeSet::parse("  \n\t\n").unwrap_err(), ValidationError::EmptyInput);
    assert_eq!(ChargeSet::try_new(Vec::new()).unwrap_err(), ValidationError::EmptyInput);
}

#[test]
fn grid_min_not_below_max_is_invalid() {
    assert!(matches!(GridSpec::parse("5", "3", "10"), Err(ValidationError::InvalidGrid(_))));
    assert!(matches!(GridSpec::parse("3", "3", "10"), Err(ValidationError::InvalidGrid(_))));
}

#[test]
fn grid_point_count_must_be_positive_integer() {
    for points in ["0", "-4", "2.5", "abc", ""] {
        assert!(matches!(GridSpec::parse("-1", "1", points), Err(ValidationError::InvalidGrid(_))), "points={points:?}");
    }
    assert!(matches!(GridSpec::parse("-1", "1", "100000"), Err(ValidationError::InvalidGrid(_))));
}

#[test]
fn grid_bounds_must_be_numbers() {
    assert!(matches!(GridSpec::parse("low", "1", "10"), Err(ValidationError::InvalidGrid(_))));
    assert!(matches!(GridSpec::parse("-1", "NaN", "10"), Err(ValidationError::InvalidGrid(_))));
}

#[test]
fn single_point_grid_is_valid() {
    let g = GridSpec::parse("-1", "1", "1").expect("one sample");
    assert_eq!(g.axis(), vec![-1.0]);
    assert_eq!(g.step(), 0.0);
}

#[test]
fn level_count_bounds() {
    let mut inputs = PlotInputs::with_charges("0 0 1");
    for bad in [0, -3, 101] {
        inputs.level_count = bad;
        assert_eq!(PlotRequest::parse(&inputs).unwrap_err(), ValidationError::InvalidLevelCount(bad));
    }
    for ok in [1, 20, 100] {
        inputs.level_count = ok;
        let req = PlotRequest::parse(&inputs).expect("valid level count");
        assert_eq!(req.equipotentials.level_count, ok as usize);
    }
}

#[test]
fn charge_errors_reported_before_grid_errors() {
    let inputs = PlotInputs {
        charges: String::new(),
        grid_min: "5".into(),
        grid_max: "3".into(),
        level_count: 0,
        ..PlotInputs::default()
    };
    assert_eq!(PlotRequest::parse(&inputs).unwrap_err(), ValidationError::EmptyInput);

    let inputs = PlotInputs { charges: "0 0 1".into(), ..inputs };
    assert!(matches!(PlotRequest::parse(&inputs), Err(ValidationError::InvalidGrid(_))));
}

#[test]
fn defaults_match_the_input_form() {
    let req = PlotRequest::parse(&PlotInputs::with_charges("1 0 1\n-1 0 -1")).expect("defaults are valid");
    assert_eq!(req.grid.min(), -10.0);
    assert_eq!(req.grid.max(), 10.0);
    assert_eq!(req.grid.points(), 200);
    assert!(req.equipotentials.show);
    assert_eq!(req.equipotentials.level_count, 20);
}
