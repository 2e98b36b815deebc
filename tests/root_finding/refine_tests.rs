use rootscan::root_finding::errors::RootFindingError;
use rootscan::root_finding::interval::Interval;
use rootscan::root_finding::refine::{refine, RefineCfg, RefineError};
use rootscan::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), RefineError>;


#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = RefineCfg::new();
    let res = refine(f, Interval::new(0.0, 2.0), cfg)?;

    assert!(res.converged());
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert!(res.f_root.abs() < cfg.eps());
    assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-10);
    assert!(res.iterations > 0);
    assert_eq!(res.bracket, Interval::new(0.0, 2.0));
    Ok(())
}

#[test]
fn linear_converges_in_one_step() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let res = refine(f, Interval::new(0.0, 10.0), RefineCfg::new())?;

    assert_eq!(res.iterations, 1);
    assert_eq!(res.bisection_steps, 0);
    assert_eq!(res.evaluations, 3);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert!((res.root - 3.0).abs() < 1e-12);
    Ok(())
}

#[test]
fn iteration_limit_returns_midpoint() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = RefineCfg::new().set_max_iter(1)?;
    let res = refine(f, Interval::new(0.0, 2.0), cfg)?;

    // one false-position step moves `lo` to 1.0
    assert_eq!(res.termination_reason,  TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert!(!res.converged());
    assert_eq!(res.iterations, 1);
    assert_eq!(res.stencil, Interval::new(1.0, 2.0));
    assert_eq!(res.root, 1.5);
    assert!(res.bracket.contains(res.root));
    Ok(())
}

#[test]
fn point_bracket_collapses_immediately() -> TestResult {
    let f   = |x: f64| x - 0.25;
    let res = refine(f, Interval::point(0.25), RefineCfg::new())?;

    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 1);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert_eq!(res.root, 0.25);
    assert_eq!(res.f_root, 0.0);
    Ok(())
}

#[test]
fn flat_chord_falls_back_to_bisection() -> TestResult {
    // |f(hi) - f(lo)| is far below f64::EPSILON
    let f   = |x: f64| 1e-20 * x;
    let res = refine(f, Interval::new(-1.0, 1.0), RefineCfg::new())?;

    assert_eq!(res.bisection_steps, 1);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.root, 0.0);
    Ok(())
}

#[test]
fn step_function_collapses_by_width() -> TestResult {
    let step = |x: f64| if x < 0.3 { -1.0 } else { 1.0 };
    let cfg  = RefineCfg::new().set_eps(1e-8)?;
    let res  = refine(step, Interval::new(0.0, 1.0), cfg)?;

    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert!(res.stencil.width() < 1e-8);
    assert!(res.stencil.contains(0.3));
    assert!((res.root - 0.3).abs() < 1e-8);
    Ok(())
}

#[test]
fn bracket_invariant_holds_at_termination() -> TestResult {
    let f   = |x: f64| (-x).exp() - x;
    let cfg = RefineCfg::new().set_eps(1e-12)?.set_max_iter(500)?;
    let res = refine(f, Interval::new(0.0, 1.0), cfg)?;

    assert!(res.converged());
    assert!(f(res.stencil.lo) * f(res.stencil.hi) <= 0.0);
    assert!((res.root - 0.5671432904097838).abs() < 1e-10);
    Ok(())
}

#[test]
fn invalid_bracket() {
    let err = refine(|x: f64| x, Interval::new(1.0, 0.0), RefineCfg::new()).unwrap_err();
    assert!(matches!(err, RefineError::InvalidBracket { lo, hi } if lo == 1.0 && hi == 0.0));

    let err = refine(|x: f64| x, Interval::new(f64::NAN, 0.0), RefineCfg::new()).unwrap_err();
    assert!(matches!(err, RefineError::InvalidBracket { .. }));
}

#[test]
fn non_finite_eval() {
    let f   = |x: f64| x.sqrt() - 0.5;
    let err = refine(f, Interval::new(-1.0, 1.0), RefineCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        RefineError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == -1.0 && fx.is_nan()
    ));
}
