use rootscan::root_finding::cluster::ClusterCfg;
use rootscan::root_finding::config::{
    DEFAULT_DECIMALS, DEFAULT_DELTA, DEFAULT_EPS, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ITER,
};
use rootscan::root_finding::errors::{RootFindingError, ToleranceError, MAX_DECIMALS};
use rootscan::root_finding::refine::RefineCfg;
use rootscan::FindRootsCfg;


#[test]
fn defaults() {
    let cfg = FindRootsCfg::new();
    assert_eq!(cfg.eps(),       DEFAULT_EPS);
    assert_eq!(cfg.max_iter(),  DEFAULT_MAX_ITER);
    assert_eq!(cfg.delta(),     DEFAULT_DELTA);
    assert_eq!(cfg.max_depth(), DEFAULT_MAX_DEPTH);
    assert_eq!(cfg.decimals(),  DEFAULT_DECIMALS);

    assert_eq!(DEFAULT_EPS, 1e-10);
    assert_eq!(DEFAULT_DELTA, 1e6);
    assert_eq!(DEFAULT_MAX_ITER, 100);
}

#[test]
fn cluster_cfg_inherits_scan_cfg() -> Result<(), rootscan::FindRootsError> {
    let cfg = FindRootsCfg::new().set_eps(1e-6)?.set_max_depth(7)?;
    let cluster = cfg.cluster_cfg()?;

    assert_eq!(cluster.eps(), 1e-6);
    assert_eq!(cluster.max_depth(), 7);
    Ok(())
}

#[test]
fn invalid_eps() {
    for v in [0.0, -1e-10, f64::NAN, f64::INFINITY] {
        let err = FindRootsCfg::new().set_eps(v).unwrap_err();
        assert!(matches!(err, ToleranceError::InvalidEps { .. }), "eps={v}");

        let err = RefineCfg::new().set_eps(v).unwrap_err();
        assert!(matches!(err, ToleranceError::InvalidEps { .. }), "eps={v}");

        let err = ClusterCfg::new().set_eps(v).unwrap_err();
        assert!(matches!(err, ToleranceError::InvalidEps { .. }), "eps={v}");
    }
}

#[test]
fn invalid_delta() {
    for v in [0.0, -1.0, f64::NAN] {
        let err = FindRootsCfg::new().set_delta(v).unwrap_err();
        assert!(matches!(err, ToleranceError::InvalidDelta { .. }), "delta={v}");
    }
    assert!(FindRootsCfg::new().set_delta(f64::INFINITY).is_ok());
}

#[test]
fn invalid_max_iter() {
    let err = FindRootsCfg::new().set_max_iter(0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidMaxIter { got: 0 }));

    let err = RefineCfg::new().set_max_iter(0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidMaxIter { got: 0 }));
}

#[test]
fn invalid_max_depth() {
    let err = FindRootsCfg::new().set_max_depth(0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidMaxDepth { got: 0 }));

    let err = ClusterCfg::new().set_max_depth(0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidMaxDepth { got: 0 }));
}

#[test]
fn invalid_decimals() {
    let err = FindRootsCfg::new().set_decimals(MAX_DECIMALS + 1).unwrap_err();
    assert!(matches!(err, ToleranceError::InvalidDecimals { got, max } if got == MAX_DECIMALS + 1 && max == MAX_DECIMALS));
    assert!(FindRootsCfg::new().set_decimals(0).is_ok());
}

#[test]
fn setters_chain() -> Result<(), rootscan::FindRootsError> {
    let cfg = FindRootsCfg::new()
        .set_eps(1e-8)?
        .set_max_iter(20)?
        .set_delta(50.0)?
        .set_max_depth(10)?
        .set_decimals(6)?;

    assert_eq!(cfg.eps(), 1e-8);
    assert_eq!(cfg.max_iter(), 20);
    assert_eq!(cfg.delta(), 50.0);
    assert_eq!(cfg.max_depth(), 10);
    assert_eq!(cfg.decimals(), 6);
    Ok(())
}
