use rstest::rstest;
use scrollfx::interpolation::linear::{interpolate, LinearCfg};
use scrollfx::interpolation::errors::InterpolationError;
use scrollfx::interpolation::extrapolation::{Extrapolation, ExtrapolationCfg};
use scrollfx::interpolation::Interpolator;

type FxResult = Result<(), InterpolationError>;

const X: [f64; 3] = [-600.0, 0.0, 600.0];
const Y: [f64; 3] = [-300.0, 0.0, 450.0];

#[rstest]
#[case(Extrapolation::Clamp,    -900.0, -300.0)]
#[case(Extrapolation::Clamp,    1200.0,  450.0)]
#[case(Extrapolation::Extend,   -900.0, -450.0)]
#[case(Extrapolation::Extend,   1200.0,  900.0)]
#[case(Extrapolation::Identity, -900.0, -900.0)]
#[case(Extrapolation::Identity, 1200.0, 1200.0)]
fn out_of_range_policy(
    #[case] mode: Extrapolation,
    #[case] value: f64,
    #[case] expected: f64,
) -> FxResult {
    assert_eq!(interpolate(value, &X, &Y, mode)?, expected);
    Ok(())
}

#[test]
fn policy_does_not_affect_in_range() -> FxResult {
    for mode in [Extrapolation::Clamp, Extrapolation::Extend, Extrapolation::Identity] {
        assert_eq!(interpolate(300.0, &X, &Y, mode)?, 225.0);
        assert_eq!(interpolate(-600.0, &X, &Y, mode)?, -300.0);
        assert_eq!(interpolate(600.0, &X, &Y, mode)?, 450.0);
    }
    Ok(())
}

#[test]
fn sides_are_independent() -> FxResult {
    let f = LinearCfg::new()
        .set_x(&X)?
        .set_y(&Y)?
        .set_left(Extrapolation::Extend)
        .set_right(Extrapolation::Clamp)
        .build()?;

    assert_eq!(f.eval(-900.0), -450.0);
    assert_eq!(f.eval(1200.0), 450.0);
    assert_eq!(
        f.extrapolation(),
        ExtrapolationCfg { left: Extrapolation::Extend, right: Extrapolation::Clamp }
    );
    Ok(())
}

#[test]
fn default_is_clamp_on_both_sides() -> FxResult {
    let f = LinearCfg::new().set_x(&X)?.set_y(&Y)?.build()?;
    assert_eq!(f.extrapolation(), ExtrapolationCfg::both(Extrapolation::Clamp));
    assert_eq!(f.eval(-1e6), -300.0);
    Ok(())
}

#[test]
fn extend_through_zero_width_end_holds_edge() -> FxResult {
    let x = [0.0, 10.0, 10.0];
    let y = [0.0, 1.0, 5.0];
    assert_eq!(interpolate(20.0, &x, &y, Extrapolation::Extend)?, 5.0);
    assert_eq!(interpolate(-10.0, &x, &y, Extrapolation::Extend)?, -1.0);
    Ok(())
}

#[test]
fn modes_deserialize_lowercase() {
    let cfg: ExtrapolationCfg =
        serde_json::from_str(r#"{ "left": "extend", "right": "identity" }"#).unwrap();
    assert_eq!(cfg.left, Extrapolation::Extend);
    assert_eq!(cfg.right, Extrapolation::Identity);

    let cfg: ExtrapolationCfg = serde_json::from_str(r#"{ "right": "extend" }"#).unwrap();
    assert_eq!(cfg.left, Extrapolation::Clamp);
    assert_eq!(Extrapolation::Identity.to_string(), "identity");
}
