use rstest::rstest;
use scrollfx::effects::errors::LayoutError;
use scrollfx::effects::header::{HeaderFade, ImageTransform, ParallaxHeader};
use scrollfx::effects::layout::HeaderLayout;
use scrollfx::interpolation::extrapolation::Extrapolation;

type FxResult = Result<(), LayoutError>;

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[rstest]
#[case(-50.0, -0.125)]
#[case(0.0, 0.0)]
#[case(100.0, 0.25)]
#[case(200.0, 0.5)]
#[case(400.0, 1.0)]
#[case(1000.0, 2.5)]
fn fade_over_default_distance(#[case] offset: f64, #[case] expected: f64) -> FxResult {
    let fade = HeaderFade::from_layout(&HeaderLayout::default())?;
    assert!(approx_eq(fade.opacity(offset), expected));
    Ok(())
}

#[rstest]
#[case(-1200.0, -600.0, 3.0)]
#[case(-600.0,  -300.0, 2.0)]
#[case(-300.0,  -150.0, 1.5)]
#[case(0.0,        0.0, 1.0)]
#[case(300.0,    225.0, 1.0)]
#[case(600.0,    450.0, 1.0)]
#[case(1200.0,   900.0, 1.0)]
fn parallax_over_header_height(
    #[case] offset: f64,
    #[case] translate_y: f64,
    #[case] scale: f64,
) -> FxResult {
    let header = ParallaxHeader::new(600.0)?;
    let t = header.transform(offset);
    assert!(approx_eq(t.translate_y, translate_y), "translate_y {} != {}", t.translate_y, translate_y);
    assert!(approx_eq(t.scale, scale), "scale {} != {}", t.scale, scale);
    Ok(())
}

#[test]
fn image_keeps_drifting_past_header_height() -> FxResult {
    let header = ParallaxHeader::new(600.0)?;

    // content moves 600 between the two offsets, the image 450
    let drift = header.transform(1800.0).translate_y - header.transform(1200.0).translate_y;
    assert!(approx_eq(drift, 450.0), "drift {drift}");
    assert!(approx_eq(header.transform(1800.0).translate_y, 1350.0));
    Ok(())
}

#[test]
fn clamped_layout_pins_effects_at_ends() -> FxResult {
    let layout = HeaderLayout { extrapolation: Extrapolation::Clamp, ..HeaderLayout::default() };

    let header = ParallaxHeader::from_layout(&layout)?;
    assert_eq!(header.transform(1200.0), ImageTransform { translate_y: 450.0, scale: 1.0 });
    assert_eq!(header.transform(-1200.0), ImageTransform { translate_y: -300.0, scale: 2.0 });

    let fade = HeaderFade::from_layout(&layout)?;
    assert_eq!(fade.opacity(-50.0), 0.0);
    assert_eq!(fade.opacity(1000.0), 1.0);
    Ok(())
}

#[test]
fn parallax_at_rest_is_identity() -> FxResult {
    let header = ParallaxHeader::from_layout(&HeaderLayout::with_height(250.0))?;
    assert_eq!(header.transform(0.0), ImageTransform::default());
    assert_eq!(header.height(), 250.0);
    Ok(())
}

#[test]
fn zero_height_rejected() {
    let err = ParallaxHeader::new(0.0).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidLength { field: "height", got } if got == 0.0));
}

#[test]
fn non_finite_fade_rejected() {
    let err = HeaderFade::new(f64::NAN).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidLength { field: "fade_distance", .. }));

    let layout = HeaderLayout { fade_distance: -1.0, ..HeaderLayout::default() };
    let err = HeaderFade::from_layout(&layout).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidLength { field: "fade_distance", got } if got == -1.0));
}
