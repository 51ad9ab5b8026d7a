use super::*;
use crate::config::Connectivity;
use crate::pixel::Pixel;

/// 4x4 single-channel mask with a 2x2 hole in the centre.
#[rustfmt::skip]
const CENTER_MASK: [u8; 16] = [
    255, 255, 255, 255,
    255,   0,   0, 255,
    255,   0,   0, 255,
    255, 255, 255, 255,
];

/// Rows fade from white (top) to black (bottom).
#[rustfmt::skip]
const ROW_GRADIENT: [u8; 16] = [
    255, 255, 255, 255,
    170, 170, 170, 170,
     85,  85,  85,  85,
      0,   0,   0,   0,
];

fn config(connectivity: Connectivity) -> FillConfig {
    FillConfig::default()
        .connectivity(connectivity)
        .kernel(2.0, 0.01)
}

fn at(values: &[f32], x: usize, y: usize) -> f32 {
    values[x * 4 + y]
}

#[test]
fn test_center_hole_region_sizes() {
    let mask = RawImage::new(&CENTER_MASK, 4, 4, 1).unwrap();

    let eight = HoleFiller::new(&mask, &config(Connectivity::Eight)).unwrap();
    let four = HoleFiller::new(&mask, &config(Connectivity::Four)).unwrap();

    assert_eq!(eight.region().holes().len(), 4);
    assert!(eight.region().boundaries().len() >= 8);
    assert_eq!(four.region().holes(), eight.region().holes());
    for pixel in four.region().boundaries() {
        assert!(eight.region().boundaries().contains(pixel));
        assert_eq!(
            (pixel.x - 1).abs().min((pixel.x - 2).abs())
                + (pixel.y - 1).abs().min((pixel.y - 2).abs()),
            1,
            "{:?} is not a direct neighbour of the hole",
            pixel
        );
    }
}

#[test]
fn test_center_hole_filled_from_gradient() {
    let mask = RawImage::new(&CENTER_MASK, 4, 4, 1).unwrap();
    let filler = HoleFiller::new(&mask, &config(Connectivity::Eight)).unwrap();
    let image = RawImage::new(&ROW_GRADIENT, 4, 4, 1).unwrap();

    let output = filler.process(&image).unwrap();

    for (x, y) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
        let value = at(&output, x, y);
        assert!(value > 0.0 && value < 255.0, "({x}, {y}) = {value}");
    }
    // The upper hole row sits next to the white row.
    assert!(at(&output, 1, 1) > at(&output, 2, 1));
    assert!(at(&output, 1, 2) > at(&output, 2, 2));
    // Left/right symmetry of the mask and image.
    assert!((at(&output, 1, 1) - at(&output, 1, 2)).abs() < 1e-3);
    assert!((at(&output, 2, 1) - at(&output, 2, 2)).abs() < 1e-3);
}

#[test]
fn test_non_hole_pixels_pass_through() {
    let mask = RawImage::new(&CENTER_MASK, 4, 4, 1).unwrap();
    let filler = HoleFiller::new(&mask, &config(Connectivity::Four)).unwrap();
    let image = RawImage::new(&ROW_GRADIENT, 4, 4, 1).unwrap();

    let output = filler.process(&image).unwrap();

    for index in 0..16 {
        let pixel = Pixel::from_linear_index(index, 4);
        if filler.region().holes().contains(&pixel) {
            continue;
        }
        assert!((output[index] - ROW_GRADIENT[index] as f32).abs() < 1e-3);
    }
}

#[test]
fn test_uniform_boundary_fills_with_that_value() {
    let mask = RawImage::new(&CENTER_MASK, 4, 4, 1).unwrap();
    let filler = HoleFiller::new(&mask, &config(Connectivity::Eight)).unwrap();

    // Filling the mask itself: every boundary pixel is white.
    let output = filler.process(&mask).unwrap();

    for (x, y) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
        assert!((at(&output, x, y) - 255.0).abs() < 1e-3);
    }
}

#[test]
fn test_membership_ignores_input_image_content() {
    let mask = RawImage::new(&CENTER_MASK, 4, 4, 1).unwrap();
    let filler = HoleFiller::new(&mask, &config(Connectivity::Eight)).unwrap();
    // A dark corner in the image does not make it a hole.
    let mut bytes = [200u8; 16];
    bytes[0] = 0;
    let image = RawImage::new(&bytes, 4, 4, 1).unwrap();

    let output = filler.process(&image).unwrap();

    assert_eq!(output[0], 0.0);
    assert_eq!(filler.region().holes().len(), 4);
}

#[test]
fn test_rgb_image_reduced_before_fill() {
    let mask = RawImage::new(&CENTER_MASK, 4, 4, 1).unwrap();
    let filler = HoleFiller::new(&mask, &config(Connectivity::Eight)).unwrap();
    let bytes: Vec<u8> = [90u8, 90, 90].repeat(16);
    let image = RawImage::new(&bytes, 4, 4, 3).unwrap();

    let output = filler.process(&image).unwrap();

    for value in output {
        assert!((value - 90.0).abs() < 1e-3);
    }
}

#[test]
fn test_prepare_carves_sentinel() {
    let mask = RawImage::new(&CENTER_MASK, 4, 4, 1).unwrap();
    let filler = HoleFiller::new(
        &mask,
        &config(Connectivity::Eight).hole_value(-2.0),
    )
    .unwrap();
    let image = RawImage::new(&ROW_GRADIENT, 4, 4, 1).unwrap();

    let buffer = filler.prepare(&image).unwrap();

    assert_eq!(buffer.get(Pixel::new(1, 1)), -2.0);
    assert_eq!(buffer.get(Pixel::new(0, 0)), 1.0);
}

#[test]
fn test_dimension_mismatch() {
    let mask = RawImage::new(&CENTER_MASK, 4, 4, 1).unwrap();
    let filler = HoleFiller::new(&mask, &config(Connectivity::Eight)).unwrap();
    let bytes = [0u8; 8];
    let image = RawImage::new(&bytes, 2, 4, 1).unwrap();

    assert_eq!(
        filler.process(&image),
        Err(Error::DimensionMismatch {
            expected_height: 4,
            expected_width: 4,
            actual_height: 2,
            actual_width: 4,
        })
    );
}

#[test]
fn test_mask_without_boundary_is_degenerate() {
    let bytes = [0u8; 9];
    let mask = RawImage::new(&bytes, 3, 3, 1).unwrap();

    let err = HoleFiller::new(&mask, &FillConfig::default()).unwrap_err();

    match err {
        Error::DegenerateFill { pixels } => assert_eq!(pixels.len(), 9),
        other => panic!("expected DegenerateFill, got {other:?}"),
    }
}

#[test]
fn test_mask_without_hole_leaves_image_unchanged() {
    let bytes = [255u8; 16];
    let mask = RawImage::new(&bytes, 4, 4, 1).unwrap();
    let filler = HoleFiller::new(&mask, &FillConfig::default()).unwrap();
    let image = RawImage::new(&ROW_GRADIENT, 4, 4, 1).unwrap();

    let output = filler.process(&image).unwrap();

    for (value, &expected) in output.iter().zip(ROW_GRADIENT.iter()) {
        assert!((value - expected as f32).abs() < 1e-3);
    }
}

#[test]
fn test_invalid_config_rejected() {
    let mask = RawImage::new(&CENTER_MASK, 4, 4, 1).unwrap();
    assert!(matches!(
        HoleFiller::new(&mask, &FillConfig::default().intensity_threshold(-1.0)),
        Err(Error::InvalidThreshold(_))
    ));
    assert!(matches!(
        HoleFiller::new(&mask, &FillConfig::default().kernel(f32::NAN, 0.01)),
        Err(Error::InvalidExponent(_))
    ));
}

#[test]
fn test_negative_epsilon_clamped() {
    let mask = RawImage::new(&CENTER_MASK, 4, 4, 1).unwrap();
    let filler = HoleFiller::new(&mask, &FillConfig::default().kernel(2.0, -5.0)).unwrap();
    assert_eq!(filler.kernel().e(), crate::config::DEFAULT_EPSILON);
}

#[test]
fn test_custom_kernel() {
    let mask = RawImage::new(&CENTER_MASK, 4, 4, 1).unwrap();
    let filler = HoleFiller::new(&mask, &config(Connectivity::Four)).unwrap();
    let image = RawImage::new(&ROW_GRADIENT, 4, 4, 1).unwrap();

    // Flat weights: every hole gets the plain mean of the boundary samples.
    let flat = |_: Pixel, _: Pixel| 1.0f32;
    let output = filler.process_with_kernel(&image, &flat).unwrap();

    let boundaries = filler.region().boundaries();
    let mean = boundaries
        .iter()
        .map(|p| ROW_GRADIENT[p.linear_index(4)] as f32)
        .sum::<f32>()
        / boundaries.len() as f32;
    for hole in filler.region().holes() {
        assert!((output[hole.linear_index(4)] - mean).abs() < 1e-3);
    }
}

#[test]
fn test_process_batch_matches_sequential() {
    let mask = RawImage::new(&CENTER_MASK, 4, 4, 1).unwrap();
    let filler = HoleFiller::new(&mask, &config(Connectivity::Eight)).unwrap();
    let small = [0u8; 4];
    let images = [
        RawImage::new(&ROW_GRADIENT, 4, 4, 1).unwrap(),
        RawImage::new(&small, 2, 2, 1).unwrap(),
        RawImage::new(&CENTER_MASK, 4, 4, 1).unwrap(),
    ];

    let results = filler.process_batch(&images);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0], filler.process(&images[0]));
    assert!(matches!(results[1], Err(Error::DimensionMismatch { .. })));
    assert_eq!(results[2], filler.process(&images[2]));
}
