//! Property checks that hold for every built-in detector.

use edgekit::{
    edge_pixel_count, make_prewitt_detector, make_sobel_detector, DetectorKind, EdgeDetector,
    GradientDetector, PixelGrid, TemplateMatchingDetector, PREWITT_COMPASS,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, width: usize, height: usize) -> PixelGrid {
    let data: Vec<u8> = (0..width * height).map(|_| rng.random::<u8>()).collect();
    PixelGrid::new(data, width, height).unwrap()
}

fn make_pattern(width: usize, height: usize) -> PixelGrid {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            data.push(value as u8);
        }
    }
    PixelGrid::new(data, width, height).unwrap()
}

fn assert_white_border(out: &PixelGrid) {
    let (h, w) = (out.height(), out.width());
    for col in 0..w {
        assert_eq!(out[(0, col)], 255);
        assert_eq!(out[(h - 1, col)], 255);
    }
    for row in 0..h {
        assert_eq!(out[(row, 0)], 255);
        assert_eq!(out[(row, w - 1)], 255);
    }
}

#[test]
fn border_is_white_for_every_detector() {
    let mut rng = StdRng::seed_from_u64(7);
    for (w, h) in [(1, 1), (1, 7), (7, 1), (2, 2), (3, 3), (17, 11)] {
        let grid = random_grid(&mut rng, w, h);
        for kind in DetectorKind::ALL {
            let out = kind.build(4.0, false).unwrap().detect(&grid);
            assert_eq!((out.width(), out.height()), (w, h), "{kind}");
            assert_white_border(&out);
        }
    }
}

#[test]
fn grids_without_interior_are_all_white() {
    for (w, h) in [(0, 0), (0, 4), (4, 0), (2, 8), (8, 2)] {
        let grid = PixelGrid::blank(h, w, 0);
        for kind in DetectorKind::ALL {
            let out = kind.build(4.0, false).unwrap().detect(&grid);
            assert_eq!(out, PixelGrid::white(h, w), "{kind} {w}x{h}");
        }
    }
}

#[test]
fn detect_is_deterministic_and_leaves_input_untouched() {
    let grid = make_pattern(32, 24);
    let snapshot = grid.copy();
    for kind in DetectorKind::ALL {
        let detector = kind.build(2.0, false).unwrap();
        let first = detector.detect(&grid);
        let second = detector.detect(&grid);
        assert_eq!(first, second, "{kind}");
        assert_eq!(grid, snapshot, "{kind}");
    }
}

#[test]
fn uniform_input_has_zero_interior_for_gradient_presets() {
    for value in [0u8, 1, 128, 254, 255] {
        let grid = PixelGrid::blank(6, 9, value);
        for detector in [
            GradientDetector::difference(),
            GradientDetector::roberts(),
            GradientDetector::sobel(),
        ] {
            let out = detector.detect(&grid);
            // Interior responses are exactly zero, which quantizes to 0.
            for row in 1..5 {
                for col in 1..8 {
                    assert_eq!(out[(row, col)], 0);
                }
            }
        }
    }
}

#[test]
fn five_by_five_gray_through_sobel_has_zero_interior() {
    let grid = PixelGrid::blank(5, 5, 128);
    let out = make_sobel_detector(4.0).unwrap().detect(&grid);
    assert_eq!(out.width(), 5);
    assert_eq!(out.height(), 5);
    assert_white_border(&out);
    let interior: Vec<u8> = (1..4)
        .flat_map(|row| (1..4).map(move |col| (row, col)))
        .map(|idx| out[idx])
        .collect();
    assert_eq!(interior, vec![0u8; 9]);
    assert_eq!(edge_pixel_count(&out), 0);
}

#[test]
fn edge_pixel_count_tracks_a_vertical_step() {
    // Left half 0, right half 200: only columns 3 and 4 see the step.
    let mut grid = PixelGrid::blank(6, 8, 0);
    for row in 0..6 {
        for col in 4..8 {
            grid[(row, col)] = 200;
        }
    }
    for kind in [DetectorKind::Sobel, DetectorKind::Prewitt] {
        let out = kind.build(1.0, false).unwrap().detect(&grid);
        let expected = (1..5)
            .flat_map(|row| (1..7).map(move |col| (row, col)))
            .filter(|&idx| out[idx] > 0)
            .count();
        assert_eq!(edge_pixel_count(&out), expected, "{kind}");
    }
    let sobel = make_sobel_detector(1.0).unwrap().detect(&grid);
    assert_eq!(edge_pixel_count(&sobel), 2 * 4);
}

#[test]
fn raising_amplifier_never_lowers_a_sample() {
    let mut rng = StdRng::seed_from_u64(42);
    let grid = random_grid(&mut rng, 24, 18);
    for kind in DetectorKind::ALL {
        let mut previous = kind.build(0.01, false).unwrap().detect(&grid);
        for amplifier in [0.1, 0.5, 1.0, 2.0, 4.0, 16.0] {
            let out = kind.build(amplifier, false).unwrap().detect(&grid);
            for (lo, hi) in previous.as_slice().iter().zip(out.as_slice()) {
                assert!(lo <= hi, "{kind} at amplifier {amplifier}");
            }
            previous = out;
        }
    }
}

#[test]
fn large_amplifier_saturates_nonzero_responses() {
    let grid = make_pattern(16, 12);
    let view = grid.view();
    let detector = GradientDetector::sobel().with_amplifier(1.0e6).unwrap();
    let out = detector.detect(&grid);
    for row in 1..11 {
        for col in 1..15 {
            let (fx, fy) = detector.gradient_at(view, row, col).unwrap();
            let expected = if fx == 0.0 && fy == 0.0 { 0 } else { 255 };
            assert_eq!(out[(row, col)], expected);
        }
    }

    let detector = make_prewitt_detector(1.0e6).unwrap();
    let out = detector.detect(&grid);
    for row in 1..11 {
        for col in 1..15 {
            let (_, best) = detector.match_at(view, row, col).unwrap();
            let expected = if best > 0.0 { 255 } else { 0 };
            assert_eq!(out[(row, col)], expected);
        }
    }
}

#[test]
fn set_amplifier_does_not_touch_previous_outputs() {
    let grid = make_pattern(10, 10);
    let mut detector = GradientDetector::roberts();
    let before = detector.detect(&grid);
    let kept = before.copy();
    detector.set_amplifier(0.25).unwrap();
    let after = detector.detect(&grid);
    assert_eq!(before, kept);
    assert_ne!(before, after);
}

#[test]
fn compass_template_pattern_selects_its_own_direction() {
    let amplifier = 3.0;
    let detector = TemplateMatchingDetector::prewitt()
        .with_amplifier(amplifier)
        .unwrap();
    for (idx, kernel) in PREWITT_COMPASS.iter().enumerate() {
        // Light exactly the positive lobe of this template.
        let mut grid = PixelGrid::blank(3, 3, 0);
        for (r, coeffs) in kernel.coeffs().iter().enumerate() {
            for (c, &coeff) in coeffs.iter().enumerate() {
                if coeff > 0 {
                    grid[(r, c)] = 20;
                }
            }
        }
        let view = grid.view();
        let own = kernel.response(view, 1, 1);
        for other in PREWITT_COMPASS.iter() {
            assert!(own >= other.response(view, 1, 1), "template {idx}");
        }

        let (_, best) = detector.match_at(view, 1, 1).unwrap();
        assert_eq!(best, own);
        let expected = (amplifier * own).trunc().min(255.0) as u8;
        assert_eq!(detector.detect(&grid)[(1, 1)], expected);
    }
}

#[test]
fn strided_roi_matches_copied_grid() {
    let grid = make_pattern(20, 20);
    let roi = grid.view().roi(3, 4, 10, 12).unwrap();
    let copied = roi.to_grid();
    for kind in DetectorKind::ALL {
        let detector = kind.build(1.5, false).unwrap();
        assert_eq!(detector.detect_view(roi), detector.detect(&copied), "{kind}");
    }
}
