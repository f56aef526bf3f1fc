use flo_stained_glass::boundary::*;
use flo_stained_glass::distance::*;

use rand::prelude::*;

///
/// Finds the squared distance to the nearest boundary pixel by checking every boundary pixel
///
fn brute_force_squared_distance(mask: &BoundaryMask, x: usize, y: usize) -> Option<f64> {
    let mut nearest: Option<f64> = None;

    for by in 0..mask.height() {
        for bx in 0..mask.width() {
            if mask.is_boundary(bx, by) {
                let dx = bx as f64 - x as f64;
                let dy = by as f64 - y as f64;
                let d  = dx*dx + dy*dy;

                nearest = Some(nearest.map(|nearest| nearest.min(d)).unwrap_or(d));
            }
        }
    }

    nearest
}

fn random_mask(rng: &mut StdRng, width: usize, height: usize, density: f64) -> BoundaryMask {
    BoundaryMask::from_fn(width, height, |_, _| rng.gen_bool(density))
}

#[test]
fn matches_brute_force_on_random_masks() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..24 {
        let width   = rng.gen_range(1..=64);
        let height  = rng.gen_range(1..=64);
        let density = rng.gen_range(0.002..0.3);
        let mask    = random_mask(&mut rng, width, height, density);
        let field   = distance_transform(&mask);

        assert!(field.width() == width && field.height() == height);

        for y in 0..height {
            for x in 0..width {
                let actual = field.squared_distance(x as isize, y as isize);

                match brute_force_squared_distance(&mask, x, y) {
                    Some(expected)  => assert!(actual == expected, "{}x{} mask: ({}, {}) should be {} but was {}", width, height, x, y, expected, actual),
                    None            => assert!(DistanceField::is_infinite(actual), "{}x{} mask has no boundary but ({}, {}) was {}", width, height, x, y, actual),
                }
            }
        }
    }
}

#[test]
fn single_row_and_single_column() {
    let column  = distance_transform(&BoundaryMask::from_fn(1, 9, |_, y| y == 3));
    let row     = distance_transform(&BoundaryMask::from_fn(9, 1, |x, _| x == 3));

    for idx in 0..9 {
        let expected = ((idx as f64) - 3.0) * ((idx as f64) - 3.0);

        assert!(column.squared_distance(0, idx) == expected, "Column ({}) was {}", idx, column.squared_distance(0, idx));
        assert!(row.squared_distance(idx, 0) == expected, "Row ({}) was {}", idx, row.squared_distance(idx, 0));
    }
}

#[test]
fn sparse_masks_match_brute_force() {
    // Only a couple of boundary pixels, so most columns have no boundary at all
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..8 {
        let width   = rng.gen_range(2..=48);
        let height  = rng.gen_range(2..=48);
        let px      = rng.gen_range(0..width);
        let py      = rng.gen_range(0..height);
        let mask    = BoundaryMask::from_fn(width, height, |x, y| (x == px && y == py) || (x == width-1 && y == 0));
        let field   = distance_transform(&mask);

        for y in 0..height {
            for x in 0..width {
                let expected = brute_force_squared_distance(&mask, x, y).unwrap();
                assert!(field.squared_distance(x as isize, y as isize) == expected);
            }
        }
    }
}

#[test]
fn boundary_pixels_are_zero() {
    let mut rng = StdRng::seed_from_u64(7);
    let mask    = random_mask(&mut rng, 50, 40, 0.2);
    let field   = distance_transform(&mask);

    for y in 0..40 {
        for x in 0..50 {
            if mask.is_boundary(x, y) {
                assert!(field.squared_distance(x as isize, y as isize) == 0.0);
                assert!(field.distance(x as isize, y as isize) == 0.0);
            }
        }
    }
}

#[test]
fn vertical_line() {
    let mask    = BoundaryMask::from_fn(100, 100, |x, _| x == 50);
    let field   = distance_transform(&mask);

    assert!(field.squared_distance(0, 0) == 2500.0, "(0, 0) was {}", field.squared_distance(0, 0));
    assert!(field.distance(0, 0) == 50.0);
    assert!(field.squared_distance(99, 99) == 49.0*49.0);
    assert!(field.squared_distance(50, 73) == 0.0);
    assert!(field.squared_distance(47, 12) == 9.0);

    assert!(field.max_finite_distance() == 50.0);

    let normalized = field.normalized();
    assert!(*normalized.get(0, 0).unwrap() == 1.0);
    assert!(*normalized.get(50, 0).unwrap() == 0.0);
    assert!((*normalized.get(25, 10).unwrap() - 0.5).abs() < 1e-6);
}

#[test]
fn single_point() {
    let mask    = BoundaryMask::from_fn(5, 5, |x, y| x == 2 && y == 2);
    let field   = distance_transform(&mask);

    assert!(field.squared_distance(0, 0) == 8.0);
    assert!(field.squared_distance(4, 0) == 8.0);
    assert!(field.squared_distance(2, 0) == 4.0);
    assert!(field.squared_distance(1, 2) == 1.0);
}

#[test]
fn empty_mask_is_infinitely_far_from_a_boundary() {
    let mask    = BoundaryMask::from_fn(30, 20, |_, _| false);
    let field   = distance_transform(&mask);

    for y in 0..20 {
        for x in 0..30 {
            let squared = field.squared_distance(x, y);
            assert!(DistanceField::is_infinite(squared), "({}, {}) was {}", x, y, squared);
        }
    }

    assert!(field.max_finite_distance() == 0.0);

    let normalized = field.normalized();
    assert!(normalized.cells().iter().all(|value| *value == 0.0));
}

#[test]
fn out_of_bounds_is_zero() {
    let mask    = BoundaryMask::from_fn(10, 10, |x, y| x == 0 && y == 0);
    let field   = distance_transform(&mask);

    assert!(field.squared_distance(9, 9) == 162.0);
    assert!(field.squared_distance(-1, 0) == 0.0);
    assert!(field.squared_distance(0, -1) == 0.0);
    assert!(field.squared_distance(10, 5) == 0.0);
    assert!(field.distance(5, 10) == 0.0);
}

#[test]
fn empty_image() {
    let field = distance_transform(&BoundaryMask::empty());

    assert!(field.width() == 0 && field.height() == 0);
    assert!(field.max_finite_distance() == 0.0);
    assert!(field.normalized().is_empty());
}

#[test]
fn crop_keeps_global_distances() {
    let mask    = BoundaryMask::from_fn(20, 20, |x, _| x == 0);
    let field   = distance_transform(&mask);
    let cropped = field.crop(10, 5, 5, 5).unwrap();

    assert!(cropped.width() == 5 && cropped.height() == 5);
    assert!(cropped.squared_distance(0, 0) == 100.0);
    assert!(cropped.squared_distance(4, 4) == 196.0);

    assert!(field.crop(18, 0, 5, 5).is_err());
}
