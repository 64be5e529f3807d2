// tests/partition_properties.rs

use fraction_shapes::{
    clip_half_plane, partition_angular, partition_linear, FractionFigure, FractionRequest, HalfPlane, Point2, Polygon,
    PolygonGenerator, SceneLayout, ShapeKind, Tolerance, MAX_PARTS,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn total_area(parts: &[Polygon]) -> f64 {
    parts.iter().map(Polygon::area).sum()
}

fn figure(kind: ShapeKind, parts: usize, layout: &SceneLayout) -> FractionFigure {
    let request = FractionRequest::new(kind, parts, 0).unwrap();
    FractionFigure::build(&request, layout, Tolerance::default())
}

#[test]
fn parts_reconstruct_every_catalog_shape() {
    let layout = SceneLayout::default();
    for kind in ShapeKind::ALL {
        for n in 1..=MAX_PARTS {
            let figure = figure(kind, n, &layout);
            let whole = figure.outline.area();
            let relative = (total_area(&figure.parts) - whole).abs() / whole;
            assert!(relative < 1e-6, "{kind} / {n}: relative area error {relative}");
            assert!(figure.parts.len() <= n, "{kind} / {n}: {} parts", figure.parts.len());
        }
    }
}

#[test]
fn catalog_shapes_produce_every_requested_part() {
    let layout = SceneLayout::default();
    for kind in ShapeKind::ALL {
        for n in 1..=MAX_PARTS {
            assert_eq!(figure(kind, n, &layout).parts.len(), n, "{kind} / {n}");
        }
    }
}

#[test]
fn one_part_is_the_shape_itself() {
    let layout = SceneLayout::centered_on(640.0, 480.0);
    for kind in ShapeKind::ALL {
        let figure = figure(kind, 1, &layout);
        assert_eq!(figure.parts, vec![figure.outline.clone()], "{kind}");
    }
}

#[test]
fn hexagon_sectors_share_the_area_equally() {
    let hexagon = PolygonGenerator::regular_polygon(Point2::ZERO, 6, 100.0);
    let sectors = partition_angular(&hexagon, 6, Tolerance::default());
    assert_eq!(sectors.len(), 6);
    let sixth = hexagon.area() / 6.0;
    for sector in &sectors {
        assert!((sector.area() - sixth).abs() <= sixth * 0.01);
    }
}

#[test]
fn rectangle_strips_are_equal_rectangles() {
    let rectangle = PolygonGenerator::rectangle(Point2::ZERO, 200.0, 100.0);
    let strips = partition_linear(&rectangle, 4, Tolerance::default());
    assert_eq!(strips.len(), 4);
    for (i, strip) in strips.iter().enumerate() {
        let (min, max) = strip.bounds().unwrap();
        let left = -100.0 + 50.0 * i as f64;
        assert!((min.x - left).abs() < 1e-9);
        assert!((max.x - (left + 50.0)).abs() < 1e-9);
        assert!((max.y - min.y - 100.0).abs() < 1e-9);
        assert!((strip.area() - 50.0 * 100.0).abs() < 1e-6);
    }
}

#[test]
fn clipping_an_inside_polygon_changes_nothing() {
    let star = PolygonGenerator::star(Point2::new(5.0, -3.0), 6, 80.0, 40.0);
    let tol = Tolerance::default();
    for half_plane in [
        HalfPlane::vertical_left(200.0),
        HalfPlane::vertical_right(-200.0),
        HalfPlane::angular_right(Point2::new(0.0, 200.0), 0.0),
        HalfPlane::angular_left(Point2::new(0.0, -200.0), 0.0),
    ] {
        assert_eq!(clip_half_plane(&star, &half_plane, tol), star);
    }
}

#[test]
fn reclipping_an_angular_cut_changes_nothing() {
    let star = PolygonGenerator::star(Point2::new(5.0, -3.0), 6, 80.0, 40.0);
    let tol = Tolerance::default();
    for angle in [0.4, 2.0, -1.3] {
        let half_plane = HalfPlane::angular_left(star.centroid(), angle);
        let cut = clip_half_plane(&star, &half_plane, tol);
        assert!(cut.count() >= 3, "angle {angle}");
        assert!(cut.area() < star.area());
        assert_eq!(clip_half_plane(&cut, &half_plane, tol), cut, "angle {angle}");
    }
}

#[test]
fn centroid_of_symmetric_square_is_exact() {
    let square = Polygon::from_points(&[
        Point2::new(-100.0, -100.0),
        Point2::new(100.0, -100.0),
        Point2::new(100.0, 100.0),
        Point2::new(-100.0, 100.0),
    ]);
    assert_eq!(square.centroid(), Point2::new(0.0, 0.0));
}

#[test]
fn angular_sectors_sweep_from_the_top() {
    // On a Y-down canvas the first sector of a halved circle is its right half.
    let figure = figure(ShapeKind::Circle, 2, &SceneLayout::centered_on(400.0, 400.0));
    let (min, _) = figure.parts[0].bounds().unwrap();
    assert!(min.x >= 200.0 - 1e-9);
    let (_, max) = figure.parts[1].bounds().unwrap();
    assert!(max.x <= 200.0 + 1e-9);
}

#[test]
fn invariants_hold_for_arbitrary_layouts() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
        let n = rng.gen_range(1..=MAX_PARTS);
        let center = Point2::new(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0));
        let layout = SceneLayout::new(center, rng.gen_range(20.0..300.0)).unwrap();

        let figure = figure(kind, n, &layout);
        let whole = figure.outline.area();
        assert!(figure.parts.len() <= n);
        assert!((total_area(&figure.parts) - whole).abs() / whole < 1e-6, "{kind} / {n} at {layout:?}");
    }
}
