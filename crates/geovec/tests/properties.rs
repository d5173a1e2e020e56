//! Randomized checks of algebraic identities, driven by seeded generators.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use fastrand::Rng;
use geovec::{num, vec2, vec3, Error, Rect, Vec2, Vec3, Vec3d, Vector, VectorSliceExt};

const ITERATIONS: usize = 500;

fn rng() -> Rng {
    env_logger::builder().is_test(true).try_init().ok();
    Rng::with_seed(0x6c8e_9cf5_7063_8a51)
}

#[test]
fn integer_arithmetic_laws() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = Vec3::rand_range(&mut rng, -1000i32, 1000);
        let b = Vec3::rand_range(&mut rng, -1000i32, 1000);
        let c = Vec3::rand_range(&mut rng, -1000i32, 1000);

        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a - a, Vec3::ZERO);
        assert_eq!(a + Vec3::ZERO, a);
        assert_eq!(-(-a), a);
        assert_eq!(a.negated(), a * -1);
        assert_eq!(a * 3, a + a + a);

        assert_eq!(a.cross(b), -b.cross(a));
        assert_eq!(a.cross(a), Vec3::ZERO);
        assert_eq!(a.cross(b).dot(a), 0.0);
        assert_eq!(a.cross(b).dot(b), 0.0);

        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.dot(a), a.length_squared());
        assert_eq!(a.distance_squared(b), (b - a).length_squared());
        assert_eq!(a.min(b).max(a), a);
        assert!(a.min(b).all_le(a.max(b)));
    }
}

#[test]
fn float_metric_laws() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = Vec3::rand_range(&mut rng, -50.0, 50.0);
        let b = Vec3::rand_range(&mut rng, -50.0, 50.0);
        let c = Vec3::rand_range(&mut rng, -50.0, 50.0);

        assert_relative_eq!(a.length(), a.dot(a).sqrt());
        assert_relative_eq!(a.distance(b), b.distance(a));
        assert!(a.distance(c) <= a.distance(b) + b.distance(c) + 1e-9);
        assert_abs_diff_eq!(a.project(b) + a.reject(b), a, epsilon = 1e-9);
        assert_abs_diff_eq!(a.reject(b).dot(b), 0.0, epsilon = 1e-6);

        let n = a.normalized();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.reflect(Vec3::UP).length(), 1.0, epsilon = 1e-12);

        let angle = a.angle(b);
        assert!((0.0..=std::f64::consts::PI).contains(&angle));
        assert_relative_eq!(angle, b.angle(a));
        assert_relative_eq!(a.cross(b).angle(a), std::f64::consts::FRAC_PI_2, epsilon = 1e-6);

        assert_abs_diff_eq!(a.lerp(b, 0.0), a, epsilon = 1e-12);
        assert_abs_diff_eq!(a.lerp(b, 1.0), b, epsilon = 1e-12);
        assert_abs_diff_eq!(a.lerp(b, 0.5), a.midpoint(b), epsilon = 1e-12);
    }
}

#[test]
fn perpendiculars() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = Vec3::rand_range(&mut rng, -100i64, 100);
        assert_eq!(v.perpendicular().dot(v), 0.0);

        let p = Vec2::rand_range(&mut rng, -100i16, 100);
        assert_eq!(p.perpendicular().dot(p), 0.0);
        assert_eq!(p.perp_dot(p), 0.0);
    }

    let v = vec3(5.0, 0.0, 0.0);
    assert_eq!(v.perpendicular().dot(v), 0.0);
    assert_ne!(v.perpendicular(), Vec3::ZERO);
}

#[test]
fn random_directions() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        assert_relative_eq!(Vec3d::rand_normal(&mut rng).length(), 1.0, epsilon = 1e-12);
        assert!(Vec3d::rand_in_unit_sphere(&mut rng).length() < 1.0);
        assert!(Vector::<f64, 2>::rand_in_unit_sphere(&mut rng).length() < 1.0);

        let d = Vec3::rand_range(&mut rng, -4i8, 4);
        assert!(d.all_ge(Vector::splat(-4)) && d.all_lt(Vector::splat(4)));
    }

    let mut a = Rng::with_seed(99);
    let mut b = Rng::with_seed(99);
    assert_eq!(Vec3d::rand(&mut a), Vec3d::rand(&mut b));
}

#[test]
fn narrowing_to_integers() {
    assert_eq!(vec3(7, -7, 8).scale(0.5), vec3(3, -3, 4));
    assert_eq!(vec2(100i8, -100).scale(2.0), vec2(i8::MAX, i8::MIN));
    assert_eq!(vec2(1i32, 0).div_by_constant(0.0), vec2(i32::MAX, 0));
    assert_eq!(vec3(1, 1, 1).normalized(), vec3(0, 0, 0));
    assert_eq!(Vec3::<i32>::ZERO.normalized(), Vec3::ZERO);
    assert!(Vec3::<f32>::ZERO.normalized().contains_nan());
    assert_eq!(vec3(-2.5, 2.5, 0.49).round_to_int(), vec3(-3i64, 3, 0));
}

#[test]
fn batch_operations() -> anyhow::Result<()> {
    let mut rng = rng();
    let points: Vec<Vec3<f64>> = (0..64)
        .map(|_| Vec3::rand_range(&mut rng, -10.0, 10.0))
        .collect();

    let (min, max) = points.bounds()?;
    assert!(points.iter().all(|p| p.all_ge(min) && p.all_le(max)));

    let mean = points.average()?;
    assert!(mean.all_ge(min) && mean.all_le(max));
    assert_abs_diff_eq!(mean, points.sum().div_by_constant(64.0), epsilon = 1e-12);

    let (mean2, dev) = points.standard_deviation()?;
    assert_eq!(mean, mean2);
    assert!(dev.all_ge(Vec3::ZERO));

    let shifted = points.add(vec3(1.0, 2.0, 3.0));
    assert_relative_eq!(shifted.distance(), points.distance(), epsilon = 1e-9);

    let total: f64 = points.windows(2).map(|w| w[0].distance(w[1])).sum();
    assert_relative_eq!(points.distance(), total);

    assert!(points.normalized().iter().all(|p| num::near_zero(p.length() - 1.0)));

    let empty: &[Vec3<f64>] = &[];
    assert!(matches!(empty.average(), Err(Error::Empty { .. })));
    assert_eq!(empty.distance(), 0.0);
    Ok(())
}

#[test]
fn bounding_rect_contains_its_points() -> anyhow::Result<()> {
    let mut rng = rng();
    let points: Vec<_> = (0..32)
        .map(|_| Vec2::rand_range(&mut rng, -500i32, 500))
        .collect();

    let rect = Rect::bounding(&points)?;
    assert!(points.iter().all(|p| rect.contains(*p)));
    assert!(rect.size().all_ge(Vec2::ZERO));
    Ok(())
}
