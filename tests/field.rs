use dotfield_wasm::field::{
    dot_alpha, dot_color, dot_radius, nearness, project, rotate, sample_dot, wave_height,
    wave_time, GridBounds, Rotated, CAMERA_OFFSET, HORIZON_RATIO, MARGIN_CELLS,
};
use dotfield_wasm::{RenderConfig, RenderOptions, ViewportState};

fn config(spacing: f64, amplitude: f64) -> RenderConfig {
    RenderConfig::try_from(RenderOptions {
        spacing: Some(spacing),
        amplitude: Some(amplitude),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn bounds_keep_the_margin_for_many_viewports() {
    let sizes = [(0.0, 0.0), (1.0, 1.0), (320.0, 568.0), (800.0, 600.0), (1920.0, 1080.0), (5120.0, 300.0)];
    for spacing in [1.0, 7.5, 22.0, 64.0, 1000.0] {
        for (w, h) in sizes {
            let b = GridBounds::covering(&ViewportState::measure(w, h, 1.0), spacing);
            assert!(b.cols >= (w / spacing).ceil() as i32 + MARGIN_CELLS, "{w}x{h}/{spacing}");
            assert!(b.rows >= (h / spacing).ceil() as i32 + MARGIN_CELLS, "{w}x{h}/{spacing}");
            assert!(b.cols >= 1 && b.rows >= 1);
        }
    }
}

#[test]
fn bounds_for_reference_viewport() {
    let b = GridBounds::covering(&ViewportState::measure(800.0, 600.0, 1.0), 22.0);
    assert_eq!(b, GridBounds { cols: 47, rows: 38 });
    assert_eq!(b.point_count(), 95 * 77);
    assert_eq!(b.points().count() as u64, b.point_count());
    assert_eq!(b.points().next(), Some((-47, -38)));
    assert_eq!(b.points().last(), Some((47, 38)));
}

#[test]
fn point_count_does_not_overflow_for_extreme_bounds() {
    let widest = GridBounds { cols: i32::MAX, rows: i32::MAX };
    let span = 2 * u64::from(i32::MAX as u32) + 1;
    assert_eq!(widest.point_count(), span * span);
    assert_eq!(GridBounds { cols: -3, rows: 0 }.point_count(), 1);
}

#[test]
fn nearness_stays_in_unit_range() {
    for amplitude in [0.0, 1.0, 26.0, 400.0] {
        for z in [-1e9, -5000.0, -CAMERA_OFFSET, 0.0, amplitude, 800.0, 1e9] {
            let n = nearness(z, amplitude);
            assert!((0.0..=1.0).contains(&n), "z={z} amp={amplitude} -> {n}");
        }
    }
    assert_eq!(nearness(0.0, 0.0), 1.0);
    assert_eq!(nearness(CAMERA_OFFSET + 26.0, 26.0), 0.0);
    assert_eq!(nearness(f64::NAN, 26.0), 0.0);
}

#[test]
fn nearness_in_range_for_every_sampled_dot() {
    let viewport = ViewportState::measure(1280.0, 720.0, 1.0);
    for (spacing, amplitude) in [(22.0, 26.0), (9.0, 0.0), (40.0, 300.0)] {
        let cfg = config(spacing, amplitude);
        let bounds = GridBounds::covering(&viewport, spacing);
        for t in [0.0, 1.7, 42.0] {
            for point in bounds.points() {
                if let Some(dot) = sample_dot(&cfg, &viewport, &bounds, point, t) {
                    assert!((0.0..=1.0).contains(&dot.nearness));
                    assert!((0.0..=1.0).contains(&dot.alpha));
                    assert!(dot.radius >= 1.0);
                }
            }
        }
    }
}

#[test]
fn wave_is_bounded_by_amplitude() {
    for ix in -40..40 {
        for iy in -30..30 {
            let z = wave_height(ix, iy, 3.3, 26.0);
            assert!(z.abs() <= 26.0 * 1.8 + 1e-9);
        }
    }
    assert_eq!(wave_height(5, 9, 12.0, 0.0), 0.0);
    // t = 0 at the origin: sin(0) + cos(0) * 0.8
    assert!((wave_height(0, 0, 0.0, 10.0) - 8.0).abs() < 1e-12);
}

#[test]
fn rotation_preserves_distance_from_origin() {
    let (x, y, z) = (120.0, -340.0, 18.0);
    let r = rotate(x, y, z);
    let before = (x * x + y * y + z * z).sqrt();
    let after = (r.x * r.x + r.y * r.y + r.z * r.z).sqrt();
    assert!((before - after).abs() < 1e-9);
}

#[test]
fn rows_below_origin_come_toward_the_camera() {
    assert!(rotate(0.0, 200.0, 0.0).z < 0.0);
    assert!(rotate(0.0, -200.0, 0.0).z > 0.0);
}

#[test]
fn projection_scales_by_depth() {
    let origin = rotate(0.0, 0.0, 0.0);
    assert_eq!(project(origin, 400.0, 432.0), Some((400.0, 432.0)));

    let at_depth = |z| Rotated { x: 100.0, y: -50.0, z };
    let far = project(at_depth(300.0), 0.0, 0.0).unwrap();
    let near = project(at_depth(-300.0), 0.0, 0.0).unwrap();
    assert!((far.0 - 60.0).abs() < 1e-9);
    assert!((near.0 - 100.0).abs() < 1e-9);
    assert!(near.1 < far.1);
}

#[test]
fn points_behind_the_camera_are_dropped() {
    let behind = Rotated { x: 10.0, y: 10.0, z: -CAMERA_OFFSET - 5.0 };
    assert_eq!(project(behind, 0.0, 0.0), None);
}

#[test]
fn dot_radius_grows_with_nearness() {
    assert!((dot_radius(0.0) - 1.3).abs() < 1e-12);
    assert!((dot_radius(1.0) - 3.5).abs() < 1e-12);
    assert!(dot_radius(-10.0) >= 1.0);
}

#[test]
fn dot_color_mixes_far_to_near() {
    let cfg = RenderConfig::default();
    assert_eq!(dot_color(&cfg, 1.0), cfg.near_color());
    assert_eq!(dot_color(&cfg, 0.0), cfg.far_color().lerp(cfg.near_color(), 0.15));
}

#[test]
fn dots_above_the_horizon_fade() {
    let horizon = 600.0 * HORIZON_RATIO;
    let high = dot_alpha(50.0, horizon, 0.5);
    let low = dot_alpha(horizon + 10.0, horizon, 0.5);
    assert!(high < low);
    assert!((dot_alpha(horizon, horizon, 1.0) - 1.0).abs() < 1e-12);
    assert!((0.0..=1.0).contains(&dot_alpha(-900.0, horizon, 0.0)));
    assert!((0.0..=1.0).contains(&dot_alpha(100.0, 0.0, 0.3)));
}

#[test]
fn wave_time_scales_by_speed() {
    assert_eq!(wave_time(0.0, 0.9), 0.0);
    assert!((wave_time(2000.0, 0.9) - 1.8).abs() < 1e-12);
    assert_eq!(wave_time(-50.0, 1.0), 0.0);
}

#[test]
fn viewport_caps_pixel_ratio() {
    assert_eq!(ViewportState::measure(10.0, 10.0, 3.0).pixel_ratio, 2.0);
    assert_eq!(ViewportState::measure(10.0, 10.0, 1.5).pixel_ratio, 1.5);
    assert_eq!(ViewportState::measure(10.0, 10.0, 0.0).pixel_ratio, 1.0);
    assert_eq!(ViewportState::measure(10.0, 10.0, f64::NAN).pixel_ratio, 1.0);

    let v = ViewportState::measure(-5.0, f64::INFINITY, 2.0);
    assert_eq!((v.width, v.height), (0.0, 0.0));
    assert_eq!(ViewportState::measure(800.0, 600.0, 3.0).backing_size(), (1600, 1200));
}
