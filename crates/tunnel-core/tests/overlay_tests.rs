// Host-side tests for timestamp formatting and overlay layout.

use glam::Vec2;
use tunnel_core::{
    format_time, timestamp_label, Glyph, Overlay, OverlayBounds, OverlayStyle, Viewport,
};

#[test]
fn format_time_reference_values() {
    assert_eq!(format_time(0.0), "00:00");
    assert_eq!(format_time(65.0), "01:05");
    assert_eq!(format_time(59.999), "00:59");
    assert_eq!(format_time(3600.0), "60:00");
    assert_eq!(format_time(142.06), "02:22");
}

#[test]
fn format_time_rejects_garbage() {
    assert_eq!(format_time(-3.0), "00:00");
    assert_eq!(format_time(f64::NAN), "00:00");
    assert_eq!(format_time(f64::INFINITY), "00:00");
}

#[test]
fn label_clamps_elapsed_to_total() {
    assert_eq!(timestamp_label(10.0, 142.0), "00:10/02:22");
    assert_eq!(timestamp_label(500.0, 142.0), "02:22/02:22");
}

#[test]
fn button_sits_left_of_label() {
    let overlay = Overlay::new(OverlayStyle::default());
    let b = overlay.layout(Viewport::new(800.0, 600.0), 100.0);
    // 800 - 20 - 100 - 16 * 0.75 - 21
    assert_eq!(b.x, 647.0);
    // 600 - 20 - (16 + 21) / 2
    assert_eq!(b.y, 561.5);
    assert_eq!(b.size, 21.0);
}

#[test]
fn button_never_leaves_the_margin() {
    let overlay = Overlay::new(OverlayStyle::default());
    let b = overlay.layout(Viewport::new(120.0, 600.0), 300.0);
    assert_eq!(b.x, 20.0);
}

#[test]
fn hit_test_is_inclusive_on_edges() {
    let b = OverlayBounds {
        x: 10.0,
        y: 20.0,
        size: 21.0,
    };
    assert!(b.contains(10.0, 20.0));
    assert!(b.contains(31.0, 41.0));
    assert!(b.contains(20.0, 30.0));
    assert!(!b.contains(9.9, 30.0));
    assert!(!b.contains(20.0, 41.1));
}

#[test]
fn empty_bounds_never_hit() {
    let b = OverlayBounds::default();
    assert!(!b.contains(0.0, 0.0));
}

#[test]
fn glyph_follows_playing_flag() {
    let b = OverlayBounds {
        x: 100.0,
        y: 200.0,
        size: 20.0,
    };
    let c = Vec2::new(112.0, 209.0);
    match Glyph::for_bounds(b, true) {
        Glyph::Pause(bars) => {
            assert!((bars[0].center - Vec2::new(c.x - 2.4, c.y)).length() < 1e-4);
            assert!((bars[1].center - Vec2::new(c.x + 2.4, c.y)).length() < 1e-4);
            assert!((bars[0].size - Vec2::new(3.6, 10.0)).length() < 1e-4);
        }
        other => panic!("expected pause bars, got {other:?}"),
    }
    match Glyph::for_bounds(b, false) {
        Glyph::Play(tri) => {
            assert!((tri[2] - Vec2::new(c.x + 4.4, c.y)).length() < 1e-4);
            assert_eq!(tri[0].x, tri[1].x);
            assert!(tri[0].y < c.y && tri[1].y > c.y);
        }
        other => panic!("expected play triangle, got {other:?}"),
    }
}

#[test]
fn frame_carries_style_and_anchor() {
    let overlay = Overlay::new(OverlayStyle::default());
    let vp = Viewport::new(1024.0, 768.0);
    let f = overlay.frame(vp, "00:00/02:22".into(), 90.0, false);
    assert_eq!(f.label_anchor, Vec2::new(1004.0, 748.0));
    assert_eq!(f.rgba, [100, 100, 100, 220]);
    assert_eq!(f.font_size, 16.0);
    assert_eq!(f.button, overlay.layout(vp, 90.0));
    assert!(matches!(f.glyph, Glyph::Play(_)));
    assert_eq!(overlay.css_font(), "16px 'Sohne Mono', monospace");
}
