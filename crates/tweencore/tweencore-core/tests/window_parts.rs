use approx::assert_abs_diff_eq;
use tweencore_core::{float::inverse_lerp, ChangePart, PartKind, ScalarChange};

fn collect_window(previous: f32, current: f32, from: f32, to: f32) -> Vec<ChangePart> {
    let mut parts = Vec::new();
    ScalarChange::new(previous, current).segment_window(from, to, |part| parts.push(part));
    parts
}

#[test]
fn entering_window_reports_clipped_part() {
    let parts = collect_window(0.4, 0.6, 0.5, 1.0);
    assert_eq!(parts.len(), 1);
    let part = parts[0];
    assert_eq!(part.kind, PartKind::Window);
    assert_abs_diff_eq!(part.previous, 0.0);
    assert_abs_diff_eq!(part.current, 0.2, epsilon = 1e-6);
    assert!(part.is_entrance());
    assert!(!part.is_exit());
    assert!(!part.is_minor_change);
}

#[test]
fn tick_inside_window_is_normalized() {
    let parts = collect_window(3.0, 4.0, 2.0, 6.0);
    assert_eq!(parts.len(), 1);
    assert_abs_diff_eq!(parts[0].previous, 0.25);
    assert_abs_diff_eq!(parts[0].current, 0.5);
    assert!(!parts[0].is_entrance());
    assert!(!parts[0].is_exit());
}

#[test]
fn tick_through_whole_window_backward() {
    let parts = collect_window(10.0, -10.0, 0.0, 1.0);
    assert_eq!(parts.len(), 1);
    assert_eq!((parts[0].previous, parts[0].current), (1.0, 0.0));
    assert!(parts[0].is_entrance());
    assert!(parts[0].is_exit());
}

#[test]
fn reversed_window_normalizes_from_its_start() {
    // window starts at 1.0 and ends at 0.5
    let parts = collect_window(0.9, 0.7, 1.0, 0.5);
    assert_eq!(parts.len(), 1);
    assert_abs_diff_eq!(parts[0].previous, 0.2, epsilon = 1e-6);
    assert_abs_diff_eq!(parts[0].current, 0.6, epsilon = 1e-6);
}

#[test]
fn no_part_for_zero_length_tick() {
    assert!(collect_window(0.7, 0.7, 0.5, 1.0).is_empty());
}

#[test]
fn no_part_when_tick_misses_window() {
    assert!(collect_window(0.1, 0.4, 0.5, 1.0).is_empty());
    assert!(collect_window(1.5, 1.2, 0.5, 1.0).is_empty());
    // touching the edge from outside is not an overlap
    assert!(collect_window(0.2, 0.5, 0.5, 1.0).is_empty());
    assert!(collect_window(1.0, 1.3, 0.5, 1.0).is_empty());
}

#[test]
fn leaving_window_from_its_edge_counts() {
    let parts = collect_window(0.5, 0.75, 0.5, 1.0);
    assert_eq!(parts.len(), 1);
    assert_abs_diff_eq!(parts[0].previous, 0.0);
    assert_abs_diff_eq!(parts[0].current, 0.5);
}

#[test]
fn zero_width_window_acts_as_step() {
    let forward = collect_window(0.2, 0.8, 0.5, 0.5);
    assert_eq!(forward.len(), 1);
    assert_eq!((forward[0].previous, forward[0].current), (0.0, 1.0));

    let backward = collect_window(0.8, 0.2, 0.5, 0.5);
    assert_eq!((backward[0].previous, backward[0].current), (1.0, 0.0));

    // landing on the point does not cross it
    assert!(collect_window(0.2, 0.5, 0.5, 0.5).is_empty());
}

#[test]
fn parts_match_clamped_normalization() {
    let windows = [(0.0, 1.0), (0.25, 0.75), (2.0, -2.0)];
    let ticks = [(-0.5, 0.3), (0.1, 0.9), (1.4, 0.6), (-3.0, 3.0), (0.6, 0.2)];
    for &(from, to) in &windows {
        for &(previous, current) in &ticks {
            for part in collect_window(previous, current, from, to) {
                assert!((0.0..=1.0).contains(&part.previous));
                assert!((0.0..=1.0).contains(&part.current));
                assert_abs_diff_eq!(
                    part.previous,
                    inverse_lerp(previous, from, to).clamp(0.0, 1.0)
                );
                assert_abs_diff_eq!(
                    part.current,
                    inverse_lerp(current, from, to).clamp(0.0, 1.0)
                );
            }
        }
    }
}

#[test]
fn easing_through_map() {
    let eased = ScalarChange::new(0.0, 0.5).map(|t| t * t);
    let mut parts = Vec::new();
    eased.segment_window(0.0, 1.0, |part| parts.push(part));
    assert_abs_diff_eq!(parts[0].current, 0.25);
}
