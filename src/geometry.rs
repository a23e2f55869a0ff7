use egui::{Pos2, Rect, Vec2};

/// Bounding box spanned by a drag, normalized so the size is never negative.
///
/// Swapping `anchor` and `release` yields the same rectangle.
pub fn normalized_box(anchor: Pos2, release: Pos2) -> Rect {
    Rect::from_two_pos(anchor, release)
}

/// Signed offset from a line's origin to its end point. Not normalized: a line has direction.
pub fn line_delta(anchor: Pos2, release: Pos2) -> Vec2 {
    release - anchor
}

/// Apex, bottom-right and bottom-left corners of the triangle inscribed in `bounds`.
pub fn triangle_vertices(bounds: Rect) -> [Pos2; 3] {
    [
        Pos2::new(bounds.center().x, bounds.min.y),
        bounds.right_bottom(),
        bounds.left_bottom(),
    ]
}

/// Center and x/y radii of the ellipse inscribed in `bounds`.
pub fn ellipse_center_radius(bounds: Rect) -> (Pos2, Vec2) {
    (bounds.center(), bounds.size() / 2.0)
}

/// Calculate distance from a point to a line segment
pub fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Calculate the bounding box for a set of points
pub fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_normalized_box_ignores_drag_direction() {
        let forward = normalized_box(pos2(10.0, 10.0), pos2(50.0, 50.0));
        let backward = normalized_box(pos2(50.0, 50.0), pos2(10.0, 10.0));

        assert_eq!(forward, backward);
        assert_eq!(forward.min, pos2(10.0, 10.0));
        assert_eq!(forward.size(), vec2(40.0, 40.0));
    }

    #[test]
    fn test_normalized_box_mixed_quadrant() {
        let rect = normalized_box(pos2(80.0, 5.0), pos2(20.0, 45.0));
        assert_eq!(rect.min, pos2(20.0, 5.0));
        assert_eq!(rect.size(), vec2(60.0, 40.0));
    }

    #[test]
    fn test_line_delta_keeps_sign() {
        assert_eq!(line_delta(pos2(50.0, 50.0), pos2(10.0, 10.0)), vec2(-40.0, -40.0));
        assert_eq!(line_delta(pos2(10.0, 10.0), pos2(50.0, 50.0)), vec2(40.0, 40.0));
    }

    #[test]
    fn test_triangle_vertices() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 60.0));
        let [apex, bottom_right, bottom_left] = triangle_vertices(rect);
        assert_eq!(apex, pos2(50.0, 0.0));
        assert_eq!(bottom_right, pos2(100.0, 60.0));
        assert_eq!(bottom_left, pos2(0.0, 60.0));
    }

    #[test]
    fn test_ellipse_center_radius() {
        let rect = Rect::from_min_size(pos2(10.0, 20.0), vec2(40.0, 10.0));
        let (center, radius) = ellipse_center_radius(rect);
        assert_eq!(center, pos2(30.0, 25.0));
        assert_eq!(radius, vec2(20.0, 5.0));
    }

    #[test]
    fn test_distance_to_segment() {
        let a = pos2(0.0, 0.0);
        let b = pos2(10.0, 0.0);
        assert!((distance_to_line_segment(pos2(5.0, 3.0), a, b) - 3.0).abs() < 1e-5);
        assert!((distance_to_line_segment(pos2(13.0, 4.0), a, b) - 5.0).abs() < 1e-5);
        // Degenerate segment collapses to point distance
        assert!((distance_to_line_segment(pos2(3.0, 4.0), a, a) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_calculate_bounds() {
        let points = [pos2(10.0, 30.0), pos2(20.0, 5.0), pos2(15.0, 12.0)];
        let rect = calculate_bounds(&points, 1.0);
        assert_eq!(rect.min, pos2(9.0, 4.0));
        assert_eq!(rect.max, pos2(21.0, 31.0));
        assert_eq!(calculate_bounds(&[], 1.0), Rect::NOTHING);
    }
}
