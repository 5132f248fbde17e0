//! Point-in-shape tests on NDC-projected geometry.
//!
//! All tests are pure and hold no state between calls. Neither test depends
//! on vertex winding.

use glam::{Mat4, Vec2};

use crate::projection::{project_each, project_ring};
use crate::shape::Shape;

/// Barycentric point-in-triangle test.
///
/// Boundary rule: the two edges meeting at `a` count as inside, the edge
/// `b`-`c` counts as outside (`u + v < 1`).
///
/// A zero-area triangle never reports a hit.
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(v0);
    let dot01 = v0.dot(v1);
    let dot02 = v0.dot(v2);
    let dot11 = v1.dot(v1);
    let dot12 = v1.dot(v2);

    // denom = |v0|^2 |v1|^2 sin^2(angle); compare relative to the edge lengths
    // so that nearly collinear input is also rejected.
    let denom = dot00 * dot11 - dot01 * dot01;
    if !denom.is_finite() || denom.abs() <= f32::EPSILON * dot00 * dot11 {
        return false;
    }

    let inv_denom = 1.0 / denom;
    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

    u >= 0.0 && v >= 0.0 && u + v < 1.0
}

/// Even-odd ray casting over a closed ring.
///
/// A horizontal ray runs from `p` towards +X; every edge it crosses toggles
/// the result. Edges whose endpoints lie on the same side of the ray (which
/// includes horizontal and zero-length edges) are skipped, so the crossing
/// division never sees a zero denominator.
///
/// Concave and self-intersecting rings follow the even-odd rule as-is.
pub fn point_in_polygon(p: Vec2, ring: &[Vec2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = ring[i];
        let vj = ring[j];

        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }

        j = i;
    }

    inside
}

/// Dispatches on vertex count: triangles use the barycentric test, larger
/// rings use ray casting, anything smaller is a miss.
pub fn hit_test(pointer_ndc: Vec2, ring: &[Vec2]) -> bool {
    match ring {
        [a, b, c] => point_in_triangle(pointer_ndc, *a, *b, *c),
        r if r.len() > 3 => point_in_polygon(pointer_ndc, r),
        _ => false,
    }
}

/// True if any indexed triangle contains the point.
///
/// Triangles referencing an unprojectable or out-of-range vertex are skipped.
/// A trailing partial triangle is ignored.
pub fn hit_test_indexed(pointer_ndc: Vec2, vertices: &[Option<Vec2>], indices: &[u16]) -> bool {
    let get = |i: u16| vertices.get(i as usize).copied().flatten();

    indices.chunks_exact(3).any(|tri| {
        match (get(tri[0]), get(tri[1]), get(tri[2])) {
            (Some(a), Some(b), Some(c)) => point_in_triangle(pointer_ndc, a, b, c),
            _ => false,
        }
    })
}

/// Projects a shape through `mvp` and tests the pointer against it.
pub fn hit_test_shape(shape: &Shape, pointer_ndc: Vec2, mvp: Mat4) -> bool {
    match shape.indices() {
        Some(indices) => {
            let projected = project_each(shape.vertices(), mvp);
            hit_test_indexed(pointer_ndc, &projected, indices)
        }
        None => {
            let projected = project_ring(shape.vertices(), mvp);
            hit_test(pointer_ndc, &projected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use rand::prelude::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    fn reference_triangle() -> [Vec2; 3] {
        [v(0.0, 0.25), v(0.25, -0.25), v(-0.25, -0.25)]
    }

    fn quad(half: f32) -> [Vec2; 4] {
        [v(-half, -half), v(half, -half), v(half, half), v(-half, half)]
    }

    // ── point_in_triangle ─────────────────────────────────────────────────

    #[test]
    fn triangle_centre_is_inside() {
        let [a, b, c] = reference_triangle();
        assert!(point_in_triangle(v(0.0, 0.0), a, b, c));
    }

    #[test]
    fn triangle_far_point_is_outside() {
        let [a, b, c] = reference_triangle();
        assert!(!point_in_triangle(v(0.9, 0.9), a, b, c));
        assert!(!point_in_triangle(v(0.0, -0.3), a, b, c));
        assert!(!point_in_triangle(v(0.2, 0.2), a, b, c));
    }

    #[test]
    fn triangle_interior_samples() {
        let [a, b, c] = reference_triangle();
        // Convex combinations with all weights strictly positive.
        for (wa, wb) in [(0.2, 0.3), (0.6, 0.2), (0.1, 0.1), (0.33, 0.33), (0.05, 0.9)] {
            let wc = 1.0 - wa - wb;
            let p = a * wa + b * wb + c * wc;
            assert!(point_in_triangle(p, a, b, c), "weights ({wa}, {wb}, {wc})");
        }
    }

    #[test]
    fn triangle_winding_does_not_matter() {
        let [a, b, c] = reference_triangle();
        let p = v(0.05, -0.1);
        assert!(point_in_triangle(p, a, b, c));
        assert!(point_in_triangle(p, a, c, b));
    }

    #[test]
    fn triangle_boundary_is_deterministic() {
        let a = v(0.0, 0.0);
        let b = v(1.0, 0.0);
        let c = v(0.0, 1.0);
        // Edges through `a` are inside.
        assert!(point_in_triangle(v(0.5, 0.0), a, b, c));
        assert!(point_in_triangle(v(0.0, 0.5), a, b, c));
        assert!(point_in_triangle(a, a, b, c));
        // Edge opposite `a` is outside.
        assert!(!point_in_triangle(v(0.5, 0.5), a, b, c));
    }

    #[test]
    fn degenerate_triangle_never_hits() {
        let a = v(0.0, 0.0);
        let b = v(1.0, 1.0);
        let c = v(2.0, 2.0);
        assert!(!point_in_triangle(v(1.0, 1.0), a, b, c));
        assert!(!point_in_triangle(v(0.5, 0.5), a, a, a));
    }

    // ── point_in_polygon ──────────────────────────────────────────────────

    #[test]
    fn quad_inside_and_outside() {
        let q = quad(0.1);
        assert!(point_in_polygon(v(0.05, 0.05), &q));
        assert!(!point_in_polygon(v(0.2, 0.2), &q));
    }

    #[test]
    fn polygon_needs_three_vertices() {
        assert!(!point_in_polygon(v(0.0, 0.0), &[]));
        assert!(!point_in_polygon(v(0.0, 0.0), &[v(-1.0, 0.0), v(1.0, 0.0)]));
    }

    #[test]
    fn polygon_with_repeated_vertex_still_works() {
        // Zero-length edge between the duplicated corners.
        let ring = [v(-0.1, -0.1), v(0.1, -0.1), v(0.1, -0.1), v(0.1, 0.1), v(-0.1, 0.1)];
        assert!(point_in_polygon(v(0.0, 0.0), &ring));
        assert!(!point_in_polygon(v(0.3, 0.0), &ring));
    }

    #[test]
    fn concave_notch_is_outside() {
        // "U" shape opening upward.
        let ring = [
            v(-0.5, -0.5),
            v(0.5, -0.5),
            v(0.5, 0.5),
            v(0.2, 0.5),
            v(0.2, -0.2),
            v(-0.2, -0.2),
            v(-0.2, 0.5),
            v(-0.5, 0.5),
        ];
        assert!(point_in_polygon(v(-0.35, 0.2), &ring));
        assert!(!point_in_polygon(v(0.0, 0.2), &ring));
        assert!(point_in_polygon(v(0.0, -0.35), &ring));
    }

    #[test]
    fn self_intersecting_bowtie_uses_even_odd() {
        // Corners 2 and 3 swapped: the ring crosses itself at the origin.
        let ring = [v(-0.5, -0.5), v(0.5, -0.5), v(-0.5, 0.5), v(0.5, 0.5)];
        assert!(point_in_polygon(v(0.0, -0.3), &ring));
        assert!(point_in_polygon(v(0.0, 0.3), &ring));
        assert!(!point_in_polygon(v(-0.4, 0.0), &ring));
        assert!(!point_in_polygon(v(0.4, 0.0), &ring));
    }

    #[test]
    fn polygon_agrees_with_triangle_split_on_random_points() {
        let q = [v(-0.6, -0.4), v(0.5, -0.5), v(0.7, 0.6), v(-0.4, 0.5)];
        let edges = [(q[0], q[1]), (q[1], q[2]), (q[2], q[3]), (q[3], q[0]), (q[0], q[2])];

        let seed: u64 = rand::random();
        println!("agreement seed: {seed}");
        let mut rng = StdRng::seed_from_u64(seed);

        let mut checked = 0;
        while checked < 200 {
            let p = v(rng.random::<f32>() * 2.0 - 1.0, rng.random::<f32>() * 2.0 - 1.0);

            // Points this close to an edge (or to the split diagonal) may be
            // classified differently by the two boundary rules; skip them.
            if edges.iter().any(|&(a, b)| distance_to_line(p, a, b) < 1e-3) {
                continue;
            }

            let by_polygon = point_in_polygon(p, &q);
            let by_triangles =
                point_in_triangle(p, q[0], q[1], q[2]) || point_in_triangle(p, q[0], q[2], q[3]);
            assert_eq!(by_polygon, by_triangles, "disagreement at {p:?} (seed {seed})");
            checked += 1;
        }
    }

    fn distance_to_line(p: Vec2, a: Vec2, b: Vec2) -> f32 {
        let d = b - a;
        (d.perp_dot(p - a)).abs() / d.length()
    }

    // ── hit_test ──────────────────────────────────────────────────────────

    #[test]
    fn hit_test_dispatches_on_vertex_count() {
        assert!(hit_test(v(0.0, 0.0), &reference_triangle()));
        assert!(!hit_test(v(0.9, 0.9), &reference_triangle()));
        assert!(hit_test(v(0.05, 0.05), &quad(0.1)));
        assert!(!hit_test(v(0.0, 0.0), &[v(0.0, 0.0), v(1.0, 0.0)]));
    }

    #[test]
    fn hit_test_indexed_skips_missing_vertices() {
        let verts = [Some(v(-1.0, -1.0)), Some(v(1.0, -1.0)), None, Some(v(-1.0, 1.0))];
        // First triangle references the missing vertex; second is intact.
        let indices = [0, 1, 2, 0, 1, 3];
        assert!(hit_test_indexed(v(-0.5, -0.5), &verts, &indices));
        assert!(!hit_test_indexed(v(0.5, 0.5), &verts, &indices[..3]));
        // Out-of-range index is skipped, not a panic.
        assert!(!hit_test_indexed(v(0.0, 0.0), &verts, &[0, 1, 9]));
    }

    #[test]
    fn hit_test_shape_uses_transform() {
        let shape = Shape::quad(0.1);
        let moved = Mat4::from_translation(Vec3::new(0.5, 0.0, 0.0));
        assert!(hit_test_shape(&shape, v(0.5, 0.05), moved));
        assert!(!hit_test_shape(&shape, v(0.0, 0.0), moved));
    }

    #[test]
    fn hit_test_shape_indexed_cuboid() {
        let cuboid = Shape::cuboid(Vec3::splat(0.5));
        assert!(hit_test_shape(&cuboid, v(0.0, 0.0), Mat4::IDENTITY));
        assert!(hit_test_shape(&cuboid, v(0.45, -0.45), Mat4::IDENTITY));
        assert!(!hit_test_shape(&cuboid, v(0.6, 0.0), Mat4::IDENTITY));
    }
}
