use glam::Vec3;

/// Local-space geometry of a draggable shape.
///
/// Flat shapes are a closed vertex ring (hit-tested as a polygon). Solids
/// carry a triangle index list and are hit-tested triangle by triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    vertices: Vec<Vec3>,
    indices: Option<Vec<u16>>,
}

/// Triangle list for [`Shape::cuboid`]: two triangles per face.
pub const CUBOID_INDICES: [u16; 36] = [
    0, 1, 2, 2, 3, 0, // back   (z-)
    4, 5, 6, 6, 7, 4, // front  (z+)
    4, 5, 1, 1, 0, 4, // bottom (y-)
    3, 2, 6, 6, 7, 3, // top    (y+)
    4, 0, 3, 3, 7, 4, // left   (x-)
    1, 5, 6, 6, 2, 1, // right  (x+)
];

impl Shape {
    /// Flat shape from a closed vertex ring.
    pub fn polygon(vertices: Vec<Vec3>) -> Self {
        Self { vertices, indices: None }
    }

    /// Solid shape from vertices and a triangle index list.
    pub fn indexed(vertices: Vec<Vec3>, indices: Vec<u16>) -> Self {
        Self { vertices, indices: Some(indices) }
    }

    pub fn triangle(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self::polygon(vec![a, b, c])
    }

    /// The small triangle drawn by the slider-controlled demo.
    pub fn reference_triangle() -> Self {
        Self::triangle(
            Vec3::new(0.0, 0.25, 0.0),
            Vec3::new(0.25, -0.25, 0.0),
            Vec3::new(-0.25, -0.25, 0.0),
        )
    }

    /// Axis-aligned square centred on the origin.
    pub fn quad(half_extent: f32) -> Self {
        let h = half_extent;
        Self::polygon(vec![
            Vec3::new(-h, -h, 0.0),
            Vec3::new(h, -h, 0.0),
            Vec3::new(h, h, 0.0),
            Vec3::new(-h, h, 0.0),
        ])
    }

    /// Box centred on the origin with per-axis half extents.
    pub fn cuboid(half: Vec3) -> Self {
        let (x, y, z) = (half.x, half.y, half.z);
        Self::indexed(
            vec![
                Vec3::new(-x, -y, -z),
                Vec3::new(x, -y, -z),
                Vec3::new(x, y, -z),
                Vec3::new(-x, y, -z),
                Vec3::new(-x, -y, z),
                Vec3::new(x, -y, z),
                Vec3::new(x, y, z),
                Vec3::new(-x, y, z),
            ],
            CUBOID_INDICES.to_vec(),
        )
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> Option<&[u16]> {
        self.indices.as_deref()
    }

    /// Triangle list suitable for rendering.
    ///
    /// Indexed shapes return their own list; rings are fan-triangulated from
    /// vertex 0, which is exact for the convex shapes the demos draw.
    pub fn triangle_indices(&self) -> Vec<u16> {
        if let Some(indices) = &self.indices {
            return indices.clone();
        }

        let n = self.vertices.len().min(u16::MAX as usize) as u16;
        (1..n.saturating_sub(1))
            .flat_map(|i| [0, i, i + 1])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_fan_for_rings() {
        assert_eq!(Shape::reference_triangle().triangle_indices(), vec![0, 1, 2]);
        assert_eq!(Shape::quad(0.1).triangle_indices(), vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn degenerate_ring_has_no_triangles() {
        let line = Shape::polygon(vec![Vec3::ZERO, Vec3::X]);
        assert!(line.triangle_indices().is_empty());
        assert!(Shape::polygon(Vec::new()).triangle_indices().is_empty());
    }

    #[test]
    fn cuboid_indices_are_in_range() {
        let c = Shape::cuboid(Vec3::new(0.5, 0.25, 1.0));
        assert_eq!(c.vertices().len(), 8);
        let idx = c.indices().unwrap();
        assert_eq!(idx.len(), 36);
        assert!(idx.iter().all(|&i| (i as usize) < c.vertices().len()));
        assert_eq!(c.triangle_indices(), idx.to_vec());
    }

    #[test]
    fn quad_extent() {
        let q = Shape::quad(0.1);
        let max_x = q.vertices().iter().map(|v| v.x).fold(f32::MIN, f32::max);
        assert_eq!(max_x, 0.1);
    }
}
