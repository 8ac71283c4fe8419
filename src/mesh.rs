use crate::vertex::Vertex;

/// Indexed triangle list ready for upload.
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    /// Colored cube spanning x and y in [-1, 1] and z in [3, 5], in front of
    /// an eye at the origin looking down +Z.
    pub fn cube() -> Self {
        #[rustfmt::skip]
        let vertices = vec![
            Vertex { position: [-1.0, -1.0, 3.0], color: [0.0, 0.0, 0.0, 1.0] },
            Vertex { position: [ 1.0, -1.0, 3.0], color: [1.0, 0.0, 0.0, 1.0] },
            Vertex { position: [-1.0,  1.0, 3.0], color: [0.0, 1.0, 0.0, 1.0] },
            Vertex { position: [-1.0, -1.0, 5.0], color: [0.0, 0.0, 1.0, 1.0] },
            Vertex { position: [ 1.0,  1.0, 3.0], color: [1.0, 1.0, 0.0, 1.0] },
            Vertex { position: [ 1.0, -1.0, 5.0], color: [1.0, 0.0, 1.0, 1.0] },
            Vertex { position: [-1.0,  1.0, 5.0], color: [0.0, 1.0, 1.0, 1.0] },
            Vertex { position: [ 1.0,  1.0, 5.0], color: [1.0, 1.0, 1.0, 1.0] },
        ];

        #[rustfmt::skip]
        let indices = vec![
            0, 1, 5,  0, 3, 5,  // -Y
            0, 1, 4,  0, 2, 4,  // near
            0, 3, 6,  0, 2, 6,  // -X
            1, 5, 7,  1, 4, 7,  // +X
            2, 4, 7,  2, 6, 7,  // +Y
            3, 5, 7,  3, 6, 7,  // far
        ];

        Self { vertices, indices }
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_shape() {
        let cube = Mesh::cube();
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.index_count(), 36);
        assert!(cube.indices.iter().all(|&i| (i as usize) < cube.vertices.len()));
    }

    #[test]
    fn test_every_triangle_lies_on_a_face() {
        let cube = Mesh::cube();
        for triangle in cube.indices.chunks(3) {
            let corners: Vec<[f32; 3]> = triangle
                .iter()
                .map(|&i| cube.vertices[i as usize].position)
                .collect();
            let shares_plane =
                (0..3).any(|axis| corners.iter().all(|c| c[axis] == corners[0][axis]));
            assert!(shares_plane, "triangle {:?} is not on a face", triangle);
        }
    }
}
