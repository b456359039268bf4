//! Camera for Pong game
//!
//! Simple 2D orthographic camera over the logical screen

use glam::{Mat4, Vec4};

/// Camera struct
pub struct Camera {
    pub projection: Mat4,
}

impl Camera {
    /// Logical pixels with the origin in the top-left corner and y pointing down
    pub fn orthographic(width: f32, height: f32) -> Self {
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self { projection }
    }

    /// Clip-space position of a logical point
    pub fn project(&self, x: f32, y: f32) -> Vec4 {
        self.projection * Vec4::new(x, y, 0.0, 1.0)
    }
}

/// Camera uniform data (matches WGSL struct)
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.projection.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(v: Vec4, x: f32, y: f32) {
        assert!((v.x - x).abs() < 1e-5 && (v.y - y).abs() < 1e-5, "{:?}", v);
    }

    #[test]
    fn test_corners_map_to_clip_space() {
        let camera = Camera::orthographic(320.0, 240.0);
        assert_close(camera.project(0.0, 0.0), -1.0, 1.0);
        assert_close(camera.project(320.0, 240.0), 1.0, -1.0);
        assert_close(camera.project(160.0, 120.0), 0.0, 0.0);
    }
}
