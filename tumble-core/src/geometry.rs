//! Quadrilateral faces and the rigid cube built from them

use nalgebra::{Point2, Point3, Unit, Vector3};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::raster::{draw_line, SCAN_STEP};
use crate::transform::{perpendicular, rotate_about_axis, AXIS_EPSILON, ROTATION_STEP};

/*
C-----D
|     |
|     |
A-----B
*/

/// One planar quad face: four corners in object space plus a fill color.
/// Corners are ordered bottom-left, bottom-right, top-left, top-right.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    pub a: Point3<f32>,
    pub b: Point3<f32>,
    pub c: Point3<f32>,
    pub d: Point3<f32>,
    pub color: Color,
}

impl Face {
    pub fn new(
        a: Point3<f32>,
        b: Point3<f32>,
        c: Point3<f32>,
        d: Point3<f32>,
        color: Color,
    ) -> Self {
        Self { a, b, c, d, color }
    }

    pub fn corners(&self) -> [Point3<f32>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// The same face shifted by `delta`, recolored.
    fn translated(&self, delta: Vector3<f32>, color: Color) -> Face {
        Face::new(
            self.a + delta,
            self.b + delta,
            self.c + delta,
            self.d + delta,
            color,
        )
    }

    /// Rotate all four corners about the axis through the world origin.
    /// A shared axis and angle keep the face planar and congruent.
    pub fn rotate(&mut self, axis: &Unit<Vector3<f32>>, angle: f32) {
        self.a = rotate_about_axis(self.a, axis, angle);
        self.b = rotate_about_axis(self.b, axis, angle);
        self.c = rotate_about_axis(self.c, axis, angle);
        self.d = rotate_about_axis(self.d, axis, angle);
    }

    /// Facing test: the perpendicular of corner `a` points out of the
    /// screen. Not consulted by the render path; culling stays off.
    pub fn is_on_screen(&self) -> bool {
        perpendicular(&self.a.coords).z >= 0.0
    }

    /// Draw the four boundary edges a-b, a-c, c-d, b-d into the canvas.
    pub fn rasterize_outline(&self, canvas: &mut Canvas) {
        let a = to_canvas_space(&self.a, canvas);
        let b = to_canvas_space(&self.b, canvas);
        let c = to_canvas_space(&self.c, canvas);
        let d = to_canvas_space(&self.d, canvas);

        draw_line(canvas, a, b, self.color);
        draw_line(canvas, a, c, self.color);
        draw_line(canvas, c, d, self.color);
        draw_line(canvas, b, d, self.color);
    }

    /// Fill the rectangle spanned by a-b horizontally and a-c vertically,
    /// sampling object space at a fixed step. Not used by the drivers but
    /// part of the face contract.
    pub fn rasterize_filled(&self, canvas: &mut Canvas) {
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;
        let mut y = self.a.y;
        while y < self.c.y {
            let mut x = self.a.x;
            while x < self.b.x {
                let ix = (x * width).floor() as i32;
                let iy = ((1.0 - y) * height).floor() as i32;
                canvas.put(ix, iy, self.color);
                x += SCAN_STEP;
            }
            y += SCAN_STEP;
        }
    }
}

/// Map an object-space point to canvas space: scale to cell units and
/// flip y, since object-space y grows upward while canvas row 0 is the
/// top.
fn to_canvas_space(p: &Point3<f32>, canvas: &Canvas) -> Point2<f32> {
    Point2::new(
        p.x * canvas.width() as f32,
        (1.0 - p.y) * canvas.height() as f32,
    )
}

/// A rigid box of six faces. Construction yields a closed axis-aligned
/// cube; rotation moves all faces together, so edge lengths and face
/// adjacency never change.
#[derive(Debug, Clone)]
pub struct Cube {
    faces: [Face; 6],
    size: f32,
}

impl Cube {
    pub const BOTTOM: usize = 0;
    pub const TOP: usize = 1;
    pub const FRONT: usize = 2;
    pub const BACK: usize = 3;
    pub const LEFT: usize = 4;
    pub const RIGHT: usize = 5;

    /// Build a closed box of edge `size` anchored at `origin` (the
    /// bottom-front-left corner), one fixed color per face.
    pub fn new(origin: Point3<f32>, size: f32) -> Self {
        let dx = Vector3::new(size, 0.0, 0.0);
        let dy = Vector3::new(0.0, size, 0.0);
        let dz = Vector3::new(0.0, 0.0, size);

        let bottom = Face::new(
            origin,
            origin + dx,
            origin - dz,
            origin + dx - dz,
            Color::RED,
        );
        let top = bottom.translated(dy, Color::BLUE);

        let front = Face::new(
            origin,
            origin + dx,
            origin + dy,
            origin + dx + dy,
            Color::GREEN,
        );
        let back = front.translated(-dz, Color::YELLOW);

        let left = Face::new(
            origin - dz,
            origin,
            origin + dy - dz,
            origin + dy,
            Color::ORANGE,
        );
        let right = left.translated(dx, Color::PURPLE);

        Self {
            faces: [bottom, top, front, back, left, right],
            size,
        }
    }

    /// An edge-`size` cube centered in x/y of the unit square with its
    /// front face on the z = 0 plane: the default scene.
    pub fn centered(size: f32) -> Self {
        let half = size / 2.0;
        Self::new(Point3::new(0.5 - half, 0.5 - half, 0.0), size)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn faces(&self) -> &[Face; 6] {
        &self.faces
    }

    /// Advance the spin one step. The axis is sampled from the live
    /// front face's `a` corner, not cached, so it follows the geometry.
    pub fn rotate(&mut self, reverse: bool) {
        let angle = if reverse { -ROTATION_STEP } else { ROTATION_STEP };
        let axis = match Unit::try_new(self.faces[Self::FRONT].a.coords, AXIS_EPSILON) {
            Some(axis) => axis,
            None => return,
        };
        for face in &mut self.faces {
            face.rotate(&axis, angle);
        }
    }

    /// Outline-rasterize all six faces into the canvas.
    pub fn rasterize(&self, canvas: &mut Canvas) {
        for face in &self.faces {
            face.rasterize_outline(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-4;

    fn assert_offset_by(near: &Face, far: &Face, delta: Vector3<f32>) {
        for (p, q) in near.corners().iter().zip(far.corners().iter()) {
            assert!((q - (p + delta)).norm() < TOL, "corner drifted: {p} -> {q}");
        }
    }

    #[test]
    fn construction_closes_the_box() {
        let cube = Cube::new(Point3::new(0.1, 0.2, 0.3), 0.5);
        let faces = cube.faces();
        assert_offset_by(
            &faces[Cube::BOTTOM],
            &faces[Cube::TOP],
            Vector3::new(0.0, 0.5, 0.0),
        );
        assert_offset_by(
            &faces[Cube::FRONT],
            &faces[Cube::BACK],
            Vector3::new(0.0, 0.0, -0.5),
        );
        assert_offset_by(
            &faces[Cube::LEFT],
            &faces[Cube::RIGHT],
            Vector3::new(0.5, 0.0, 0.0),
        );
    }

    #[test]
    fn rotation_keeps_faces_rigid() {
        let mut cube = Cube::centered(0.3);
        let before: Vec<[Point3<f32>; 4]> = cube.faces().iter().map(Face::corners).collect();

        for _ in 0..25 {
            cube.rotate(false);
        }

        for (face, original) in cube.faces().iter().zip(&before) {
            let now = face.corners();
            for i in 0..4 {
                for j in (i + 1)..4 {
                    let d0 = (original[j] - original[i]).norm();
                    let d1 = (now[j] - now[i]).norm();
                    assert!((d0 - d1).abs() < TOL, "edge {i}-{j} changed length");
                }
            }
        }
    }

    #[test]
    fn reverse_rotation_undoes_forward() {
        let mut cube = Cube::centered(0.3);
        let before: Vec<[Point3<f32>; 4]> = cube.faces().iter().map(Face::corners).collect();

        cube.rotate(false);
        cube.rotate(true);

        for (face, original) in cube.faces().iter().zip(&before) {
            for (p, q) in original.iter().zip(face.corners().iter()) {
                assert!((q - p).norm() < TOL);
            }
        }
    }

    #[test]
    fn facing_test_follows_perpendicular_sign() {
        let behind = Face::new(
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(2.0, 2.0, 3.0),
            Point3::new(1.0, 3.0, 3.0),
            Point3::new(2.0, 3.0, 3.0),
            Color::RED,
        );
        assert!(!behind.is_on_screen());

        let facing = Face::new(
            Point3::new(3.0, 2.0, 1.0),
            Point3::new(4.0, 2.0, 1.0),
            Point3::new(3.0, 3.0, 1.0),
            Point3::new(4.0, 3.0, 1.0),
            Color::RED,
        );
        assert!(facing.is_on_screen());
    }

    #[test]
    fn filled_face_paints_interior_only() {
        let mut canvas = Canvas::new(50, 50, Color::BLACK);
        let face = Face::new(
            Point3::new(0.2, 0.2, 0.0),
            Point3::new(0.6, 0.2, 0.0),
            Point3::new(0.2, 0.6, 0.0),
            Point3::new(0.6, 0.6, 0.0),
            Color::ORANGE,
        );
        face.rasterize_filled(&mut canvas);
        assert_eq!(canvas.cell(25, 30), Color::ORANGE);
        assert_eq!(canvas.cell(5, 5), Color::BLACK);
        assert_eq!(canvas.cell(45, 45), Color::BLACK);
    }

    #[test]
    fn default_scene_outline_stays_in_central_region() {
        let mut canvas = Canvas::new(50, 50, Color::BLACK);
        let cube = Cube::centered(0.3);
        cube.rasterize(&mut canvas);

        let mut glyphs = 0;
        for (y, line) in canvas.to_text().lines().enumerate() {
            for (x, ch) in line.char_indices() {
                if ch != ' ' {
                    glyphs += 1;
                    assert!(
                        (15..=35).contains(&x) && (15..=35).contains(&y),
                        "stray glyph at ({x}, {y})"
                    );
                }
            }
        }
        assert!(glyphs > 30, "outline too sparse: {glyphs} glyphs");
    }
}
