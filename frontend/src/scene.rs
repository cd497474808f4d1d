//! Ambient background scene state.
//!
//! Pure math for the decorative 3D layer: drifting distorted blobs, two
//! wireframe rings that react to hover, a starfield, and a camera that
//! wanders along a multi-frequency path while its focus point lags toward
//! the pointer. Nothing in here touches the DOM; the `background` module
//! owns the canvas and draws whatever this state projects.

pub const MAX_FRAME_DT: f64 = 0.05;

const CAMERA_FOV_DEG: f64 = 45.0;
const NEAR_PLANE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Self {
        let length = self.length();
        if length <= f64::EPSILON {
            Self::new(0.0, 0.0, 1.0)
        } else {
            Self::new(self.x / length, self.y / length, self.z / length)
        }
    }

    pub fn lerp(self, target: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.x + (target.x - self.x) * t,
            self.y + (target.y - self.y) * t,
            self.z + (target.z - self.z) * t,
        )
    }
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub focus: Vec3,
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            focus: Vec3::new(0.0, 0.0, -5.0),
        }
    }

    /// Organic drift target: stacked sine waves at unrelated frequencies so
    /// the path never reads as a single oscillation.
    pub fn drift_target(t: f64) -> Vec3 {
        Vec3::new(
            (t * 0.1).sin() * 2.0 + (t * 0.2).cos() * 0.5,
            (t * 0.15).cos() * 1.5 + (t * 0.1).sin() * 0.5,
            10.0 + (t * 0.05).sin() * 2.0 + (t * 0.3).sin() * 0.5,
        )
    }

    /// `pointer` is the normalized device position, both axes in [-1, 1].
    /// Position and focus use independent damping so the aim trails the
    /// body of the camera and the pointer with a sense of weight.
    pub fn step(&mut self, t: f64, dt: f64, pointer: (f64, f64)) {
        let camera_damping = 1.0 - (-2.0 * dt).exp();
        self.position = self.position.lerp(Self::drift_target(t), camera_damping);

        let focus_target = Vec3::new(pointer.0 * 4.0, pointer.1 * 2.0, -5.0);
        let focus_damping = 1.0 - (-5.0 * dt).exp();
        self.focus = self.focus.lerp(focus_target, focus_damping);
    }

    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = self.focus.sub(self.position).normalize();
        let world_up = Vec3::new(0.0, 1.0, 0.0);
        let mut right = forward.cross(world_up);
        if right.length() <= f64::EPSILON {
            right = Vec3::new(1.0, 0.0, 0.0);
        }
        let right = right.normalize();
        let up = right.cross(forward);
        (right, up, forward)
    }
}

/// A world point projected to canvas pixels, with the perspective scale at
/// that depth for sizing strokes and sprites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

pub fn project(
    point: Vec3,
    camera: &CameraRig,
    half_width: f64,
    half_height: f64,
) -> Option<Projected> {
    let (right, up, forward) = camera.basis();
    let rel = point.sub(camera.position);
    let depth = rel.dot(forward);
    if depth <= NEAR_PLANE {
        return None;
    }
    let focal = half_height / (CAMERA_FOV_DEG.to_radians() / 2.0).tan();
    let scale = focal / depth;
    Some(Projected {
        x: half_width + rel.dot(right) * scale,
        y: half_height - rel.dot(up) * scale,
        scale,
    })
}

// ---------------------------------------------------------------------------
// Scene objects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub position: Vec3,
    pub color: (u8, u8, u8),
    pub scale: f64,
    pub speed: f64,
    pub phase: f64,
}

impl Blob {
    /// Slow bobbing of the whole shape.
    pub fn float_offset(&self, t: f64) -> f64 {
        (t * self.speed + self.phase).sin() * 0.4
    }

    /// Radius factor around the silhouette: a low-order ripple travelling
    /// with time stands in for the distortion material.
    pub fn wobble(&self, theta: f64, t: f64) -> f64 {
        1.0 + 0.12 * (3.0 * theta + t * 2.0 * self.speed + self.phase).sin()
            + 0.06 * (5.0 * theta - t * 1.3 + self.phase).cos()
    }

    pub fn world_position(&self, t: f64) -> Vec3 {
        Vec3::new(
            self.position.x,
            self.position.y + self.float_offset(t),
            self.position.z,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub position: Vec3,
    pub color: (u8, u8, u8),
    pub radius: f64,
    pub tube: f64,
    pub scale: f64,
    pub speed: f64,
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub emissive: f64,
    pub hovered: bool,
}

impl Ring {
    pub fn step(&mut self, dt: f64) {
        // hover spins the ring up and brightens it, both eased rather than
        // snapped
        let rotation_speed = if self.hovered {
            self.speed * 4.0
        } else {
            self.speed
        };
        self.rotation_x += dt * 0.1 * rotation_speed;
        self.rotation_y += dt * 0.2 * rotation_speed;

        let target = if self.hovered { 2.5 } else { 0.2 };
        self.emissive = lerp(self.emissive, target, (dt * 5.0).min(1.0));
    }

    pub fn float_offset(&self, t: f64) -> f64 {
        (t * self.speed).sin() * 0.3
    }

    /// Point on the ring circumference after self-rotation, in world space.
    pub fn point(&self, theta: f64, t: f64) -> Vec3 {
        let r = self.radius * self.scale;
        let (x, y, z) = (theta.cos() * r, theta.sin() * r, 0.0);

        // rotate around X
        let (sin_x, cos_x) = self.rotation_x.sin_cos();
        let (y, z) = (y * cos_x - z * sin_x, y * sin_x + z * cos_x);

        // rotate around Y
        let (sin_y, cos_y) = self.rotation_y.sin_cos();
        let (x, z) = (x * cos_y + z * sin_y, -x * sin_y + z * cos_y);

        Vec3::new(
            self.position.x + x,
            self.position.y + y + self.float_offset(t),
            self.position.z + z,
        )
    }
}

/// Deterministic star scatter in a spherical shell. A tiny LCG keeps the
/// field identical across mounts without pulling in a RNG.
pub fn starfield(count: usize, inner_radius: f64, outer_radius: f64, seed: u64) -> Vec<Vec3> {
    let mut state = seed.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) as f64) / (1u64 << 31) as f64
    };

    (0..count)
        .map(|_| {
            let radius = inner_radius + (outer_radius - inner_radius) * next();
            let theta = next() * std::f64::consts::TAU;
            let cos_phi = next() * 2.0 - 1.0;
            let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();
            Vec3::new(
                radius * sin_phi * theta.cos(),
                radius * cos_phi,
                radius * sin_phi * theta.sin(),
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub t: f64,
    pub camera: CameraRig,
    pub blobs: Vec<Blob>,
    pub rings: Vec<Ring>,
    pub stars: Vec<Vec3>,
}

impl Scene {
    pub fn new() -> Self {
        let blobs = vec![
            Blob {
                position: Vec3::new(-4.0, 2.0, -5.0),
                color: (0x22, 0x22, 0x22),
                scale: 1.5,
                speed: 1.5,
                phase: 0.0,
            },
            Blob {
                position: Vec3::new(5.0, -2.0, -8.0),
                color: (0x1a, 0x1a, 0x1a),
                scale: 2.0,
                speed: 1.0,
                phase: 2.1,
            },
            Blob {
                position: Vec3::new(0.0, -5.0, -10.0),
                color: (0x33, 0x33, 0x33),
                scale: 3.0,
                speed: 0.8,
                phase: 4.2,
            },
        ];

        let rings = vec![
            // central violet ring
            Ring {
                position: Vec3::new(0.0, 0.0, -5.0),
                color: (0xb0, 0x26, 0xff),
                radius: 2.5,
                tube: 0.2,
                scale: 1.8,
                speed: 0.5,
                rotation_x: 0.6,
                rotation_y: 0.0,
                emissive: 0.2,
                hovered: false,
            },
            // secondary yellow ring
            Ring {
                position: Vec3::new(4.0, 3.0, -10.0),
                color: (0xee, 0xff, 0x00),
                radius: 3.0,
                tube: 0.15,
                scale: 1.2,
                speed: 0.7,
                rotation_x: 1.1,
                rotation_y: 0.4,
                emissive: 0.2,
                hovered: false,
            },
        ];

        Self {
            t: 0.0,
            camera: CameraRig::new(),
            blobs,
            rings,
            stars: starfield(500, 40.0, 100.0, 0x5eed),
        }
    }

    pub fn step(&mut self, dt: f64, pointer: (f64, f64)) {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.t += dt;
        self.camera.step(self.t, dt, pointer);
        for ring in &mut self.rings {
            ring.step(dt);
        }
    }

    /// Hover test against the projected ring silhouette: within a band
    /// around the circle of the ring's screen radius.
    pub fn ring_hit(
        &self,
        ring: &Ring,
        pointer_px: (f64, f64),
        half_width: f64,
        half_height: f64,
    ) -> bool {
        let Some(center) = project(
            Vec3::new(
                ring.position.x,
                ring.position.y + ring.float_offset(self.t),
                ring.position.z,
            ),
            &self.camera,
            half_width,
            half_height,
        ) else {
            return false;
        };
        let screen_radius = ring.radius * ring.scale * center.scale;
        let distance =
            ((pointer_px.0 - center.x).powi(2) + (pointer_px.1 - center.y).powi(2)).sqrt();
        let band = (ring.tube * ring.scale * center.scale * 4.0).max(14.0);
        (distance - screen_radius).abs() <= band
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_target_stays_bounded() {
        let mut t = 0.0;
        while t < 400.0 {
            let target = CameraRig::drift_target(t);
            assert!(target.x.abs() <= 2.5);
            assert!(target.y.abs() <= 2.0);
            assert!(target.z >= 7.5 && target.z <= 12.5);
            t += 0.37;
        }
    }

    #[test]
    fn focus_lags_toward_the_pointer() {
        let mut camera = CameraRig::new();
        let before = camera.focus;
        camera.step(0.0, 0.016, (1.0, 0.5));
        let after_one = camera.focus;
        // moved, but nowhere near the target yet
        assert!(after_one.x > before.x);
        assert!(after_one.x < 4.0 * 0.5);

        for frame in 1..600 {
            camera.step(frame as f64 * 0.016, 0.016, (1.0, 0.5));
        }
        assert!((camera.focus.x - 4.0).abs() < 0.05);
        assert!((camera.focus.y - 1.0).abs() < 0.05);
    }

    #[test]
    fn hovered_ring_brightens_gradually_and_spins_faster() {
        let mut scene = Scene::new();
        let idle_rotation = {
            let mut ring = scene.rings[0].clone();
            let start = ring.rotation_x;
            ring.step(0.016);
            ring.rotation_x - start
        };

        scene.rings[0].hovered = true;
        let before = scene.rings[0].emissive;
        let start_rotation = scene.rings[0].rotation_x;
        scene.rings[0].step(0.016);
        let after = scene.rings[0].emissive;
        assert!(after > before, "emissive must rise");
        assert!(after < 2.5, "emissive must not snap to the target");
        let hover_rotation = scene.rings[0].rotation_x - start_rotation;
        assert!((hover_rotation / idle_rotation - 4.0).abs() < 1e-9);

        // long hover converges to the bright target
        for _ in 0..600 {
            scene.rings[0].step(0.016);
        }
        assert!((scene.rings[0].emissive - 2.5).abs() < 0.01);
    }

    #[test]
    fn releasing_hover_dims_back_down() {
        let mut ring = Scene::new().rings[0].clone();
        ring.hovered = true;
        for _ in 0..600 {
            ring.step(0.016);
        }
        ring.hovered = false;
        for _ in 0..600 {
            ring.step(0.016);
        }
        assert!((ring.emissive - 0.2).abs() < 0.01);
    }

    #[test]
    fn projection_centers_points_on_the_view_axis() {
        let camera = CameraRig::new();
        let projected = project(Vec3::new(0.0, 0.0, -5.0), &camera, 640.0, 360.0)
            .expect("focus point must be visible");
        assert!((projected.x - 640.0).abs() < 1e-6);
        assert!((projected.y - 360.0).abs() < 1e-6);
        assert!(projected.scale > 0.0);
    }

    #[test]
    fn points_behind_the_camera_are_culled() {
        let camera = CameraRig::new();
        assert!(project(Vec3::new(0.0, 0.0, 50.0), &camera, 640.0, 360.0).is_none());
    }

    #[test]
    fn starfield_is_deterministic_and_shell_bounded() {
        let a = starfield(500, 40.0, 100.0, 7);
        let b = starfield(500, 40.0, 100.0, 7);
        assert_eq!(a, b);
        assert_eq!(a.len(), 500);
        for star in &a {
            let radius = star.length();
            assert!((39.9..=100.1).contains(&radius));
        }
    }

    #[test]
    fn blob_wobble_stays_near_unity() {
        let blob = Scene::new().blobs[0].clone();
        let mut theta = 0.0;
        while theta < std::f64::consts::TAU {
            let w = blob.wobble(theta, 12.3);
            assert!((0.8..=1.2).contains(&w));
            theta += 0.05;
        }
    }
}
