/*
 * Copyright (C) 2022 Open Source Robotics Foundation
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
*/

use super::{Orientation, Quaternion, Rotation};
use crate::motion::{Interpolation, Slerp};

/// Below this value of sin(half angle) the two quaternions are treated as
/// parallel and a normalized linear blend is used instead of slerp.
const PARALLEL_THRESHOLD: f64 = 1e-9;

/// Spherical linear interpolation between two orientations.
///
/// When constructed with `shortest_path`, the target quaternion is negated
/// if needed so that the interpolation sweeps the smaller of the two arcs.
/// Otherwise the arc is whichever one the signs of the given quaternions
/// happen to describe. That choice is arbitrary, but it is fixed once the
/// interpolator exists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationInterpolator {
    q0: Orientation,
    q1: Orientation,
    target: Quaternion,
    half_angle: f64,
    shortest_path: bool,
}

impl OrientationInterpolator {
    pub fn new(q0: Orientation, q1: Orientation, shortest_path: bool) -> Self {
        let mut target = *q1.quaternion();
        let mut cos_half = q0.coords.dot(&target.coords);

        // Antipodal quaternions describe the same rotation but there is no
        // well defined arc of 2*pi between them, so always take the short
        // (constant) path in that case.
        let antipodal = 1.0 + cos_half < PARALLEL_THRESHOLD;
        if cos_half < 0.0 && (shortest_path || antipodal) {
            log::trace!(
                "Negating target quaternion {q1:?} to take the shorter arc from {q0:?}"
            );
            target = -target;
            cos_half = -cos_half;
        }

        return Self {
            q0,
            q1,
            target,
            half_angle: cos_half.clamp(-1.0, 1.0).acos(),
            shortest_path,
        };
    }

    pub fn start(&self) -> &Orientation {
        &self.q0
    }

    pub fn finish(&self) -> &Orientation {
        &self.q1
    }

    pub fn shortest_path(&self) -> bool {
        self.shortest_path
    }

    /// The rotation angle in radians that is swept by the chosen path.
    pub fn angle(&self) -> f64 {
        2.0 * self.half_angle
    }
}

impl Interpolation for OrientationInterpolator {
    type Output = Orientation;

    fn compute(&self, t: f64) -> Orientation {
        if t == 0.0 {
            return self.q0;
        }

        if t == 1.0 {
            return self.q1;
        }

        let q0 = *self.q0.quaternion();
        let sin_half = self.half_angle.sin();
        let blend = if sin_half < PARALLEL_THRESHOLD {
            q0 * (1.0 - t) + self.target * t
        } else {
            let w0 = ((1.0 - t) * self.half_angle).sin() / sin_half;
            let w1 = (t * self.half_angle).sin() / sin_half;
            q0 * w0 + self.target * w1
        };

        Orientation::new_normalize(blend)
    }
}

impl Slerp for Orientation {
    type Interpolator = OrientationInterpolator;

    fn interpolate(&self, up_to: &Self, shortest_path: bool) -> Self::Interpolator {
        OrientationInterpolator::new(*self, *up_to, shortest_path)
    }
}

/// Spherical interpolation between two rotation matrices. This goes through
/// an [`OrientationInterpolator`] and converts each result back into a
/// matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationInterpolator {
    r0: Rotation,
    r1: Rotation,
    inner: OrientationInterpolator,
}

impl RotationInterpolator {
    pub fn new(r0: Rotation, r1: Rotation, shortest_path: bool) -> Self {
        Self {
            r0,
            r1,
            inner: OrientationInterpolator::new(
                Orientation::from_rotation_matrix(&r0),
                Orientation::from_rotation_matrix(&r1),
                shortest_path,
            ),
        }
    }

    pub fn angle(&self) -> f64 {
        self.inner.angle()
    }
}

impl Interpolation for RotationInterpolator {
    type Output = Rotation;

    fn compute(&self, t: f64) -> Rotation {
        if t == 0.0 {
            return self.r0;
        }

        if t == 1.0 {
            return self.r1;
        }

        self.inner.compute(t).to_rotation_matrix()
    }
}

impl Slerp for Rotation {
    type Interpolator = RotationInterpolator;

    fn interpolate(&self, up_to: &Self, shortest_path: bool) -> Self::Interpolator {
        RotationInterpolator::new(*self, *up_to, shortest_path)
    }
}
