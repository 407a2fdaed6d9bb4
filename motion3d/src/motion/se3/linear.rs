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

use super::{Orientation, Pose};
use crate::motion::{r3::PositionInterpolator, Interpolation, Slerp};

/// A linear interpolation in task space, SE(3), from one pose to another.
///
/// The position moves along the straight segment between the two endpoint
/// positions while the rotation is interpolated spherically. Both parts are
/// driven by the same parameter `t`. When `t` is validated it only happens
/// once, here at the pose level; the position and rotation interpolators are
/// always computed unchecked.
#[derive(Clone, Debug)]
pub struct PoseInterpolator<R: Slerp = Orientation> {
    pose0: Pose<R>,
    pose1: Pose<R>,
    position: PositionInterpolator,
    rotation: R::Interpolator,
    shortest_path: bool,
}

pub type SE3Interpolator<R = Orientation> = PoseInterpolator<R>;
pub type TaskLinearInterpolator<R = Orientation> = PoseInterpolator<R>;
pub type EuclideanInterpolator<R = Orientation> = PoseInterpolator<R>;

impl<R: Slerp> PoseInterpolator<R> {
    /// Interpolate from `pose0` to `pose1`, taking the shortest rotational
    /// path.
    pub fn new(pose0: impl Into<Pose<R>>, pose1: impl Into<Pose<R>>) -> Self {
        Self::with_shortest_path(pose0, pose1, true)
    }

    /// Interpolate from `pose0` to `pose1`. If `shortest_path` is false then
    /// the rotational path is unspecified: either direction may be used, but
    /// it will not change for the lifetime of this interpolator.
    pub fn with_shortest_path(
        pose0: impl Into<Pose<R>>,
        pose1: impl Into<Pose<R>>,
        shortest_path: bool,
    ) -> Self {
        let pose0 = pose0.into();
        let pose1 = pose1.into();
        let rotation = pose0.rotation().interpolate(pose1.rotation(), shortest_path);
        let position = PositionInterpolator::new(*pose0.position(), *pose1.position());
        log::trace!(
            "SE(3) interpolation from {:?} to {:?} (shortest path: {shortest_path})",
            pose0,
            pose1,
        );

        return Self {
            pose0,
            pose1,
            position,
            rotation,
            shortest_path,
        };
    }

    pub fn start(&self) -> &Pose<R> {
        &self.pose0
    }

    pub fn finish(&self) -> &Pose<R> {
        &self.pose1
    }

    pub fn shortest_path(&self) -> bool {
        self.shortest_path
    }

    pub fn position_interpolator(&self) -> &PositionInterpolator {
        &self.position
    }

    pub fn rotation_interpolator(&self) -> &R::Interpolator {
        &self.rotation
    }
}

impl<R: Slerp> Interpolation for PoseInterpolator<R> {
    type Output = Pose<R>;

    fn compute(&self, t: f64) -> Pose<R> {
        Pose::new(self.rotation.compute(t), self.position.compute(t))
    }
}
