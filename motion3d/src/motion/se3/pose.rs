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

use super::{Orientation, Point, Transform};
use nalgebra::Translation3;

/// A rigid body configuration in SE(3): a rotation paired with a position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose<R = Orientation> {
    rotation: R,
    position: Point,
}

impl<R> Pose<R> {
    pub fn new(rotation: R, position: impl Into<Point>) -> Self {
        Self {
            rotation,
            position: position.into(),
        }
    }

    pub fn rotation(&self) -> &R {
        &self.rotation
    }

    pub fn position(&self) -> &Point {
        &self.position
    }

    pub fn into_parts(self) -> (R, Point) {
        (self.rotation, self.position)
    }
}

impl<R> From<(R, Point)> for Pose<R> {
    fn from((rotation, position): (R, Point)) -> Self {
        Self::new(rotation, position)
    }
}

impl From<Transform> for Pose<Orientation> {
    fn from(tf: Transform) -> Self {
        Self::new(tf.rotation, tf.translation.vector)
    }
}

impl From<Pose<Orientation>> for Transform {
    fn from(pose: Pose<Orientation>) -> Self {
        Transform::from_parts(Translation3::from(pose.position.coords), pose.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::r3::Vector;

    #[test]
    fn test_transform_conversion() {
        let rotation = Orientation::from_axis_angle(&Vector::x_axis(), 0.4);
        let position = Point::new(1.0, -2.0, 3.5);
        let pose = Pose::new(rotation, position);
        assert_eq!(*pose.rotation(), rotation);
        assert_eq!(*pose.position(), position);

        let tf: Transform = pose.into();
        assert_eq!(tf.rotation, rotation);
        assert_eq!(tf.translation.vector, position.coords);

        let back: Pose = tf.into();
        assert_eq!(back, pose);
        assert_eq!(back.into_parts(), (rotation, position));
        assert_eq!(Pose::from((rotation, position)), pose);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_pose_is_serializable() {
        fn assert_serde<T: serde::Serialize + for<'de> serde::Deserialize<'de>>() {}
        assert_serde::<Pose>();
        assert_serde::<Pose<super::super::Rotation>>();
    }
}
