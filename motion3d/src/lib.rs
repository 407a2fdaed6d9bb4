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

//! Linear interpolation between two points in R(3) or between two rigid body
//! poses in SE(3), parameterized over the normalized range [0, 1].
//!
//! ```
//! use motion3d::prelude::*;
//!
//! let interp = PositionInterpolator::new([0.0, 1.0, 0.0], [1.0, 0.0, 1.0]);
//! assert_eq!(interp.at(0.5), Ok(Point::new(0.5, 0.5, 0.5)));
//! assert!(interp.at(-0.1).is_err());
//! assert_eq!(interp.evaluate(1.5, false), Ok(Point::new(1.5, -0.5, 1.5)));
//! ```

pub mod motion;
pub use motion::{
    r3::{PositionInterpolation, PositionInterpolator, R3Interpolator},
    se3::{EuclideanInterpolator, Pose, PoseInterpolator, SE3Interpolator, TaskLinearInterpolator},
    so3::{OrientationInterpolator, RotationInterpolator},
    Interpolation, Slerp,
};

pub mod error;
pub use error::InterpError;

pub mod prelude {
    pub use super::error::InterpError;
    pub use super::motion::{
        r3::{Point, PositionInterpolator},
        se3::{Pose, PoseInterpolator, Transform},
        so3::{Orientation, Rotation},
        Interpolation, Slerp,
    };
}
