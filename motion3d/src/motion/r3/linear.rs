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

use super::{Point, Vector};
use crate::motion::Interpolation;

/// Straight line interpolation between two points in R(3).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionInterpolator {
    p0: Point,
    p1: Point,
    displacement: Vector,
}

pub type R3Interpolator = PositionInterpolator;
pub type PositionInterpolation = PositionInterpolator;

impl PositionInterpolator {
    /// Make a position interpolation from `p0` to `p1`. Anything that can be
    /// turned into a [`Point`] is accepted, e.g. `[f64; 3]`.
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        let p0 = p0.into();
        let p1 = p1.into();
        return Self {
            p0,
            p1,
            displacement: p1 - p0,
        };
    }

    pub fn start(&self) -> &Point {
        &self.p0
    }

    pub fn finish(&self) -> &Point {
        &self.p1
    }

    /// The vector going from the start point to the finish point.
    pub fn displacement(&self) -> &Vector {
        &self.displacement
    }
}

impl Interpolation for PositionInterpolator {
    type Output = Point;

    fn compute(&self, t: f64) -> Point {
        // The endpoints are returned as stored so that no rounding creeps in.
        if t == 0.0 {
            return self.p0;
        }

        if t == 1.0 {
            return self.p1;
        }

        self.p0 + self.displacement * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::InterpError;
    use approx::assert_relative_eq;

    fn make_interp() -> PositionInterpolator {
        PositionInterpolator::new([0.0, 1.0, 0.0], [1.0, 0.0, 1.0])
    }

    #[test]
    fn test_midpoint() {
        let interp = make_interp();
        assert_eq!(interp.evaluate(0.5, true), Ok(Point::new(0.5, 0.5, 0.5)));
        assert_eq!(interp.at(0.5), Ok(Point::new(0.5, 0.5, 0.5)));
    }

    #[test]
    fn test_endpoints_are_exact() {
        let p0 = Point::new(0.1, -7.3, 1e-3);
        let p1 = Point::new(0.3, 2.9, -11.7);
        let interp = PositionInterpolator::new(p0, p1);
        assert_eq!(interp.at(0.0), Ok(p0));
        assert_eq!(interp.at(1.0), Ok(p1));
        assert_eq!(interp.evaluate(0.0, false), Ok(p0));
        assert_eq!(interp.evaluate(1.0, false), Ok(p1));
        assert_eq!(*interp.start(), p0);
        assert_eq!(*interp.finish(), p1);
        assert_eq!(*interp.displacement(), p1 - p0);
    }

    #[test]
    fn test_affine_in_t() {
        let p0 = Point::new(-2.0, 4.0, 0.5);
        let p1 = Point::new(3.0, -1.0, 8.0);
        let interp = PositionInterpolator::new(p0, p1);
        let mut previous_distance = 0.0;
        for i in 1..10 {
            let t = i as f64 / 10.0;
            let p = interp.at(t).unwrap();
            assert_relative_eq!(p, p0 + (p1 - p0) * t, max_relative = 1e-12);

            let distance = (p - p0).norm();
            assert!(distance > previous_distance);
            previous_distance = distance;
        }
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let interp = make_interp();
        let err = interp.at(-0.1).unwrap_err();
        assert_eq!(err, InterpError::InvalidParameter(-0.1));
        assert!(err.to_string().contains("-0.1"));

        assert_eq!(interp.at(1.5), Err(InterpError::InvalidParameter(1.5)));
        assert!(interp.at(f64::NAN).is_err());
    }

    #[test]
    fn test_extrapolation_without_validation() {
        let interp = make_interp();
        assert_eq!(
            interp.evaluate(1.5, false),
            Ok(Point::new(1.5, -0.5, 1.5))
        );
        assert_eq!(interp.compute(1.5), Point::new(1.5, -0.5, 1.5));
        assert_relative_eq!(
            interp.evaluate(-0.1, false).unwrap(),
            Point::new(-0.1, 1.1, -0.1),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_degenerate_segment() {
        let interp = PositionInterpolator::new([1.0, 2.0, 3.0], [1.0, 2.0, 3.0]);
        assert_eq!(*interp.displacement(), Vector::zeros());
        assert_eq!(interp.at(0.7), Ok(Point::new(1.0, 2.0, 3.0)));
    }
}
