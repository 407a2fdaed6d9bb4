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

pub mod r3;
pub mod so3;
pub mod se3;

pub use crate::error::InterpError;

/// An interpolation between two fixed endpoints, parameterized by a
/// normalized value `t` where `0.0` gives the initial endpoint and `1.0`
/// gives the final endpoint.
pub trait Interpolation {
    /// The type of configuration that the interpolation produces.
    type Output;

    /// Compute the configuration at `t` without any range check. Values
    /// outside of [0, 1] extrapolate along the same path.
    fn compute(&self, t: f64) -> Self::Output;

    /// Compute the configuration at `t`. If `validate` is true then `t` must
    /// be inside of [0, 1], otherwise [`InterpError::InvalidParameter`] is
    /// returned. If `validate` is false this is the same as [`compute`].
    ///
    /// [`compute`]: Interpolation::compute
    fn evaluate(&self, t: f64, validate: bool) -> Result<Self::Output, InterpError> {
        if validate {
            check_parameter(t)?;
        }

        Ok(self.compute(t))
    }

    /// Shorthand for `evaluate(t, true)`.
    fn at(&self, t: f64) -> Result<Self::Output, InterpError> {
        self.evaluate(t, true)
    }
}

/// Verify that `t` is a number inside of the closed range [0, 1].
pub fn check_parameter(t: f64) -> Result<f64, InterpError> {
    // NaN fails this containment check as well.
    if !(0.0..=1.0).contains(&t) {
        log::debug!("Rejecting interpolation parameter {t}");
        return Err(InterpError::InvalidParameter(t));
    }

    return Ok(t);
}

/// Implement this for rotation types that can produce a spherical
/// interpolation between two of their values.
pub trait Slerp: Sized + Clone + std::fmt::Debug {
    type Interpolator: Interpolation<Output = Self> + Clone + std::fmt::Debug;

    /// Create an interpolator going from `self` to `up_to`. When
    /// `shortest_path` is true the interpolator must pick, once, whichever
    /// rotational path sweeps the smaller angle. When it is false the choice
    /// of path is left up to the implementation, but it must not change over
    /// the lifetime of the interpolator.
    fn interpolate(&self, up_to: &Self, shortest_path: bool) -> Self::Interpolator;
}
