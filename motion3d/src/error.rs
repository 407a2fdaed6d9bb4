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

pub use std::error::Error as StdError;
pub use thiserror::Error as ThisError;

/// Errors that can be produced while evaluating an interpolation.
#[derive(ThisError, Debug, Clone, Copy, PartialEq)]
pub enum InterpError {
    /// The normalized parameter was not a number inside of [0, 1]. The
    /// offending value is carried along.
    #[error("\"t\" must be a number in [0,1]. Was {0}")]
    InvalidParameter(f64),
}

impl InterpError {
    /// The parameter value that caused this error.
    pub fn value(&self) -> f64 {
        match self {
            Self::InvalidParameter(t) => *t,
        }
    }
}
