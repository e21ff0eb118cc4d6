//! Piecewise-linear interpolation between control points.

use std::fmt;

use smallvec::SmallVec;

use crate::animation::Lerp;

/// What happens to values outside the input range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Continue the slope of the outermost segment.
    #[default]
    Extend,
    /// Hold the outermost output value.
    Clamp,
    /// Pass the input value through unchanged.
    Identity,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationError {
    LengthMismatch { input: usize, output: usize },
    TooFewPoints { len: usize },
    NonMonotonicInput { index: usize },
    NonFiniteInput { index: usize },
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationError::LengthMismatch { input, output } => write!(
                f,
                "input range has {input} points but output range has {output}"
            ),
            InterpolationError::TooFewPoints { len } => {
                write!(f, "interpolation needs at least 2 points, got {len}")
            }
            InterpolationError::NonMonotonicInput { index } => {
                write!(f, "input range decreases at index {index}")
            }
            InterpolationError::NonFiniteInput { index } => {
                write!(f, "input range point {index} is not finite")
            }
        }
    }
}

impl std::error::Error for InterpolationError {}

type Points = SmallVec<[f32; 4]>;

/// Validated control points plus extrapolation policy for each side.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationConfig {
    input_range: Points,
    output_range: Points,
    extrapolate_left: Extrapolate,
    extrapolate_right: Extrapolate,
}

impl InterpolationConfig {
    pub fn new(input_range: &[f32], output_range: &[f32]) -> Result<Self, InterpolationError> {
        if input_range.len() != output_range.len() {
            return Err(InterpolationError::LengthMismatch {
                input: input_range.len(),
                output: output_range.len(),
            });
        }
        if input_range.len() < 2 {
            return Err(InterpolationError::TooFewPoints {
                len: input_range.len(),
            });
        }
        if let Some(index) = input_range.iter().position(|point| !point.is_finite()) {
            return Err(InterpolationError::NonFiniteInput { index });
        }
        if let Some(index) = input_range
            .windows(2)
            .position(|pair| pair[1] < pair[0])
        {
            return Err(InterpolationError::NonMonotonicInput { index: index + 1 });
        }
        Ok(Self {
            input_range: SmallVec::from_slice(input_range),
            output_range: SmallVec::from_slice(output_range),
            extrapolate_left: Extrapolate::default(),
            extrapolate_right: Extrapolate::default(),
        })
    }

    /// Builds a table from points the caller guarantees are increasing and
    /// finite, such as evenly spaced card positions.
    ///
    /// Invalid points are still caught in debug builds.
    pub fn from_points<const N: usize>(input_range: [f32; N], output_range: [f32; N]) -> Self {
        debug_assert!(N >= 2, "interpolation needs at least 2 points");
        debug_assert!(
            input_range.windows(2).all(|pair| pair[0] <= pair[1]),
            "input range must be non-decreasing: {input_range:?}"
        );
        Self {
            input_range: SmallVec::from_slice(&input_range),
            output_range: SmallVec::from_slice(&output_range),
            extrapolate_left: Extrapolate::default(),
            extrapolate_right: Extrapolate::default(),
        }
    }

    /// Same policy on both sides.
    pub fn extrapolate(self, extrapolate: Extrapolate) -> Self {
        self.extrapolate_left(extrapolate)
            .extrapolate_right(extrapolate)
    }

    pub fn extrapolate_left(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate_left = extrapolate;
        self
    }

    pub fn extrapolate_right(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate_right = extrapolate;
        self
    }

    pub fn input_range(&self) -> &[f32] {
        &self.input_range
    }

    pub fn output_range(&self) -> &[f32] {
        &self.output_range
    }

    /// Evaluate the mapping at `value`.
    pub fn apply(&self, value: f32) -> f32 {
        interpolate(value, self)
    }
}

/// Maps `value` through the control points of `config`.
pub fn interpolate(value: f32, config: &InterpolationConfig) -> f32 {
    let input = &config.input_range;
    let output = &config.output_range;
    let last = input.len() - 1;

    if value < input[0] {
        return match config.extrapolate_left {
            Extrapolate::Clamp => output[0],
            Extrapolate::Identity => value,
            Extrapolate::Extend => segment(value, input[0], input[1], output[0], output[1]),
        };
    }
    if value > input[last] {
        return match config.extrapolate_right {
            Extrapolate::Clamp => output[last],
            Extrapolate::Identity => value,
            Extrapolate::Extend => segment(
                value,
                input[last - 1],
                input[last],
                output[last - 1],
                output[last],
            ),
        };
    }

    let index = (0..last)
        .find(|&i| value <= input[i + 1])
        .unwrap_or(last - 1);
    segment(
        value,
        input[index],
        input[index + 1],
        output[index],
        output[index + 1],
    )
}

fn segment(value: f32, in_start: f32, in_end: f32, out_start: f32, out_end: f32) -> f32 {
    let span = in_end - in_start;
    if span == 0.0 {
        return if value <= in_start { out_start } else { out_end };
    }
    let fraction = (value - in_start) / span;
    out_start.lerp(&out_end, fraction)
}

#[cfg(test)]
#[path = "tests/interpolation_tests.rs"]
mod tests;
