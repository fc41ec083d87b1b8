// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes the relationship
//! between a pixel grid with an origin at 0,0 and a rectangular
//! viewport on the complex plane.  The grid samples the viewport
//! inclusively: column 0 sits exactly on the left bound, column
//! width-1 exactly on the right bound, and likewise for rows, so the
//! rendered image covers the full requested region edge to edge.

use num::Complex;

use errors::EngineError;

/// Describes the width and height of the pixel grid.  The grid is
/// assumed to start at 0,0 and all coordinates are non-negative
/// integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grid(pub usize, pub usize);

/// Describes the column, row of a point on the grid.  Row 0 is the row
/// mapped onto the viewport's lower y bound.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// A rectangular region of the complex plane, named by its four
/// bounds.  Construction validates the bounds, so every `Viewport`
/// value in circulation describes a real, non-empty rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Left edge (smallest real coordinate).
    pub x_min: f64,
    /// Bottom edge (smallest imaginary coordinate).
    pub y_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Top edge.
    pub y_max: f64,
}

impl Viewport {
    /// Builds a viewport from its bounds.  Rejects non-finite values
    /// and empty or inverted rectangles; the minimum must be strictly
    /// below the maximum on both axes.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Viewport, EngineError> {
        let finite =
            x_min.is_finite() && y_min.is_finite() && x_max.is_finite() && y_max.is_finite();
        if !finite || x_min >= x_max || y_min >= y_max {
            return Err(EngineError::InvalidViewport {
                x_min,
                y_min,
                x_max,
                y_max,
            });
        }
        Ok(Viewport {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Extent of the viewport along the real axis.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Extent of the viewport along the imaginary axis.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Contains the definitions of the two planes: a pixel grid, and a
/// complex cartesian viewport.  Maps points of the grid onto the
/// viewport.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The dimensions of the pixel grid.  The origin is at 0,0.
    pub grid: Grid,
    /// The region of the complex plane the grid samples.
    pub viewport: Viewport,
    // Per-pixel increments along each axis.  Zero when the grid is a
    // single column or row, which pins that axis to the lower bound.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the grid dimensions and a validated
    /// viewport.  Rejects a grid with a zero dimension; everything
    /// else about the mapping is infallible.
    pub fn new(width: usize, height: usize, viewport: Viewport) -> Result<PlaneMapper, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }

        // Inclusive mapping: width-1 steps span the whole viewport.  A
        // single column (or row) has no step at all and samples the
        // lower bound.
        let x_step = if width > 1 {
            viewport.width() / ((width - 1) as f64)
        } else {
            0.0
        };
        let y_step = if height > 1 {
            viewport.height() / ((height - 1) as f64)
        } else {
            0.0
        };

        Ok(PlaneMapper {
            grid: Grid(width, height),
            viewport,
            steps: (x_step, y_step),
        })
    }

    /// The total number of points in the grid.  This is the length the
    /// caller's output buffer must have.
    pub fn len(&self) -> usize {
        self.grid.0 * self.grid.1
    }

    /// Describes that the grid is of a size.  Always false for a
    /// constructed mapper, since zero dimensions never get this far.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Given a pixel on the grid, return the complex number at the
    /// equivalent location inside the viewport.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.viewport.x_min + (pixel.0 as f64) * self.steps.0,
            self.viewport.y_min + (pixel.1 as f64) * self.steps.1,
        )
    }
}
