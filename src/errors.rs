// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ways a render request can be rejected.  All of these are
//! detected up front, before a single count is written, so a caller
//! never has to reason about a half-filled buffer.

/// Everything the engine can object to about its arguments.  The engine
/// itself has no failure modes past this point: once the arguments are
/// accepted, the per-pixel loop always terminates and always fills the
/// whole buffer.
#[derive(Clone, Debug, PartialEq, Fail)]
pub enum EngineError {
    /// The pixel grid must be at least one pixel wide and one pixel
    /// tall.  Negative dimensions cannot even be expressed.
    #[fail(
        display = "invalid dimensions {}x{}: width and height must both be at least 1",
        width, height
    )]
    InvalidDimensions {
        /// Requested grid width.
        width: usize,
        /// Requested grid height.
        height: usize,
    },

    /// The complex-plane bounds must be finite, with the minimum
    /// strictly below the maximum on both axes.
    #[fail(
        display = "invalid viewport [{}, {}] x [{}, {}]: bounds must be finite with min < max",
        x_min, x_max, y_min, y_max
    )]
    InvalidViewport {
        /// Left edge of the requested region.
        x_min: f64,
        /// Bottom edge of the requested region.
        y_min: f64,
        /// Right edge of the requested region.
        x_max: f64,
        /// Top edge of the requested region.
        y_max: f64,
    },

    /// The caller's output buffer does not hold exactly width * height
    /// entries.  Rejected before writing so an out-of-bounds write is
    /// impossible.
    #[fail(
        display = "buffer size mismatch: grid needs {} entries, buffer holds {}",
        expected, actual
    )]
    BufferSizeMismatch {
        /// width * height of the requested grid.
        expected: usize,
        /// Length of the buffer the caller handed over.
        actual: usize,
    },
}
