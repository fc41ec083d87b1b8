#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot escape-time renderer
//!
//! The Mandelbrot set is drawn by taking, for every pixel of an
//! image, the complex number c that pixel maps to and iterating
//! z = z * z + c from zero, counting the steps until |z| crosses the
//! escape radius of 2.  Points that never cross within the iteration
//! budget are members of the set by convention, and the count itself
//! is the "velocity" a palette turns into color.
//!
//! The heart of this crate is that counting engine and nothing more:
//! a pure function from a pixel grid, a viewport on the complex
//! plane, and an iteration limit to a dense row-major buffer of
//! per-pixel counts.  The buffer belongs to the caller; the engine
//! validates everything up front, writes every entry exactly once,
//! and keeps no state between calls.  Mapping counts to colors and
//! writing image files is the business of the `mandel` binary, which
//! is just one possible caller.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
extern crate num;

pub mod colors;
pub mod errors;
pub mod escape;
pub mod planes;

pub use colors::{colorize, escape_color};
pub use errors::EngineError;
pub use escape::{compute, escape_time, EscapeTimeRenderer};
pub use planes::{Grid, Pixel, PlaneMapper, Viewport};
