// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time engine.  For every pixel of a grid mapped onto a
//! viewport of the complex plane, iterate z = z * z + c from zero and
//! count the steps until |z| exceeds the escape radius of 2, giving
//! up at a caller-chosen limit.  A count equal to the limit is the
//! conventional marker for "member of the set": the point never
//! demonstrated an escape within budget.
//!
//! The engine is a pure function of its arguments.  It holds no state
//! between renders, performs no I/O, allocates nothing, and writes
//! only into the buffer the caller hands it, so identical requests
//! always produce identical buffers no matter how the work is split
//! across threads.

extern crate crossbeam;

use itertools::iproduct;
use num::Complex;

use errors::EngineError;
use planes::{Pixel, PlaneMapper, Viewport};

/// Counts the iterations of z = z * z + c before |z|^2 leaves the
/// disk of radius 2, starting from z = 0.  The comparison is against
/// the squared magnitude so no square root is paid per step, and a
/// squared magnitude of exactly 4.0 stays inside.  Returns the limit
/// itself when the point never escapes; a limit of zero or below
/// means no iterations are attempted and the count is 0.
pub fn escape_time(c: Complex<f64>, limit: i32) -> i32 {
    let mut z = Complex { re: 0.0, im: 0.0 };
    let mut n = 0;
    while n < limit && z.norm_sqr() <= 4.0 {
        z = z * z + c;
        n += 1;
    }
    n
}

/// Takes a grid, a viewport, and an iteration limit, and fills
/// caller-owned buffers with per-pixel escape counts.  Each pixel is
/// independent of every other, so the same renderer can fill a buffer
/// sequentially or across worker threads with identical results.
pub struct EscapeTimeRenderer {
    plane: PlaneMapper,
    limit: i32,
}

impl EscapeTimeRenderer {
    /// Requires the width and height of the grid, the viewport of the
    /// complex plane to sample, and the per-pixel iteration limit.
    /// Grid and viewport problems are reported here, before any
    /// buffer is in play.
    pub fn new(
        width: usize,
        height: usize,
        viewport: Viewport,
        limit: i32,
    ) -> Result<EscapeTimeRenderer, EngineError> {
        let plane = PlaneMapper::new(width, height, viewport)?;
        Ok(EscapeTimeRenderer { plane, limit })
    }

    /// The number of entries the output buffer must hold.
    pub fn len(&self) -> usize {
        self.plane.len()
    }

    /// Companion to len, for callers that ask.
    pub fn is_empty(&self) -> bool {
        self.plane.is_empty()
    }

    fn check_buffer(&self, counts: &[i32]) -> Result<(), EngineError> {
        if counts.len() != self.plane.len() {
            return Err(EngineError::BufferSizeMismatch {
                expected: self.plane.len(),
                actual: counts.len(),
            });
        }
        Ok(())
    }

    // Fills a band of whole rows, `top` being the grid row its first
    // entry belongs to.  The band length is always a multiple of the
    // grid width.
    fn fill_band(&self, band: &mut [i32], top: usize) {
        let width = self.plane.grid.0;
        let rows = band.len() / width;
        for ((py, px), count) in iproduct!(top..top + rows, 0..width).zip(band.iter_mut()) {
            *count = escape_time(self.plane.pixel_to_point(&Pixel(px, py)), self.limit);
        }
    }

    /// Fills the buffer with one escape count per pixel, row by row
    /// from the viewport's lower bounds.  The buffer must hold
    /// exactly width * height entries; a mismatched buffer is
    /// rejected before anything is written to it.
    pub fn render(&self, counts: &mut [i32]) -> Result<(), EngineError> {
        self.check_buffer(counts)?;
        self.fill_band(counts, 0);
        Ok(())
    }

    /// The multi-threaded version of the render function.  The buffer
    /// is split into contiguous bands of whole rows, and each scoped
    /// worker fills only its own band, so no two threads ever touch
    /// the same entry and the result is identical to the sequential
    /// render.  A thread count of zero is treated as one.
    pub fn render_threaded(&self, counts: &mut [i32], threads: usize) -> Result<(), EngineError> {
        self.check_buffer(counts)?;

        let threads = threads.max(1);
        let width = self.plane.grid.0;
        let band_rows = self.plane.grid.1 / threads + 1;
        crossbeam::scope(|spawner| {
            for (i, band) in counts.chunks_mut(band_rows * width).enumerate() {
                spawner.spawn(move |_| {
                    self.fill_band(band, i * band_rows);
                });
            }
        })
        .unwrap();
        Ok(())
    }
}

/// The engine's boundary in one call: maps a width x height grid onto
/// the viewport given by its four bounds, runs the escape-time
/// recurrence with the given iteration limit, and writes one count
/// per pixel into `counts` in row-major order.  Invalid dimensions,
/// an invalid viewport, or a buffer of the wrong length are rejected
/// synchronously with nothing written.  A limit of zero or below is
/// not an error; it fills the buffer with zeros.
pub fn compute(
    width: usize,
    height: usize,
    counts: &mut [i32],
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
    max_iterations: i32,
) -> Result<(), EngineError> {
    let viewport = Viewport::new(x_min, y_min, x_max, y_max)?;
    let renderer = EscapeTimeRenderer::new(width, height, viewport, max_iterations)?;
    renderer.render(counts)
}
