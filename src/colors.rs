// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The fixed policy for turning escape counts into colors.  Members
//! of the set, meaning counts that reached the iteration limit, are
//! opaque black.  Everything else folds the count into a hue byte and
//! spreads it across the channels, which is garish but cheap and
//! makes every escape band visibly distinct.  This is a convention of
//! the presentation layer, not part of the engine's contract; the
//! engine never sees a color.

use image::Rgba;

/// The color for one escape count, given the limit the render ran
/// with.  A count equal to the limit is opaque black; any other count
/// is expected to come from the engine and therefore lie in
/// [0, limit).
pub fn escape_color(count: i32, limit: i32) -> Rgba<u8> {
    if count == limit {
        return Rgba {
            data: [0, 0, 0, 255],
        };
    }
    let hue = count % 255;
    Rgba {
        data: [
            hue as u8,
            (255 - hue) as u8,
            ((hue + 128) % 255) as u8,
            255,
        ],
    }
}

/// Turns a whole buffer of escape counts into a flat RGBA byte
/// buffer, four bytes per count in the same order, ready to hand to
/// an image encoder.
pub fn colorize(counts: &[i32], limit: i32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(counts.len() * 4);
    for &count in counts {
        pixels.extend_from_slice(&escape_color(count, limit).data);
    }
    pixels
}
