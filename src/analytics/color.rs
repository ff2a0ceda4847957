// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// Stable chart color for a category name, as `#rrggbb`.
///
/// Rolling 32-bit hash over the UTF-16 code units (`h = c + (h << 5) - h`),
/// with the three color channels taken from bits 31..8. Wrapping unsigned
/// arithmetic keeps the output exactly six hex digits for every input.
pub fn category_color(name: &str) -> String {
    let hash = name.encode_utf16().fold(0u32, |h, c| {
        u32::from(c).wrapping_add((h << 5).wrapping_sub(h))
    });
    format!(
        "#{:02x}{:02x}{:02x}",
        (hash >> 24) & 0xff,
        (hash >> 16) & 0xff,
        (hash >> 8) & 0xff
    )
}
