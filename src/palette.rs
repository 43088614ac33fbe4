//! The fixed Plan 9 colour map every frame is quantized against.
//!
//! The 256 entries combine a 4x4x4 RGB cube with 4 shades of each hue,
//! giving a neutral palette that needs no per-image analysis.

use image::{Rgb, imageops::ColorMap};

pub const PALETTE_LEN: usize = 256;

#[derive(Debug, Clone)]
pub struct Plan9Palette {
    colors: [Rgb<u8>; PALETTE_LEN],
}

impl Plan9Palette {
    pub fn new() -> Self {
        let mut colors = [Rgb([0, 0, 0]); PALETTE_LEN];
        let mut base = 0usize;
        for r in 0..4i32 {
            for v in 0..4i32 {
                let mut j = v - r;
                for g in 0..4i32 {
                    for b in 0..4i32 {
                        let den = r.max(g).max(b);
                        let color = if den == 0 {
                            let grey = (17 * v) as u8;
                            Rgb([grey, grey, grey])
                        } else {
                            let num = 17 * (4 * den + v);
                            Rgb([
                                (r * num / den) as u8,
                                (g * num / den) as u8,
                                (b * num / den) as u8,
                            ])
                        };
                        colors[base + (j & 0x0f) as usize] = color;
                        j += 1;
                    }
                }
                base += 16;
            }
        }
        Self { colors }
    }

    pub fn colors(&self) -> &[Rgb<u8>] {
        &self.colors
    }

    /// Flat `r, g, b, r, g, b, ...` table as GIF colour tables expect it.
    pub fn to_rgb_table(&self) -> Vec<u8> {
        self.colors().iter().flat_map(|c| c.0).collect()
    }

    /// Index of the nearest entry by squared RGB distance; ties go to the lowest index.
    pub fn nearest(&self, color: &Rgb<u8>) -> usize {
        let mut best = 0;
        let mut best_distance = u32::MAX;
        for (index, candidate) in self.colors.iter().enumerate() {
            let distance = square_distance(color, candidate);
            if distance < best_distance {
                best = index;
                best_distance = distance;
                if distance == 0 {
                    break;
                }
            }
        }
        best
    }
}

impl Default for Plan9Palette {
    fn default() -> Self {
        Self::new()
    }
}

fn square_distance(a: &Rgb<u8>, b: &Rgb<u8>) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&x, &y)| {
            let d = i32::from(x) - i32::from(y);
            (d * d) as u32
        })
        .sum()
}

impl ColorMap for Plan9Palette {
    type Color = Rgb<u8>;

    fn index_of(&self, color: &Rgb<u8>) -> usize {
        self.nearest(color)
    }

    fn lookup(&self, index: usize) -> Option<Rgb<u8>> {
        self.colors.get(index).copied()
    }

    fn has_lookup(&self) -> bool {
        true
    }

    fn map_color(&self, color: &mut Rgb<u8>) {
        *color = self.colors[self.nearest(color)];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_entries() {
        let palette = Plan9Palette::new();
        let colors = palette.colors();
        assert_eq!(colors[0], Rgb([0, 0, 0]));
        assert_eq!(colors[255], Rgb([255, 255, 255]));
        assert_eq!(colors[1], Rgb([0, 0, 0x44]));
        assert_eq!(colors[17], Rgb([0x11, 0x11, 0x11]));
    }

    #[test]
    fn primaries_are_exact() {
        let palette = Plan9Palette::new();
        for primary in [Rgb([255, 0, 0]), Rgb([0, 255, 0]), Rgb([0, 0, 255])] {
            let index = palette.nearest(&primary);
            assert_eq!(palette.colors()[index], primary);
        }
    }

    #[test]
    fn every_entry_maps_to_itself() {
        let palette = Plan9Palette::new();
        for (index, color) in palette.colors().iter().enumerate() {
            assert_eq!(palette.colors()[palette.nearest(color)], *color, "entry {index}");
        }
    }

    #[test]
    fn table_is_flat_rgb() {
        let table = Plan9Palette::new().to_rgb_table();
        assert_eq!(table.len(), PALETTE_LEN * 3);
        assert_eq!(&table[table.len() - 3..], &[255, 255, 255]);
    }

    #[test]
    fn map_color_snaps_to_palette() {
        let palette = Plan9Palette::new();
        let mut color = Rgb([250, 3, 4]);
        palette.map_color(&mut color);
        assert_eq!(color, Rgb([255, 0, 0]));
    }
}
