//! # Identicon
//!
//! Deterministic avatar for users without an uploaded picture. The SHA-256
//! digest of the seed (usually the user id or username) picks a hue and a
//! 5x5 cell pattern mirrored around the middle column.
//!
//! ```rust
//! use dashboard::identicon::Identicon;
//!
//! let icon = Identicon::from_seed("lan");
//! assert_eq!(icon, Identicon::from_seed("lan"));
//! assert!(icon.to_svg(64).starts_with("<svg"));
//! ```

use sha2::{Digest, Sha256};

pub const GRID_SIZE: usize = 5;
const HALF_WIDTH: usize = (GRID_SIZE + 1) / 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identicon {
    hue: u16,
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl Identicon {
    pub fn from_seed(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());

        let hue = u16::from_be_bytes([digest[0], digest[1]]) % 360;

        // One byte per cell of the left half, middle column included
        let mut cells = [[false; GRID_SIZE]; GRID_SIZE];
        for (row, cells_row) in cells.iter_mut().enumerate() {
            for col in 0..HALF_WIDTH {
                let on = digest[2 + row * HALF_WIDTH + col] % 2 == 0;
                cells_row[col] = on;
                cells_row[GRID_SIZE - 1 - col] = on;
            }
        }

        Self { hue, cells }
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Foreground colour as a CSS `hsl()` value.
    pub fn color(&self) -> String {
        format!("hsl({}, 65%, 50%)", self.hue)
    }

    /// Render as a square SVG of `size` pixels with a light background.
    pub fn to_svg(&self, size: u32) -> String {
        let cell = size as f64 / GRID_SIZE as f64;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        );
        svg.push_str(&format!(
            r#"<rect width="{size}" height="{size}" fill="hsl({}, 40%, 94%)"/>"#,
            self.hue
        ));

        let color = self.color();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, filled) in cells.iter().enumerate() {
                if *filled {
                    svg.push_str(&format!(
                        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
                        col as f64 * cell,
                        row as f64 * cell,
                        cell,
                        cell,
                        color
                    ));
                }
            }
        }
        svg.push_str("</svg>");
        svg
    }
}
