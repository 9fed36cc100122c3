/// Placeholder visuals for folders without images
///
/// When a folder is empty or a project has no paired image, presentation
/// draws a two-stop gradient instead. Picking a random swatch is only for
/// visual variety, so the caller supplies the RNG and tests can seed it.
use rand::Rng;

/// Caption shown on an empty gallery card
pub const EMPTY_FOLDER_HINT: &str = "Añade una foto a esta carpeta";

/// A diagonal two-stop gradient, colors as sRGB bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub from: [u8; 3],
    pub to: [u8; 3],
}

impl Swatch {
    /// Colors as normalized floats (what GUI toolkits usually want)
    pub fn start_rgb_f32(&self) -> [f32; 3] {
        to_f32(self.from)
    }

    pub fn end_rgb_f32(&self) -> [f32; 3] {
        to_f32(self.to)
    }
}

fn to_f32(rgb: [u8; 3]) -> [f32; 3] {
    [
        f32::from(rgb[0]) / 255.0,
        f32::from(rgb[1]) / 255.0,
        f32::from(rgb[2]) / 255.0,
    ]
}

/// Warm gradients matching the site's palette
const DEFAULT_SWATCHES: [Swatch; 4] = [
    Swatch { name: "amber", from: [0xb4, 0x53, 0x09], to: [0x78, 0x35, 0x0f] },
    Swatch { name: "primary", from: [0x57, 0x53, 0x4e], to: [0x29, 0x25, 0x24] },
    Swatch { name: "stone", from: [0x78, 0x71, 0x6c], to: [0x44, 0x40, 0x3c] },
    Swatch { name: "gold", from: [0xb8, 0x95, 0x2e], to: [0x8a, 0x6d, 0x1f] },
];

/// Fixed dark background behind an empty hero slideshow
const HERO_SWATCH: Swatch = Swatch {
    name: "hero",
    from: [0x1c, 0x19, 0x17],
    to: [0x0c, 0x0a, 0x09],
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderPalette {
    swatches: Vec<Swatch>,
}

impl Default for PlaceholderPalette {
    fn default() -> Self {
        Self {
            swatches: DEFAULT_SWATCHES.to_vec(),
        }
    }
}

impl PlaceholderPalette {
    /// Custom palette; falls back to the default one if `swatches` is empty
    pub fn new(swatches: Vec<Swatch>) -> Self {
        if swatches.is_empty() {
            return Self::default();
        }
        Self { swatches }
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Random swatch from the injected RNG
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Swatch {
        self.swatches[rng.gen_range(0..self.swatches.len())]
    }

    /// Stable swatch for a grid position, so cards don't flicker on redraw
    pub fn for_index(&self, index: usize) -> Swatch {
        self.swatches[index % self.swatches.len()]
    }

    /// Background for an empty hero slideshow
    pub fn hero(&self) -> Swatch {
        HERO_SWATCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_pick_is_reproducible() {
        let palette = PlaceholderPalette::default();

        let first: Vec<Swatch> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..8).map(|_| palette.pick(&mut rng)).collect()
        };
        let second: Vec<Swatch> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..8).map(|_| palette.pick(&mut rng)).collect()
        };

        assert_eq!(first, second);
        assert!(first.iter().all(|s| palette.swatches().contains(s)));
    }

    #[test]
    fn test_for_index_wraps() {
        let palette = PlaceholderPalette::default();
        assert_eq!(palette.for_index(0), palette.for_index(4));
        assert_ne!(palette.for_index(0), palette.for_index(1));
    }

    #[test]
    fn test_empty_custom_palette_falls_back() {
        assert_eq!(PlaceholderPalette::new(Vec::new()), PlaceholderPalette::default());
    }

    #[test]
    fn test_float_conversion() {
        let swatch = Swatch { name: "x", from: [255, 0, 51], to: [0, 0, 0] };
        assert_eq!(swatch.start_rgb_f32(), [1.0, 0.0, 0.2]);
        assert_eq!(swatch.end_rgb_f32(), [0.0, 0.0, 0.0]);
    }
}
