//! Image sequencing for the scrolling portfolio strip and the hero backdrop.

use ecomoving_schema::HeroContent;

/// Galleries with at least this many images scroll as an endless loop.
pub const LOOP_THRESHOLD: usize = 5;

/// Seconds each image takes to scroll past in a looping strip.
pub const SECONDS_PER_IMAGE: u64 = 8;

/// Width of one strip tile plus the gap after it, in pixels.
pub const TILE_STRIDE_PX: usize = 370;

/// Images laid out in a portfolio strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryStrip {
    pub images: Vec<String>,
    pub looping: bool,
}

impl GalleryStrip {
    /// `None` when there is nothing to show. Five or more images are laid out
    /// twice so the strip can scroll by one full copy and restart seamlessly.
    pub fn new(images: &[String]) -> Option<Self> {
        let images: Vec<String> = images.iter().filter(|i| !i.trim().is_empty()).cloned().collect();
        if images.is_empty() {
            return None;
        }

        let looping = images.len() >= LOOP_THRESHOLD;
        let images = if looping {
            images.iter().chain(images.iter()).cloned().collect()
        } else {
            images
        };
        Some(Self { images, looping })
    }

    /// Distinct images before duplication.
    pub fn unique_len(&self) -> usize {
        if self.looping {
            self.images.len() / 2
        } else {
            self.images.len()
        }
    }

    /// Scroll distance of one full loop.
    pub fn loop_width_px(&self) -> usize {
        self.unique_len() * TILE_STRIDE_PX
    }

    pub fn loop_duration_secs(&self) -> u64 {
        self.unique_len() as u64 * SECONDS_PER_IMAGE
    }
}

/// Non-empty hero backgrounds in rotation order.
pub fn hero_slides(hero: &HeroContent) -> Vec<&str> {
    std::iter::once(Some(hero.background_image.as_str()))
        .chain([
            hero.background_image_2.as_deref(),
            hero.background_image_3.as_deref(),
        ])
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Timing for a crossfading hero backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTiming {
    pub slides: usize,
    pub hold_secs: u64,
}

impl SlideTiming {
    pub fn new(slides: usize, hold_secs: u64) -> Self {
        Self {
            slides,
            hold_secs: hold_secs.max(1),
        }
    }

    pub fn rotates(&self) -> bool {
        self.slides > 1
    }

    pub fn cycle_secs(&self) -> u64 {
        self.slides as u64 * self.hold_secs
    }

    pub fn delay_secs(&self, index: usize) -> u64 {
        index as u64 * self.hold_secs
    }

    /// Share of the cycle, in percent, during which one slide is visible.
    pub fn visible_percent(&self) -> f64 {
        if self.slides == 0 {
            return 100.0;
        }
        100.0 / self.slides as f64
    }
}
