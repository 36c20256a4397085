//! Reduce a buffer of pixel samples to a single representative color.

use crate::error::{Error, Result};
use crate::{Rgb, Rgba};

/// How the channels of one pixel are interleaved in a byte buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha. The shape of canvas and RGBA8 image data.
    Rgba,
}

impl PixelLayout {
    /// Number of bytes per pixel.
    pub const fn channel_count(&self) -> usize {
        match self {
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }
}

/// A borrowed buffer of interleaved 8-bit pixel samples.
#[derive(Clone, Copy, Debug)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    layout: PixelLayout,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `data` as pixels with the given layout. Fails with
    /// [`Error::InvalidInput`] unless the length is a whole number of pixels.
    pub fn new(data: &'a [u8], layout: PixelLayout) -> Result<Self> {
        if data.len() % layout.channel_count() != 0 {
            return Err(Error::invalid_input("pixel buffer length", data.len()));
        }

        Ok(Self { data, layout })
    }

    /// Wrap `data` as RGBA pixels.
    pub fn rgba(data: &'a [u8]) -> Result<Self> {
        Self::new(data, PixelLayout::Rgba)
    }

    /// Wrap `data` as RGB pixels.
    pub fn rgb(data: &'a [u8]) -> Result<Self> {
        Self::new(data, PixelLayout::Rgb)
    }

    /// The channel layout of the buffer.
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Number of pixels in the buffer.
    pub fn len(&self) -> usize {
        self.data.len() / self.layout.channel_count()
    }

    /// Whether the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the red, green and blue channels of every pixel.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + 'a {
        let data = self.data;
        data.chunks_exact(self.layout.channel_count())
            .map(|px| [px[0], px[1], px[2]])
    }

    /// The mean color of all pixels. See [`average_color`].
    pub fn average_color(&self) -> Result<Rgb> {
        average_samples(self.pixels())
    }
}

/// A single pixel record that can be averaged. Any alpha is ignored.
pub trait Sample {
    /// The red, green and blue channels of the sample.
    fn rgb_channels(&self) -> [u8; 3];
}

impl Sample for Rgb {
    fn rgb_channels(&self) -> [u8; 3] {
        self.channels()
    }
}

impl Sample for Rgba {
    fn rgb_channels(&self) -> [u8; 3] {
        self.rgb().channels()
    }
}

impl Sample for [u8; 3] {
    fn rgb_channels(&self) -> [u8; 3] {
        *self
    }
}

impl Sample for [u8; 4] {
    fn rgb_channels(&self) -> [u8; 3] {
        [self[0], self[1], self[2]]
    }
}

impl<T: Sample + ?Sized> Sample for &T {
    fn rgb_channels(&self) -> [u8; 3] {
        (**self).rgb_channels()
    }
}

/// Running per-channel totals.
#[derive(Default)]
struct ChannelSums {
    red: u64,
    green: u64,
    blue: u64,
    count: u64,
}

impl ChannelSums {
    fn add(&mut self, [red, green, blue]: [u8; 3]) {
        self.red += u64::from(red);
        self.green += u64::from(green);
        self.blue += u64::from(blue);
        self.count += 1;
    }

    fn mean(&self) -> Result<Rgb> {
        if self.count == 0 {
            return Err(Error::invalid_input("pixel count", 0));
        }

        Ok(Rgb::new(
            mean_channel(self.red, self.count),
            mean_channel(self.green, self.count),
            mean_channel(self.blue, self.count),
        ))
    }
}

/// Integer mean, rounding halves up.
fn mean_channel(sum: u64, count: u64) -> u8 {
    ((sum + count / 2) / count).min(u64::from(u8::MAX)) as u8
}

/// The arithmetic mean of every pixel in the buffer, each channel rounded to
/// the nearest integer with halves rounding up. Fails with
/// [`Error::InvalidInput`] for an empty buffer.
pub fn average_color(pixels: &PixelBuffer<'_>) -> Result<Rgb> {
    pixels.average_color()
}

/// The arithmetic mean of a sequence of pixel records. Fails with
/// [`Error::InvalidInput`] if the sequence is empty.
pub fn average_samples<S: Sample>(samples: impl IntoIterator<Item = S>) -> Result<Rgb> {
    samples
        .into_iter()
        .fold(ChannelSums::default(), |mut sums, sample| {
            sums.add(sample.rgb_channels());
            sums
        })
        .mean()
}
