use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// Borrowed view of an interleaved 8-bit image owned by the caller.
#[derive(Debug, Clone, Copy)]
pub struct RawImage<'a> {
    bytes: &'a [u8],
    height: usize,
    width: usize,
    channels: usize,
}

impl<'a> RawImage<'a> {
    pub fn new(bytes: &'a [u8], height: usize, width: usize, channels: usize) -> Result<Self> {
        if channels == 0 {
            return Err(Error::InvalidChannelCount);
        }
        let expected = height * width * channels;
        if bytes.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes,
            height,
            width,
            channels,
        })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.height * self.width
    }

    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Running mean of the channels at linear pixel `index`.
    #[inline]
    pub fn channel_average(&self, index: usize) -> u8 {
        let start = index * self.channels;
        running_mean(&self.bytes[start..start + self.channels])
    }

    /// Like [`channel_average`](Self::channel_average), `None` outside the image.
    #[inline]
    pub fn channel_average_at(&self, pixel: Pixel) -> Option<u8> {
        pixel
            .is_within(self.height, self.width)
            .then(|| self.channel_average(pixel.linear_index(self.width)))
    }
}

/// Incremental mean `avg += (s - avg) / (k + 1)` in integer arithmetic.
///
/// Each step truncates toward zero, so the result can sit slightly below the
/// exact mean (e.g. `[0, 255, 255]` gives 169, not 170). The bias is
/// deterministic and kept for output compatibility.
#[inline]
pub fn running_mean(samples: &[u8]) -> u8 {
    let mut average: i32 = 0;
    for (k, &sample) in samples.iter().enumerate() {
        average += (sample as i32 - average) / (k as i32 + 1);
    }
    average as u8
}
