/*
 * // Copyright (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Declares chroma subsampling of a frame
pub enum YuvChromaSubsampling {
    /// Luma only, no chroma planes
    Yuv400 = 0,
    /// Half horizontal and half vertical chroma resolution
    Yuv420 = 1,
    /// Half horizontal, full vertical chroma resolution
    Yuv422 = 2,
    /// Full horizontal, half vertical chroma resolution
    Yuv440 = 3,
    /// Full chroma resolution
    Yuv444 = 4,
}

impl From<u8> for YuvChromaSubsampling {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => YuvChromaSubsampling::Yuv400,
            1 => YuvChromaSubsampling::Yuv420,
            2 => YuvChromaSubsampling::Yuv422,
            3 => YuvChromaSubsampling::Yuv440,
            4 => YuvChromaSubsampling::Yuv444,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl YuvChromaSubsampling {
    pub const ALL: [YuvChromaSubsampling; 5] = [
        YuvChromaSubsampling::Yuv400,
        YuvChromaSubsampling::Yuv420,
        YuvChromaSubsampling::Yuv422,
        YuvChromaSubsampling::Yuv440,
        YuvChromaSubsampling::Yuv444,
    ];

    #[inline]
    pub const fn has_chroma(&self) -> bool {
        !matches!(self, YuvChromaSubsampling::Yuv400)
    }

    /// Chroma plane width for the given luma width
    #[inline]
    pub const fn chroma_width(&self, luma_width: usize) -> usize {
        match self {
            YuvChromaSubsampling::Yuv400 => 0,
            YuvChromaSubsampling::Yuv420 | YuvChromaSubsampling::Yuv422 => luma_width / 2,
            YuvChromaSubsampling::Yuv440 | YuvChromaSubsampling::Yuv444 => luma_width,
        }
    }

    /// Chroma plane height for the given luma height
    #[inline]
    pub const fn chroma_height(&self, luma_height: usize) -> usize {
        match self {
            YuvChromaSubsampling::Yuv400 => 0,
            YuvChromaSubsampling::Yuv420 | YuvChromaSubsampling::Yuv440 => luma_height / 2,
            YuvChromaSubsampling::Yuv422 | YuvChromaSubsampling::Yuv444 => luma_height,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            YuvChromaSubsampling::Yuv400 => "4:0:0",
            YuvChromaSubsampling::Yuv420 => "4:2:0",
            YuvChromaSubsampling::Yuv422 => "4:2:2",
            YuvChromaSubsampling::Yuv440 => "4:4:0",
            YuvChromaSubsampling::Yuv444 => "4:4:4",
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Order of chroma samples inside an interleaved pair
pub enum YuvNVOrder {
    UV = 0,
    VU = 1,
}

impl From<u8> for YuvNVOrder {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => YuvNVOrder::UV,
            1 => YuvNVOrder::VU,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl YuvNVOrder {
    #[inline]
    pub const fn get_u_position(&self) -> usize {
        match self {
            YuvNVOrder::UV => 0,
            YuvNVOrder::VU => 1,
        }
    }

    #[inline]
    pub const fn get_v_position(&self) -> usize {
        match self {
            YuvNVOrder::UV => 1,
            YuvNVOrder::VU => 0,
        }
    }
}

#[repr(usize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Sub-field order of a packed 4:2:2 pixel word.
///
/// Every word carries one luma sample and one chroma sample, chroma
/// alternates U on even columns and V on odd columns.
pub enum Yuy2Description {
    /// Luma in the low half of the word
    YUYV = 0,
    /// Chroma in the low half of the word
    UYVY = 1,
}

impl From<usize> for Yuy2Description {
    fn from(value: usize) -> Self {
        match value {
            0 => Yuy2Description::YUYV,
            1 => Yuy2Description::UYVY,
            _ => {
                panic!("Not supported value {}", value)
            }
        }
    }
}

impl Yuy2Description {
    /// Half-word index of the luma field, 0 is the least significant half
    #[inline(always)]
    pub(crate) const fn get_y_position(&self) -> u32 {
        match self {
            Yuy2Description::YUYV => 0,
            Yuy2Description::UYVY => 1,
        }
    }

    #[inline(always)]
    pub(crate) const fn get_chroma_position(&self) -> u32 {
        match self {
            Yuy2Description::YUYV => 1,
            Yuy2Description::UYVY => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chroma_dimensions() {
        let expected = [
            (YuvChromaSubsampling::Yuv400, 0, 0),
            (YuvChromaSubsampling::Yuv420, 960, 540),
            (YuvChromaSubsampling::Yuv422, 960, 1080),
            (YuvChromaSubsampling::Yuv440, 1920, 540),
            (YuvChromaSubsampling::Yuv444, 1920, 1080),
        ];
        for (sampling, width, height) in expected {
            assert_eq!(sampling.chroma_width(1920), width, "{}", sampling.name());
            assert_eq!(sampling.chroma_height(1080), height, "{}", sampling.name());
        }
    }

    #[test]
    fn test_sampling_from_repr() {
        for sampling in YuvChromaSubsampling::ALL {
            assert_eq!(YuvChromaSubsampling::from(sampling as u8), sampling);
        }
    }
}
