/*
 * Copyright (c) Radzivon Bartoshyk, 11/2024. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::yuv_support::{YuvChromaSubsampling, YuvNVOrder};
use crate::YuvError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Physical arrangement of components in memory
pub enum FrameLayout {
    /// Every component in its own contiguous block
    Planar,
    /// Luma block followed by one block of interleaved chroma pairs
    Interleaved,
    /// Components packed into one word per pixel
    Packed,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Descriptor of a catalog format, drives all size and offset arithmetic
pub struct PixelFormat {
    pub subsampling: YuvChromaSubsampling,
    pub bit_depth: u32,
    pub has_alpha: bool,
    pub layout: FrameLayout,
    pub order: YuvNVOrder,
    /// Bytes of one stored sample, or of one pixel word for packed layouts
    pub word_bytes: usize,
    /// Left shift of the sample inside its stored field
    pub msb_shift: u32,
}

impl PixelFormat {
    #[inline]
    pub const fn u_before_v(&self) -> bool {
        matches!(self.order, YuvNVOrder::UV)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Every raw layout known to the converter
pub enum FrameFormat {
    I400,
    I420,
    Nv12,
    Nv21,
    P010,
    P012,
    P016,
    I422,
    Nv16,
    P210,
    P216,
    Yuyv,
    Uyvy,
    Y210,
    Y216,
    I440,
    I444,
    Yuv444P10,
    Nv24,
    Nv42,
    P410,
    P416,
    Ayuv,
    Y410,
    Y416,
}

const fn planar(subsampling: YuvChromaSubsampling, bit_depth: u32, word_bytes: usize) -> PixelFormat {
    PixelFormat {
        subsampling,
        bit_depth,
        has_alpha: false,
        layout: FrameLayout::Planar,
        order: YuvNVOrder::UV,
        word_bytes,
        msb_shift: 0,
    }
}

const fn interleaved(
    subsampling: YuvChromaSubsampling,
    bit_depth: u32,
    word_bytes: usize,
    msb_shift: u32,
    order: YuvNVOrder,
) -> PixelFormat {
    PixelFormat {
        subsampling,
        bit_depth,
        has_alpha: false,
        layout: FrameLayout::Interleaved,
        order,
        word_bytes,
        msb_shift,
    }
}

const fn packed(
    subsampling: YuvChromaSubsampling,
    bit_depth: u32,
    has_alpha: bool,
    word_bytes: usize,
    msb_shift: u32,
) -> PixelFormat {
    PixelFormat {
        subsampling,
        bit_depth,
        has_alpha,
        layout: FrameLayout::Packed,
        order: YuvNVOrder::UV,
        word_bytes,
        msb_shift,
    }
}

impl FrameFormat {
    pub const ALL: [FrameFormat; 25] = [
        FrameFormat::I400,
        FrameFormat::I420,
        FrameFormat::Nv12,
        FrameFormat::Nv21,
        FrameFormat::P010,
        FrameFormat::P012,
        FrameFormat::P016,
        FrameFormat::I422,
        FrameFormat::Nv16,
        FrameFormat::P210,
        FrameFormat::P216,
        FrameFormat::Yuyv,
        FrameFormat::Uyvy,
        FrameFormat::Y210,
        FrameFormat::Y216,
        FrameFormat::I440,
        FrameFormat::I444,
        FrameFormat::Yuv444P10,
        FrameFormat::Nv24,
        FrameFormat::Nv42,
        FrameFormat::P410,
        FrameFormat::P416,
        FrameFormat::Ayuv,
        FrameFormat::Y410,
        FrameFormat::Y416,
    ];

    pub const fn descriptor(&self) -> PixelFormat {
        use YuvChromaSubsampling::*;
        match self {
            FrameFormat::I400 => planar(Yuv400, 8, 1),
            FrameFormat::I420 => planar(Yuv420, 8, 1),
            FrameFormat::Nv12 => interleaved(Yuv420, 8, 1, 0, YuvNVOrder::UV),
            FrameFormat::Nv21 => interleaved(Yuv420, 8, 1, 0, YuvNVOrder::VU),
            FrameFormat::P010 => interleaved(Yuv420, 10, 2, 6, YuvNVOrder::UV),
            FrameFormat::P012 => interleaved(Yuv420, 12, 2, 0, YuvNVOrder::UV),
            FrameFormat::P016 => interleaved(Yuv420, 16, 2, 0, YuvNVOrder::UV),
            FrameFormat::I422 => planar(Yuv422, 8, 1),
            FrameFormat::Nv16 => interleaved(Yuv422, 8, 1, 0, YuvNVOrder::UV),
            FrameFormat::P210 => interleaved(Yuv422, 10, 2, 0, YuvNVOrder::UV),
            FrameFormat::P216 => interleaved(Yuv422, 16, 2, 0, YuvNVOrder::UV),
            FrameFormat::Yuyv => packed(Yuv422, 8, false, 2, 0),
            FrameFormat::Uyvy => packed(Yuv422, 8, false, 2, 0),
            FrameFormat::Y210 => packed(Yuv422, 10, false, 4, 6),
            FrameFormat::Y216 => packed(Yuv422, 16, false, 4, 0),
            FrameFormat::I440 => planar(Yuv440, 8, 1),
            FrameFormat::I444 => planar(Yuv444, 8, 1),
            FrameFormat::Yuv444P10 => planar(Yuv444, 10, 2),
            FrameFormat::Nv24 => interleaved(Yuv444, 8, 1, 0, YuvNVOrder::UV),
            FrameFormat::Nv42 => interleaved(Yuv444, 8, 1, 0, YuvNVOrder::VU),
            FrameFormat::P410 => interleaved(Yuv444, 10, 2, 0, YuvNVOrder::UV),
            FrameFormat::P416 => interleaved(Yuv444, 16, 2, 0, YuvNVOrder::UV),
            FrameFormat::Ayuv => packed(Yuv444, 8, true, 4, 0),
            FrameFormat::Y410 => packed(Yuv444, 10, true, 4, 0),
            FrameFormat::Y416 => packed(Yuv444, 16, true, 8, 0),
        }
    }

    /// Canonical token of the format
    pub const fn name(&self) -> &'static str {
        match self {
            FrameFormat::I400 => "I400",
            FrameFormat::I420 => "I420",
            FrameFormat::Nv12 => "NV12",
            FrameFormat::Nv21 => "NV21",
            FrameFormat::P010 => "P010",
            FrameFormat::P012 => "P012",
            FrameFormat::P016 => "P016",
            FrameFormat::I422 => "I422",
            FrameFormat::Nv16 => "NV16",
            FrameFormat::P210 => "P210",
            FrameFormat::P216 => "P216",
            FrameFormat::Yuyv => "YUYV",
            FrameFormat::Uyvy => "UYVY",
            FrameFormat::Y210 => "Y210",
            FrameFormat::Y216 => "Y216",
            FrameFormat::I440 => "I440",
            FrameFormat::I444 => "I444",
            FrameFormat::Yuv444P10 => "YUV444P10LE",
            FrameFormat::Nv24 => "NV24",
            FrameFormat::Nv42 => "NV42",
            FrameFormat::P410 => "P410",
            FrameFormat::P416 => "P416",
            FrameFormat::Ayuv => "AYUV",
            FrameFormat::Y410 => "Y410",
            FrameFormat::Y416 => "Y416",
        }
    }

    #[inline]
    pub const fn subsampling(&self) -> YuvChromaSubsampling {
        self.descriptor().subsampling
    }

    #[inline]
    pub const fn bit_depth(&self) -> u32 {
        self.descriptor().bit_depth
    }

    #[inline]
    pub const fn has_alpha(&self) -> bool {
        self.descriptor().has_alpha
    }
}

impl Display for FrameFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FrameFormat {
    type Err = YuvError;

    /// Looks up a format token, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format = match s.to_ascii_uppercase().as_str() {
            "I400" | "GREY" | "Y8" | "Y800" => FrameFormat::I400,
            "I420" | "IYUV" => FrameFormat::I420,
            "NV12" => FrameFormat::Nv12,
            "NV21" => FrameFormat::Nv21,
            "P010" => FrameFormat::P010,
            "P012" => FrameFormat::P012,
            "P016" => FrameFormat::P016,
            "I422" => FrameFormat::I422,
            "NV16" => FrameFormat::Nv16,
            "P210" => FrameFormat::P210,
            "P216" => FrameFormat::P216,
            "YUYV" | "YUY2" => FrameFormat::Yuyv,
            "UYVY" => FrameFormat::Uyvy,
            "Y210" => FrameFormat::Y210,
            "Y216" => FrameFormat::Y216,
            "I440" => FrameFormat::I440,
            "I444" => FrameFormat::I444,
            "YUV444P10LE" => FrameFormat::Yuv444P10,
            "NV24" => FrameFormat::Nv24,
            "NV42" => FrameFormat::Nv42,
            "P410" => FrameFormat::P410,
            "P416" => FrameFormat::P416,
            "AYUV" | "VUYX" => FrameFormat::Ayuv,
            "Y410" => FrameFormat::Y410,
            "Y416" => FrameFormat::Y416,
            _ => return Err(YuvError::UnknownFormat(s.to_string())),
        };
        Ok(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!("nv12".parse::<FrameFormat>().unwrap(), FrameFormat::Nv12);
        assert_eq!("Y410".parse::<FrameFormat>().unwrap(), FrameFormat::Y410);
        assert_eq!("yuy2".parse::<FrameFormat>().unwrap(), FrameFormat::Yuyv);
        assert_eq!("grey".parse::<FrameFormat>().unwrap(), FrameFormat::I400);
        assert_eq!("vuyx".parse::<FrameFormat>().unwrap(), FrameFormat::Ayuv);
        assert_eq!("iyuv".parse::<FrameFormat>().unwrap(), FrameFormat::I420);
    }

    #[test]
    fn test_unknown_format() {
        match "rgb4".parse::<FrameFormat>() {
            Err(YuvError::UnknownFormat(token)) => assert_eq!(token, "rgb4"),
            other => panic!("Expected unknown format, got {:?}", other),
        }
        assert!("".parse::<FrameFormat>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for format in FrameFormat::ALL {
            assert_eq!(format.name().parse::<FrameFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_descriptors() {
        let p010 = FrameFormat::P010.descriptor();
        assert_eq!(p010.subsampling, YuvChromaSubsampling::Yuv420);
        assert_eq!(p010.bit_depth, 10);
        assert_eq!(p010.msb_shift, 6);
        assert_eq!(p010.layout, FrameLayout::Interleaved);
        assert!(!FrameFormat::Nv21.descriptor().u_before_v());
        assert!(FrameFormat::Nv12.descriptor().u_before_v());
        let y416 = FrameFormat::Y416.descriptor();
        assert!(y416.has_alpha);
        assert_eq!(y416.word_bytes, 8);
        for format in FrameFormat::ALL {
            let descriptor = format.descriptor();
            assert_eq!(
                descriptor.has_alpha,
                matches!(format, FrameFormat::Ayuv | FrameFormat::Y410 | FrameFormat::Y416)
            );
            assert!(descriptor.bit_depth + descriptor.msb_shift <= 16);
        }
    }
}
