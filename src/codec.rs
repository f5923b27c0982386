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
use crate::ayuv::{ayuv_to_yuv_impl, yuv_to_ayuv_impl, PackedAlphaLayout};
use crate::frame::{FrameGeometry, FramePlanes};
use crate::pixel_format::FrameFormat;
use crate::yuv_nv::{decode_nv, encode_nv};
use crate::yuv_planar::{decode_planar, encode_planar};
use crate::yuv_support::{YuvNVOrder, Yuy2Description};
use crate::yuv_to_yuy2::yuv_to_yuy2_impl;
use crate::yuy2_to_yuv::yuy2_to_yuv_impl;

/// Reads the real rows of an unpadded record into padded planes
pub(crate) type DecodeFn = fn(&FrameGeometry, &mut FramePlanes, &[u8]);
/// Writes whole padded planes into a record
pub(crate) type EncodeFn = fn(&FrameGeometry, &FramePlanes, &mut [u8]);

#[derive(Copy, Clone)]
pub(crate) struct FrameCodec {
    pub(crate) decode: DecodeFn,
    pub(crate) encode: EncodeFn,
}

macro_rules! planar_codec {
    ($word:ty, $shift:expr) => {
        FrameCodec {
            decode: decode_planar::<$word, $shift>,
            encode: encode_planar::<$word, $shift>,
        }
    };
}

macro_rules! nv_codec {
    ($word:ty, $shift:expr, $order:expr) => {
        FrameCodec {
            decode: decode_nv::<$word, $shift, { $order as u8 }>,
            encode: encode_nv::<$word, $shift, { $order as u8 }>,
        }
    };
}

macro_rules! yuy2_codec {
    ($word:ty, $shift:expr, $target:expr) => {
        FrameCodec {
            decode: yuy2_to_yuv_impl::<$word, $shift, { $target as usize }>,
            encode: yuv_to_yuy2_impl::<$word, $shift, { $target as usize }>,
        }
    };
}

macro_rules! ayuv_codec {
    ($word:ty, $layout:expr) => {
        FrameCodec {
            decode: ayuv_to_yuv_impl::<$word, { $layout as u8 }>,
            encode: yuv_to_ayuv_impl::<$word, { $layout as u8 }>,
        }
    };
}

impl FrameFormat {
    pub(crate) fn codec(&self) -> FrameCodec {
        match self {
            FrameFormat::I400
            | FrameFormat::I420
            | FrameFormat::I422
            | FrameFormat::I440
            | FrameFormat::I444 => planar_codec!(u8, 0),
            FrameFormat::Yuv444P10 => planar_codec!(u16, 0),
            FrameFormat::Nv12 | FrameFormat::Nv16 | FrameFormat::Nv24 => {
                nv_codec!(u8, 0, YuvNVOrder::UV)
            }
            FrameFormat::Nv21 | FrameFormat::Nv42 => nv_codec!(u8, 0, YuvNVOrder::VU),
            FrameFormat::P010 => nv_codec!(u16, 6, YuvNVOrder::UV),
            FrameFormat::P012
            | FrameFormat::P016
            | FrameFormat::P210
            | FrameFormat::P216
            | FrameFormat::P410
            | FrameFormat::P416 => nv_codec!(u16, 0, YuvNVOrder::UV),
            FrameFormat::Yuyv => yuy2_codec!(u16, 0, Yuy2Description::YUYV),
            FrameFormat::Uyvy => yuy2_codec!(u16, 0, Yuy2Description::UYVY),
            FrameFormat::Y210 => yuy2_codec!(u32, 6, Yuy2Description::YUYV),
            FrameFormat::Y216 => yuy2_codec!(u32, 0, Yuy2Description::YUYV),
            FrameFormat::Ayuv => ayuv_codec!(u32, PackedAlphaLayout::Ayuv),
            FrameFormat::Y410 => ayuv_codec!(u32, PackedAlphaLayout::Y410),
            FrameFormat::Y416 => ayuv_codec!(u64, PackedAlphaLayout::Y416),
        }
    }
}
