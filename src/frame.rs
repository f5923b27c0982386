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
use crate::numerics::mid_gray;
use crate::padding::{compute_padded, replicate_boundary};
use crate::pixel_format::{FrameFormat, FrameLayout};
use crate::yuv_error::{check_destination_size, check_overflow_v3, check_source_size};
use crate::yuv_support::YuvChromaSubsampling;
use crate::YuvError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Real and padded dimensions of a frame.
///
/// Planes are always laid out row-major over the padded dimensions, the real
/// dimensions tell how much of every row and column holds decoded samples.
pub struct FrameGeometry {
    pub width: usize,
    pub height: usize,
    pub padded_width: usize,
    pub padded_height: usize,
    pub subsampling: YuvChromaSubsampling,
}

impl FrameGeometry {
    #[inline]
    pub const fn luma_width(&self, padded: bool) -> usize {
        if padded {
            self.padded_width
        } else {
            self.width
        }
    }

    #[inline]
    pub const fn luma_height(&self, padded: bool) -> usize {
        if padded {
            self.padded_height
        } else {
            self.height
        }
    }

    #[inline]
    pub const fn luma_len(&self, padded: bool) -> usize {
        self.luma_width(padded) * self.luma_height(padded)
    }

    #[inline]
    pub const fn chroma_width(&self, padded: bool) -> usize {
        self.subsampling.chroma_width(self.luma_width(padded))
    }

    #[inline]
    pub const fn chroma_height(&self, padded: bool) -> usize {
        self.subsampling.chroma_height(self.luma_height(padded))
    }

    /// Samples in one chroma plane
    #[inline]
    pub const fn chroma_len(&self, padded: bool) -> usize {
        self.chroma_width(padded) * self.chroma_height(padded)
    }

    /// Frames may be converted into each other only when real and padded sizes match
    #[inline]
    pub const fn is_compatible(&self, other: &FrameGeometry) -> bool {
        self.width == other.width
            && self.padded_width == other.padded_width
            && self.height == other.height
            && self.padded_height == other.padded_height
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Layout independent component planes, samples right-justified at native depth
pub(crate) struct FramePlanes {
    pub(crate) a: Vec<u16>,
    pub(crate) y: Vec<u16>,
    pub(crate) u: Vec<u16>,
    pub(crate) v: Vec<u16>,
}

#[derive(Debug, Clone)]
/// One raw video frame decomposed into its canonical planes.
///
/// A frame is created with its real geometry, optionally padded once with
/// [Frame::set_padding], then filled either by [Frame::decode] or by
/// [Frame::convert_from], and finally written out with [Frame::encode].
pub struct Frame {
    pub(crate) geometry: FrameGeometry,
    pub(crate) format: FrameFormat,
    pub(crate) replicate: bool,
    pub(crate) planes: FramePlanes,
}

impl Frame {
    /// Creates a frame with unpadded geometry and default filled planes.
    ///
    /// Packed 4:2:2 layouts share one chroma pair between two pixels and
    /// reject odd widths with [YuvError::OddPackedWidth].
    pub fn new(width: usize, height: usize, format: FrameFormat) -> Result<Frame, YuvError> {
        if width == 0 || height == 0 {
            return Err(YuvError::ZeroBaseSize);
        }
        let descriptor = format.descriptor();
        if descriptor.layout == FrameLayout::Packed
            && descriptor.subsampling == YuvChromaSubsampling::Yuv422
            && width & 1 != 0
        {
            return Err(YuvError::OddPackedWidth(width));
        }
        check_overflow_v3(width, height, 3 * descriptor.word_bytes)?;
        let mut frame = Frame {
            geometry: FrameGeometry {
                width,
                height,
                padded_width: width,
                padded_height: height,
                subsampling: format.subsampling(),
            },
            format,
            replicate: false,
            planes: FramePlanes::default(),
        };
        frame.allocate();
        Ok(frame)
    }

    /// Aligns the padded geometry and reallocates the planes.
    ///
    /// Alignment below 2 keeps the frame unpadded and ignores `replicate`.
    pub fn set_padding(&mut self, alignment: usize, replicate: bool) -> Result<(), YuvError> {
        let (padded_width, padded_height) =
            compute_padded(self.geometry.width, self.geometry.height, alignment)?;
        if alignment < 2 {
            return Ok(());
        }
        check_overflow_v3(
            padded_width,
            padded_height,
            3 * self.format.descriptor().word_bytes,
        )?;
        self.replicate = replicate;
        self.geometry.padded_width = padded_width;
        self.geometry.padded_height = padded_height;
        self.allocate();
        Ok(())
    }

    /// Resizes planes to the padded geometry: luma and alpha zeroed, chroma mid-gray
    pub fn allocate(&mut self) {
        let luma_len = self.geometry.luma_len(true);
        let chroma_len = self.geometry.chroma_len(true);
        let neutral = mid_gray(self.format.bit_depth());

        let planes = &mut self.planes;
        planes.a.clear();
        if self.format.has_alpha() {
            planes.a.resize(luma_len, 0);
        }
        planes.y.clear();
        planes.y.resize(luma_len, 0);
        planes.u.clear();
        planes.u.resize(chroma_len, neutral);
        planes.v.clear();
        planes.v.resize(chroma_len, neutral);
    }

    /// Byte size of one raw record of this frame
    pub fn frame_size(&self, padded: bool) -> usize {
        let descriptor = self.format.descriptor();
        let luma_len = self.geometry.luma_len(padded);
        match descriptor.layout {
            FrameLayout::Planar | FrameLayout::Interleaved => {
                (luma_len + 2 * self.geometry.chroma_len(padded)) * descriptor.word_bytes
            }
            FrameLayout::Packed => luma_len * descriptor.word_bytes,
        }
    }

    /// Reads one unpadded raw record into the padded planes.
    ///
    /// Real rows land at the start of every padded row, the gap is then
    /// filled by boundary replication when it was requested.
    pub fn decode(&mut self, src: &[u8]) -> Result<(), YuvError> {
        check_source_size(src, self.frame_size(false))?;
        let codec = self.format.codec();
        (codec.decode)(&self.geometry, &mut self.planes, src);
        self.replicate_boundary();
        Ok(())
    }

    /// Writes the whole padded planes as one contiguous raw record
    pub fn encode(&self, dst: &mut [u8]) -> Result<(), YuvError> {
        check_destination_size(dst, self.frame_size(true))?;
        let codec = self.format.codec();
        (codec.encode)(&self.geometry, &self.planes, dst);
        Ok(())
    }

    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut dst = vec![0u8; self.frame_size(true)];
        let codec = self.format.codec();
        (codec.encode)(&self.geometry, &self.planes, &mut dst);
        dst
    }

    /// Replicates real edges into the padding region of every plane,
    /// does nothing unless replication was requested with [Frame::set_padding]
    pub fn replicate_boundary(&mut self) {
        if !self.replicate {
            return;
        }
        let geometry = self.geometry;
        let planes = &mut self.planes;

        if !planes.a.is_empty() {
            replicate_boundary(
                &mut planes.a,
                geometry.width,
                geometry.height,
                geometry.padded_width,
                geometry.padded_height,
            );
        }
        replicate_boundary(
            &mut planes.y,
            geometry.width,
            geometry.height,
            geometry.padded_width,
            geometry.padded_height,
        );

        let chroma_width = geometry.chroma_width(false);
        let chroma_height = geometry.chroma_height(false);
        let chroma_padded_width = geometry.chroma_width(true);
        let chroma_padded_height = geometry.chroma_height(true);
        for plane in [&mut planes.u, &mut planes.v] {
            replicate_boundary(
                plane,
                chroma_width,
                chroma_height,
                chroma_padded_width,
                chroma_padded_height,
            );
        }
    }

    #[inline]
    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    #[inline]
    pub fn format(&self) -> FrameFormat {
        self.format
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.geometry.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.geometry.height
    }

    #[inline]
    pub fn padded_width(&self) -> usize {
        self.geometry.padded_width
    }

    #[inline]
    pub fn padded_height(&self) -> usize {
        self.geometry.padded_height
    }

    #[inline]
    pub fn replicates(&self) -> bool {
        self.replicate
    }

    pub fn a_plane(&self) -> Option<&[u16]> {
        if self.format.has_alpha() {
            Some(&self.planes.a)
        } else {
            None
        }
    }

    pub fn y_plane(&self) -> &[u16] {
        &self.planes.y
    }

    pub fn u_plane(&self) -> &[u16] {
        &self.planes.u
    }

    pub fn v_plane(&self) -> &[u16] {
        &self.planes.v
    }

    pub fn a_plane_mut(&mut self) -> Option<&mut [u16]> {
        if self.format.has_alpha() {
            Some(&mut self.planes.a)
        } else {
            None
        }
    }

    pub fn y_plane_mut(&mut self) -> &mut [u16] {
        &mut self.planes.y
    }

    pub fn u_plane_mut(&mut self) -> &mut [u16] {
        &mut self.planes.u
    }

    pub fn v_plane_mut(&mut self) -> &mut [u16] {
        &mut self.planes.v
    }
}
