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
use crate::frame::{Frame, FrameGeometry};
use crate::numerics::{mid_gray, rescale_depth};
use crate::yuv_support::YuvChromaSubsampling;
use crate::YuvError;

/// How chroma samples move between two samplings.
///
/// `x` and `y` are the horizontal and vertical ratios, either 1 or 2.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ChromaRule {
    /// Every source sample is repeated over an `x` by `y` block
    Duplicate { x: usize, y: usize },
    /// Every destination sample is the truncated mean of an `x` by `y` block
    Average { x: usize, y: usize },
    /// 4:2:2 into 4:4:0, source row parity picks the destination column
    InterleaveRows,
    /// 4:4:0 into 4:2:2, source column parity picks the destination row
    DeinterleaveColumns,
}

impl ChromaRule {
    pub(crate) const fn for_pair(
        source: YuvChromaSubsampling,
        target: YuvChromaSubsampling,
    ) -> Option<ChromaRule> {
        use YuvChromaSubsampling::*;
        match (source, target) {
            (Yuv420, Yuv422) => Some(ChromaRule::Duplicate { x: 1, y: 2 }),
            (Yuv420, Yuv440) => Some(ChromaRule::Duplicate { x: 2, y: 1 }),
            (Yuv420, Yuv444) => Some(ChromaRule::Duplicate { x: 2, y: 2 }),
            (Yuv422, Yuv420) => Some(ChromaRule::Average { x: 1, y: 2 }),
            (Yuv422, Yuv440) => Some(ChromaRule::InterleaveRows),
            (Yuv422, Yuv444) => Some(ChromaRule::Duplicate { x: 2, y: 1 }),
            (Yuv440, Yuv420) => Some(ChromaRule::Average { x: 2, y: 1 }),
            (Yuv440, Yuv422) => Some(ChromaRule::DeinterleaveColumns),
            (Yuv440, Yuv444) => Some(ChromaRule::Duplicate { x: 1, y: 2 }),
            (Yuv444, Yuv420) => Some(ChromaRule::Average { x: 2, y: 2 }),
            (Yuv444, Yuv422) => Some(ChromaRule::Average { x: 2, y: 1 }),
            (Yuv444, Yuv440) => Some(ChromaRule::Average { x: 1, y: 2 }),
            _ => None,
        }
    }
}

/// Padded chroma extent of a plane
#[derive(Debug, Copy, Clone)]
struct ChromaExtent {
    width: usize,
    height: usize,
}

impl ChromaExtent {
    const fn of(geometry: &FrameGeometry) -> ChromaExtent {
        ChromaExtent {
            width: geometry.chroma_width(true),
            height: geometry.chroma_height(true),
        }
    }
}

fn duplicate_chroma(
    src: &[u16],
    src_extent: ChromaExtent,
    dst: &mut [u16],
    dst_extent: ChromaExtent,
    x_ratio: usize,
    y_ratio: usize,
    rescale: impl Fn(u16) -> u16,
) {
    for row in 0..src_extent.height {
        let src_row = &src[row * src_extent.width..(row + 1) * src_extent.width];
        for dy in 0..y_ratio {
            let dst_y = row * y_ratio + dy;
            if dst_y >= dst_extent.height {
                break;
            }
            let dst_row = &mut dst[dst_y * dst_extent.width..(dst_y + 1) * dst_extent.width];
            for (x, &value) in src_row.iter().enumerate() {
                let value = rescale(value);
                for dx in 0..x_ratio {
                    if let Some(dst) = dst_row.get_mut(x * x_ratio + dx) {
                        *dst = value;
                    }
                }
            }
        }
    }
}

fn average_chroma(
    src: &[u16],
    src_extent: ChromaExtent,
    dst: &mut [u16],
    dst_extent: ChromaExtent,
    x_ratio: usize,
    y_ratio: usize,
    rescale: impl Fn(u16) -> u16,
) {
    let count = (x_ratio * y_ratio) as u32;
    let rows = dst_extent.height.min(src_extent.height / y_ratio);
    let columns = dst_extent.width.min(src_extent.width / x_ratio);
    for y in 0..rows {
        let dst_row = &mut dst[y * dst_extent.width..(y + 1) * dst_extent.width];
        for (x, dst) in dst_row.iter_mut().take(columns).enumerate() {
            let mut sum = 0u32;
            for dy in 0..y_ratio {
                let src_row = (y * y_ratio + dy) * src_extent.width;
                for dx in 0..x_ratio {
                    sum += rescale(src[src_row + x * x_ratio + dx]) as u32;
                }
            }
            *dst = (sum / count) as u16;
        }
    }
}

fn interleave_rows(
    src: &[u16],
    src_extent: ChromaExtent,
    dst: &mut [u16],
    dst_extent: ChromaExtent,
    rescale: impl Fn(u16) -> u16,
) {
    for (y, src_row) in src.chunks_exact(src_extent.width).enumerate() {
        let dst_y = y / 2;
        if dst_y >= dst_extent.height {
            break;
        }
        for (x, &value) in src_row.iter().enumerate() {
            let dst_x = 2 * x + (y & 1);
            if dst_x < dst_extent.width {
                dst[dst_y * dst_extent.width + dst_x] = rescale(value);
            }
        }
    }
}

fn deinterleave_columns(
    src: &[u16],
    src_extent: ChromaExtent,
    dst: &mut [u16],
    dst_extent: ChromaExtent,
    rescale: impl Fn(u16) -> u16,
) {
    for (y, src_row) in src.chunks_exact(src_extent.width).enumerate() {
        for (x, &value) in src_row.iter().enumerate() {
            let dst_y = 2 * y + (x & 1);
            let dst_x = x / 2;
            if dst_y < dst_extent.height && dst_x < dst_extent.width {
                dst[dst_y * dst_extent.width + dst_x] = rescale(value);
            }
        }
    }
}

fn resample_plane(
    rule: ChromaRule,
    src: &[u16],
    src_extent: ChromaExtent,
    dst: &mut [u16],
    dst_extent: ChromaExtent,
    rescale: impl Fn(u16) -> u16,
) {
    if src_extent.width == 0 || dst_extent.width == 0 {
        return;
    }
    match rule {
        ChromaRule::Duplicate { x, y } => {
            duplicate_chroma(src, src_extent, dst, dst_extent, x, y, rescale)
        }
        ChromaRule::Average { x, y } => {
            average_chroma(src, src_extent, dst, dst_extent, x, y, rescale)
        }
        ChromaRule::InterleaveRows => interleave_rows(src, src_extent, dst, dst_extent, rescale),
        ChromaRule::DeinterleaveColumns => {
            deinterleave_columns(src, src_extent, dst, dst_extent, rescale)
        }
    }
}

impl Frame {
    /// Populates this frame from `source` converting chroma sampling and bit depth.
    ///
    /// Alpha is copied as is when both frames carry it, zeroed when only this frame
    /// does. Luma and chroma are rescaled to this frame's depth, chroma is resampled
    /// to this frame's sampling. Frames must share real and padded dimensions,
    /// otherwise nothing is touched and [YuvError::IncompatibleFrames] is returned.
    pub fn convert_from(&mut self, source: &Frame) -> Result<(), YuvError> {
        if !self.geometry.is_compatible(&source.geometry) {
            return Err(YuvError::IncompatibleFrames);
        }

        let from_bits = source.format.bit_depth();
        let to_bits = self.format.bit_depth();
        let rescale = |v: u16| rescale_depth(v, from_bits, to_bits);

        let planes = &mut self.planes;
        planes.a.clear();
        if self.format.has_alpha() {
            if source.format.has_alpha() {
                planes.a.extend_from_slice(&source.planes.a);
            } else {
                planes.a.resize(source.planes.y.len(), 0);
            }
        }

        planes.y.clear();
        planes.y.extend(source.planes.y.iter().map(|&v| rescale(v)));

        let chroma_len = self.geometry.chroma_len(true);
        let neutral = mid_gray(to_bits);
        planes.u.clear();
        planes.u.resize(chroma_len, neutral);
        planes.v.clear();
        planes.v.resize(chroma_len, neutral);

        let source_sampling = source.geometry.subsampling;
        let target_sampling = self.geometry.subsampling;
        if !source_sampling.has_chroma() || !target_sampling.has_chroma() {
            return Ok(());
        }

        if source_sampling == target_sampling {
            for (dst, &src) in planes.u.iter_mut().zip(source.planes.u.iter()) {
                *dst = rescale(src);
            }
            for (dst, &src) in planes.v.iter_mut().zip(source.planes.v.iter()) {
                *dst = rescale(src);
            }
            return Ok(());
        }

        let Some(rule) = ChromaRule::for_pair(source_sampling, target_sampling) else {
            return Ok(());
        };
        let src_extent = ChromaExtent::of(&source.geometry);
        let dst_extent = ChromaExtent::of(&self.geometry);
        resample_plane(
            rule,
            &source.planes.u,
            src_extent,
            &mut planes.u,
            dst_extent,
            rescale,
        );
        resample_plane(
            rule,
            &source.planes.v,
            src_extent,
            &mut planes.v,
            dst_extent,
            rescale,
        );
        Ok(())
    }
}
