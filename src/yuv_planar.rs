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
use crate::frame::{FrameGeometry, FramePlanes};
use crate::numerics::PackedWord;

/// Reads `height` tightly packed rows of `width` words into a plane of `dst_stride` samples per row
#[inline]
pub(crate) fn read_plane_rows<W: PackedWord, const SHIFT: u32>(
    dst: &mut [u16],
    dst_stride: usize,
    width: usize,
    height: usize,
    src: &[u8],
) {
    if width == 0 || height == 0 {
        return;
    }
    for (dst_row, src_row) in dst
        .chunks_exact_mut(dst_stride)
        .zip(src.chunks_exact(width * W::BYTES))
        .take(height)
    {
        for (dst, src) in dst_row.iter_mut().zip(src_row.chunks_exact(W::BYTES)) {
            *dst = (W::read_le(src).widen() >> SHIFT) as u16;
        }
    }
}

/// Writes a whole plane contiguously
#[inline]
pub(crate) fn write_plane<W: PackedWord, const SHIFT: u32>(src: &[u16], dst: &mut [u8]) {
    for (dst, &v) in dst.chunks_exact_mut(W::BYTES).zip(src.iter()) {
        W::narrow((v as u64) << SHIFT).write_le(dst);
    }
}

/// Decodes Y, U and V planes stored one after another
pub(crate) fn decode_planar<W: PackedWord, const SHIFT: u32>(
    geometry: &FrameGeometry,
    planes: &mut FramePlanes,
    src: &[u8],
) {
    let (luma_src, chroma_src) = src.split_at(geometry.luma_len(false) * W::BYTES);
    read_plane_rows::<W, SHIFT>(
        &mut planes.y,
        geometry.padded_width,
        geometry.width,
        geometry.height,
        luma_src,
    );

    let chroma_width = geometry.chroma_width(false);
    let chroma_height = geometry.chroma_height(false);
    let chroma_stride = geometry.chroma_width(true);
    let (u_src, v_src) = chroma_src.split_at(chroma_width * chroma_height * W::BYTES);
    read_plane_rows::<W, SHIFT>(
        &mut planes.u,
        chroma_stride,
        chroma_width,
        chroma_height,
        u_src,
    );
    read_plane_rows::<W, SHIFT>(
        &mut planes.v,
        chroma_stride,
        chroma_width,
        chroma_height,
        v_src,
    );
}

pub(crate) fn encode_planar<W: PackedWord, const SHIFT: u32>(
    _: &FrameGeometry,
    planes: &FramePlanes,
    dst: &mut [u8],
) {
    let (luma_dst, chroma_dst) = dst.split_at_mut(planes.y.len() * W::BYTES);
    write_plane::<W, SHIFT>(&planes.y, luma_dst);
    let (u_dst, v_dst) = chroma_dst.split_at_mut(planes.u.len() * W::BYTES);
    write_plane::<W, SHIFT>(&planes.u, u_dst);
    write_plane::<W, SHIFT>(&planes.v, v_dst);
}
