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
use crate::numerics::{put_field, PackedWord};
use crate::yuv_support::Yuy2Description;

/// Encodes packed 4:2:2 over the whole padded plane, U on even columns, V on odd ones
pub(crate) fn yuv_to_yuy2_impl<W: PackedWord, const SHIFT: u32, const YUY2_TARGET: usize>(
    geometry: &FrameGeometry,
    planes: &FramePlanes,
    dst: &mut [u8],
) {
    let yuy2_target: Yuy2Description = YUY2_TARGET.into();
    let half = W::BITS / 2;
    let y_offset = yuy2_target.get_y_position() * half;
    let chroma_offset = yuy2_target.get_chroma_position() * half;

    let padded_width = geometry.padded_width;
    let chroma_stride = geometry.chroma_width(true);

    for (y, (y_row, dst_row)) in planes
        .y
        .chunks_exact(padded_width)
        .zip(dst.chunks_exact_mut(padded_width * W::BYTES))
        .enumerate()
    {
        for (x, (&luma, word_dst)) in y_row
            .iter()
            .zip(dst_row.chunks_exact_mut(W::BYTES))
            .enumerate()
        {
            let mut word = put_field((luma as u64) << SHIFT, y_offset, half);
            if chroma_stride != 0 {
                let chroma_pos = y * chroma_stride + x / 2;
                let chroma = if x & 1 == 0 {
                    planes.u[chroma_pos]
                } else {
                    planes.v[chroma_pos]
                };
                word |= put_field((chroma as u64) << SHIFT, chroma_offset, half);
            }
            W::narrow(word).write_le(word_dst);
        }
    }
}
