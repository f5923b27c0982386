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
use crate::numerics::{get_field, PackedWord};
use crate::yuv_support::Yuy2Description;

/// Decodes packed 4:2:2, one word per pixel holding luma and one chroma sample.
///
/// Chroma of even columns is U, of odd columns V, so a pair of words carries
/// one full chroma sample.
pub(crate) fn yuy2_to_yuv_impl<W: PackedWord, const SHIFT: u32, const YUY2_TARGET: usize>(
    geometry: &FrameGeometry,
    planes: &mut FramePlanes,
    src: &[u8],
) {
    let yuy2_target: Yuy2Description = YUY2_TARGET.into();
    let half = W::BITS / 2;
    let y_offset = yuy2_target.get_y_position() * half;
    let chroma_offset = yuy2_target.get_chroma_position() * half;

    let width = geometry.width;
    let chroma_stride = geometry.chroma_width(true);

    for (y, src_row) in src
        .chunks_exact(width * W::BYTES)
        .take(geometry.height)
        .enumerate()
    {
        let y_row = &mut planes.y[y * geometry.padded_width..][..width];
        for (x, (y_dst, word)) in y_row
            .iter_mut()
            .zip(src_row.chunks_exact(W::BYTES))
            .enumerate()
        {
            let word = W::read_le(word).widen();
            *y_dst = get_field(word, y_offset, half) >> SHIFT;

            if chroma_stride == 0 {
                continue;
            }
            let chroma = get_field(word, chroma_offset, half) >> SHIFT;
            let chroma_pos = y * chroma_stride + x / 2;
            if x & 1 == 0 {
                planes.u[chroma_pos] = chroma;
            } else {
                planes.v[chroma_pos] = chroma;
            }
        }
    }
}
