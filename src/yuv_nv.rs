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
use crate::yuv_planar::{read_plane_rows, write_plane};
use crate::yuv_support::YuvNVOrder;

/// Decodes a luma plane followed by interleaved chroma pairs
pub(crate) fn decode_nv<W: PackedWord, const SHIFT: u32, const UV_ORDER: u8>(
    geometry: &FrameGeometry,
    planes: &mut FramePlanes,
    src: &[u8],
) {
    let order: YuvNVOrder = UV_ORDER.into();

    let (luma_src, uv_src) = src.split_at(geometry.luma_len(false) * W::BYTES);
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
    if chroma_width == 0 || chroma_height == 0 {
        return;
    }

    let u_rows = planes.u.chunks_exact_mut(chroma_stride);
    let v_rows = planes.v.chunks_exact_mut(chroma_stride);
    let uv_rows = uv_src.chunks_exact(2 * chroma_width * W::BYTES);

    for ((u_row, v_row), uv_row) in u_rows.zip(v_rows).zip(uv_rows).take(chroma_height) {
        for ((u_dst, v_dst), pair) in u_row
            .iter_mut()
            .zip(v_row.iter_mut())
            .zip(uv_row.chunks_exact(2 * W::BYTES))
        {
            let u_src = &pair[order.get_u_position() * W::BYTES..];
            let v_src = &pair[order.get_v_position() * W::BYTES..];
            *u_dst = (W::read_le(u_src).widen() >> SHIFT) as u16;
            *v_dst = (W::read_le(v_src).widen() >> SHIFT) as u16;
        }
    }
}

pub(crate) fn encode_nv<W: PackedWord, const SHIFT: u32, const UV_ORDER: u8>(
    _: &FrameGeometry,
    planes: &FramePlanes,
    dst: &mut [u8],
) {
    let order: YuvNVOrder = UV_ORDER.into();

    let (luma_dst, uv_dst) = dst.split_at_mut(planes.y.len() * W::BYTES);
    write_plane::<W, SHIFT>(&planes.y, luma_dst);

    for ((pair, &u), &v) in uv_dst
        .chunks_exact_mut(2 * W::BYTES)
        .zip(planes.u.iter())
        .zip(planes.v.iter())
    {
        W::narrow((u as u64) << SHIFT).write_le(&mut pair[order.get_u_position() * W::BYTES..]);
        W::narrow((v as u64) << SHIFT).write_le(&mut pair[order.get_v_position() * W::BYTES..]);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Frame, FrameFormat};

    #[test]
    fn test_nv12_and_nv21_order() {
        let record: Vec<u8> = vec![0, 1, 2, 3, 4, 5, 6, 7, 100, 200, 101, 201];

        let mut nv12 = Frame::new(4, 2, FrameFormat::Nv12).unwrap();
        nv12.decode(&record).unwrap();
        assert_eq!(nv12.u_plane(), &[100, 101]);
        assert_eq!(nv12.v_plane(), &[200, 201]);

        let mut nv21 = Frame::new(4, 2, FrameFormat::Nv21).unwrap();
        nv21.decode(&record).unwrap();
        assert_eq!(nv21.u_plane(), &[200, 201]);
        assert_eq!(nv21.v_plane(), &[100, 101]);
        assert_eq!(nv21.encode_to_vec(), record);
    }

    #[test]
    fn test_p010_msb_aligned() {
        let mut frame = Frame::new(2, 2, FrameFormat::P010).unwrap();
        let mut record = vec![0u8; frame.frame_size(false)];
        record[0..2].copy_from_slice(&(0x3FFu16 << 6).to_le_bytes());
        record[8..10].copy_from_slice(&(0x200u16 << 6).to_le_bytes());
        record[10..12].copy_from_slice(&(0x1u16 << 6).to_le_bytes());
        frame.decode(&record).unwrap();
        assert_eq!(frame.y_plane()[0], 0x3FF);
        assert_eq!(frame.u_plane(), &[0x200]);
        assert_eq!(frame.v_plane(), &[0x1]);
        assert_eq!(frame.encode_to_vec(), record);
    }

    #[test]
    fn test_nv_with_padding_gap() {
        let mut frame = Frame::new(6, 2, FrameFormat::Nv16).unwrap();
        frame.set_padding(4, false).unwrap();
        let mut record = vec![0u8; frame.frame_size(false)];
        for (i, v) in record[12..].iter_mut().enumerate() {
            *v = i as u8 + 1;
        }
        frame.decode(&record).unwrap();
        // 3 real chroma columns inside a stride of 4
        assert_eq!(frame.u_plane(), &[1, 3, 5, 128, 7, 9, 11, 128, 128, 128, 128, 128, 128, 128, 128, 128]);
        assert_eq!(&frame.v_plane()[..4], &[2, 4, 6, 128]);
    }
}
