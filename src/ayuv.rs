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
use crate::numerics::{get_field, put_field, PackedWord};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Bit layout of packed 4:4:4 words carrying alpha
pub(crate) enum PackedAlphaLayout {
    /// `V:8 U:8 Y:8 A:8` from the least significant bit
    Ayuv = 0,
    /// `U:10 Y:10 V:10 A:2`
    Y410 = 1,
    /// `U:16 Y:16 V:16 A:16`
    Y416 = 2,
}

impl From<u8> for PackedAlphaLayout {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => PackedAlphaLayout::Ayuv,
            1 => PackedAlphaLayout::Y410,
            2 => PackedAlphaLayout::Y416,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

#[derive(Debug, Copy, Clone)]
struct FieldLayout {
    offset: u32,
    bits: u32,
}

const fn field(offset: u32, bits: u32) -> FieldLayout {
    FieldLayout { offset, bits }
}

impl PackedAlphaLayout {
    /// Fields in A, Y, U, V order
    const fn fields(&self) -> [FieldLayout; 4] {
        match self {
            PackedAlphaLayout::Ayuv => [field(24, 8), field(16, 8), field(8, 8), field(0, 8)],
            PackedAlphaLayout::Y410 => [field(30, 2), field(10, 10), field(0, 10), field(20, 10)],
            PackedAlphaLayout::Y416 => [field(48, 16), field(16, 16), field(0, 16), field(32, 16)],
        }
    }
}

pub(crate) fn ayuv_to_yuv_impl<W: PackedWord, const LAYOUT: u8>(
    geometry: &FrameGeometry,
    planes: &mut FramePlanes,
    src: &[u8],
) {
    let layout: PackedAlphaLayout = LAYOUT.into();
    let [a, y, u, v] = layout.fields();

    let width = geometry.width;
    for (row, src_row) in src
        .chunks_exact(width * W::BYTES)
        .take(geometry.height)
        .enumerate()
    {
        let offset = row * geometry.padded_width;
        for (x, word) in src_row.chunks_exact(W::BYTES).enumerate() {
            let word = W::read_le(word).widen();
            planes.a[offset + x] = get_field(word, a.offset, a.bits);
            planes.y[offset + x] = get_field(word, y.offset, y.bits);
            planes.u[offset + x] = get_field(word, u.offset, u.bits);
            planes.v[offset + x] = get_field(word, v.offset, v.bits);
        }
    }
}

/// Fields narrower than the stored sample keep only its low bits
pub(crate) fn yuv_to_ayuv_impl<W: PackedWord, const LAYOUT: u8>(
    _: &FrameGeometry,
    planes: &FramePlanes,
    dst: &mut [u8],
) {
    let layout: PackedAlphaLayout = LAYOUT.into();
    let [a, y, u, v] = layout.fields();

    for ((((word_dst, &a_value), &y_value), &u_value), &v_value) in dst
        .chunks_exact_mut(W::BYTES)
        .zip(planes.a.iter())
        .zip(planes.y.iter())
        .zip(planes.u.iter())
        .zip(planes.v.iter())
    {
        let word = put_field(a_value as u64, a.offset, a.bits)
            | put_field(y_value as u64, y.offset, y.bits)
            | put_field(u_value as u64, u.offset, u.bits)
            | put_field(v_value as u64, v.offset, v.bits);
        W::narrow(word).write_le(word_dst);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Frame, FrameFormat};

    #[test]
    fn test_ayuv_byte_order() {
        let mut frame = Frame::new(1, 1, FrameFormat::Ayuv).unwrap();
        frame.decode(&[1u8, 2, 3, 4]).unwrap();
        assert_eq!(frame.v_plane(), &[1]);
        assert_eq!(frame.u_plane(), &[2]);
        assert_eq!(frame.y_plane(), &[3]);
        assert_eq!(frame.a_plane().unwrap(), &[4]);
    }

    #[test]
    fn test_y410_fields() {
        let word: u32 = 0x155 | (0x3FF << 10) | (0x0AA << 20) | (0b10 << 30);
        let mut frame = Frame::new(1, 1, FrameFormat::Y410).unwrap();
        frame.decode(&word.to_le_bytes()).unwrap();
        assert_eq!(frame.u_plane(), &[0x155]);
        assert_eq!(frame.y_plane(), &[0x3FF]);
        assert_eq!(frame.v_plane(), &[0x0AA]);
        assert_eq!(frame.a_plane().unwrap(), &[0b10]);
        assert_eq!(frame.encode_to_vec(), word.to_le_bytes());
    }

    #[test]
    fn test_y416_fields() {
        let word: u64 = 0x1111 | (0x2222 << 16) | (0x3333 << 32) | (0x4444 << 48);
        let mut frame = Frame::new(1, 1, FrameFormat::Y416).unwrap();
        frame.decode(&word.to_le_bytes()).unwrap();
        assert_eq!(frame.u_plane(), &[0x1111]);
        assert_eq!(frame.y_plane(), &[0x2222]);
        assert_eq!(frame.v_plane(), &[0x3333]);
        assert_eq!(frame.a_plane().unwrap(), &[0x4444]);
    }

    #[test]
    fn test_y410_alpha_keeps_low_bits() {
        let mut frame = Frame::new(1, 1, FrameFormat::Y410).unwrap();
        frame.a_plane_mut().unwrap()[0] = 0xFF;
        let word = u32::from_le_bytes(frame.encode_to_vec().try_into().unwrap());
        assert_eq!(word >> 30, 0b11);
    }
}
