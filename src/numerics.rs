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
#![forbid(unsafe_code)]
use num_traits::AsPrimitive;

#[inline(always)]
/// Moves a sample from one bit depth to another.
///
/// Widening is a plain left shift, narrowing truncates with a right shift,
/// so narrowing followed by widening yields `(value >> shift) << shift`.
pub fn rescale_depth(value: u16, from_bits: u32, to_bits: u32) -> u16 {
    if from_bits > to_bits {
        value >> (from_bits - to_bits)
    } else {
        ((value as u32) << (to_bits - from_bits)) as u16
    }
}

#[inline(always)]
/// Neutral chroma value for the bit depth
pub const fn mid_gray(bit_depth: u32) -> u16 {
    (1u32 << (bit_depth - 1)) as u16
}

/// Storage word of a raw frame: one sample for planar and interleaved layouts,
/// one whole pixel for packed layouts. Stored little endian.
pub(crate) trait PackedWord: Copy + 'static {
    const BYTES: usize;
    const BITS: u32;

    fn read_le(src: &[u8]) -> Self;

    fn write_le(self, dst: &mut [u8]);

    fn widen(self) -> u64;

    /// Truncating conversion, higher bits than the word holds are dropped
    fn narrow(v: u64) -> Self;
}

macro_rules! packed_word {
    ($word:ty) => {
        impl PackedWord for $word {
            const BYTES: usize = std::mem::size_of::<$word>();
            const BITS: u32 = <$word>::BITS;

            #[inline(always)]
            fn read_le(src: &[u8]) -> Self {
                let mut bytes = [0u8; std::mem::size_of::<$word>()];
                bytes.copy_from_slice(&src[..Self::BYTES]);
                <$word>::from_le_bytes(bytes)
            }

            #[inline(always)]
            fn write_le(self, dst: &mut [u8]) {
                dst[..Self::BYTES].copy_from_slice(&self.to_le_bytes());
            }

            #[inline(always)]
            fn widen(self) -> u64 {
                self.as_()
            }

            #[inline(always)]
            fn narrow(v: u64) -> Self {
                v.as_()
            }
        }
    };
}

packed_word!(u8);
packed_word!(u16);
packed_word!(u32);
packed_word!(u64);

#[inline(always)]
/// Extracts `bits` wide field at `offset` of a packed word
pub(crate) const fn get_field(word: u64, offset: u32, bits: u32) -> u16 {
    ((word >> offset) & ((1u64 << bits) - 1)) as u16
}

#[inline(always)]
/// Places the low `bits` of `value` at `offset`, excess bits are masked out
pub(crate) const fn put_field(value: u64, offset: u32, bits: u32) -> u64 {
    (value & ((1u64 << bits) - 1)) << offset
}
