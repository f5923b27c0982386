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
use crate::YuvError;

/// Rounds real dimensions up to the next multiple of `alignment`.
///
/// Alignment below 2 leaves the dimensions untouched, odd alignment is rejected.
pub fn compute_padded(
    width: usize,
    height: usize,
    alignment: usize,
) -> Result<(usize, usize), YuvError> {
    if alignment < 2 {
        return Ok((width, height));
    }
    if alignment & 1 != 0 {
        return Err(YuvError::InvalidAlignment(alignment));
    }
    let padded_width = width
        .div_ceil(alignment)
        .checked_mul(alignment)
        .ok_or(YuvError::PointerOverflow)?;
    let padded_height = height
        .div_ceil(alignment)
        .checked_mul(alignment)
        .ok_or(YuvError::PointerOverflow)?;
    Ok((padded_width, padded_height))
}

/// Fills the padding region of a row-major plane from its edges.
///
/// Columns `width..padded_width` of every real row take the value of the last
/// real column, rows `height..padded_height` become copies of the last real row.
pub fn replicate_boundary<T: Copy>(
    plane: &mut [T],
    width: usize,
    height: usize,
    padded_width: usize,
    padded_height: usize,
) {
    if width == 0 || height == 0 || padded_width == 0 {
        return;
    }
    debug_assert!(plane.len() >= padded_width * padded_height);

    if padded_width > width {
        for row in plane.chunks_exact_mut(padded_width).take(height) {
            let edge = row[width - 1];
            row[width..].fill(edge);
        }
    }

    if padded_height > height {
        let (real, padding) =
            plane[..padded_width * padded_height].split_at_mut(height * padded_width);
        let last_row = &real[(height - 1) * padded_width..];
        for row in padding.chunks_exact_mut(padded_width) {
            row.copy_from_slice(last_row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_padded() {
        assert_eq!(compute_padded(1918, 1078, 2).unwrap(), (1918, 1078));
        assert_eq!(compute_padded(1920, 1080, 16).unwrap(), (1920, 1088));
        assert_eq!(compute_padded(6, 4, 8).unwrap(), (8, 8));
        assert_eq!(compute_padded(7, 5, 0).unwrap(), (7, 5));
        assert_eq!(compute_padded(7, 5, 1).unwrap(), (7, 5));
    }

    #[test]
    fn test_odd_alignment_is_rejected() {
        match compute_padded(6, 4, 3) {
            Err(YuvError::InvalidAlignment(alignment)) => assert_eq!(alignment, 3),
            other => panic!("Expected invalid alignment, got {:?}", other),
        }
    }

    #[test]
    fn test_replicate_boundary_6x4_align_8() {
        let (width, height) = (6usize, 4usize);
        let (padded_width, padded_height) = compute_padded(width, height, 8).unwrap();
        let mut plane = vec![0u16; padded_width * padded_height];
        for y in 0..height {
            for x in 0..width {
                plane[y * padded_width + x] = (y * width + x) as u16;
            }
        }

        replicate_boundary(&mut plane, width, height, padded_width, padded_height);

        for y in 0..height {
            let edge = (y * width + width - 1) as u16;
            assert_eq!(plane[y * padded_width + 6], edge);
            assert_eq!(plane[y * padded_width + 7], edge);
        }
        let last_row = plane[3 * padded_width..4 * padded_width].to_vec();
        assert_eq!(last_row, vec![18, 19, 20, 21, 22, 23, 23, 23]);
        for y in height..padded_height {
            assert_eq!(&plane[y * padded_width..(y + 1) * padded_width], &last_row[..]);
        }
    }

    #[test]
    fn test_replicate_boundary_without_padding_is_noop() {
        let mut plane: Vec<u8> = (0..12).collect();
        replicate_boundary(&mut plane, 4, 3, 4, 3);
        assert_eq!(plane, (0..12).collect::<Vec<u8>>());
        let mut empty: Vec<u8> = vec![];
        replicate_boundary(&mut empty, 0, 0, 0, 0);
    }
}
