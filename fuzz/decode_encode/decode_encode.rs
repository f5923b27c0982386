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

#![no_main]

use libfuzzer_sys::fuzz_target;
use yuvconv::{Frame, FrameFormat};

fuzz_target!(|data: (u8, u8, u8, u8, bool, Vec<u8>)| {
    let format = FrameFormat::ALL[data.0 as usize % FrameFormat::ALL.len()];
    fuzz_decode_encode(format, data.1, data.2, data.3, data.4, &data.5);
});

fn fuzz_decode_encode(
    format: FrameFormat,
    i_width: u8,
    i_height: u8,
    alignment: u8,
    replicate: bool,
    payload: &[u8],
) {
    if i_width == 0 || i_height == 0 {
        return;
    }
    let Ok(mut frame) = Frame::new(i_width as usize, i_height as usize, format) else {
        return;
    };
    frame.set_padding((alignment & 0x3e) as usize, replicate).unwrap();

    let mut record = vec![0u8; frame.frame_size(false)];
    for (dst, src) in record.iter_mut().zip(payload.iter().cycle()) {
        *dst = *src;
    }
    frame.decode(&record).unwrap();

    let encoded = frame.encode_to_vec();
    assert_eq!(encoded.len(), frame.frame_size(true));

    if frame.padded_width() == frame.width() && frame.padded_height() == frame.height() {
        let mut again = Frame::new(i_width as usize, i_height as usize, format).unwrap();
        again.decode(&encoded).unwrap();
        assert_eq!(again.encode_to_vec(), encoded);
    }
}
