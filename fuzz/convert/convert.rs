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

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use yuvconv::{convert_stream, Frame, FrameFormat, StreamOptions};

#[derive(Arbitrary, Debug)]
struct ConvertCase {
    from: u8,
    to: u8,
    width: u8,
    height: u8,
    alignment: u8,
    replicate: bool,
    batch_size: u8,
    payload: Vec<u8>,
}

fuzz_target!(|case: ConvertCase| {
    fuzz_convert(case);
});

fn fuzz_convert(case: ConvertCase) {
    if case.width == 0 || case.height == 0 {
        return;
    }
    let from = FrameFormat::ALL[case.from as usize % FrameFormat::ALL.len()];
    let to = FrameFormat::ALL[case.to as usize % FrameFormat::ALL.len()];
    let width = case.width as usize;
    let height = case.height as usize;
    let alignment = (case.alignment & 0x1e) as usize;

    let (Ok(mut source), Ok(mut target)) = (
        Frame::new(width, height, from),
        Frame::new(width, height, to),
    ) else {
        return;
    };
    source.set_padding(alignment, case.replicate).unwrap();
    target.set_padding(alignment, case.replicate).unwrap();

    let mut record = vec![0u8; source.frame_size(false)];
    for (dst, src) in record.iter_mut().zip(case.payload.iter().cycle()) {
        *dst = *src;
    }
    source.decode(&record).unwrap();
    target.convert_from(&source).unwrap();
    let single = target.encode_to_vec();

    let mut options = StreamOptions::new(width, height, from, to);
    options.alignment = alignment;
    options.replicate = case.replicate;
    options.batch_size = (case.batch_size % 4) as usize + 1;

    let mut stream = record.clone();
    stream.extend_from_slice(&record);
    let mut output = Vec::new();
    let summary = convert_stream(&mut &stream[..], &mut output, &options).unwrap();
    assert_eq!(summary.frames, 2);
    assert_eq!(&output[..single.len()], &single[..]);
    assert_eq!(&output[single.len()..], &single[..]);
}
