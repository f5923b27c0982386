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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use yuvconv::{convert_stream, Frame, FrameFormat, StreamOptions};

const WIDTH: usize = 1920;
const HEIGHT: usize = 1080;

fn random_record(format: FrameFormat) -> Vec<u8> {
    let frame = Frame::new(WIDTH, HEIGHT, format).unwrap();
    let mut record = vec![0u8; frame.frame_size(false)];
    rand::rng().fill(&mut record[..]);
    record
}

pub fn criterion_benchmark(c: &mut Criterion) {
    for format in [FrameFormat::Nv12, FrameFormat::P010, FrameFormat::Yuyv, FrameFormat::Y410] {
        let record = random_record(format);
        c.bench_function(&format!("decode {} 1080p", format), |b| {
            let mut frame = Frame::new(WIDTH, HEIGHT, format).unwrap();
            b.iter(|| frame.decode(&record).unwrap());
        });
        c.bench_function(&format!("encode {} 1080p", format), |b| {
            let mut frame = Frame::new(WIDTH, HEIGHT, format).unwrap();
            frame.decode(&record).unwrap();
            let mut dst = vec![0u8; frame.frame_size(true)];
            b.iter(|| frame.encode(&mut dst).unwrap());
        });
    }

    let pairs = [
        (FrameFormat::Y410, FrameFormat::Nv12),
        (FrameFormat::Nv12, FrameFormat::Y416),
        (FrameFormat::Yuyv, FrameFormat::I420),
        (FrameFormat::I440, FrameFormat::P210),
    ];
    for (from, to) in pairs {
        let mut source = Frame::new(WIDTH, HEIGHT, from).unwrap();
        source.decode(&random_record(from)).unwrap();
        c.bench_function(&format!("convert {} -> {} 1080p", from, to), |b| {
            let mut target = Frame::new(WIDTH, HEIGHT, to).unwrap();
            b.iter(|| target.convert_from(&source).unwrap());
        });
    }

    let mut stream = Vec::new();
    for _ in 0..8 {
        stream.extend_from_slice(&random_record(FrameFormat::P010));
    }
    for batch_size in [1usize, 4, 8] {
        c.bench_function(&format!("stream P010 -> NV12 8 frames, batch {}", batch_size), |b| {
            let mut options = StreamOptions::new(WIDTH, HEIGHT, FrameFormat::P010, FrameFormat::Nv12);
            options.batch_size = batch_size;
            let mut output = Vec::with_capacity(8 * WIDTH * HEIGHT * 3 / 2);
            b.iter(|| {
                output.clear();
                convert_stream(&mut &stream[..], &mut output, &options).unwrap()
            });
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
