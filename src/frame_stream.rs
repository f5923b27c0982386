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
use crate::frame::Frame;
use crate::pixel_format::FrameFormat;
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};
use std::io::{self, Read, Write};
use tracing::{debug, info, trace};

/// Inclusive range of frame indices to convert
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameRange {
    pub first: usize,
    /// `None` runs until the input is exhausted
    pub last: Option<usize>,
}

impl Default for FrameRange {
    fn default() -> Self {
        FrameRange::ALL
    }
}

impl FrameRange {
    pub const ALL: FrameRange = FrameRange {
        first: 0,
        last: None,
    };

    /// Builds a range from a first index, a last index and a frame count.
    ///
    /// `end` and `count` are mutually exclusive, `count` must not be zero
    /// and `begin` must not exceed `end`.
    pub fn from_selectors(
        begin: Option<usize>,
        end: Option<usize>,
        count: Option<usize>,
    ) -> Result<FrameRange, YuvError> {
        let first = begin.unwrap_or(0);
        let last = match (end, count) {
            (Some(_), Some(_)) => return Err(YuvError::InvalidFrameRange),
            (_, Some(0)) => return Err(YuvError::InvalidFrameRange),
            (Some(end), None) => {
                if first > end {
                    return Err(YuvError::InvalidFrameRange);
                }
                Some(end)
            }
            (None, Some(count)) => Some(
                first
                    .checked_add(count - 1)
                    .ok_or(YuvError::InvalidFrameRange)?,
            ),
            (None, None) => None,
        };
        Ok(FrameRange { first, last })
    }

    /// Number of frames selected, `None` when unbounded
    pub fn len(&self) -> Option<usize> {
        self.last
            .map(|last| last.checked_sub(self.first).map_or(0, |span| span + 1))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

/// Everything the batch driver needs to know about one conversion run
#[derive(Debug, Clone)]
pub struct StreamOptions {
    pub width: usize,
    pub height: usize,
    pub input_format: FrameFormat,
    pub output_format: FrameFormat,
    /// Dimension alignment, values below 2 disable padding
    pub alignment: usize,
    /// Fill padding from the last real row and column
    pub replicate: bool,
    pub range: FrameRange,
    /// Frames converted concurrently per read/write block
    pub batch_size: usize,
    /// Reports padding at `info` instead of `debug`
    pub verbose: bool,
}

impl StreamOptions {
    pub fn new(
        width: usize,
        height: usize,
        input_format: FrameFormat,
        output_format: FrameFormat,
    ) -> StreamOptions {
        StreamOptions {
            width,
            height,
            input_format,
            output_format,
            alignment: 2,
            replicate: false,
            range: FrameRange::ALL,
            batch_size: default_batch_size(),
            verbose: false,
        }
    }
}

fn default_batch_size() -> usize {
    #[cfg(feature = "rayon")]
    {
        rayon::current_num_threads().max(1)
    }
    #[cfg(not(feature = "rayon"))]
    {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

/// One decode, convert and encode unit; a batch owns one per in-flight frame
#[derive(Debug, Clone)]
pub struct FramePipeline {
    input: Frame,
    output: Frame,
}

impl FramePipeline {
    pub fn new(options: &StreamOptions) -> Result<FramePipeline, YuvError> {
        let mut input = Frame::new(options.width, options.height, options.input_format)?;
        let mut output = Frame::new(options.width, options.height, options.output_format)?;
        input.set_padding(options.alignment, options.replicate)?;
        output.set_padding(options.alignment, options.replicate)?;
        Ok(FramePipeline { input, output })
    }

    /// Bytes of one unpadded input record
    pub fn input_frame_size(&self) -> usize {
        self.input.frame_size(false)
    }

    /// Bytes of one padded output record
    pub fn output_frame_size(&self) -> usize {
        self.output.frame_size(true)
    }

    pub fn process(&mut self, src: &[u8], dst: &mut [u8]) -> Result<(), YuvError> {
        self.input.decode(src)?;
        self.output.convert_from(&self.input)?;
        self.output.encode(dst)
    }

    pub fn input(&self) -> &Frame {
        &self.input
    }

    pub fn output(&self) -> &Frame {
        &self.output
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StreamSummary {
    /// Frames written to the output
    pub frames: usize,
    pub input_frame_size: usize,
    pub output_frame_size: usize,
}

/// Fills `buf` as far as the reader allows, short only at end of stream
fn read_block<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, YuvError> {
    let mut filled = 0usize;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

fn describe_padding(options: &StreamOptions, pipeline: &FramePipeline) {
    let frame = pipeline.input();
    let mode = if frame.replicates() {
        "boundary replication"
    } else {
        "default fill"
    };
    if options.verbose {
        info!(
            "{} -> {}: {} padding aligned to {}, original {}x{}, padded {}x{}",
            options.input_format,
            options.output_format,
            mode,
            options.alignment,
            frame.width(),
            frame.height(),
            frame.padded_width(),
            frame.padded_height()
        );
    } else {
        debug!(
            "{} -> {}: {} padding aligned to {}, original {}x{}, padded {}x{}",
            options.input_format,
            options.output_format,
            mode,
            options.alignment,
            frame.width(),
            frame.height(),
            frame.padded_width(),
            frame.padded_height()
        );
    }
}

fn convert_batch(
    pipelines: &mut [FramePipeline],
    src: &[u8],
    dst: &mut [u8],
    input_frame_size: usize,
    output_frame_size: usize,
) -> Result<(), YuvError> {
    #[cfg(feature = "rayon")]
    {
        pipelines
            .par_iter_mut()
            .zip(src.par_chunks_exact(input_frame_size))
            .zip(dst.par_chunks_exact_mut(output_frame_size))
            .try_for_each(|((pipeline, src), dst)| pipeline.process(src, dst))
    }
    #[cfg(not(feature = "rayon"))]
    {
        pipelines
            .iter_mut()
            .zip(src.chunks_exact(input_frame_size))
            .zip(dst.chunks_exact_mut(output_frame_size))
            .try_for_each(|((pipeline, src), dst)| pipeline.process(src, dst))
    }
}

/// Converts a raw stream of `input_format` frames into `output_format` frames.
///
/// Input records are unpadded, output records carry the padded geometry. Frames
/// are read in blocks of `batch_size`, converted concurrently and written back as
/// one block once every frame of the block has finished, so output order always
/// follows input order. A trailing partial record ends the stream. When any frame
/// of a block fails nothing of that block is written.
pub fn convert_stream<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    options: &StreamOptions,
) -> Result<StreamSummary, YuvError> {
    let batch_size = options.batch_size.max(1);
    let mut pipelines = (0..batch_size)
        .map(|_| FramePipeline::new(options))
        .collect::<Result<Vec<_>, _>>()?;

    let input_frame_size = pipelines[0].input_frame_size();
    let output_frame_size = pipelines[0].output_frame_size();
    describe_padding(options, &pipelines[0]);

    let mut summary = StreamSummary {
        frames: 0,
        input_frame_size,
        output_frame_size,
    };

    let first = options.range.first;
    if first > 0 {
        let skip = (first as u64).saturating_mul(input_frame_size as u64);
        let skipped = io::copy(&mut reader.by_ref().take(skip), &mut io::sink())?;
        if skipped < skip {
            debug!("Input ended after {} of {} skipped bytes", skipped, skip);
            return Ok(summary);
        }
    }

    let mut remaining = options.range.len();
    let mut src = vec![0u8; batch_size * input_frame_size];
    let mut dst = vec![0u8; batch_size * output_frame_size];

    loop {
        let wanted = remaining.map_or(batch_size, |r| r.min(batch_size));
        if wanted == 0 {
            break;
        }
        let requested = wanted * input_frame_size;
        let read = read_block(reader, &mut src[..requested])?;
        let frames = read / input_frame_size;
        if frames == 0 {
            break;
        }

        convert_batch(
            &mut pipelines[..frames],
            &src[..frames * input_frame_size],
            &mut dst[..frames * output_frame_size],
            input_frame_size,
            output_frame_size,
        )?;
        writer.write_all(&dst[..frames * output_frame_size])?;

        trace!(
            "Converted frames {}..{}",
            first + summary.frames,
            first + summary.frames + frames
        );
        summary.frames += frames;
        if let Some(r) = remaining.as_mut() {
            *r -= frames;
        }
        if read < requested {
            break;
        }
    }

    writer.flush()?;
    debug!("Converted {} frames", summary.frames);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use sha2::{Digest, Sha256};

    fn random_stream(options: &StreamOptions, frames: usize) -> Vec<u8> {
        let size = FramePipeline::new(options).unwrap().input_frame_size();
        let mut data = vec![0u8; size * frames];
        rand::rng().fill(&mut data[..]);
        data
    }

    fn run(options: &StreamOptions, input: &[u8]) -> (StreamSummary, Vec<u8>) {
        let mut output = Vec::new();
        let summary = convert_stream(&mut &input[..], &mut output, options).unwrap();
        (summary, output)
    }

    /// Pixel words of a deterministic Y410 picture
    fn y410_pattern(width: usize, height: usize) -> Vec<u8> {
        (0..width * height)
            .flat_map(|i| {
                (i as u32)
                    .wrapping_mul(2654435761)
                    .wrapping_add(12345)
                    .to_le_bytes()
            })
            .collect()
    }

    fn hex_digest(data: &[u8]) -> String {
        Sha256::digest(data)
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }

    #[test]
    fn test_frame_range_selectors() {
        assert_eq!(
            FrameRange::from_selectors(None, None, None).unwrap(),
            FrameRange::ALL
        );
        let range = FrameRange::from_selectors(Some(3), None, Some(2)).unwrap();
        assert_eq!(range, FrameRange { first: 3, last: Some(4) });
        assert_eq!(range.len(), Some(2));
        let range = FrameRange::from_selectors(Some(2), Some(2), None).unwrap();
        assert_eq!(range.len(), Some(1));
        assert!(FrameRange::from_selectors(None, None, Some(0)).is_err());
        assert!(FrameRange::from_selectors(Some(5), Some(4), None).is_err());
        assert!(FrameRange::from_selectors(None, Some(4), Some(1)).is_err());
    }

    #[test]
    fn test_batches_keep_input_order() {
        let mut options = StreamOptions::new(24, 16, FrameFormat::I420, FrameFormat::Y416);
        let input = random_stream(&options, 10);

        options.batch_size = 1;
        let (sequential_summary, sequential) = run(&options, &input);
        options.batch_size = 4;
        let (batched_summary, batched) = run(&options, &input);

        assert_eq!(sequential_summary.frames, 10);
        assert_eq!(batched_summary, sequential_summary);
        assert_eq!(batched, sequential);

        let mut pipeline = FramePipeline::new(&options).unwrap();
        let out_size = pipeline.output_frame_size();
        let in_size = pipeline.input_frame_size();
        let mut frame = vec![0u8; out_size];
        for (i, expected) in batched.chunks_exact(out_size).enumerate() {
            pipeline
                .process(&input[i * in_size..(i + 1) * in_size], &mut frame)
                .unwrap();
            assert_eq!(frame, expected, "frame {}", i);
        }
    }

    #[test]
    fn test_partial_trailing_frame_ends_stream() {
        let mut options = StreamOptions::new(8, 8, FrameFormat::Nv12, FrameFormat::I444);
        options.batch_size = 2;
        let mut input = random_stream(&options, 4);
        input.truncate(input.len() - 10);
        let (summary, output) = run(&options, &input);
        assert_eq!(summary.frames, 3);
        assert_eq!(output.len(), 3 * summary.output_frame_size);
    }

    #[test]
    fn test_frame_range_selects_frames() {
        let mut options = StreamOptions::new(8, 4, FrameFormat::Yuyv, FrameFormat::Nv16);
        options.batch_size = 3;
        let input = random_stream(&options, 10);
        let (_, all) = run(&options, &input);

        options.range = FrameRange::from_selectors(Some(2), None, Some(5)).unwrap();
        let (summary, selected) = run(&options, &input);
        let size = summary.output_frame_size;
        assert_eq!(summary.frames, 5);
        assert_eq!(selected, all[2 * size..7 * size]);

        options.range = FrameRange::from_selectors(Some(8), Some(20), None).unwrap();
        let (summary, tail) = run(&options, &input);
        assert_eq!(summary.frames, 2);
        assert_eq!(tail, all[8 * size..]);

        options.range = FrameRange::from_selectors(Some(12), None, None).unwrap();
        let (summary, nothing) = run(&options, &input);
        assert_eq!(summary.frames, 0);
        assert!(nothing.is_empty());
    }

    #[test]
    fn test_output_is_padded() {
        let mut options = StreamOptions::new(30, 14, FrameFormat::I420, FrameFormat::I420);
        options.alignment = 16;
        options.replicate = true;
        let input = random_stream(&options, 2);
        let (summary, output) = run(&options, &input);
        assert_eq!(summary.input_frame_size, 30 * 14 + 2 * 15 * 7);
        assert_eq!(summary.output_frame_size, 32 * 16 + 2 * 16 * 8);
        assert_eq!(output.len(), 2 * summary.output_frame_size);
        // Replicated column of the first luma row
        assert_eq!(output[30], input[29]);
        assert_eq!(output[31], input[29]);
    }

    #[test]
    fn test_odd_alignment_rejected() {
        let mut options = StreamOptions::new(8, 8, FrameFormat::I420, FrameFormat::I420);
        options.alignment = 3;
        let mut output = Vec::new();
        let result = convert_stream(&mut &[0u8; 0][..], &mut output, &options);
        assert!(matches!(result, Err(YuvError::InvalidAlignment(3))));
    }

    /// Serves `data` then fails once `fail_after` bytes were handed out
    struct FailingReader {
        data: Vec<u8>,
        position: usize,
        fail_after: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.position >= self.fail_after {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "device gone"));
            }
            let end = self.fail_after.min(self.data.len()).min(self.position + buf.len());
            let n = end - self.position;
            buf[..n].copy_from_slice(&self.data[self.position..end]);
            self.position = end;
            Ok(n)
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_read_failure_drops_pending_batch() {
        let mut options = StreamOptions::new(8, 8, FrameFormat::I420, FrameFormat::Nv12);
        options.batch_size = 2;
        let input = random_stream(&options, 4);
        let (_, expected) = run(&options, &input);
        let frame_size = FramePipeline::new(&options).unwrap().input_frame_size();

        let mut reader = FailingReader {
            data: input,
            position: 0,
            fail_after: 3 * frame_size,
        };
        let mut output = Vec::new();
        let result = convert_stream(&mut reader, &mut output, &options);
        assert!(matches!(result, Err(YuvError::Io(_))));
        // Only the first complete batch reached the writer
        let output_size = expected.len() / 4;
        assert_eq!(output.len(), 2 * output_size);
        assert_eq!(output, expected[..2 * output_size]);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let options = StreamOptions::new(8, 8, FrameFormat::Nv12, FrameFormat::I444);
        let input = random_stream(&options, 2);
        let result = convert_stream(&mut &input[..], &mut FailingWriter, &options);
        match result {
            Err(YuvError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::Other),
            other => panic!("Expected I/O failure, got {:?}", other),
        }
    }

    #[test]
    fn test_y410_identity_digest() {
        let input = y410_pattern(1920, 1080);
        let input_digest = hex_digest(&input);
        assert_eq!(
            input_digest,
            "0d6088646757871fc8b75ecd40f7879381fa98cce64e00b576a84a0f8aa67b53"
        );

        let options = StreamOptions::new(1920, 1080, FrameFormat::Y410, FrameFormat::Y410);
        let (summary, output) = run(&options, &input);
        assert_eq!(summary.frames, 1);
        assert_eq!(hex_digest(&output), input_digest);
    }

    #[test]
    fn test_y410_to_nv12_digest() {
        let input = y410_pattern(1920, 1080);
        let mut options = StreamOptions::new(1920, 1080, FrameFormat::Y410, FrameFormat::Nv12);
        options.batch_size = 1;
        let (summary, output) = run(&options, &input);
        assert_eq!(summary.frames, 1);
        assert_eq!(output.len(), 1920 * 1080 * 3 / 2);
        assert_eq!(
            hex_digest(&output),
            "685682b3fb7faf2f816de5ea722fa692ae30ba39218fda60888621f5af8969a5"
        );
    }
}
