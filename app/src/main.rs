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
use anyhow::Context;
use clap::Parser;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use yuvconv::{convert_stream, FrameFormat, FramePipeline, FrameRange, StreamOptions};

#[derive(Parser, Debug)]
#[command(name = "yuvconv")]
#[command(about = "Converts raw YUV streams between planar, semi-planar and packed layouts")]
#[command(disable_help_flag = true)]
struct Args {
    /// Frame width in pixels
    #[arg(short = 'w', long)]
    width: usize,

    /// Frame height in pixels
    #[arg(short = 'h', long)]
    height: usize,

    /// Input layout, e.g. NV12, P010, Y410
    #[arg(long, value_name = "FORMAT")]
    input_format: String,

    /// Raw input stream
    #[arg(long)]
    input: PathBuf,

    /// Output layout
    #[arg(long, value_name = "FORMAT")]
    output_format: String,

    /// Raw output stream
    #[arg(long)]
    output: PathBuf,

    /// Align padded dimensions to a multiple of this, values below 2 disable padding
    #[arg(short = 'a', long = "align", default_value_t = 2)]
    alignment: usize,

    /// Non-zero fills padding from the last real row and column
    #[arg(short = 'r', long, default_value_t = 0)]
    replicate: u64,

    /// First frame to convert
    #[arg(long)]
    begin: Option<usize>,

    /// Last frame to convert, inclusive
    #[arg(long)]
    end: Option<usize>,

    /// Number of frames to convert
    #[arg(short = 'n', long = "frames")]
    count: Option<usize>,

    /// Frames converted concurrently
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Report padding at info level
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

/// Rewrites `-i:<fmt> <path>`, `-o:<fmt> <path>`, `-n:beg` and `-n:end`
/// into long options clap understands.
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let mut normalized = Vec::new();
    for arg in args {
        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };
        if let Some(format) = text.strip_prefix("-i:") {
            normalized.push(format!("--input-format={}", format).into());
            normalized.push("--input".into());
        } else if let Some(format) = text.strip_prefix("-o:") {
            normalized.push(format!("--output-format={}", format).into());
            normalized.push("--output".into());
        } else if text == "-n:beg" {
            normalized.push("--begin".into());
        } else if text == "-n:end" {
            normalized.push("--end".into());
        } else {
            normalized.push(arg);
        }
    }
    normalized
}

fn build_options(args: &Args) -> anyhow::Result<StreamOptions> {
    let input_format: FrameFormat = args
        .input_format
        .parse()
        .context("Unsupported input format")?;
    let output_format: FrameFormat = args
        .output_format
        .parse()
        .context("Unsupported output format")?;
    let range = FrameRange::from_selectors(args.begin, args.end, args.count)
        .context("Invalid frame selection")?;

    let mut options = StreamOptions::new(args.width, args.height, input_format, output_format);
    options.alignment = args.alignment;
    options.replicate = args.replicate != 0;
    options.range = range;
    options.verbose = args.verbose;
    if let Some(jobs) = args.jobs {
        options.batch_size = jobs.max(1);
    }
    // Geometry and alignment are rejected here, before any file is touched
    FramePipeline::new(&options).context("Invalid frame configuration")?;
    Ok(options)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse_from(normalize_args(std::env::args_os()));

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = build_options(&args)?;

    let input = File::open(&args.input)
        .with_context(|| format!("Failed to open input {}", args.input.display()))?;
    let output = File::create(&args.output)
        .with_context(|| format!("Failed to create output {}", args.output.display()))?;
    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);

    let summary = convert_stream(&mut reader, &mut writer, &options).with_context(|| {
        format!(
            "Failed converting {} to {}",
            options.input_format, options.output_format
        )
    })?;

    tracing::info!(
        "Converted {} frames, {} bytes in, {} bytes out per frame",
        summary.frames,
        summary.input_frame_size,
        summary.output_frame_size
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Args, clap::Error> {
        Args::try_parse_from(normalize_args(line.split_whitespace().map(OsString::from)))
    }

    #[test]
    fn test_normalize_reference_syntax() {
        let args: Vec<OsString> = ["yuvconv", "-i:nv12", "in.yuv", "-n:beg", "3", "-w", "8"]
            .into_iter()
            .map(OsString::from)
            .collect();
        let normalized = normalize_args(args);
        assert_eq!(
            normalized,
            [
                "yuvconv",
                "--input-format=nv12",
                "--input",
                "in.yuv",
                "--begin",
                "3",
                "-w",
                "8"
            ]
            .map(OsString::from)
        );
    }

    #[test]
    fn test_parse_full_command() {
        let args = parse(
            "yuvconv -w 1920 -h 1080 -i:y410 in.y410 -o:NV12 out.nv12 -a 16 -r 1 -n:beg 2 -n 5 -j 3",
        )
        .unwrap();
        assert_eq!(args.width, 1920);
        assert_eq!(args.height, 1080);
        assert_eq!(args.input, PathBuf::from("in.y410"));
        assert_eq!(args.output, PathBuf::from("out.nv12"));

        let options = build_options(&args).unwrap();
        assert_eq!(options.input_format, FrameFormat::Y410);
        assert_eq!(options.output_format, FrameFormat::Nv12);
        assert_eq!(options.alignment, 16);
        assert!(options.replicate);
        assert_eq!(options.range, FrameRange { first: 2, last: Some(6) });
        assert_eq!(options.batch_size, 3);
    }

    #[test]
    fn test_defaults() {
        let args = parse("yuvconv -w 8 -h 8 -i:i420 a -o:yuy2 b").unwrap();
        let options = build_options(&args).unwrap();
        assert_eq!(options.alignment, 2);
        assert!(!options.replicate);
        assert_eq!(options.range, FrameRange::ALL);
        assert_eq!(options.output_format, FrameFormat::Yuyv);
    }

    #[test]
    fn test_rejects_bad_selections() {
        let args = parse("yuvconv -w 8 -h 8 -i:foo a -o:nv12 b").unwrap();
        assert!(build_options(&args).is_err());

        let args = parse("yuvconv -w 8 -h 8 -i:nv12 a -o:nv12 b -n:end 4 -n 2").unwrap();
        assert!(build_options(&args).is_err());

        let args = parse("yuvconv -w 8 -h 8 -i:nv12 a -o:nv12 b -n 0").unwrap();
        assert!(build_options(&args).is_err());

        assert!(parse("yuvconv -h 8 -i:nv12 a -o:nv12 b").is_err());
    }

    #[test]
    fn test_rejects_bad_geometry_before_io() {
        let args = parse("yuvconv -w 8 -h 8 -i:nv12 a -o:nv12 b -a 3").unwrap();
        assert!(build_options(&args).is_err());

        let args = parse("yuvconv -w 7 -h 8 -i:yuy2 a -o:nv12 b").unwrap();
        assert!(build_options(&args).is_err());
        let args = parse("yuvconv -w 0 -h 8 -i:nv12 a -o:nv12 b").unwrap();
        assert!(build_options(&args).is_err());
    }
}
