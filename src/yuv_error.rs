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
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug)]
pub enum YuvError {
    /// Format token is not present in the catalog
    UnknownFormat(String),
    /// Padding alignment is odd and at least 2
    InvalidAlignment(usize),
    /// Source and target geometry differ
    IncompatibleFrames,
    ZeroBaseSize,
    /// Packed 4:2:2 words carry pixel pairs, so the width must be even
    OddPackedWidth(usize),
    PointerOverflow,
    SourceSizeMismatch(MismatchedSize),
    DestinationSizeMismatch(MismatchedSize),
    /// Frame range selectors conflict or are empty
    InvalidFrameRange,
    Io(std::io::Error),
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::UnknownFormat(token) => {
                f.write_fmt(format_args!("Unknown pixel format \"{}\"", token))
            }
            YuvError::InvalidAlignment(alignment) => f.write_fmt(format_args!(
                "The alignment used for padding must be an even number, but it was {}",
                alignment
            )),
            YuvError::IncompatibleFrames => {
                f.write_str("Frames have incompatible width, height or padding")
            }
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YuvError::OddPackedWidth(width) => f.write_fmt(format_args!(
                "Packed 4:2:2 layouts require an even width, but it was {}",
                width
            )),
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::SourceSizeMismatch(size) => f.write_fmt(format_args!(
                "Source size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            YuvError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            YuvError::InvalidFrameRange => f.write_str("Invalid frame range selection"),
            YuvError::Io(err) => f.write_fmt(format_args!("I/O failure: {}", err)),
        }
    }
}

impl Error for YuvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            YuvError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for YuvError {
    fn from(value: std::io::Error) -> Self {
        YuvError::Io(value)
    }
}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, YuvError> {
    v0.checked_mul(v1).ok_or(YuvError::PointerOverflow)
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<usize, YuvError> {
    let product0 = check_overflow_v2(v0, v1)?;
    check_overflow_v2(product0, v2)
}

#[inline]
pub(crate) fn check_source_size(data: &[u8], expected: usize) -> Result<(), YuvError> {
    if data.len() != expected {
        return Err(YuvError::SourceSizeMismatch(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_destination_size(data: &[u8], expected: usize) -> Result<(), YuvError> {
    if data.len() != expected {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}
