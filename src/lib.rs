mod ayuv;
mod chroma_resample;
mod codec;
mod frame;
mod frame_stream;
mod numerics;
mod padding;
mod pixel_format;
mod yuv_error;
mod yuv_nv;
mod yuv_planar;
mod yuv_support;
mod yuv_to_yuy2;
mod yuy2_to_yuv;

pub use yuv_support::YuvChromaSubsampling;
pub use yuv_support::YuvNVOrder;
pub use yuv_support::Yuy2Description;

pub use yuv_error::MismatchedSize;
pub use yuv_error::YuvError;

pub use pixel_format::FrameFormat;
pub use pixel_format::FrameLayout;
pub use pixel_format::PixelFormat;

pub use numerics::mid_gray;
pub use numerics::rescale_depth;

pub use padding::compute_padded;
pub use padding::replicate_boundary;

pub use frame::Frame;
pub use frame::FrameGeometry;

pub use frame_stream::convert_stream;
pub use frame_stream::FramePipeline;
pub use frame_stream::FrameRange;
pub use frame_stream::StreamOptions;
pub use frame_stream::StreamSummary;
