//! RGB frames for the moodcam pipeline.
//!
//! A [`Frame`] is an 8-bit row-major RGB raster. This crate also carries the
//! JPEG/PNG codecs (a thin layer over the `image` crate), YUYV conversion,
//! clipped raster primitives and a small bitmap font.

pub mod codec;
pub mod convert;
pub mod draw;
pub mod error;
pub mod font;
pub mod frame;

pub use codec::{decode_frame, encode_jpeg, rgb_to_jpeg, rgb_to_png};
pub use convert::yuyv_to_rgb;
pub use error::ImageError;
pub use frame::{Color, Frame};
