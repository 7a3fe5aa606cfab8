//! Output encoders (response body compression).
//!
//! An encoder is picked once per HTTP exchange by an [`EncoderSelector`] and
//! applied to the final serialized body.

use std::io::Write;

use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;
use serde::Deserialize;

/// Encoder applied to the serialized response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoder {
    #[default]
    Identity,
    Gzip,
    /// zlib-wrapped deflate, as HTTP `deflate` requires.
    Deflate,
}

impl Encoder {
    /// Value for the `Content-Encoding` header (`None` for identity).
    pub fn content_encoding(self) -> Option<&'static str> {
        match self {
            Encoder::Identity => None,
            Encoder::Gzip => Some("gzip"),
            Encoder::Deflate => Some("deflate"),
        }
    }

    pub fn encode(self, data: Vec<u8>) -> std::io::Result<Vec<u8>> {
        match self {
            Encoder::Identity => Ok(data),
            Encoder::Gzip => {
                let mut enc = GzEncoder::new(Vec::with_capacity(data.len() / 2), Compression::default());
                enc.write_all(&data)?;
                enc.finish()
            }
            Encoder::Deflate => {
                let mut enc = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), Compression::default());
                enc.write_all(&data)?;
                enc.finish()
            }
        }
    }
}

/// Strategy for choosing an [`Encoder`] from the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncoderSelector {
    /// Never compress.
    #[default]
    Identity,
    /// Honour `Accept-Encoding`: gzip first, then deflate.
    Negotiate,
}

impl EncoderSelector {
    pub fn select(self, accept_encoding: Option<&str>) -> Encoder {
        match self {
            EncoderSelector::Identity => Encoder::Identity,
            EncoderSelector::Negotiate => {
                let Some(header) = accept_encoding else {
                    return Encoder::Identity;
                };
                if accepts(header, "gzip") {
                    Encoder::Gzip
                } else if accepts(header, "deflate") {
                    Encoder::Deflate
                } else {
                    Encoder::Identity
                }
            }
        }
    }
}

/// True if `coding` is listed without `q=0`.
fn accepts(header: &str, coding: &str) -> bool {
    header.split(',').any(|entry| {
        let mut parts = entry.split(';').map(str::trim);
        let name = parts.next().unwrap_or_default();
        if !name.eq_ignore_ascii_case(coding) {
            return false;
        }
        !parts.any(|p| {
            p.strip_prefix("q=")
                .and_then(|q| q.parse::<f32>().ok())
                .is_some_and(|q| q <= 0.0)
        })
    })
}
