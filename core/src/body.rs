// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};
use std::io::{self, Cursor, Read};
use std::mem;

use bytes::Bytes;

use crate::{Error, Result};

/// Default limit applied while buffering a body for signing: 1 MiB.
pub const DEFAULT_MAX_BODY_SIZE: usize = 1 << 20;

/// Body of a request that is going to be signed or verified.
///
/// A `Reader` body can only be consumed once. [`Body::buffer`] drains it into
/// memory and swaps in the buffered bytes, so the request can still be read by
/// whoever handles it next.
#[derive(Default)]
pub enum Body {
    /// No body at all.
    #[default]
    Empty,
    /// Body already held in memory.
    Bytes(Bytes),
    /// Body that has to be read from a stream.
    Reader(Box<dyn Read + Send>),
}

impl Body {
    /// Create a body backed by a reader.
    pub fn from_reader(r: impl Read + Send + 'static) -> Self {
        Body::Reader(Box::new(r))
    }

    /// Returns the in-memory content if the body has been buffered.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Body::Bytes(bs) => Some(bs),
            _ => None,
        }
    }

    /// Returns `true` if this body has no content to read without touching a stream.
    pub fn is_empty(&self) -> bool {
        match self {
            Body::Empty => true,
            Body::Bytes(bs) => bs.is_empty(),
            Body::Reader(_) => false,
        }
    }

    /// Read the whole body into memory and return it.
    ///
    /// Bodies larger than `limit` are rejected with `BodyTooLarge`. Whatever
    /// happens, the body stays readable from its start: on success it becomes
    /// `Body::Bytes`, on failure the bytes read so far are chained in front of
    /// the remaining stream.
    pub fn buffer(&mut self, limit: usize) -> Result<Bytes> {
        match mem::take(self) {
            Body::Empty => Ok(Bytes::new()),
            Body::Bytes(bs) => {
                let size = bs.len();
                *self = Body::Bytes(bs.clone());
                if size > limit {
                    return Err(Error::body_too_large(format!(
                        "body size {size} exceeds limit {limit}"
                    )));
                }
                Ok(bs)
            }
            Body::Reader(mut r) => {
                let mut buf = Vec::new();
                // One extra byte tells a body of exactly `limit` from a larger one.
                let res = (&mut r)
                    .take((limit as u64).saturating_add(1))
                    .read_to_end(&mut buf);

                if let Err(err) = res {
                    *self = Body::from_reader(Read::chain(Cursor::new(buf), r));
                    return Err(err.into());
                }
                if buf.len() > limit {
                    *self = Body::from_reader(Read::chain(Cursor::new(buf), r));
                    return Err(Error::body_too_large(format!(
                        "body size exceeds limit {limit}"
                    )));
                }

                let bs = Bytes::from(buf);
                *self = Body::Bytes(bs.clone());
                Ok(bs)
            }
        }
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        use bytes::Buf;

        match self {
            Body::Empty => Ok(0),
            Body::Bytes(bs) => {
                let n = buf.len().min(bs.len());
                buf[..n].copy_from_slice(&bs[..n]);
                bs.advance(n);
                Ok(n)
            }
            Body::Reader(r) => r.read(buf),
        }
    }
}

impl Debug for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Empty => f.write_str("Empty"),
            Body::Bytes(bs) => f.debug_tuple("Bytes").field(&bs.len()).finish(),
            Body::Reader(_) => f.write_str("Reader"),
        }
    }
}

impl From<()> for Body {
    fn from(_: ()) -> Self {
        Body::Empty
    }
}

impl From<Bytes> for Body {
    fn from(bs: Bytes) -> Self {
        Body::Bytes(bs)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bs: Vec<u8>) -> Self {
        Body::Bytes(Bytes::from(bs))
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Body::Bytes(Bytes::from(s))
    }
}

impl From<&'static str> for Body {
    fn from(s: &'static str) -> Self {
        Body::Bytes(Bytes::from_static(s.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    fn read_all(body: &mut Body) -> Vec<u8> {
        let mut buf = Vec::new();
        body.read_to_end(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_buffer_reader() {
        let mut body = Body::from_reader(Cursor::new(b"hello world".to_vec()));

        let bs = body.buffer(DEFAULT_MAX_BODY_SIZE).unwrap();
        assert_eq!(bs.as_ref(), b"hello world");
        assert_eq!(body.as_bytes().map(|v| v.as_ref()), Some(&b"hello world"[..]));

        // Buffering twice gives the same content.
        assert_eq!(body.buffer(DEFAULT_MAX_BODY_SIZE).unwrap(), bs);
        assert_eq!(read_all(&mut body), b"hello world");
    }

    #[test]
    fn test_buffer_empty() {
        let mut body = Body::Empty;
        assert!(body.buffer(0).unwrap().is_empty());
        assert!(body.is_empty());
    }

    #[test]
    fn test_buffer_at_limit() {
        let mut body = Body::from_reader(Cursor::new(vec![b'a'; 16]));
        assert_eq!(body.buffer(16).unwrap().len(), 16);
    }

    #[test]
    fn test_buffer_over_limit_keeps_body() {
        let mut body = Body::from_reader(Cursor::new(vec![b'a'; 17]));
        let err = body.buffer(16).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BodyTooLarge);
        assert_eq!(read_all(&mut body), vec![b'a'; 17]);

        let mut body = Body::from(vec![b'b'; 17]);
        let err = body.buffer(16).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BodyTooLarge);
        assert_eq!(read_all(&mut body), vec![b'b'; 17]);
    }

    #[test]
    fn test_buffer_unbounded_limit() {
        let mut body = Body::from_reader(Cursor::new(b"payload".to_vec()));
        assert_eq!(body.buffer(usize::MAX).unwrap().as_ref(), b"payload");
        assert_eq!(read_all(&mut body), b"payload");
    }

    #[test]
    fn test_buffer_read_failure() {
        let mut body = Body::from_reader(BrokenReader);
        let err = body.buffer(DEFAULT_MAX_BODY_SIZE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BodyReadFailure);
    }
}
