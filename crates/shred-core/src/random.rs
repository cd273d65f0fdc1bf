//! Random-byte sources for overwrite passes
//!
//! A [`RandomSource`] describes where random bytes come from. The engine
//! opens it once per pass into a [`RandomStream`], which is consumed through
//! [`std::io::Read`]. A stream that reaches end-of-file before a chunk is
//! filled is treated as exhausted and fails the pass.

use rand::rngs::ThreadRng;
use rand::RngCore;
use std::convert::Infallible;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

/// Where random bytes are drawn from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RandomSource {
    /// Thread-local CSPRNG seeded from the operating system
    #[default]
    System,
    /// A readable file or character device (e.g. `/dev/urandom`)
    Device(PathBuf),
}

impl RandomSource {
    /// Open a fresh stream of random bytes
    pub fn open(&self) -> io::Result<RandomStream> {
        match self {
            RandomSource::System => Ok(RandomStream::System(rand::rng())),
            RandomSource::Device(path) => File::open(path).map(RandomStream::Device),
        }
    }
}

impl FromStr for RandomSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "system" | "os" => Ok(RandomSource::System),
            path => Ok(RandomSource::Device(PathBuf::from(path))),
        }
    }
}

impl fmt::Display for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomSource::System => f.write_str("system"),
            RandomSource::Device(path) => write!(f, "{}", path.display()),
        }
    }
}

/// An open stream of random bytes
pub enum RandomStream {
    /// Generator-backed stream; never runs dry
    System(ThreadRng),
    /// File-backed stream; may be exhausted
    Device(File),
}

impl Read for RandomStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            RandomStream::System(rng) => {
                rng.fill_bytes(buf);
                Ok(buf.len())
            }
            RandomStream::Device(file) => file.read(buf),
        }
    }
}

impl fmt::Debug for RandomStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomStream::System(_) => f.write_str("RandomStream::System"),
            RandomStream::Device(file) => f.debug_tuple("RandomStream::Device").field(file).finish(),
        }
    }
}
