//! Candidate decoder
//!
//! Maps a measured bit-string to an assignment. Vertex `i` (in ascending
//! identifier order) owns the two bits at offsets `2i` (low) and `2i + 1`
//! (high), with offset 0 being the rightmost character. The pattern `11`
//! has no label and decodes to 0; bits past the end of the string read as 0.

use crate::error::SampleError;
use serde::{Deserialize, Serialize};
use srd_graph::{Assignment, Graph, Label};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// String of `0`/`1` characters, most significant first
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BitString(String);

impl BitString {
    /// Number of bits
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bit at an offset counted from the right; missing bits are unset
    #[inline]
    #[must_use]
    pub fn bit(&self, offset: usize) -> bool {
        let bytes = self.0.as_bytes();
        offset < bytes.len() && bytes[bytes.len() - 1 - offset] == b'1'
    }

    /// Raw text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for BitString {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.bytes().all(|b| b == b'0' || b == b'1') {
            Ok(Self(s.to_string()))
        } else {
            Err(SampleError::InvalidBitString(s.to_string()))
        }
    }
}

impl TryFrom<String> for BitString {
    type Error = SampleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BitString> for String {
    fn from(bits: BitString) -> Self {
        bits.0
    }
}

impl Display for BitString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decode a bit-string into an assignment over `graph`
#[must_use]
pub fn decode(bits: &BitString, graph: &Graph) -> Assignment {
    let labels = (0..graph.vertex_count())
        .map(|i| {
            let low = u8::from(bits.bit(2 * i));
            let high = u8::from(bits.bit(2 * i + 1));
            // 0b11 has no label
            Label::from_value((high << 1) | low).unwrap_or(Label::Zero)
        })
        .collect();
    Assignment::from_labels(labels)
}

/// Encode an assignment as a bit-string of width `2 * len`
#[must_use]
pub fn encode(assignment: &Assignment) -> BitString {
    let width = assignment.len() * 2;
    let mut bytes = vec![b'0'; width];
    for (i, label) in assignment.labels().iter().enumerate() {
        let value = label.value();
        if value & 1 == 1 {
            bytes[width - 1 - 2 * i] = b'1';
        }
        if value & 2 == 2 {
            bytes[width - 2 - 2 * i] = b'1';
        }
    }
    BitString(bytes.into_iter().map(char::from).collect())
}
