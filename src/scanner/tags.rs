//! Byte-level scan for type tags trailing embedded PNG blobs.
//!
//! A `session.dat` container carries PNG images inline. Each image starts
//! with the fixed 8-byte PNG signature and ends with an `IEND` chunk, and
//! the container stores a 32-bit little-endian "type" value 8 bytes past the
//! start of the `IEND` marker (4 marker bytes plus 4 bytes taken to be the
//! chunk CRC). The meaning of the value is unknown; collecting the distinct
//! values seen is the whole point of this tool.
//!
//! The scan is a plain forward byte search. It deliberately does not
//! validate PNG chunk structure, lengths, or checksums: the markers are
//! used as byte-pattern anchors only.

use std::collections::BTreeSet;

/// The fixed 8-byte sequence that marks the start of a PNG stream.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// The chunk type marking the end of PNG image data.
pub const IEND_MARKER: [u8; 4] = *b"IEND";

/// Distance from the start of the `IEND` marker to the type field:
/// 4 marker bytes plus 4 bytes assumed to be the chunk CRC.
pub const TYPE_FIELD_OFFSET: usize = 8;

/// A 32-bit type value read from just past an embedded image.
pub type TypeTag = u32;

/// Find the next occurrence of `needle` in `haystack` at or after `from`.
fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

/// Scan a raw container buffer and return the set of distinct type tags.
///
/// For every PNG signature in the buffer, the scan looks for the next
/// `IEND` marker anywhere after it and decodes the little-endian u32 at
/// [`TYPE_FIELD_OFFSET`] past the marker. Occurrences with no `IEND`, or
/// with fewer than 4 bytes left for the type field, record nothing.
///
/// The cursor advances by the signature length after each hit rather than
/// past the matched image, so signatures packed inside another image's data
/// are still visited. Truncated or malformed buffers yield fewer or no
/// tags; the scan itself cannot fail.
#[must_use]
pub fn scan_tags(data: &[u8]) -> BTreeSet<TypeTag> {
    let mut tags = BTreeSet::new();
    let mut cursor = 0;

    while let Some(idx) = find(data, &PNG_SIGNATURE, cursor) {
        if let Some(end_idx) = find(data, &IEND_MARKER, idx) {
            let type_offset = end_idx + TYPE_FIELD_OFFSET;
            if type_offset + 4 <= data.len() {
                let mut raw = [0u8; 4];
                raw.copy_from_slice(&data[type_offset..type_offset + 4]);
                tags.insert(TypeTag::from_le_bytes(raw));
            }
        }
        cursor = idx + PNG_SIGNATURE.len();
    }

    tags
}
