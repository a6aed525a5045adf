//! `multipart/x-mixed-replace` framing for the MJPEG stream.

pub const BOUNDARY: &str = "frame";

/// Content type of the whole streamed response.
pub const CONTENT_TYPE: &str = "multipart/x-mixed-replace; boundary=frame";

const PART_HEAD: &[u8] = b"--frame\r\nContent-Type: image/jpeg\r\n\r\n";

/// One part: boundary line, part header, blank line, the JPEG bytes, CRLF.
pub fn frame_part(jpeg: &[u8]) -> Vec<u8> {
    let mut part = Vec::with_capacity(PART_HEAD.len() + jpeg.len() + 2);
    part.extend_from_slice(PART_HEAD);
    part.extend_from_slice(jpeg);
    part.extend_from_slice(b"\r\n");
    part
}

/// Inverse of [`frame_part`]: the JPEG payload, or `None` if `part` is not a
/// well-formed part.
pub fn part_payload(part: &[u8]) -> Option<&[u8]> {
    part.strip_prefix(PART_HEAD)?.strip_suffix(b"\r\n")
}
