use crate::{CurrentLine, Span};

const NL: u16 = b'\n' as u16;
const CR: u16 = b'\r' as u16;

/// Find the line containing `cursor`, or `None` if that line is blank.
///
/// `cursor` is a UTF-16 code unit offset and is clamped into
/// `[0, len]` before use, so hosts can pass through whatever their
/// selection API reports. Lines are LF-terminated with an optional CR;
/// the returned range includes the terminator so the caller can
/// replace the whole line in a single edit.
pub fn at_cursor(text: &str, cursor: isize) -> Option<CurrentLine> {
    let units: Vec<u16> = text.encode_utf16().collect();
    let len = units.len();
    let cursor = cursor.clamp(0, len as isize) as usize;

    // Only units strictly before the cursor count, so a cursor parked
    // on a terminator still belongs to the line before it.
    let start = match units[..cursor].iter().rposition(|&u| u == NL) {
        Some(i) => i + 1,
        None => 0,
    };

    let (mut content_end, range_end) = match units[start..].iter().position(|&u| u == NL) {
        Some(i) => (start + i, start + i + 1),
        None => (len, len),
    };

    // CR before the LF is part of the terminator, not the content.
    if range_end > content_end && content_end > start && units[content_end - 1] == CR {
        content_end -= 1;
    }

    // Splits only ever happen at '\n', never inside a surrogate pair,
    // so the lossy conversion round-trips exactly.
    let line_text = String::from_utf16_lossy(&units[start..content_end]);
    if line_text.trim().is_empty() {
        return None;
    }

    Some(CurrentLine {
        text: line_text,
        range: Span::new(start, range_end),
    })
}
