//! Dotted namespace resolution

use crate::grammar::identifier;
use crate::lexical;

/// Resolve the namespace portion of a dotted name starting at `index`.
///
/// Segments are absorbed greedily with one segment of lookahead: a
/// segment followed by a dot and a further segment that is itself
/// followed by a dot belongs to the namespace; the first segment whose
/// successor is not followed by a dot is left for the caller as the
/// trailing name.
///
/// Returns the boundary offset, the position of the dot separating the
/// namespace from the trailing name. Callers accept the result only
/// when it differs from `index` and the byte at the boundary is a dot;
/// a lone identifier resolves to a boundary equal to `index` and a
/// missing leading segment resolves to `None`, and both are rejected
/// downstream.
pub fn namespace(buffer: &[u8], index: usize) -> Option<usize> {
    let mut part = identifier::namespace_part(buffer, index)?;

    loop {
        let mut index = part.next();
        if !buffer.get(index).copied().map(lexical::is_dot).unwrap_or(false) {
            return Some(index - 1);
        }
        index += 1;

        match identifier::namespace_part(buffer, index) {
            Some(next_part) => {
                let followed_by_dot = buffer
                    .get(next_part.next())
                    .copied()
                    .map(lexical::is_dot)
                    .unwrap_or(false);
                if !followed_by_dot {
                    // Exactly one segment of lookahead remains: the
                    // boundary is the dot before it.
                    return Some(index - 1);
                }
                part = next_part;
            }
            // Dangling dot with nothing matchable after it.
            None => return Some(index - 1),
        }
    }
}
