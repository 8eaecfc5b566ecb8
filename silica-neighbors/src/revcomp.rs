use silica_core::{Result, SequenceError};

/// Maps an uppercase nucleotide to its complement. 0 marks a byte with no complement.
const COMPLEMENT_ARRAY: [u8; 256] = {
    let mut arr = [0u8; 256];
    arr[b'A' as usize] = b'T';
    arr[b'C' as usize] = b'G';
    arr[b'G' as usize] = b'C';
    arr[b'T' as usize] = b'A';
    arr[b'N' as usize] = b'N';
    arr
};

///
/// Complement a single nucleotide.
///
/// Lowercase input is accepted; the result is always uppercase.
/// Returns `None` for anything outside `{A, C, G, T, N}`.
///
#[inline]
pub fn complement_base(base: u8) -> Option<u8> {
    match COMPLEMENT_ARRAY[base.to_ascii_uppercase() as usize] {
        0 => None,
        complement => Some(complement),
    }
}

#[inline]
fn complement_char(c: char) -> Option<char> {
    if c.is_ascii() {
        complement_base(c as u8).map(char::from)
    } else {
        None
    }
}

///
/// Reverse complement a sequence for searching the opposite strand.
///
/// The output is uppercase. A↔T, C↔G and N→N; any other symbol is kept as-is
/// (uppercased) at its mirrored position.
///
/// # Examples
///
/// ```
/// use silica_neighbors::reverse_complement;
///
/// assert_eq!(reverse_complement("ACGTN"), "NACGT");
/// assert_eq!(reverse_complement("aacR"), "RGTT");
/// ```
pub fn reverse_complement(sequence: &str) -> String {
    sequence
        .chars()
        .rev()
        .map(|c| {
            let upper = c.to_ascii_uppercase();
            complement_char(upper).unwrap_or(upper)
        })
        .collect()
}

///
/// Reverse complement a sequence, rejecting symbols outside `{A, C, G, T, N}`.
///
/// # Errors
/// `InvalidSymbol` naming the first unknown symbol and its position in the *input*.
pub fn reverse_complement_strict(sequence: &str) -> Result<String> {
    if let Some((position, symbol)) = sequence
        .chars()
        .enumerate()
        .find(|(_, c)| complement_char(*c).is_none())
    {
        return Err(SequenceError::InvalidSymbol { symbol, position });
    }

    Ok(reverse_complement(sequence))
}
