//! Byte ↔ symbol packing: splitting a byte stream into GF(16) nibbles and
//! grouping those nibbles into the 9-symbol information blocks the encoder
//! consumes.
//!
//! This is the 4-bit/9-symbol specialization of the same "split into fixed-width
//! groups, zero-pad a short trailing group" idea the `bits` module implements
//! generically for dibits/tribits/hexbits.

use crate::field::Symbol;

/// Number of symbols in an information block.
pub const BLOCK_LEN: usize = 9;

/// Split each byte into two symbols, high nibble first.
pub fn bytes_to_nibbles(bytes: &[u8]) -> Vec<Symbol> {
    let mut out = Vec::with_capacity(bytes.len() * 2);

    for &b in bytes {
        out.push(Symbol::new(b >> 4));
        out.push(Symbol::new(b & 0x0F));
    }

    out
}

/// Pair adjacent nibbles `(hi, lo)` back into bytes. A trailing unpaired nibble
/// is discarded.
pub fn nibbles_to_bytes(nibbles: &[Symbol]) -> Vec<u8> {
    nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0].bits() << 4) | pair[1].bits())
        .collect()
}

/// Split a nibble stream into consecutive 9-symbol information blocks. Any
/// trailing short block is zero-padded to `BLOCK_LEN`.
pub fn block(nibbles: &[Symbol]) -> Vec<Vec<Symbol>> {
    let mut out = Vec::with_capacity((nibbles.len() + BLOCK_LEN - 1) / BLOCK_LEN.max(1));

    for chunk in nibbles.chunks(BLOCK_LEN) {
        let mut b = chunk.to_vec();
        b.resize(BLOCK_LEN, Symbol::default());
        out.push(b);
    }

    out
}

/// Concatenate information blocks back into a single nibble stream.
pub fn unblock(blocks: &[Vec<Symbol>]) -> Vec<Symbol> {
    blocks.iter().flatten().copied().collect()
}
