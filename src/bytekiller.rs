use byteorder::{ByteOrder, BE};

struct Ctx<'a> {
    buf: &'a mut [u8],
    dst_pos: usize,
    src_pos: usize,
    len: usize,
    crc: u32,
    bits: u32,
    bad: bool,
}

impl<'a> Ctx<'a> {
    fn adjust_len(&mut self, count: usize) -> usize {
        if self.len >= count {
            self.len -= count;
            count
        } else {
            count - std::mem::replace(&mut self.len, 0)
        }
    }
}

/// Unpacks a ByteKiller stream in place: `buf` holds `packed_len` packed
/// bytes at its start and must be large enough for the unpacked output.
/// The stream is decoded backwards from its tail; the trailing three words
/// are unpacked size, CRC seed and the initial bit window. Returns false
/// on any malformed input (truncation, size overflow, CRC mismatch).
pub fn unpack(buf: &mut [u8], packed_len: usize) -> bool {
    if packed_len < 12 || packed_len > buf.len() {
        return false;
    }
    let mut src_pos = packed_len - 4;

    let len = BE::read_u32(&buf[src_pos..]) as usize;
    src_pos -= 4;
    if len == 0 || len > buf.len() {
        log::warn!("unexpected unpack size {}, buffer size {}", len, buf.len());
        return false;
    }
    let dst_pos = len - 1;

    let mut crc = BE::read_u32(&buf[src_pos..]);
    src_pos -= 4;

    let bits = BE::read_u32(&buf[src_pos..]);
    crc ^= bits;

    let mut ctx = Ctx {
        buf,
        dst_pos,
        src_pos,
        len,
        crc,
        bits,
        bad: false,
    };

    while ctx.len > 0 && !ctx.bad {
        if !next_bit(&mut ctx) {
            if !next_bit(&mut ctx) {
                copy_literal(&mut ctx, 3, 0);
            } else {
                copy_reference(&mut ctx, 8, 2);
            }
        } else {
            match get_bits(&mut ctx, 2) {
                0 => copy_reference(&mut ctx, 9, 3),
                1 => copy_reference(&mut ctx, 10, 4),
                2 => {
                    let count = get_bits(&mut ctx, 8) as usize + 1;
                    copy_reference(&mut ctx, 12, count);
                }
                _ => copy_literal(&mut ctx, 8, 8),
            }
        }
    }

    !ctx.bad && ctx.len == 0 && ctx.crc == 0
}

fn next_bit(ctx: &mut Ctx) -> bool {
    let mut carry = (ctx.bits & 1) != 0;
    ctx.bits >>= 1;
    if ctx.bits == 0 {
        // Pull in the next 32-bit window, with a sentinel in the top bit.
        if ctx.src_pos < 4 {
            ctx.bad = true;
            return false;
        }
        ctx.src_pos -= 4;
        ctx.bits = BE::read_u32(&ctx.buf[ctx.src_pos..]);
        ctx.crc ^= ctx.bits;
        carry = (ctx.bits & 1) != 0;
        ctx.bits = (1 << 31) | (ctx.bits >> 1);
    }
    carry
}

fn get_bits(ctx: &mut Ctx, count: usize) -> u32 {
    let mut bits = 0;
    for _ in 0..count {
        bits = (bits << 1) | u32::from(next_bit(ctx));
    }
    bits
}

fn copy_literal(ctx: &mut Ctx, bits_count: usize, base: usize) {
    let count = get_bits(ctx, bits_count) as usize + base + 1;
    let count = ctx.adjust_len(count);
    if count > ctx.dst_pos.wrapping_add(1) {
        ctx.bad = true;
        return;
    }
    for i in 0..count {
        ctx.buf[ctx.dst_pos - i] = get_bits(ctx, 8) as u8;
    }
    ctx.dst_pos = ctx.dst_pos.wrapping_sub(count);
}

fn copy_reference(ctx: &mut Ctx, bits_count: usize, count: usize) {
    let count = ctx.adjust_len(count);
    let offset = get_bits(ctx, bits_count) as usize;
    if count > ctx.dst_pos.wrapping_add(1) || ctx.dst_pos + offset >= ctx.buf.len() {
        ctx.bad = true;
        return;
    }
    for i in 0..count {
        ctx.buf[ctx.dst_pos - i] = ctx.buf[ctx.dst_pos - i + offset];
    }
    ctx.dst_pos = ctx.dst_pos.wrapping_sub(count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{ByteOrder, BE};

    // A reference packer emitting only literal runs, mirroring the bit
    // layout the decoder expects: the stream decodes back-to-front, each
    // 32-bit window is consumed LSB-first and the first window carries a
    // sentinel above its payload bits.
    fn pack(plain: &[u8]) -> Vec<u8> {
        assert!(!plain.is_empty());
        let mut seq: Vec<bool> = Vec::new();
        let mut push_val = |seq: &mut Vec<bool>, val: u32, width: usize| {
            for i in (0..width).rev() {
                seq.push((val >> i) & 1 != 0);
            }
        };

        // Literal runs of up to 8 bytes; the first run decoded fills the
        // tail of the output, reading its last byte first.
        let mut end = plain.len();
        while end > 0 {
            let start = end.saturating_sub(8);
            let run = &plain[start..end];
            push_val(&mut seq, 0, 2); // control: short literal
            push_val(&mut seq, run.len() as u32 - 1, 3);
            for &b in run.iter().rev() {
                push_val(&mut seq, u32::from(b), 8);
            }
            end = start;
        }

        // Split into a partial first window plus full 32-bit windows.
        let rem = seq.len() % 32;
        let mut first = 1u32 << rem;
        for (i, &bit) in seq[..rem].iter().enumerate() {
            first |= u32::from(bit) << i;
        }
        let mut words = Vec::new();
        for chunk in seq[rem..].chunks(32) {
            let mut w = 0u32;
            for (i, &bit) in chunk.iter().enumerate() {
                w |= u32::from(bit) << i;
            }
            words.push(w);
        }

        let crc = words.iter().fold(first, |acc, w| acc ^ w);

        // Forward layout: last-consumed window first, then the first
        // window, CRC and unpacked size.
        let mut out = Vec::new();
        for w in words.iter().rev() {
            let mut b = [0; 4];
            BE::write_u32(&mut b, *w);
            out.extend_from_slice(&b);
        }
        let mut b = [0; 4];
        BE::write_u32(&mut b, first);
        out.extend_from_slice(&b);
        BE::write_u32(&mut b, crc);
        out.extend_from_slice(&b);
        BE::write_u32(&mut b, plain.len() as u32);
        out.extend_from_slice(&b);
        out
    }

    fn roundtrip(plain: &[u8]) {
        let packed = pack(plain);
        let mut buf = vec![0; plain.len().max(packed.len())];
        buf[..packed.len()].copy_from_slice(&packed);
        assert!(unpack(&mut buf, packed.len()));
        assert_eq!(&buf[..plain.len()], plain);
    }

    #[test]
    fn unpacks_short_literals() {
        roundtrip(b"A");
        roundtrip(b"WORLD");
        roundtrip(b"12345678");
    }

    #[test]
    fn unpacks_multiple_runs() {
        let plain: Vec<u8> = (0..100).map(|i| (i * 7) as u8).collect();
        roundtrip(&plain);
    }

    #[test]
    fn truncated_stream_fails() {
        let plain: Vec<u8> = (0..64).map(|i| i as u8).collect();
        let packed = pack(&plain);
        let mut buf = vec![0; packed.len().max(plain.len())];
        buf[..packed.len() - 1].copy_from_slice(&packed[..packed.len() - 1]);
        assert!(!unpack(&mut buf, packed.len() - 1));
    }

    #[test]
    fn corrupted_payload_fails_crc() {
        let plain: Vec<u8> = (0..64).map(|i| i as u8).collect();
        let mut packed = pack(&plain);
        packed[0] ^= 0x10;
        let len = packed.len();
        let mut buf = vec![0; len.max(plain.len())];
        buf[..len].copy_from_slice(&packed);
        assert!(!unpack(&mut buf, len));
    }

    #[test]
    fn undersized_input_is_rejected() {
        let mut buf = [0; 8];
        assert!(!unpack(&mut buf, 8));
    }
}
