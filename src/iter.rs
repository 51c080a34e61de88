//! Forward iteration over a partitioned ring buffer's records.

use crate::layout::{footprint, is_fake, payload_len, read_flag_size, Header, BASE_OFFSET};

/// A forward-only iterator over a [`crate::PrBuf`]'s records, oldest first.
///
/// Borrows the buffer immutably for its whole lifetime, so the borrow
/// checker rules out any `prepare`/`commit` call on the source `PrBuf`
/// while an `Iter` from it is alive — any intervening mutation invalidating
/// the iterator is therefore a compile error rather than a runtime hazard.
pub struct Iter<'a> {
    mem: &'a [u8],
    cur: Option<u32>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(mem: &'a [u8]) -> Self {
        Iter { mem, cur: None }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let n = self.mem.len() as u32;
        let end = Header::end(self.mem);

        let mut pos = match self.cur {
            None => {
                let begin = Header::begin(self.mem);
                if begin == BASE_OFFSET && end == BASE_OFFSET {
                    return None;
                }
                begin
            }
            Some(c) => {
                if c == end {
                    return None;
                }
                c
            }
        };

        loop {
            let raw = read_flag_size(self.mem, pos);
            let plen = payload_len(raw);
            let mut next_pos = pos + footprint(plen);
            if next_pos == n {
                next_pos = BASE_OFFSET;
            }

            if is_fake(raw) {
                pos = next_pos;
                continue;
            }

            self.cur = Some(next_pos);
            let start = (pos + 4) as usize;
            return Some(&self.mem[start..start + plen as usize]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create, open};

    #[test]
    fn iterates_nothing_on_an_empty_buffer() {
        let mut mem = vec![0u8; 64];
        let buf = create(&mut mem).unwrap();
        assert_eq!(buf.iter().count(), 0);
    }

    #[test]
    fn skips_a_fake_padding_record_across_a_wrap() {
        let mut mem = vec![0u8; 48];
        let mut buf = create(&mut mem).unwrap();
        // Fill enough that the next record cannot fit before N and must wrap.
        buf.prepare(20).unwrap().copy_from_slice(&[7u8; 20]);
        buf.commit();
        buf.prepare(8).unwrap().copy_from_slice(&[9u8; 8]);
        buf.commit();

        let records: Vec<&[u8]> = buf.iter().collect();
        assert!(records.iter().any(|r| r == &[9u8; 8]));
        drop(buf);

        // Recovering from bytes must see exactly the same records, in order.
        let recovered = open(&mut mem).unwrap();
        let recovered_records: Vec<&[u8]> = recovered.iter().collect();
        assert_eq!(records, recovered_records);
    }
}
