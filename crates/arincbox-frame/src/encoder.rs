use bytes::{BufMut, BytesMut};

use crate::markers::{START_TX, TERMINATOR, TX_FRAME_LEN};

/// Encode a word into the frame the box expects on its transmit side.
///
/// Wire format:
/// ```text
/// ┌──────┬────┬────┬─────┬────┬──────┐
/// │ 0x01 │ c0 │ c1 │ ... │ c7 │ 0x0D │
/// └──────┴────┴────┴─────┴────┴──────┘
///   ci = 'A' + ((word >> 4i) & 0xF), least significant nibble first
/// ```
///
/// This is not the inverse of [`decode_frame`](crate::decode_frame): the box
/// receives and sends in different formats.
pub fn encode_word(word: u32) -> [u8; TX_FRAME_LEN] {
    let mut frame = [0u8; TX_FRAME_LEN];
    frame[0] = START_TX;
    for (i, slot) in frame[1..TX_FRAME_LEN - 1].iter_mut().enumerate() {
        *slot = nibble_char(word >> (4 * i));
    }
    frame[TX_FRAME_LEN - 1] = TERMINATOR;
    frame
}

/// Append the encoded frame for `word` to `dst`.
pub fn encode_word_into(word: u32, dst: &mut BytesMut) {
    dst.reserve(TX_FRAME_LEN);
    dst.put_slice(&encode_word(word));
}

fn nibble_char(value: u32) -> u8 {
    b'A' + (value & 0xF) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_word() {
        assert_eq!(encode_word(0), [0x01, b'A', b'A', b'A', b'A', b'A', b'A', b'A', b'A', 0x0D]);
    }

    #[test]
    fn only_top_nibble_set() {
        assert_eq!(
            encode_word(0xF000_0000),
            [0x01, b'A', b'A', b'A', b'A', b'A', b'A', b'A', b'P', 0x0D]
        );
    }

    #[test]
    fn nibbles_go_least_significant_first() {
        assert_eq!(&encode_word(0x7654_3210)[1..9], b"ABCDEFGH");
        assert_eq!(&encode_word(0xFEDC_BA98)[1..9], b"IJKLMNOP");
        assert_eq!(&encode_word(u32::MAX)[1..9], b"PPPPPPPP");
    }

    #[test]
    fn payload_never_collides_with_sentinels() {
        for word in [0u32, 1, 0x0D, 0x0606_0606, 0x0D0D_0D0D, u32::MAX] {
            let frame = encode_word(word);
            assert!(frame[1..9].iter().all(|c| (b'A'..=b'P').contains(c)));
        }
    }

    fn word_from_frame(frame: &[u8; TX_FRAME_LEN]) -> u32 {
        frame[1..TX_FRAME_LEN - 1]
            .iter()
            .enumerate()
            .fold(0, |word, (i, &c)| word | (u32::from(c - b'A') << (4 * i)))
    }

    #[test]
    fn distinct_words_give_distinct_frames() {
        assert_ne!(encode_word(0x0000_0001), encode_word(0x1000_0000));
    }

    #[test]
    fn frame_characters_determine_the_word() {
        let single_nibbles = (0..8).flat_map(|shift| (1..=0xFu32).map(move |n| n << (4 * shift)));
        let boundaries = [
            0,
            1,
            0x7FFF_FFFF,
            0x8000_0000,
            0xFFFF_FFFE,
            u32::MAX,
            0x0606_0606,
            0x0D0D_0D0D,
            0xDEAD_BEEF,
        ];

        for word in single_nibbles.chain(boundaries) {
            let frame = encode_word(word);
            assert_eq!(frame[0], START_TX);
            assert_eq!(frame[TX_FRAME_LEN - 1], TERMINATOR);
            assert_eq!(word_from_frame(&frame), word, "word {word:#010X}");
        }
    }

    #[test]
    fn encode_into_appends() {
        let mut buf = BytesMut::new();
        encode_word_into(0, &mut buf);
        encode_word_into(0xF000_0000, &mut buf);

        assert_eq!(buf.len(), 2 * TX_FRAME_LEN);
        assert_eq!(&buf[..TX_FRAME_LEN], &encode_word(0));
        assert_eq!(&buf[TX_FRAME_LEN..], &encode_word(0xF000_0000));
    }
}
