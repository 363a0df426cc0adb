use std::cell::Cell;

use crate::{Clock, Decoder, parsing::checksum};

thread_local! {
    static NOW: Cell<u32> = const { Cell::new(0) };
}

/// A per-thread clock that only moves when a test moves it.
#[derive(Debug)]
pub(crate) struct TestClock;

impl TestClock {
    pub(crate) fn set(ms: u32) {
        NOW.with(|now| now.set(ms));
    }

    pub(crate) fn advance(ms: u32) {
        NOW.with(|now| now.set(now.get().wrapping_add(ms)));
    }
}

impl Clock for TestClock {
    fn now_millis() -> u32 {
        NOW.with(Cell::get)
    }
}

pub(crate) type TestDecoder = Decoder<TestClock>;

pub(crate) const RMC: &str =
    "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n";
pub(crate) const RMC_NO_FIX: &str =
    "$GPRMC,081836,V,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*75\r\n";
pub(crate) const RMC_WITH_MODE: &str =
    "$GNRMC,001031.00,A,4404.13993,N,12118.86023,W,0.146,,100117,,,D*7E\r\n";
pub(crate) const GGA: &str =
    "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";
pub(crate) const GGA_NO_FIX: &str =
    "$GPGGA,001043.00,4404.14036,N,12118.85961,W,0,00,99.99,1113.0,M,-21.3,M,,*6A\r\n";
pub(crate) const GGA_SOUTH_WEST: &str =
    "$GPGGA,092750.000,5321.6802,S,00630.3372,W,1,8,1.03,-61.7,M,55.2,M,,*46\r\n";
pub(crate) const GSA: &str = "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39\r\n";

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Feeds `sentence` byte by byte, returning the indices of the bytes for
/// which the decoder reported a validated sentence.
pub(crate) fn feed_str<const N: usize>(
    decoder: &mut Decoder<TestClock, N>,
    sentence: &str,
) -> Vec<usize> {
    sentence
        .bytes()
        .enumerate()
        .filter(|&(_, byte)| decoder.feed(byte))
        .map(|(i, _)| i)
        .collect()
}

/// Frames sentence content as `$content*CC\r\n`.
pub(crate) fn frame(content: &str) -> String {
    format!("${}*{:02X}\r\n", content, checksum(content.as_bytes()))
}

/// Replaces the checksum of a framed sentence with a wrong one.
pub(crate) fn corrupt(sentence: &str) -> String {
    let star = sentence.rfind('*').unwrap();
    let good = u8::from_str_radix(&sentence[star + 1..star + 3], 16).unwrap();
    format!("{}*{:02X}\r\n", &sentence[..star], good ^ 0x01)
}
