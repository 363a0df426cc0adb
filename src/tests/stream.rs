use crate::Statistics;

use super::support::{
    GGA, GSA, RMC, RMC_NO_FIX, TestDecoder, corrupt, feed_str, frame, init_logger,
};

#[test]
fn test_sentences_back_to_back() {
    init_logger();
    let mut gps = TestDecoder::new();
    let stream = [RMC, GGA, GSA].concat();

    assert_eq!(gps.feed_slice(stream.as_bytes()), 3);
    assert_eq!(
        gps.statistics(),
        Statistics {
            chars_processed: stream.len() as u32,
            sentences_with_fix: 2,
            failed_checksum: 0,
            passed_checksum: 3,
        }
    );
}

#[test]
fn test_noise_before_first_sentence() {
    let mut gps = TestDecoder::new();
    let stream = format!("xx#garbage{RMC}");

    assert_eq!(feed_str(&mut gps, &stream), [stream.len() - 2]);
    assert_eq!(gps.failed_checksum(), 0);
    assert_eq!(gps.date.day(), 23);
}

#[test]
fn test_interrupted_sentence_is_dropped() {
    let mut gps = TestDecoder::new();
    let stream = format!("$GPRMC,123519,A,4807.0{GGA}");

    assert_eq!(feed_str(&mut gps, &stream).len(), 1);
    assert_eq!(gps.passed_checksum(), 1);
    assert!(!gps.date.is_valid());
    assert!(!gps.speed.is_valid());
    assert_eq!(gps.satellites.value(), 8);
}

#[test]
fn test_extend_feeds_every_byte() {
    let mut gps = TestDecoder::new();
    gps.extend(RMC.bytes());

    assert_eq!(gps.chars_processed(), RMC.len() as u32);
    assert_eq!(gps.passed_checksum(), 1);
    assert!(gps.location.is_updated());
}

#[test]
fn test_reads_consume_updated_flag() {
    let mut gps = TestDecoder::new();
    feed_str(&mut gps, RMC);

    let (_, updated) = gps.location.peek();
    assert!(updated);
    assert!(gps.location.is_updated());

    let lat = gps.location.lat();
    assert!(!gps.location.is_updated());
    assert_eq!(gps.location.lat(), lat);
    assert!(gps.location.is_valid());

    feed_str(&mut gps, RMC);
    assert!(gps.location.is_updated());
}

#[test]
fn test_oversized_term_is_truncated() {
    let mut gps = TestDecoder::new();
    let key = gps.register_custom("GPXXX", 1).unwrap();

    let sentence = frame("GPXXX,ABCDEFGHIJKLMNOPQRSTUVWXYZ,1");
    assert_eq!(feed_str(&mut gps, &sentence).len(), 1);

    assert_eq!(gps.custom(&key).unwrap().as_str(), "ABCDEFGHIJKLMN");
}

#[test]
fn test_oversized_numeric_term_does_not_overflow() {
    let mut gps = TestDecoder::new();
    let sentence =
        frame("GPRMC,123519,A,4807.038,N,01131.000,E,0000000000000000022.4,084.4,230394,003.1,W");

    assert_eq!(feed_str(&mut gps, &sentence).len(), 1);
    assert_eq!(gps.speed.value().hundredths(), 0);
    assert!((gps.course.deg() - 84.4).abs() < 1e-9);
}

#[test]
fn test_many_terms_saturate_index() {
    let mut gps = TestDecoder::new();
    let key = gps.register_custom("GPXXX", 255).unwrap();

    let content = format!("GPXXX{}", ",7".repeat(300));
    assert_eq!(feed_str(&mut gps, &frame(&content)).len(), 1);

    assert_eq!(gps.custom(&key).unwrap().as_str(), "7");
}

#[test]
fn test_statistics_count_failures_and_fixes() {
    let mut gps = TestDecoder::new();
    let stream = [RMC, corrupt(GGA).as_str(), RMC_NO_FIX, GGA].concat();

    assert_eq!(gps.feed_slice(stream.as_bytes()), 3);

    let stats = gps.statistics();
    assert_eq!(stats.passed_checksum, 3);
    assert_eq!(stats.failed_checksum, 1);
    assert_eq!(stats.sentences_with_fix, 2);
    assert_eq!(stats.chars_processed, stream.len() as u32);
}
