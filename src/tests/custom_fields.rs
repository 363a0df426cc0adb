use crate::{Decoder, Error};

use super::support::{
    GGA, GSA, RMC, RMC_WITH_MODE, TestClock, TestDecoder, corrupt, feed_str, frame, init_logger,
};

#[test]
fn test_custom_field_on_known_sentence() {
    init_logger();
    let mut gps = TestDecoder::new();
    let speed = gps.register_custom("GPRMC", 7).unwrap();
    let magnetic = gps.register_custom("GPRMC", 11).unwrap();

    feed_str(&mut gps, RMC);

    let custom = gps.custom(&speed).unwrap();
    assert!(custom.is_valid());
    assert!(custom.is_updated());
    assert_eq!(custom.as_str(), "022.4");
    assert!(!custom.is_updated());

    assert_eq!(gps.custom(&magnetic).unwrap().as_bytes(), b"W");
    // Built-in decoding still happens alongside.
    assert!((gps.speed.knots() - 22.4).abs() < 1e-9);
}

#[test]
fn test_custom_field_on_unknown_sentence() {
    let mut gps = TestDecoder::new();
    let pdop = gps.register_custom("GPGSA", 15).unwrap();
    let vdop = gps.register_custom("GPGSA", 17).unwrap();
    let empty = gps.register_custom("GPGSA", 5).unwrap();

    feed_str(&mut gps, GSA);

    assert_eq!(gps.custom(&pdop).unwrap().as_str(), "2.5");
    assert_eq!(gps.custom(&vdop).unwrap().as_str(), "2.1");

    let empty = gps.custom(&empty).unwrap();
    assert!(empty.is_valid());
    assert_eq!(empty.as_str(), "");
}

#[test]
fn test_custom_field_not_committed_on_bad_checksum() {
    let mut gps = TestDecoder::new();
    let speed = gps.register_custom("GPRMC", 7).unwrap();

    feed_str(&mut gps, &corrupt(RMC));

    let custom = gps.custom(&speed).unwrap();
    assert!(!custom.is_valid());
    assert_eq!(custom.as_str(), "");
}

#[test]
fn test_custom_field_matches_exact_sentence_name() {
    let mut gps = TestDecoder::new();
    let gp = gps.register_custom("GPRMC", 7).unwrap();
    let gn = gps.register_custom("GNRMC", 7).unwrap();

    feed_str(&mut gps, RMC_WITH_MODE);

    assert!(!gps.custom(&gp).unwrap().is_valid());
    assert_eq!(gps.custom(&gn).unwrap().as_str(), "0.146");
}

#[test]
fn test_custom_fields_of_other_sentences_untouched() {
    let mut gps = TestDecoder::new();
    let satellites = gps.register_custom("GPGGA", 7).unwrap();
    let speed = gps.register_custom("GPRMC", 7).unwrap();

    feed_str(&mut gps, RMC);
    assert!(!gps.custom(&satellites).unwrap().is_valid());
    gps.custom(&speed).unwrap().as_str();

    feed_str(&mut gps, GGA);
    assert_eq!(gps.custom(&satellites).unwrap().as_str(), "08");
    assert!(!gps.custom(&speed).unwrap().is_updated());
}

#[test]
fn test_custom_field_value_replaced_by_next_sentence() {
    let mut gps = TestDecoder::new();
    let mode = gps.register_custom("GPXXX", 1).unwrap();

    feed_str(&mut gps, &frame("GPXXX,LONGVALUE"));
    feed_str(&mut gps, &frame("GPXXX,B"));

    assert_eq!(gps.custom(&mode).unwrap().as_str(), "B");
}

#[test]
fn test_custom_field_age() {
    TestClock::set(100);
    let mut gps = TestDecoder::new();
    let speed = gps.register_custom("GPRMC", 7).unwrap();
    assert_eq!(gps.custom(&speed).unwrap().age(), u32::MAX);

    feed_str(&mut gps, RMC);
    TestClock::advance(250);

    assert_eq!(gps.custom(&speed).unwrap().age(), 250);
}

#[test]
fn test_duplicate_registration_returns_same_field() {
    let mut gps: Decoder<TestClock, 1> = Decoder::new();
    let first = gps.register_custom("GPRMC", 7).unwrap();
    let second = gps.register_custom("GPRMC", 7).unwrap();
    assert_eq!(first, second);

    feed_str(&mut gps, RMC);
    assert_eq!(gps.custom(&second).unwrap().as_str(), "022.4");
}

#[test]
fn test_registration_errors() {
    let mut gps: Decoder<TestClock, 1> = Decoder::new();
    gps.register_custom("GPRMC", 7).unwrap();

    assert_eq!(gps.register_custom("GPRMC", 8), Err(Error::RegistryFull));
    assert_eq!(gps.register_custom("", 1), Err(Error::EmptySentenceName));
    assert_eq!(
        gps.register_custom("GPTOOLONGSENTENCE", 1),
        Err(Error::SentenceNameTooLong)
    );
}

#[test]
fn test_unregistered_key_has_no_field() {
    let mut gps = TestDecoder::new();
    gps.register_custom("GPRMC", 7).unwrap();

    let other = crate::CustomKey::new("GPRMC", 8).unwrap();
    assert!(gps.custom(&other).is_none());
}

#[test]
fn test_register_mid_sentence_keeps_run() {
    init_logger();
    let mut gps = TestDecoder::new();
    let speed = gps.register_custom("GPRMC", 7).unwrap();

    let (head, tail) = RMC.split_at(20);
    feed_str(&mut gps, head);
    let satellites = gps.register_custom("GPGGA", 7).unwrap();
    let course = gps.register_custom("GPRMC", 8).unwrap();
    assert_eq!(feed_str(&mut gps, tail).len(), 1);

    assert!(!gps.custom(&satellites).unwrap().is_valid());
    assert_eq!(gps.custom(&speed).unwrap().as_str(), "022.4");
    assert_eq!(gps.custom(&course).unwrap().as_str(), "084.4");
}

#[test]
fn test_register_mid_sentence_new_run_head() {
    let mut gps = TestDecoder::new();
    let speed = gps.register_custom("GPRMC", 7).unwrap();

    let (head, tail) = RMC.split_at(20);
    feed_str(&mut gps, head);
    let longitude = gps.register_custom("GPRMC", 5).unwrap();
    feed_str(&mut gps, tail);

    assert_eq!(gps.custom(&longitude).unwrap().as_str(), "01131.000");
    assert_eq!(gps.custom(&speed).unwrap().as_str(), "022.4");
}
