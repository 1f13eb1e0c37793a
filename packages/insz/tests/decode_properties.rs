//! Property tests for the decoding pipeline.
//!
//! Every test pins the current year so century guessing is deterministic.

use insz_decoder::{
    AlgorithmMode, Century, ChecksumStatus, DecodeOutcome, Decoded, Decoder, ErrorKind, FixedYear,
    Gender,
};
use pretty_assertions::assert_eq;

const MODES: [AlgorithmMode; 3] = [
    AlgorithmMode::Auto,
    AlgorithmMode::Force1900s,
    AlgorithmMode::Force2000s,
];

fn decoder() -> Decoder<FixedYear> {
    Decoder::with_clock(FixedYear(2026))
}

fn expect_decoded(outcome: DecodeOutcome) -> Decoded {
    match outcome {
        DecodeOutcome::Decoded(d) => d,
        DecodeOutcome::Fatal(f) => panic!("expected a result, got {:?}", f),
    }
}

fn expect_fatal(outcome: DecodeOutcome) -> ErrorKind {
    match outcome {
        DecodeOutcome::Fatal(f) => f.error.kind(),
        DecodeOutcome::Decoded(d) => panic!("expected a fatal outcome, got {:?}", d),
    }
}

#[test]
fn checksum_matching_one_century_is_valid_and_suggested() {
    // 930518223: 19xx candidate 61, 20xx candidate 90
    let d = expect_decoded(decoder().decode("93051822361", AlgorithmMode::Auto));
    assert_eq!(d.status, ChecksumStatus::Valid);
    assert_eq!(d.suggested_algorithm, Some(Century::Years1900));
    assert!(!d.birth_year.guessed);
    assert_eq!(d.birth_year.year, 1993);

    let d = expect_decoded(decoder().decode("93051822390", AlgorithmMode::Auto));
    assert_eq!(d.status, ChecksumStatus::Valid);
    assert_eq!(d.suggested_algorithm, Some(Century::Years2000));
    assert!(!d.birth_year.guessed);
    assert_eq!(d.birth_year.year, 2093);

    // 170203045: 20xx candidate 71
    let d = expect_decoded(decoder().decode("17.02.03-045.71", AlgorithmMode::Auto));
    assert_eq!(d.status, ChecksumStatus::Valid);
    assert_eq!(d.suggested_algorithm, Some(Century::Years2000));
    assert_eq!(d.formatted_birth_date(), "03/02/2017");
    assert_eq!(d.gender, Gender::Male);
    assert_eq!(d.birth_order, 23);
}

#[test]
fn every_non_matching_checksum_is_invalid_and_guessed() {
    for cc in 0..100u8 {
        let input = format!("930518223{:02}", cc);
        let d = expect_decoded(decoder().decode(&input, AlgorithmMode::Auto));
        match cc {
            61 | 90 => assert_eq!(d.status, ChecksumStatus::Valid, "{input}"),
            _ => {
                assert_eq!(d.status, ChecksumStatus::ChecksumInvalid, "{input}");
                assert!(d.birth_year.guessed, "{input}");
                assert_eq!(d.suggested_algorithm, None, "{input}");
                assert_eq!(d.checksum_valid(), Some(false), "{input}");
            }
        }
    }
}

#[test]
fn checksum_of_97_matches_literally() {
    // 850101016 is a multiple of 97, so its 19xx checksum is 97
    let d = expect_decoded(decoder().decode("85010101697", AlgorithmMode::Auto));
    assert_eq!(d.status, ChecksumStatus::Valid);
    assert_eq!(d.birth_year.year, 1985);

    let d = expect_decoded(decoder().decode("85010101600", AlgorithmMode::Force1900s));
    assert_eq!(d.status, ChecksumStatus::ChecksumInvalid);
}

#[test]
fn nine_digit_input_is_always_checksum_missing() {
    // 930518223 would be valid with 61 appended
    for mode in MODES {
        let d = expect_decoded(decoder().decode("930518223", mode));
        assert_eq!(d.components.checksum_part(), None);
        assert_eq!(d.status, ChecksumStatus::ChecksumMissing);
        assert_eq!(d.checksum_valid(), None);
        assert_eq!(d.suggested_algorithm, None);
    }

    let d = expect_decoded(decoder().decode("930518223", AlgorithmMode::Auto));
    assert!(d.birth_year.guessed);
    let d = expect_decoded(decoder().decode("930518223", AlgorithmMode::Force2000s));
    assert!(!d.birth_year.guessed);
    assert_eq!(d.birth_year.year, 2093);
}

#[test]
fn century_guess_boundary() {
    for current_year in [2000, 2026, 2050, 2090] {
        let decoder = Decoder::with_clock(FixedYear(current_year));
        let current_yy = current_year % 100;

        let last_2000s = current_yy + 5;
        if last_2000s <= 99 {
            let input = format!("{:02}0101001", last_2000s);
            let d = expect_decoded(decoder.decode(&input, AlgorithmMode::Auto));
            assert_eq!(d.birth_year.year, 2000 + last_2000s, "current {current_year}");
            assert!(d.birth_year.guessed);
        }

        let first_1900s = current_yy + 6;
        if first_1900s <= 99 {
            let input = format!("{:02}0101001", first_1900s);
            let d = expect_decoded(decoder.decode(&input, AlgorithmMode::Auto));
            assert_eq!(d.birth_year.year, 1900 + first_1900s, "current {current_year}");
            assert!(d.birth_year.guessed);
        }
    }
}

#[test]
fn gender_parity_and_birth_order() {
    let d = expect_decoded(decoder().decode("930518223", AlgorithmMode::Auto));
    assert_eq!(d.gender, Gender::Male);
    assert_eq!(d.birth_order, 112);

    let d = expect_decoded(decoder().decode("930518224", AlgorithmMode::Auto));
    assert_eq!(d.gender, Gender::Female);
    assert_eq!(d.birth_order, 112);
}

#[test]
fn impossible_month_is_fatal_in_every_century() {
    for mode in MODES {
        assert_eq!(
            expect_fatal(decoder().decode("023001001", mode)),
            ErrorKind::InvalidDate
        );
        assert_eq!(
            expect_fatal(decoder().decode("02300100112", mode)),
            ErrorKind::InvalidDate
        );
    }
}

#[test]
fn invalid_date_reports_the_attempted_year() {
    let outcome = decoder().decode("02.30.01-001.12", AlgorithmMode::Force1900s);
    let fatal = outcome.as_fatal().unwrap();
    let json = serde_json::to_value(fatal).unwrap();
    assert_eq!(json["input"], "02.30.01-001.12");
    assert_eq!(json["error"]["kind"], "INVALID_DATE");
    assert_eq!(
        json["error"]["date_parts"],
        serde_json::json!({"yy": "02", "mm": "30", "dd": "01", "year": 1902})
    );
    assert_eq!(json["error"]["components"]["checksum_part"], "12");
}

#[test]
fn sequence_boundaries() {
    for (input, accepted) in [
        ("930518000", false),
        ("930518001", true),
        ("930518998", true),
        ("930518999", false),
    ] {
        let outcome = decoder().decode(input, AlgorithmMode::Auto);
        if accepted {
            assert!(!outcome.is_fatal(), "{input}");
        } else {
            assert_eq!(expect_fatal(outcome), ErrorKind::InvalidSequence, "{input}");
        }
    }
}

#[test]
fn lengths_other_than_nine_and_eleven_are_fatal() {
    for input in ["", "9305182", "9305182236", "930518223611", "93051822361 0"] {
        assert_eq!(
            expect_fatal(decoder().decode(input, AlgorithmMode::Auto)),
            ErrorKind::InvalidLength,
            "{input:?}"
        );
    }
}

#[test]
fn documented_example() {
    let d = expect_decoded(decoder().decode("93051822341", AlgorithmMode::Auto));
    assert_eq!(d.components.date_part(), "930518");
    assert_eq!(d.components.sequence_part(), "223");
    assert_eq!(d.components.checksum_part(), Some("41"));
    // 41 matches neither 61 nor 90
    assert_eq!(d.status, ChecksumStatus::ChecksumInvalid);
    assert_eq!(d.birth_year.year, 1993);
    assert!(d.birth_year.guessed);
    assert_eq!(d.gender, Gender::Male);
    assert_eq!(d.birth_order, 112);
}

#[test]
fn decoding_is_idempotent() {
    for input in ["93051822361", "930518223", "023001001", "abc", "93051800061"] {
        for mode in MODES {
            let first = decoder().decode(input, mode);
            let second = decoder().decode(input, mode);
            assert_eq!(first, second);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }
}

#[test]
fn decoding_from_many_threads() {
    let decoder = decoder();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=8u16)
            .map(|seq| {
                let decoder = &decoder;
                scope.spawn(move || decoder.decode(&format!("930518{:03}", seq), AlgorithmMode::Auto))
            })
            .collect();

        for (seq, handle) in (1..=8u16).zip(handles) {
            let d = expect_decoded(handle.join().unwrap());
            assert_eq!(d.sequence, seq);
        }
    });
}
