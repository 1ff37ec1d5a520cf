/*!
 * Tests for letters and the fixture letter source
 */

use epistula::errors::LetterError;
use epistula::letter::{roman_to_int, FixtureLetterSource, Letter};

use crate::common::{create_letter_file, create_temp_dir, create_test_file};

#[test]
fn test_romanToInt_letterNumbers_shouldConvert() {
    let cases = [("I", 1), ("IV", 4), ("XII", 12), ("XLIX", 49), ("LXXVII", 77), ("CXXIV", 124)];
    for (roman, expected) in cases {
        assert_eq!(roman_to_int(roman).unwrap(), expected, "numeral {}", roman);
    }
}

#[test]
fn test_romanToInt_invalidCharacter_shouldNameNumeral() {
    match roman_to_int("XIZ") {
        Err(LetterError::InvalidRoman { numeral, reason }) => {
            assert_eq!(numeral, "XIZ");
            assert!(reason.contains('Z'));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_fromFile_windowsLineEndings_shouldParse() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(dir.path(), "letter.txt", "LXXVII. DE MORTE\r\n\r\n[6] Amicus noster.\r\n").unwrap();

    let letter = Letter::from_file(&path).unwrap();
    assert_eq!(letter.number, 77);
    assert_eq!(letter.roman, "LXXVII");
    assert_eq!(letter.title, "DE MORTE");
    assert_eq!(letter.content, "[6] Amicus noster.");
}

#[test]
fn test_fromFile_emptyFile_shouldFail() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(dir.path(), "empty.txt", "").unwrap();
    assert!(matches!(Letter::from_file(&path), Err(LetterError::Empty(_))));
}

#[test]
fn test_fromFile_missingFile_shouldReportPath() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("missing.txt");
    match Letter::from_file(&path) {
        Err(LetterError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_fetchAllLetters_mixedDirectory_shouldLoadOnlyValidFixtures() {
    let dir = create_temp_dir().unwrap();
    create_letter_file(dir.path(), "letter_2.txt", "II", "DE LECTIONE", "Prima.").unwrap();
    create_letter_file(dir.path(), "letter_1.txt", "I", "DE VINDICATIONE", "Ita fac.").unwrap();
    create_test_file(dir.path(), "letter_3.txt", "").unwrap();
    create_test_file(dir.path(), "README", "I. NOT A LETTER\nText.").unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    create_letter_file(&dir.path().join("nested"), "letter_4.txt", "IV", "HIDDEN", "Text.").unwrap();

    let letters = FixtureLetterSource::new(dir.path()).fetch_all_letters().unwrap();
    let numbers: Vec<u32> = letters.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(letters[0].content, "Ita fac.");
}

#[test]
fn test_fetchAllLetters_missingDirectory_shouldFail() {
    let dir = create_temp_dir().unwrap();
    let source = FixtureLetterSource::new(dir.path().join("nope"));
    assert!(matches!(source.fetch_all_letters(), Err(LetterError::Io { .. })));
}

#[test]
fn test_letter_serialization_shouldKeepAllFields() {
    let letter = Letter::new(6, "VI", "DE AMICITIA", "Textus.");
    let json = serde_json::to_value(&letter).unwrap();
    assert_eq!(json["number"], 6);
    assert_eq!(json["roman"], "VI");
    assert_eq!(json["title"], "DE AMICITIA");
    assert_eq!(json["content"], "Textus.");
}
