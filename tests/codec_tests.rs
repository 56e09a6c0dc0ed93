use braille_codec::codec::cell::{CAPITALIZE, LETTER_SIGN, NUMBER_SIGN, UNKNOWN, cells_to_string};
use braille_codec::codec::{AlphabetTable, DecodeIssueKind};
use braille_codec::{
    Cell, Decoder, Direction, Encoder, NumericPolicy, Translator, looks_like_braille_stream,
};

fn cell(ch: char) -> Cell {
    AlphabetTable::global()
        .cell_of(ch)
        .unwrap_or_else(|| panic!("no cell for {:?}", ch))
}

fn count(cells: &[Cell], wanted: Cell) -> usize {
    cells.iter().filter(|&&c| c == wanted).count()
}

const SAMPLES: &[&str] = &[
    "abc",
    "Hello World",
    "hello world 123",
    "Abc 123 xYz",
    "42 is the answer!",
    "1a 2b 3c 10j",
    "0jk9i,",
    "Wait; what: 7.5?",
    "ZZ top 1999 AB",
    "",
    " ",
    "a1",
    "12345678900",
];

/// Round trip over text drawn from the full supported set
#[test]
fn test_round_trip_default_policy() {
    let encoder = Encoder::default();
    let decoder = Decoder::default();
    for &text in SAMPLES {
        let stream = encoder.encode_to_string(text);
        let decoded = decoder.decode_report(&stream);
        assert_eq!(decoded.text, text, "stream {}", stream);
        assert!(decoded.is_clean(), "issues for {:?}: {:?}", text, decoded.issues);
    }
}

#[test]
fn test_round_trip_single_digit_policy() {
    let encoder = Encoder::new(NumericPolicy::SingleDigit);
    let decoder = Decoder::new(NumericPolicy::SingleDigit);
    for &text in SAMPLES {
        let stream = encoder.encode_to_string(text);
        assert_eq!(decoder.decode(&stream), text, "stream {}", stream);
    }
}

#[test]
fn test_output_length_formula() {
    let text = "Hello World 123 and 45, Bye";
    let cells = Encoder::default().encode(text);

    let chars = text.chars().count();
    let capitals = text.chars().filter(|c| c.is_ascii_uppercase()).count();
    // "123" and "45" are the two digit runs
    assert_eq!(cells.len(), chars + capitals + 2);
    assert_eq!(count(&cells, CAPITALIZE), capitals);
    assert_eq!(count(&cells, NUMBER_SIGN), 2);
    assert_eq!(count(&cells, LETTER_SIGN), 0);
}

#[test]
fn test_digit_run_costs_one_number_sign() {
    let cells = Encoder::default().encode("55");
    assert_eq!(count(&cells, NUMBER_SIGN), 1);
    assert_eq!(cells.len(), 3);
}

#[test]
fn test_scenarios() {
    let encoder = Encoder::default();

    let abc = encoder.encode_to_string("abc");
    assert_eq!(abc.len(), 18);
    assert_eq!(abc, cells_to_string(&[cell('a'), cell('b'), cell('c')]));

    assert_eq!(
        encoder.encode("Cab"),
        vec![CAPITALIZE, cell('c'), cell('a'), cell('b')]
    );
    assert_eq!(
        encoder.encode("a1"),
        vec![cell('a'), NUMBER_SIGN, cell('a')]
    );
    assert_eq!(
        encoder.encode("AB"),
        vec![CAPITALIZE, cell('a'), CAPITALIZE, cell('b')]
    );

    let decoder = Decoder::default();
    let numbers = cells_to_string(&[NUMBER_SIGN, cell('a'), cell('b')]);
    assert_eq!(decoder.decode(&numbers), "12");
    assert_eq!(decoder.decode(&cells_to_string(&encoder.encode("AB"))), "AB");
}

#[test]
fn test_unknown_character_policy() {
    let cells = Encoder::default().encode("~");
    assert_eq!(cells, vec![UNKNOWN]);
    assert_eq!(Encoder::default().encode("~"), cells);

    let decoded = Decoder::default().decode_report(&cells_to_string(&cells));
    assert_eq!(decoded.text, "?");
    assert_eq!(decoded.issues[0].kind, DecodeIssueKind::UnresolvedCell);
}

#[test]
fn test_truncated_stream() {
    let stream = format!("{}{}...", cell('h'), cell('i'));
    let decoded = Decoder::default().decode_report(&stream);
    assert_eq!(decoded.text, "hi?");
    assert_eq!(decoded.issues.len(), 1);
    assert_eq!(decoded.issues[0].kind, DecodeIssueKind::TruncatedStream);
}

#[test]
fn test_classifier() {
    for &text in SAMPLES.iter().filter(|t| !t.trim().is_empty()) {
        let stream = Encoder::default().encode_to_string(text);
        assert!(looks_like_braille_stream(&stream));
        assert!(!looks_like_braille_stream(text), "{:?}", text);
    }
    assert!(looks_like_braille_stream(""));
    assert!(looks_like_braille_stream("......"));
    assert!(!looks_like_braille_stream("O.O.x."));
}

#[test]
fn test_translator_auto_detects() {
    let translator = Translator::default();

    let forward = translator.translate("Hello 42").unwrap();
    assert_eq!(forward.direction, Direction::ToBraille);

    let back = translator.translate(&forward.output).unwrap();
    assert_eq!(back.direction, Direction::ToText);
    assert_eq!(back.output, "Hello 42");
    assert_eq!(back.cells, forward.cells);
}
