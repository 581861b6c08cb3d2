//! Integration tests for csvcodec

use csvcodec::{
    csv_to_json, infer_value, json_to_csv, parse_table, to_csv_string, CsvError, CsvOptions,
    CsvParser, CsvReader, CsvWriter, Delimiter, InferredValue, Table,
};
use tempfile::tempdir;

/// Small deterministic generator so failures are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }

    fn string(&mut self, alphabet: &[char], max_len: usize) -> String {
        let len = self.below(max_len + 1);
        (0..len).map(|_| alphabet[self.below(alphabet.len())]).collect()
    }
}

const FIELD_ALPHABET: &[char] = &[
    'a', 'b', 'Z', '1', '0', '.', ' ', ',', ';', '\t', '"', '\n', '\r', 'é', '日',
];

fn random_table(rng: &mut Lcg, with_header: bool) -> Table {
    let columns = 1 + rng.below(4);
    let row = |rng: &mut Lcg| -> Vec<String> {
        (0..columns).map(|_| rng.string(FIELD_ALPHABET, 6)).collect()
    };
    let header = if with_header { row(rng) } else { Vec::new() };
    let rows = if with_header { rng.below(4) } else { 1 + rng.below(4) };
    let records = (0..rows).map(|_| row(rng)).collect();
    Table::new(header, records)
}

#[test]
fn test_round_trip_across_delimiters() {
    let mut rng = Lcg(0x5eed);
    for delimiter in [Delimiter::COMMA, Delimiter::SEMICOLON, Delimiter::TAB] {
        for i in 0..500 {
            let with_header = i % 2 == 0;
            let table = random_table(&mut rng, with_header);
            let text = to_csv_string(&table, delimiter);
            let options = CsvOptions::default()
                .delimiter(delimiter)
                .has_header(with_header);
            let parsed = parse_table(&text, &options).unwrap();
            assert_eq!(parsed, table, "delimiter {delimiter:?}, text {text:?}");
        }
    }
}

#[test]
fn test_quoted_delimiter_preserved() {
    let parser = CsvParser::default();
    assert_eq!(parser.parse_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
}

#[test]
fn test_doubled_quote_unescaped() {
    let parser = CsvParser::default();
    assert_eq!(
        parser.parse_line(r#""he said ""hi""" "#),
        vec![r#"he said "hi""#]
    );
}

#[test]
fn test_blank_line_filtering() {
    let options = CsvOptions::default().has_header(false);
    let table = parse_table("a,b\n\nc,d\n", &options).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn test_type_inference_policy() {
    assert_eq!(infer_value("42"), InferredValue::Number(42.0));
    assert_eq!(infer_value("true"), InferredValue::Bool(true));
    assert_eq!(infer_value("null"), InferredValue::Null);
    assert_eq!(infer_value("abc"), InferredValue::Text("abc".to_string()));
    assert_eq!(infer_value("007"), InferredValue::Text("007".to_string()));
}

#[test]
fn test_parsing_never_fails() {
    let alphabet = ['a', ',', '"', '\n', '\r', ' ', ';'];
    let mut rng = Lcg(42);
    let parser = CsvParser::default();

    for input in [r#""a,"b"#, "a,b,", "\"", "\"\"\"", ",", "\r", "\"\r\n"] {
        assert!(!parser.parse_line(input).is_empty(), "{input:?}");
    }

    for _ in 0..5000 {
        let input = rng.string(&alphabet, 12);
        assert!(!parser.parse_line(&input).is_empty(), "{input:?}");
        match parse_table(&input, &CsvOptions::default().has_header(false)) {
            Ok(table) => assert!(table.records.iter().all(|r| !r.is_empty())),
            Err(CsvError::EmptyInput) => assert!(input.trim().is_empty(), "{input:?}"),
            Err(e) => panic!("unexpected error {e} for {input:?}"),
        }
    }
}

#[test]
fn test_file_round_trip() -> csvcodec::Result<()> {
    let dir = tempdir().map_err(|e| CsvError::WriteError(e.to_string()))?;
    let path = dir.path().join("people.csv");

    let mut writer = CsvWriter::new().delimiter(';')?;
    writer.write_row(["Name", "Note"]);
    writer.write_row(["Alice", "likes; semicolons"]);
    writer.write_row(["Bob", "multi\nline"]);
    writer.save(&path)?;

    let table = CsvReader::open(&path)?
        .delimiter(';')?
        .has_header(true)
        .read_table()?;
    assert_eq!(table.header, vec!["Name", "Note"]);
    assert_eq!(table.records[0], vec!["Alice", "likes; semicolons"]);
    assert_eq!(table.records[1], vec!["Bob", "multi\nline"]);
    Ok(())
}

#[test]
fn test_csv_json_csv_round_trip() {
    let csv = "id\tcity\n1\tOslo\n2\t\"Tab\there\"";
    let options = CsvOptions::default().delimiter(Delimiter::TAB);
    let json = csv_to_json(csv, &options).unwrap();
    assert_eq!(json_to_csv(&json, Delimiter::TAB).unwrap(), csv);
}
