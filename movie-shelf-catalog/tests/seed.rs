use movie_shelf_catalog::{BUNDLED_SEED, NewMovie, SeedFormat, parse_seed};

fn parse(text: &str) -> movie_shelf_catalog::ParsedSeed {
    parse_seed(text, &SeedFormat::default())
}

#[test]
fn single_valid_entry() {
    let p = parse("Inception\tSci-Fi\t2010\thttp://a\thttp://cover1\r\n");
    assert_eq!(
        p.movies,
        vec![NewMovie {
            title: "Inception".to_string(),
            category: "Sci-Fi".to_string(),
            year: 2010,
            url: Some("http://a".to_string()),
            cover_url: "http://cover1".to_string(),
        }]
    );
    assert_eq!(p.skipped, 0);
}

#[test]
fn short_entry_is_skipped() {
    let p = parse("Inception\tSci-Fi\t2010\thttp://a\thttp://cover1\r\nBad\tRow\r\n");
    assert_eq!(p.movies.len(), 1);
    assert_eq!(p.movies[0].title, "Inception");
    assert_eq!(p.movies[0].year, 2010);
    assert_eq!(p.skipped, 1);
}

#[test]
fn long_entry_is_skipped() {
    let p = parse("A\tB\t2000\tu\tc\textra\r\n");
    assert!(p.movies.is_empty());
    assert_eq!(p.skipped, 1);
}

#[test]
fn non_numeric_year_is_skipped() {
    let p = parse("Heat\tCrime\tnineteen\tu\tc\r\nHeat\tCrime\t1995\tu\tc\r\n");
    assert_eq!(p.movies.len(), 1);
    assert_eq!(p.movies[0].year, 1995);
    assert_eq!(p.skipped, 1);
}

#[test]
fn empty_required_field_is_skipped() {
    let p = parse("\tCrime\t1995\tu\tc\r\nHeat\t\t1995\tu\tc\r\nHeat\tCrime\t1995\tu\t\r\n");
    assert!(p.movies.is_empty());
    assert_eq!(p.skipped, 3);
}

#[test]
fn empty_url_becomes_none() {
    let p = parse("Seven Samurai\tAction\t1954\t\thttp://cover\r\n");
    assert_eq!(p.movies.len(), 1);
    assert_eq!(p.movies[0].url, None);
}

#[test]
fn quotes_are_kept_verbatim() {
    let p = parse("Schindler's List\tDrama\t1993\tu\tc\r\n");
    assert_eq!(p.movies[0].title, "Schindler's List");
}

#[test]
fn blank_entries_are_not_counted() {
    let p = parse("\r\n\r\nA\tB\t2000\tu\tc\r\n\r\n");
    assert_eq!(p.movies.len(), 1);
    assert_eq!(p.skipped, 0);
}

#[test]
fn missing_trailing_separator() {
    let p = parse("A\tB\t2000\tu\tc\r\nC\tD\t2001\tu\tc");
    assert_eq!(p.movies.len(), 2);
}

#[test]
fn bare_newlines_do_not_split_records() {
    // With the default CRLF separator, LF-only text is one long entry.
    let p = parse("A\tB\t2000\tu\tc\nC\tD\t2001\tu\tc\n");
    assert!(p.movies.is_empty());
    assert_eq!(p.skipped, 1);
}

#[test]
fn custom_separators() {
    let format = SeedFormat {
        record_separator: "\n".to_string(),
        field_separator: "|".to_string(),
    };
    let p = parse_seed("A|B|2000|u|c\nC|D|2001||c\n", &format);
    assert_eq!(p.movies.len(), 2);
    assert_eq!(p.movies[1].url, None);
}

#[test]
fn empty_field_separator_rejects_everything() {
    let format = SeedFormat {
        record_separator: "\r\n".to_string(),
        field_separator: String::new(),
    };
    let p = parse_seed("A\tB\t2000\tu\tc\r\n", &format);
    assert!(p.movies.is_empty());
    assert_eq!(p.skipped, 1);
}

#[test]
fn bundled_seed_is_well_formed() {
    let p = parse(BUNDLED_SEED);
    assert_eq!(p.skipped, 0);
    assert_eq!(p.movies.len(), 12);
    assert!(p.movies.iter().all(NewMovie::is_complete));
}

#[test]
fn seed_format_from_partial_json() {
    let format: SeedFormat = serde_json::from_str(r#"{"field_separator": ";"}"#).unwrap();
    assert_eq!(format.record_separator, "\r\n");
    assert_eq!(format.field_separator, ";");
}
