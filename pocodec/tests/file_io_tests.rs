use pocodec::traits::Parser;
use pocodec::{Catalog, CatalogWriter, Error, LineEnding};
use std::fs;

fn identity(text: &str, _from: &str, _to: &str) -> Result<String, Error> {
    Ok(text.to_string())
}

#[test]
fn test_write_to_creates_sibling_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("fr.po");
    let output = temp_dir.path().join("fr_output.po");
    let content = "msgid \"\"\nmsgstr \"\"\n\"Language: fr\\n\"\n\nmsgid \"Same\"\nmsgstr \"\"\n";
    fs::write(&input, content).unwrap();

    let catalog = Catalog::read_from(&input).unwrap();
    let report = CatalogWriter::new(&identity, "en", "fr")
        .write_to(&catalog, &output)
        .unwrap();

    assert_eq!(report.translated, 1);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "msgid \"\"\nmsgstr \"\"\n\"Language: fr\\n\"\n\nmsgid \"Same\"\nmsgstr \"Same\"\n"
    );
    // the source file is left alone
    assert_eq!(fs::read_to_string(&input).unwrap(), content);
}

#[test]
fn test_read_from_decodes_utf16_with_bom() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("utf16.po");
    let content = "msgid \"\"\nmsgstr \"\"\n\"Language: ja\\n\"\n\nmsgid \"Hello\"\nmsgstr \"こんにちは\"\n";

    let mut bytes = vec![0xFF, 0xFE];
    for unit in content.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(&path, bytes).unwrap();

    let catalog = Catalog::read_from(&path).unwrap();
    assert_eq!(catalog.header.language(), Some("ja"));
    assert_eq!(catalog.find_entry("Hello").unwrap().msgstr, "こんにちは");
}

#[test]
fn test_crlf_catalog_round_trips_byte_for_byte() {
    let original = "msgid \"\"\r\nmsgstr \"\"\r\n\r\nmsgid \"a\"\r\nmsgstr \"b\"\r\n";
    let catalog = Catalog::from_str(original).unwrap();
    assert_eq!(catalog.header.raw_lines.len(), 3);
    assert_eq!(catalog.entries[0].raw_lines, vec!["msgid \"a\"", "msgstr \"b\""]);
    assert_eq!(catalog.layout.line_ending, LineEnding::CrLf);

    let mut out = Vec::new();
    CatalogWriter::new(&identity, "en", "fr")
        .to_writer(&catalog, &mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), original);
}

#[test]
fn test_crlf_translated_lines_keep_crlf() {
    let catalog = Catalog::from_str("msgid \"a\"\r\nmsgstr \"\"\r\n\r\nmsgid \"b\"\r\nmsgstr \"B\"").unwrap();
    let mut out = Vec::new();
    CatalogWriter::new(&identity, "en", "fr")
        .to_writer(&catalog, &mut out)
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "msgid \"a\"\r\nmsgstr \"a\"\r\n\r\nmsgid \"b\"\r\nmsgstr \"B\""
    );
}

#[test]
fn test_utf8_bom_is_written_back() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("de.po");
    let output = temp_dir.path().join("de_output.po");
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice(b"msgid \"\"\nmsgstr \"\"\n\"Language: de\\n\"\n\nmsgid \"Yes\"\nmsgstr \"Ja\"\n");
    fs::write(&input, &bytes).unwrap();

    let catalog = Catalog::read_from(&input).unwrap();
    assert!(catalog.layout.bom);
    assert_eq!(catalog.header.language(), Some("de"));

    CatalogWriter::new(&identity, "en", "de")
        .write_to(&catalog, &output)
        .unwrap();
    assert_eq!(fs::read(&output).unwrap(), bytes);
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = Catalog::read_from(temp_dir.path().join("absent.po")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_unwritable_output_is_io_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::from_str("msgid \"a\"\nmsgstr \"b\"\n").unwrap();
    let err = CatalogWriter::new(&identity, "en", "fr")
        .write_to(&catalog, temp_dir.path().join("missing_dir").join("out.po"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
