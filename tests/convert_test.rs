//! Integration tests for file conversion.

use std::fs;
use std::path::Path;

use pandoc_opml::{
    ConvertOptions, Converter, Document, DocumentSource, Error, JsonSource, OutputFormat,
    PandocOptions, Result,
};

const DOC: &str = r#"[{"unMeta": {
        "title": {"t": "MetaString", "c": "Errands"}
    }},
    [
        {"t": "Para", "c": [{"t": "Str", "c": "Today"}]},
        {"t": "BulletList", "c": [
            [{"t": "Plain", "c": [{"t": "Str", "c": "milk"}]}],
            [{"t": "Plain", "c": [{"t": "Str", "c": "bread"}]}]
        ]}
    ]
]"#;

/// Source that ignores the path and serves a fixed document.
struct FixedSource(&'static str);

impl DocumentSource for FixedSource {
    fn name(&self) -> &str {
        "fixed"
    }

    fn load(&self, _path: &Path) -> Result<Document> {
        pandoc_opml::parse_json(self.0)
    }
}

#[test]
fn test_json_file_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("errands.json");
    let output = dir.path().join("errands.opml");
    fs::write(&input, DOC).unwrap();

    let converter = Converter::with_source(ConvertOptions::default(), Box::new(JsonSource));
    let result = converter.convert_file(&input).unwrap();
    result.write_to(Some(&output)).unwrap();

    let opml = fs::read_to_string(&output).unwrap();
    assert_eq!(opml, result.content);
    assert_eq!(result.content_len(), opml.len());
    assert!(opml.contains("<title>Errands</title>"));
    assert!(opml.contains("<outline text=\"milk\" list=\"unordered\"/>"));
    assert_eq!(result.metadata.title.as_deref(), Some("Errands"));
    assert_eq!(result.node_count, 3);
}

#[test]
fn test_custom_source() {
    let options = ConvertOptions::new().with_format(OutputFormat::Text);
    let converter = Converter::with_source(options, Box::new(FixedSource(DOC)));

    let result = converter.convert_file(Path::new("ignored.md")).unwrap();
    assert_eq!(result.content, "Today\nmilk\nbread\n");
}

#[test]
fn test_missing_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let converter = Converter::new(ConvertOptions::new().with_json_input(true));

    let result = converter.convert_file(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_invalid_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.json");
    fs::write(&input, r#"{"neither": "layout"}"#).unwrap();

    let converter = Converter::new(ConvertOptions::new().with_json_input(true));
    assert!(matches!(
        converter.convert_file(&input),
        Err(Error::InvalidAst(_))
    ));
}

#[test]
fn test_pandoc_not_installed() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(&input, "# Notes\n").unwrap();

    let options = ConvertOptions::new()
        .with_pandoc(PandocOptions::new().with_program(dir.path().join("no-pandoc-here")));
    let err = Converter::new(options).convert_file(&input).unwrap_err();

    assert!(matches!(err, Error::PandocNotFound(_)));
    assert!(err.to_string().contains("no-pandoc-here"));
}
