//! Support for the ResX XML resource container format.
//!
//! A ResX document is a `<root>` element holding a `resheader` preamble and
//! one `<data>` element per resource record, each with a `<value>` child and
//! an optional `<comment>` child. Provides parsing and serialization; the
//! line-ending and comment-option policies live in [`crate::store`].

use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use serde::Serialize;
use std::io::{BufRead, Write};

use crate::{error::Error, traits::Parser};

const RESX_MIMETYPE: &str = "text/microsoft-resx";
const RESX_VERSION: &str = "2.0";
const RESX_READER: &str = "System.Resources.ResXResourceReader, System.Windows.Forms, \
                           Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";
const RESX_WRITER: &str = "System.Resources.ResXResourceWriter, System.Windows.Forms, \
                           Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";

/// An in-memory ResX container: the data records in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Format {
    pub entries: Vec<DataElement>,
}

/// One `<data>` record as it appears on disk, before any canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataElement {
    pub name: String,
    pub value: String,
    pub comment: Option<String>,
}

impl Parser for Format {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        // Text is not trimmed: whitespace inside <value> is significant.
        let mut xml_reader = Reader::from_reader(reader);

        let mut buf = Vec::new();
        let mut entries = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"data" => {
                    let element = parse_data_element(e, &mut xml_reader)?;
                    entries.push(element);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::XmlParse(e)),
            }
            buf.clear();
        }
        Ok(Format { entries })
    }

    /// Write to any writer (file, memory, etc.).
    ///
    /// Output is deterministic: identical inputs produce byte-identical
    /// documents.
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new(&mut writer);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

        xml_writer.write_event(Event::Start(BytesStart::new("root")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

        for (name, value) in [
            ("resmimetype", RESX_MIMETYPE),
            ("version", RESX_VERSION),
            ("reader", RESX_READER),
            ("writer", RESX_WRITER),
        ] {
            write_resheader(&mut xml_writer, name, value)?;
        }

        for data in &self.entries {
            let mut elem = BytesStart::new("data");
            elem.push_attribute(("name", data.name.as_str()));
            elem.push_attribute(("xml:space", "preserve"));
            xml_writer.write_event(Event::Start(elem))?;

            xml_writer.write_event(Event::Start(BytesStart::new("value")))?;
            xml_writer.write_event(Event::Text(BytesText::new(&data.value)))?;
            xml_writer.write_event(Event::End(BytesEnd::new("value")))?;

            if let Some(comment) = &data.comment {
                xml_writer.write_event(Event::Start(BytesStart::new("comment")))?;
                xml_writer.write_event(Event::Text(BytesText::new(comment)))?;
                xml_writer.write_event(Event::End(BytesEnd::new("comment")))?;
            }

            xml_writer.write_event(Event::End(BytesEnd::new("data")))?;
            xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("root")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        Ok(())
    }
}

fn write_resheader<W: Write>(
    xml_writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<(), Error> {
    let mut elem = BytesStart::new("resheader");
    elem.push_attribute(("name", name));
    xml_writer.write_event(Event::Start(elem))?;
    xml_writer.write_event(Event::Start(BytesStart::new("value")))?;
    xml_writer.write_event(Event::Text(BytesText::new(value)))?;
    xml_writer.write_event(Event::End(BytesEnd::new("value")))?;
    xml_writer.write_event(Event::End(BytesEnd::new("resheader")))?;
    xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
    Ok(())
}

fn parse_data_element<R: BufRead>(
    e: &BytesStart,
    xml_reader: &mut Reader<R>,
) -> Result<DataElement, Error> {
    let mut name = None;

    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|e| Error::InvalidResource(e.to_string()))?;
        if attr.key.as_ref() == b"name" {
            name = Some(attr.unescape_value()?.to_string());
        }
    }
    let name =
        name.ok_or_else(|| Error::InvalidResource("data element missing 'name'".to_string()))?;

    let mut value = String::new();
    let mut comment = None;
    let mut buf = Vec::new();

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref child)) => match child.name().as_ref() {
                b"value" => value = read_element_text(b"value", xml_reader)?,
                b"comment" => comment = Some(read_element_text(b"comment", xml_reader)?),
                _ => {}
            },
            Ok(Event::End(ref end)) if end.name().as_ref() == b"data" => break,
            Ok(Event::Eof) => {
                return Err(Error::InvalidResource(format!(
                    "unterminated data element '{}'",
                    name
                )));
            }
            Ok(_) => {}
            Err(e) => return Err(Error::XmlParse(e)),
        }
        buf.clear();
    }
    Ok(DataElement {
        name,
        value,
        comment,
    })
}

/// Reads text content up to the closing tag, concatenating text and CDATA.
fn read_element_text<R: BufRead>(tag: &[u8], xml_reader: &mut Reader<R>) -> Result<String, Error> {
    let mut buf = Vec::new();
    let mut text = String::new();
    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => {
                text.push_str(&e.unescape().map_err(Error::XmlParse)?);
            }
            Ok(Event::CData(e)) => {
                text.push_str(&String::from_utf8_lossy(&e.into_inner()));
            }
            Ok(Event::End(ref end)) if end.name().as_ref() == tag => break,
            Ok(Event::Eof) => {
                return Err(Error::InvalidResource("unexpected EOF".to_string()));
            }
            Ok(_) => {}
            Err(e) => return Err(Error::XmlParse(e)),
        }
        buf.clear();
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Parser;
    use indoc::indoc;

    #[test]
    fn test_parse_basic_resx() {
        let xml = indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <root>
              <resheader name="resmimetype">
                <value>text/microsoft-resx</value>
              </resheader>
              <data name="Greeting" xml:space="preserve">
                <value>Hello</value>
                <comment>shown at startup</comment>
              </data>
              <data name="Farewell" xml:space="preserve">
                <value>Goodbye</value>
              </data>
            </root>
        "#};
        let format = Format::from_str(xml).unwrap();
        assert_eq!(format.entries.len(), 2);
        let greeting = &format.entries[0];
        assert_eq!(greeting.name, "Greeting");
        assert_eq!(greeting.value, "Hello");
        assert_eq!(greeting.comment.as_deref(), Some("shown at startup"));
        let farewell = &format.entries[1];
        assert_eq!(farewell.name, "Farewell");
        assert_eq!(farewell.value, "Goodbye");
        assert_eq!(farewell.comment, None);
    }

    #[test]
    fn test_resheader_values_are_not_entries() {
        let xml = indoc! {r#"
            <root>
              <resheader name="resmimetype">
                <value>text/microsoft-resx</value>
              </resheader>
              <resheader name="version">
                <value>2.0</value>
              </resheader>
            </root>
        "#};
        let format = Format::from_str(xml).unwrap();
        assert!(format.entries.is_empty());
    }

    #[test]
    fn test_missing_name_attribute() {
        let xml = indoc! {r#"
            <root>
              <data xml:space="preserve">
                <value>No name attr</value>
              </data>
            </root>
        "#};
        let result = Format::from_str(xml);
        assert!(result.is_err());
        let err = format!("{:?}", result.unwrap_err());
        assert!(err.contains("missing 'name'"));
    }

    #[test]
    fn test_empty_value() {
        let xml = indoc! {r#"
            <root>
              <data name="Empty" xml:space="preserve">
                <value></value>
              </data>
            </root>
        "#};
        let format = Format::from_str(xml).unwrap();
        assert_eq!(format.entries.len(), 1);
        assert_eq!(format.entries[0].value, "");
    }

    #[test]
    fn test_value_whitespace_preserved() {
        let xml = "<root><data name=\"Padded\"><value>  two  spaces  </value></data></root>";
        let format = Format::from_str(xml).unwrap();
        assert_eq!(format.entries[0].value, "  two  spaces  ");
    }

    #[test]
    fn test_markup_characters_escaped() {
        let format = Format {
            entries: vec![DataElement {
                name: "Markup".to_string(),
                value: "a < b && c > d".to_string(),
                comment: Some("\"quoted\"".to_string()),
            }],
        };
        let mut out = Vec::new();
        format.to_writer(&mut out).unwrap();
        let out_str = String::from_utf8(out).unwrap();
        assert!(!out_str.contains("a < b"));

        let reparsed = Format::from_str(&out_str).unwrap();
        assert_eq!(reparsed, format);
    }

    #[test]
    fn test_round_trip_serialization() {
        let format = Format {
            entries: vec![
                DataElement {
                    name: "Greeting".to_string(),
                    value: "Hello".to_string(),
                    comment: Some("shown at startup".to_string()),
                },
                DataElement {
                    name: "Multiline".to_string(),
                    value: "first\nsecond".to_string(),
                    comment: None,
                },
            ],
        };
        let mut out = Vec::new();
        format.to_writer(&mut out).unwrap();
        let out_str = String::from_utf8(out).unwrap();
        assert!(out_str.contains("text/microsoft-resx"));

        let reparsed = Format::from_str(&out_str).unwrap();
        assert_eq!(reparsed, format);
    }

    #[test]
    fn test_deterministic_output() {
        let format = Format {
            entries: vec![DataElement {
                name: "Greeting".to_string(),
                value: "Hello".to_string(),
                comment: None,
            }],
        };
        let mut first = Vec::new();
        let mut second = Vec::new();
        format.to_writer(&mut first).unwrap();
        format.to_writer(&mut second).unwrap();
        assert_eq!(first, second);
    }
}
