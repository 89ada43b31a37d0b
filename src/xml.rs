use std::fs;
use std::path::Path;

use quick_xml::se::Serializer;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::SdkError;

/// Comment placed at the top of every generated document.
pub const GENERATED_COMMENT: &str =
    "Generated by rimsdk, do NOT edit by hand. Your changes will be lost on the next build.";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Serialize `value` under the given root element name, indented, no
/// namespaces, no declaration.
pub fn to_xml<T: Serialize>(value: &T, root: &str) -> Result<String, SdkError> {
    let mut body = String::new();
    let mut ser = Serializer::with_root(&mut body, Some(root))?;
    ser.indent(' ', 2);
    value.serialize(ser)?;
    Ok(body)
}

/// Full generated document: declaration, generated-file comment, body.
pub fn to_document<T: Serialize>(value: &T, root: &str) -> Result<String, SdkError> {
    let body = to_xml(value, root)?;
    Ok(format!(
        "{XML_DECLARATION}\n<!-- {GENERATED_COMMENT} -->\n{body}\n"
    ))
}

/// Deserialize a document. Comments, the declaration and any DTD are
/// skipped by the reader.
pub fn from_xml<T: DeserializeOwned>(xml: &str) -> Result<T, SdkError> {
    Ok(quick_xml::de::from_str(xml)?)
}

pub fn read_file<T: DeserializeOwned>(path: &Path) -> Result<T, SdkError> {
    let content = fs::read_to_string(path)?;
    from_xml(&content)
}

/// Write `value` as a generated document, creating the parent directory
/// chain and overwriting any existing file.
pub fn write_file<T: Serialize>(path: &Path, value: &T, root: &str) -> Result<(), SdkError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_document(value, root)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
    #[serde(default)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_root_name_is_configurable() {
        let sample = Sample {
            name: "x".to_string(),
            count: 3,
        };
        let xml = to_xml(&sample, "Custom").unwrap();
        assert!(xml.starts_with("<Custom"));
        assert!(xml.trim_end().ends_with("</Custom>"));
    }

    #[test]
    fn test_document_leads_with_declaration_and_comment() {
        let doc = to_document(&Sample::default(), "Sample").unwrap();
        assert!(doc.starts_with(XML_DECLARATION));
        assert!(doc.contains(GENERATED_COMMENT));
        // the comment comes before the root element
        assert!(doc.find(GENERATED_COMMENT).unwrap() < doc.find("<Sample").unwrap());
    }

    #[test]
    fn test_round_trip() {
        let sample = Sample {
            name: "hello".to_string(),
            count: 42,
        };
        let doc = to_document(&sample, "Sample").unwrap();
        let back: Sample = from_xml(&doc).unwrap();
        assert_eq!(back, sample);
    }

    #[test]
    fn test_deserialize_tolerates_doctype() {
        let xml = "<!DOCTYPE Sample>\n<Sample><name>n</name><count>1</count></Sample>";
        let back: Sample = from_xml(xml).unwrap();
        assert_eq!(back.name, "n");
        assert_eq!(back.count, 1);
    }
}
