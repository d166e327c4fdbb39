use crate::reader::CountryRecord;
use quick_xml::escape::escape;

pub const METADATA_XMLNS: &str = "http://soap.sforce.com/2006/04/metadata";
pub const MASTER_LABEL: &str = "App Countries";

/// Renders the GlobalValueSet document for the given records, one
/// `customValue` entry per record in input order. Pure string-to-string
/// transformation; writing the file is the caller's job.
pub fn render_value_set(records: &[CountryRecord]) -> String {
    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    doc.push_str(&format!("<GlobalValueSet xmlns=\"{}\">\n", METADATA_XMLNS));

    for record in records {
        doc.push_str("    <customValue>\n");
        doc.push_str(&format!("        <fullName>{}</fullName>\n", escape(&record.code)));
        doc.push_str("        <default>false</default>\n");
        doc.push_str(&format!("        <label>{}</label>\n", escape(&record.name)));
        doc.push_str("    </customValue>\n");
    }

    doc.push_str(&format!("    <masterLabel>{}</masterLabel>\n", MASTER_LABEL));
    doc.push_str("    <sorted>true</sorted>\n");
    doc.push_str("</GlobalValueSet>\n");
    doc
}
