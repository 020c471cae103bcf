//! Renders an `Mpd` tree to indented XML.
//! Attribute order and the omission of empty/zero optional fields are decided
//! here explicitly, element by element.

use std::io::{Cursor, Write};

use quick_xml::escape::escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::{debug, instrument};

use crate::error::{ManifestError, Result};
use crate::mpd::{AdaptationSet, DescriptorType, Mpd, Period, Representation, SegmentTemplate};

/// Declaration written ahead of every rendered document.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

const INDENT: usize = 4;

/**
 * Serialize the manifest to UTF-8 XML, without the declaration.
 * Fails if any value holds a character XML 1.0 cannot represent.
 */
#[instrument(skip_all)]
pub fn render(mpd: &Mpd) -> Result<Vec<u8>> {
    let mut writer = MpdWriter {
        writer: Writer::new_with_indent(Cursor::new(Vec::new()), b' ', INDENT),
    };
    writer.write_mpd(mpd)?;

    let output = writer.writer.into_inner().into_inner();
    debug!("Rendered manifest of {} bytes", output.len());
    Ok(output)
}

/// Write the XML declaration followed by `body`, then flush.
pub fn emit<W: Write>(mut out: W, body: &[u8]) -> Result<()> {
    out.write_all(XML_HEADER.as_bytes())?;
    out.write_all(body)?;
    out.flush()?;
    Ok(())
}

struct MpdWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl MpdWriter {
    fn write_mpd(&mut self, mpd: &Mpd) -> Result<()> {
        let mut root = BytesStart::new("MPD");
        push_attr(&mut root, "format", &mpd.format)?;
        push_attr(&mut root, "type", &mpd.mpd_type)?;
        self.write(Event::Start(root))?;

        self.write_text_element("BaseURL", &mpd.base_url)?;
        for period in &mpd.periods {
            self.write_period(period)?;
        }

        self.write(Event::End(BytesEnd::new("MPD")))
    }

    fn write_period(&mut self, period: &Period) -> Result<()> {
        let mut el = BytesStart::new("Period");
        el.push_attribute(("id", period.id.to_string().as_str()));
        push_attr(&mut el, "duration", &period.duration)?;
        self.write(Event::Start(el))?;

        for set in &period.adaptation_sets {
            self.write_adaptation_set(set)?;
        }

        self.write(Event::End(BytesEnd::new("Period")))
    }

    fn write_adaptation_set(&mut self, set: &AdaptationSet) -> Result<()> {
        let mut el = BytesStart::new("AdaptationSet");
        el.push_attribute(("id", set.id.to_string().as_str()));
        el.push_attribute(("viewId", set.view_id.to_string().as_str()));
        el.push_attribute(("srcObjectId", set.src_object_id.to_string().as_str()));
        self.write(Event::Start(el))?;

        for descriptor in &set.supplemental_properties {
            self.write_descriptor("SupplementalProperty", descriptor)?;
        }
        for rep in &set.representations {
            self.write_representation(rep)?;
        }

        self.write(Event::End(BytesEnd::new("AdaptationSet")))
    }

    fn write_descriptor(&mut self, tag: &str, descriptor: &DescriptorType) -> Result<()> {
        let mut el = BytesStart::new(tag);
        push_attr(&mut el, "schemeIdUri", &descriptor.scheme_id_uri)?;
        push_optional_attr(&mut el, "value", &descriptor.value)?;
        push_optional_attr(&mut el, "id", &descriptor.id)?;
        self.write(Event::Empty(el))
    }

    fn write_representation(&mut self, rep: &Representation) -> Result<()> {
        let mut el = BytesStart::new("Representation");
        el.push_attribute(("id", rep.id.to_string().as_str()));
        for (key, value) in [("density", rep.density), ("width", rep.width), ("height", rep.height)] {
            if value != 0 {
                el.push_attribute((key, value.to_string().as_str()));
            }
        }
        el.push_attribute(("bandwidth", rep.bandwidth.to_string().as_str()));
        self.write(Event::Start(el))?;

        if !rep.base_url.is_empty() {
            self.write_text_element("BaseURL", &rep.base_url)?;
        }
        self.write_segment_template(&rep.segment_template)?;

        self.write(Event::End(BytesEnd::new("Representation")))
    }

    fn write_segment_template(&mut self, template: &SegmentTemplate) -> Result<()> {
        let mut el = BytesStart::new("SegmentTemplate");
        push_attr(&mut el, "media", &template.media)?;
        push_attr(&mut el, "duration", &template.duration)?;
        push_optional_attr(&mut el, "timescale", &template.timescale)?;
        push_attr(&mut el, "startNumber", &template.start_number)?;
        self.write(Event::Empty(el))
    }

    fn write_text_element(&mut self, tag: &str, text: &str) -> Result<()> {
        check_xml_chars(tag, text)?;
        self.write(Event::Start(BytesStart::new(tag)))?;
        self.write(Event::Text(BytesText::new(text)))?;
        self.write(Event::End(BytesEnd::new(tag)))
    }

    fn write(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| ManifestError::Xml(e.to_string()))
    }
}

fn push_attr(el: &mut BytesStart<'_>, key: &'static str, value: &str) -> Result<()> {
    check_xml_chars(key, value)?;
    // Parsers normalise raw whitespace in attribute values to spaces
    let escaped = escape(value)
        .replace('\t', "&#x9;")
        .replace('\n', "&#xA;")
        .replace('\r', "&#xD;");
    el.push_attribute((key.as_bytes(), escaped.as_bytes()));
    Ok(())
}

fn push_optional_attr(el: &mut BytesStart<'_>, key: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    push_attr(el, key, value)
}

/// Reject characters outside the XML 1.0 `Char` production.
fn check_xml_chars(field: &str, value: &str) -> Result<()> {
    let invalid = value.chars().find(|&c| {
        matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
    });

    match invalid {
        Some(character) => Err(ManifestError::InvalidCharacter {
            field: field.to_string(),
            character,
        }),
        None => Ok(()),
    }
}
