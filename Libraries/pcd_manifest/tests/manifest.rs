use std::collections::HashMap;

use pcd_manifest::config::BANDWIDTHS;
use pcd_manifest::{render, MpdBuilder};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Tag and attributes of one start/empty element.
#[derive(Debug)]
struct Element {
    tag: String,
    attrs: HashMap<String, String>,
}

impl Element {
    fn attr(&self, key: &str) -> &str {
        self.attrs.get(key).map(String::as_str).unwrap_or_default()
    }
}

fn elements(xml: &[u8]) -> Vec<Element> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut out = Vec::new();

    loop {
        match reader.read_event_into(&mut buf).unwrap() {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let tag = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                let attrs = e
                    .attributes()
                    .map(|a| {
                        let a = a.unwrap();
                        let key = String::from_utf8(a.key.as_ref().to_vec()).unwrap();
                        (key, a.unescape_value().unwrap().to_string())
                    })
                    .collect();
                out.push(Element { tag, attrs });
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    out
}

fn of_tag<'a>(elements: &'a [Element], tag: &str) -> Vec<&'a Element> {
    elements.iter().filter(|e| e.tag == tag).collect()
}

#[test]
fn adaptation_sets_cover_every_object_and_view() {
    for objects in [0u32, 1, 2, 5] {
        let xml = render(&MpdBuilder::static_pcd().objects(objects).build()).unwrap();
        let els = elements(&xml);
        let sets = of_tag(&els, "AdaptationSet");

        assert_eq!(sets.len(), objects as usize * 6);
        for (position, set) in sets.iter().enumerate() {
            assert_eq!(set.attr("id"), position.to_string());
            assert_eq!(set.attr("viewId"), (position % 6).to_string());
            assert_eq!(set.attr("srcObjectId"), (position / 6).to_string());
        }
        assert_eq!(of_tag(&els, "Period").len(), 1);
    }
}

#[test]
fn representations_follow_bandwidth_table() {
    let xml = render(&MpdBuilder::static_pcd().objects(2).build()).unwrap();
    let els = elements(&xml);

    let mut view = None;
    let mut seen = 0;
    for el in &els {
        match el.tag.as_str() {
            "AdaptationSet" => {
                view = Some(el.attr("viewId").parse::<usize>().unwrap());
                seen = 0;
            }
            "Representation" => {
                let v = view.unwrap();
                assert_eq!(el.attr("id"), (seen + 1).to_string());
                assert_eq!(el.attr("bandwidth"), BANDWIDTHS[seen][v].to_string());
                seen += 1;
            }
            "SegmentTemplate" => {
                let v = view.unwrap();
                assert_eq!(
                    el.attr("media"),
                    format!("longdress/S26C2AIR0$RepresentationID$_F30_$Number$_{v}.bin")
                );
                assert_eq!(el.attr("startNumber"), "1051");
            }
            _ => {}
        }
    }
    assert_eq!(of_tag(&els, "Representation").len(), 2 * 6 * 3);
}

#[test]
fn front_view_bandwidths_of_default_manifest() {
    let xml = render(&pcd_manifest::build()).unwrap();
    let els = elements(&xml);
    let bandwidths: Vec<&str> = of_tag(&els, "Representation")
        .iter()
        .take(3)
        .map(|r| r.attr("bandwidth"))
        .collect();
    assert_eq!(bandwidths, vec!["103424", "136192", "186368"]);

    let root = &els[0];
    assert_eq!(root.tag, "MPD");
    assert_eq!(root.attr("format"), "pointcloud/pcd");
    assert_eq!(root.attr("type"), "static");
    assert!(of_tag(&els, "SupplementalProperty").is_empty());
}

#[test]
fn rendering_is_deterministic() {
    let first = render(&pcd_manifest::build()).unwrap();
    let second = render(&pcd_manifest::build()).unwrap();
    assert_eq!(first, second);
}
