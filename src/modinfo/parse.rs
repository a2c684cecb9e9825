// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `ModInfo.xml` field extraction.
//!
//! ```text
//! V2:  <xml>
//!        <Name value="MyMod" />
//!        <DisplayName value="My Mod" />
//!        <Version value="1.0" />
//!      </xml>
//!
//! V1:  <xml>
//!        <ModInfo>
//!          <Name value="MyMod" />
//!        </ModInfo>
//!      </xml>
//! ```
//!
//! Fields are found at any depth; the first occurrence of each wins.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Fields read from one descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Descriptor {
    pub(crate) name: Option<String>,
    pub(crate) display_name: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) author: Option<String>,
    pub(crate) website: Option<String>,
}

impl Descriptor {
    fn slot(&mut self, element: &[u8]) -> Option<&mut Option<String>> {
        match element {
            b"Name" => Some(&mut self.name),
            b"DisplayName" => Some(&mut self.display_name),
            b"Version" => Some(&mut self.version),
            b"Description" => Some(&mut self.description),
            b"Author" => Some(&mut self.author),
            b"Website" => Some(&mut self.website),
            _ => None,
        }
    }

    fn read_field(&mut self, element: &BytesStart<'_>) -> Result<(), String> {
        let local_name = element.local_name();
        let Some(slot) = self.slot(local_name.as_ref()) else {
            return Ok(());
        };
        if slot.is_some() {
            return Ok(());
        }

        let attr = element
            .try_get_attribute("value")
            .map_err(|e| format!("bad attribute: {e}"))?;
        if let Some(attr) = attr {
            let value = attr
                .unescape_value()
                .map_err(|e| format!("bad attribute value: {e}"))?;
            *slot = Some(value.trim().to_string());
        }
        Ok(())
    }
}

/// Parses descriptor text, requiring a non-empty `Name`.
pub(crate) fn parse_descriptor(text: &str) -> Result<Descriptor, String> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut descriptor = Descriptor::default();
    let mut saw_element = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(element) | Event::Empty(element)) => {
                saw_element = true;
                descriptor.read_field(&element)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(format!(
                    "XML error at position {}: {e}",
                    reader.error_position()
                ));
            }
        }
    }

    if !saw_element {
        return Err("document has no elements".to_string());
    }

    match descriptor.name.as_deref() {
        None => Err("missing <Name value=\"...\"/> element".to_string()),
        Some("") => Err("<Name> element has an empty value".to_string()),
        Some(_) => Ok(descriptor),
    }
}
