// src/inspect/version.rs
// =============================================================================
// Works out which HTML version a page declares from its <!DOCTYPE ...>.
//
// html5ever keeps the doctype as a node with a name, a public id and a system
// id. The ids are the "attributes" we look at:
//
//   <!DOCTYPE html>                                          -> 5
//   <!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" ...>   -> 4.01
//   <!DOCTYPE html PUBLIC "-//IETF//DTD HTML 2.0//EN">       -> 2.0
//   anything else we don't recognise                         -> <2.0
// =============================================================================

use scraper::node::Doctype;
use serde::Serialize;
use std::fmt;

/// HTML version declared by a document's doctype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HtmlVersion {
    #[serde(rename = "5")]
    Html5,
    #[serde(rename = "4.01")]
    Html4_01,
    #[serde(rename = "4.0")]
    Html4_0,
    #[serde(rename = "3.2")]
    Html3_2,
    #[serde(rename = "3.0")]
    Html3_0,
    #[serde(rename = "2.0")]
    Html2_0,
    #[serde(rename = "<2.0")]
    Older,
}

// Checked in this order, first hit wins. " html 4.0" is a prefix of
// " html 4.01", so 4.01 has to come first.
const MARKERS: [(&str, HtmlVersion); 5] = [
    (" html 4.01", HtmlVersion::Html4_01),
    (" html 4.0", HtmlVersion::Html4_0),
    (" html 3.2", HtmlVersion::Html3_2),
    (" html 3.0", HtmlVersion::Html3_0),
    (" html 2.0", HtmlVersion::Html2_0),
];

impl HtmlVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            HtmlVersion::Html5 => "5",
            HtmlVersion::Html4_01 => "4.01",
            HtmlVersion::Html4_0 => "4.0",
            HtmlVersion::Html3_2 => "3.2",
            HtmlVersion::Html3_0 => "3.0",
            HtmlVersion::Html2_0 => "2.0",
            HtmlVersion::Older => "<2.0",
        }
    }

    /// Classifies a doctype node. Empty public/system ids count as absent.
    pub fn from_doctype(doctype: &Doctype) -> Self {
        let attrs: Vec<&str> = [doctype.public_id(), doctype.system_id()]
            .into_iter()
            .filter(|value| !value.is_empty())
            .collect();

        Self::classify(&attrs)
    }

    /// Classifies the attribute values of a doctype.
    ///
    /// No attributes at all means `<!DOCTYPE html>`, i.e. HTML5. Otherwise
    /// each value is matched (case-insensitively) against the known DTD
    /// markers; a doctype that matches none of them is older than 2.0.
    pub fn classify(attrs: &[&str]) -> Self {
        if attrs.is_empty() {
            return HtmlVersion::Html5;
        }

        for value in attrs {
            let value = value.to_ascii_lowercase();
            for (marker, version) in MARKERS {
                if value.contains(marker) {
                    return version;
                }
            }
        }

        HtmlVersion::Older
    }
}

impl fmt::Display for HtmlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
