// src/catalog.rs
//
// Course outline: units and the sections whose completion is tracked.

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Unit {
    pub id: &'static str,
    pub title: &'static str,
    pub hours: u32,
    pub sections: &'static [Section],
}

impl Unit {
    /// Key stored in the completion set, e.g. `unit1-www`.
    pub fn section_key(&self, section: &Section) -> String {
        format!("{}-{}", self.id, section.id)
    }
}

const fn s(id: &'static str, title: &'static str) -> Section {
    Section { id, title }
}

pub static UNITS: [Unit; 3] = [
    Unit {
        id: "unit1",
        title: "Unit I: Introduction to Web Technology",
        hours: 15,
        sections: &[
            s("introduction", "Introduction to Internet"),
            s("www", "World Wide Web (WWW)"),
            s("connectivity", "Internet Connectivity"),
            s("protocols", "Web Protocols"),
            s("services", "Internet Services"),
            s("browsers", "Web Browsers"),
            s("servers", "Web Servers"),
            s("hosting", "Web Hosting & DNS"),
        ],
    },
    Unit {
        id: "unit2",
        title: "Unit II: Introduction to Markup Languages",
        hours: 20,
        sections: &[
            s("markup-intro", "Introduction to Markup Languages"),
            s("html-basics", "HTML Basics"),
            s("html-structure", "HTML Document Structure"),
            s("html-formatting", "Text Formatting & Links"),
            s("html-lists-media", "Lists, Images & Media"),
            s("html-tables", "HTML Tables"),
            s("html-frames", "HTML Frames"),
            s("html-forms", "HTML Forms"),
        ],
    },
    Unit {
        id: "unit3",
        title: "Unit III: Cascading Style Sheets (CSS)",
        hours: 10,
        sections: &[
            s("css-intro", "Introduction to CSS"),
            s("css-syntax", "CSS Syntax & Selectors"),
            s("css-implementation", "How to Add CSS"),
            s("css-properties", "CSS Properties"),
            s("css-layout", "Layout Properties"),
            s("css-advanced", "Advanced CSS Features"),
        ],
    },
];

pub fn unit(id: &str) -> Option<&'static Unit> {
    UNITS.iter().find(|u| u.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_keys_are_unique_across_units() {
        let keys: Vec<String> = UNITS
            .iter()
            .flat_map(|u| u.sections.iter().map(move |s| u.section_key(s)))
            .collect();
        let unique: HashSet<&String> = keys.iter().collect();
        assert_eq!(keys.len(), unique.len());
        assert_eq!(keys.len(), 22);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(unit("unit3").map(|u| u.sections.len()), Some(6));
        assert!(unit("unit4").is_none());
    }
}
