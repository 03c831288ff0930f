//! Conversion of a [`ResumeRecord`] into the blocks the layout engine places.
//!
//! Blocks are plain values: they are derived once per render, in display
//! order, and never change afterwards. Anything the record leaves empty is
//! left out here.

use crate::config::LayoutConfig;
use crate::resume::{Certification, Education, Experience, ResumeRecord, Skill};

/// What kind of timeline entry a [`Block::Entry`] came from. Entries of each
/// kind lay out identically but keep different spacing around them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Experience,
    Education,
    Certification,
}

/// A dated item with a bold title line, an italic subtitle and free-text body
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub kind: EntryKind,
    pub title: String,
    /// Right-aligned on the title's baseline
    pub date: Option<String>,
    pub subtitle: String,
    pub body: String,
    /// Small trailing line, used for credential URLs
    pub link: Option<String>,
}

/// One semantic unit of résumé content prior to layout
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// The person's name with their contact details, centred at the top of the first page
    Masthead {
        name: String,
        contact: Option<String>,
        website: Option<String>,
    },
    /// A section title, underlined with a rule across the content width
    Heading(String),
    Paragraph {
        text: String,
        font_size: f32,
    },
    Entry(Entry),
    /// Skills balanced across two columns
    SkillList(Vec<Skill>),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SectionKind {
    Masthead,
    Summary,
    Experience,
    Education,
    Certifications,
    Skills,
}

impl SectionKind {
    /// The heading printed above the section, if it has one
    pub fn title(&self) -> Option<&'static str> {
        match self {
            SectionKind::Masthead => None,
            SectionKind::Summary => Some("Summary"),
            SectionKind::Experience => Some("Experience"),
            SectionKind::Education => Some("Education"),
            SectionKind::Certifications => Some("Certifications"),
            SectionKind::Skills => Some("Skills"),
        }
    }
}

/// The blocks of one logical résumé section, heading first
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub blocks: Vec<Block>,
}

impl Section {
    fn titled(kind: SectionKind, body: Vec<Block>) -> Option<Section> {
        if body.is_empty() {
            return None;
        }

        let mut blocks = Vec::with_capacity(body.len() + 1);
        if let Some(title) = kind.title() {
            blocks.push(Block::Heading(title.to_string()));
        }
        blocks.extend(body);
        Some(Section { kind, blocks })
    }
}

/// Formats the date range shown beside an entry's title.
///
/// An open-ended range reads `"{start} - Present"`, and so does a range with no
/// end date that is not marked current. With no start date the end date (if
/// any) is shown alone.
///
/// ```
/// use cv_pdf::date_range;
///
/// assert_eq!(date_range("Jan 2020", None, true).as_deref(), Some("Jan 2020 - Present"));
/// assert_eq!(date_range("Jan 2020", Some("Mar 2022"), false).as_deref(), Some("Jan 2020 - Mar 2022"));
/// assert_eq!(date_range("Jan 2020", None, false).as_deref(), Some("Jan 2020 - Present"));
/// assert_eq!(date_range("", None, false), None);
/// ```
pub fn date_range(start: &str, end: Option<&str>, is_current: bool) -> Option<String> {
    let start = start.trim();
    let end = end.map(str::trim).filter(|end| !end.is_empty());

    if start.is_empty() {
        return match (is_current, end) {
            (false, Some(end)) => Some(end.to_string()),
            _ => None,
        };
    }

    match (is_current, end) {
        (false, Some(end)) => Some(format!("{start} - {end}")),
        _ => Some(format!("{start} - Present")),
    }
}

/// Joins the non-empty parts with `separator`
fn join_present(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl Entry {
    /// An entry with nothing to print at all
    fn is_blank(&self) -> bool {
        self.title.is_empty()
            && self.date.is_none()
            && self.subtitle.is_empty()
            && self.body.trim().is_empty()
            && self.link.is_none()
    }

    fn from_experience(experience: &Experience) -> Entry {
        Entry {
            kind: EntryKind::Experience,
            title: join_present(&[experience.title.as_str(), experience.company.as_str()], " | "),
            date: date_range(
                &experience.start_date,
                experience.end_date.as_deref(),
                experience.is_current,
            ),
            subtitle: experience.location.trim().to_string(),
            body: experience.description.clone(),
            link: None,
        }
    }

    fn from_education(education: &Education) -> Entry {
        Entry {
            kind: EntryKind::Education,
            title: join_present(
                &[education.degree.as_str(), education.institution.as_str()],
                " | ",
            ),
            date: date_range(&education.start_date, education.end_date.as_deref(), false),
            subtitle: education.location.trim().to_string(),
            body: education.description.clone().unwrap_or_default(),
            link: None,
        }
    }

    fn from_certification(certification: &Certification) -> Entry {
        Entry {
            kind: EntryKind::Certification,
            title: certification.name.trim().to_string(),
            date: non_empty(certification.date.as_ref()),
            subtitle: certification.issuer.trim().to_string(),
            body: certification.description.clone().unwrap_or_default(),
            link: non_empty(certification.url.as_ref()).map(|url| format!("Credential: {url}")),
        }
    }
}

fn entries<T>(items: &[T], convert: fn(&T) -> Entry) -> Vec<Block> {
    items
        .iter()
        .map(convert)
        .filter(|entry| !entry.is_blank())
        .map(Block::Entry)
        .collect()
}

/// Derives the sections of a résumé in display order: masthead, summary,
/// experience, education, certifications and skills. Sections with nothing to
/// show are omitted; the masthead is always present.
pub fn sections_from_record(record: &ResumeRecord, config: &LayoutConfig) -> Vec<Section> {
    let personal = &record.personal;
    let mut sections = Vec::with_capacity(6);

    let name = match personal.name.trim() {
        "" => config.placeholder_name.clone(),
        name => name.to_string(),
    };
    let contact = join_present(
        &[
            personal.email.as_str(),
            personal.phone.as_str(),
            personal.location.as_str(),
        ],
        " | ",
    );
    sections.push(Section {
        kind: SectionKind::Masthead,
        blocks: vec![Block::Masthead {
            name,
            contact: Some(contact).filter(|contact| !contact.is_empty()),
            website: non_empty(personal.website.as_ref()),
        }],
    });

    let summary = if personal.summary.trim().is_empty() {
        Vec::new()
    } else {
        vec![Block::Paragraph {
            text: personal.summary.clone(),
            font_size: config.font_sizes.summary,
        }]
    };

    let skills: Vec<Skill> = record
        .skills
        .iter()
        .filter(|skill| !skill.name.trim().is_empty())
        .cloned()
        .collect();
    let skills = if skills.is_empty() {
        Vec::new()
    } else {
        vec![Block::SkillList(skills)]
    };

    sections.extend(
        [
            (SectionKind::Summary, summary),
            (
                SectionKind::Experience,
                entries(&record.experiences, Entry::from_experience),
            ),
            (
                SectionKind::Education,
                entries(&record.education, Entry::from_education),
            ),
            (
                SectionKind::Certifications,
                entries(&record.certifications, Entry::from_certification),
            ),
            (SectionKind::Skills, skills),
        ]
        .into_iter()
        .filter_map(|(kind, body)| Section::titled(kind, body)),
    );

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::Personal;
    use pretty_assertions::assert_eq;

    #[test]
    fn date_range_formats() {
        assert_eq!(
            date_range("Jan 2020", None, true).as_deref(),
            Some("Jan 2020 - Present")
        );
        assert_eq!(
            date_range("Jan 2020", Some("Mar 2022"), false).as_deref(),
            Some("Jan 2020 - Mar 2022")
        );
        // current wins over a stale end date
        assert_eq!(
            date_range("Jan 2020", Some("Mar 2022"), true).as_deref(),
            Some("Jan 2020 - Present")
        );
        assert_eq!(
            date_range("Jan 2020", Some("  "), false).as_deref(),
            Some("Jan 2020 - Present")
        );
        assert_eq!(date_range("", Some("Mar 2022"), false).as_deref(), Some("Mar 2022"));
        assert_eq!(date_range(" ", None, true), None);
    }

    #[test]
    fn empty_record_has_only_a_placeholder_masthead() {
        let sections = sections_from_record(&ResumeRecord::default(), &LayoutConfig::default());
        assert_eq!(
            sections,
            vec![Section {
                kind: SectionKind::Masthead,
                blocks: vec![Block::Masthead {
                    name: "Your Name".into(),
                    contact: None,
                    website: None,
                }],
            }]
        );
    }

    #[test]
    fn sections_follow_display_order() {
        let record = ResumeRecord {
            personal: Personal {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                location: "Berlin".into(),
                website: Some("https://jane.dev".into()),
                summary: "Builds things.".into(),
                ..Personal::default()
            },
            experiences: vec![Experience {
                title: "Engineer".into(),
                company: "Acme".into(),
                start_date: "Jan 2020".into(),
                is_current: true,
                ..Experience::default()
            }],
            education: vec![Education::default()],
            certifications: vec![Certification {
                name: "CKA".into(),
                issuer: "CNCF".into(),
                url: Some("https://cncf.io/cka".into()),
                ..Certification::default()
            }],
            skills: vec![Skill::new("Rust", Some(5))],
        };

        let sections = sections_from_record(&record, &LayoutConfig::default());
        let kinds: Vec<SectionKind> = sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Masthead,
                SectionKind::Summary,
                SectionKind::Experience,
                SectionKind::Certifications,
                SectionKind::Skills,
            ]
        );

        assert_eq!(
            sections[0].blocks[0],
            Block::Masthead {
                name: "Jane Doe".into(),
                contact: Some("jane@example.com | Berlin".into()),
                website: Some("https://jane.dev".into()),
            }
        );
        assert_eq!(sections[2].blocks[0], Block::Heading("Experience".into()));
        match &sections[2].blocks[1] {
            Block::Entry(entry) => {
                assert_eq!(entry.title, "Engineer | Acme");
                assert_eq!(entry.date.as_deref(), Some("Jan 2020 - Present"));
                assert_eq!(entry.subtitle, "");
            }
            other => panic!("expected an entry, got {other:?}"),
        }
        match &sections[3].blocks[1] {
            Block::Entry(entry) => {
                assert_eq!(entry.date, None);
                assert_eq!(entry.link.as_deref(), Some("Credential: https://cncf.io/cka"));
            }
            other => panic!("expected an entry, got {other:?}"),
        }
    }

    #[test]
    fn unnamed_skills_are_dropped() {
        let record = ResumeRecord {
            skills: vec![Skill::new(" ", Some(3))],
            ..ResumeRecord::default()
        };
        let sections = sections_from_record(&record, &LayoutConfig::default());
        assert_eq!(sections.len(), 1);
    }
}
