use cv_pdf::layout::Margins;
use cv_pdf::{
    render, render_with, Certification, Education, Experience, FontStyle, HorizontalAlign,
    LayoutConfig, Mm, PageGeometry, Personal, ResumeRecord, Skill, StandardMetrics, TextMeasurer,
    TextSpan,
};
use pretty_assertions::assert_eq;

fn named(name: &str) -> ResumeRecord {
    ResumeRecord {
        personal: Personal {
            name: name.into(),
            ..Personal::default()
        },
        ..ResumeRecord::default()
    }
}

fn numbered(prefix: &str, count: usize) -> String {
    (1..=count)
        .map(|n| format!("{prefix}{n}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn span<'a>(spans: &[&'a TextSpan], content: &str) -> &'a TextSpan {
    spans
        .iter()
        .find(|span| span.content == content)
        .copied()
        .unwrap_or_else(|| panic!("no span reading {content:?}"))
}

#[test]
fn name_only_renders_a_single_centred_line() {
    let document = render(&named("Jane Doe"));

    assert_eq!(document.page_count(), 1);
    assert_eq!(document.texts(), vec!["Jane Doe"]);
    assert!(document.outline.is_empty());

    let name = document.pages[0].text_spans().next().expect("has the name");
    assert_eq!(name.align, HorizontalAlign::Center);
    assert_eq!(name.style, FontStyle::Bold);
    assert_eq!(name.font_size, 24.0);
    assert_eq!(name.y, Mm(15.0));
    let width = StandardMetrics.measure("Jane Doe", 24.0, FontStyle::Bold);
    assert!((name.x + width / 2.0 - Mm(105.0)).0.abs() < 1e-3);
}

#[test]
fn blank_record_uses_the_placeholder_name() {
    let document = render(&ResumeRecord::default());
    assert_eq!(document.texts(), vec!["Your Name"]);
    assert_eq!(
        document.info.as_ref().and_then(|info| info.author.as_deref()),
        Some("Your Name")
    );
}

#[test]
fn eight_skills_split_four_and_four() {
    let mut record = named("Jane Doe");
    record.skills = (1..=8)
        .map(|n| Skill::new(format!("Skill {n}"), None))
        .collect();
    let document = render(&record);

    let spans: Vec<&TextSpan> = document.pages[0].text_spans().collect();
    let first = span(&spans, "Skill 1");
    let fifth = span(&spans, "Skill 5");
    assert_eq!(first.x, Mm(15.0));
    assert_eq!(fifth.x, Mm(105.0));
    assert_eq!(fifth.y, first.y);

    let fourth = span(&spans, "Skill 4");
    let eighth = span(&spans, "Skill 8");
    assert_eq!(fourth.y, first.y + Mm(18.0));
    assert_eq!(eighth.y, fourth.y);
    assert_eq!(eighth.x, Mm(105.0));
}

#[test]
fn skill_levels_are_shown_out_of_five() {
    let mut record = named("Jane Doe");
    record.skills = vec![Skill::new("Rust", Some(5)), Skill::new("Go", None)];
    let texts = render(&record).texts().join("|");
    assert!(texts.ends_with("Rust (5/5)|Go"));
}

#[test]
fn long_description_continues_at_the_top_of_the_next_page() {
    // masthead, a 30 line summary and the entry's title block leave exactly
    // 50mm for the description: ten 5mm lines
    let config = LayoutConfig {
        geometry: PageGeometry::new(
            cv_pdf::pagesize::A4,
            Margins::trbl(Mm(31.0), Mm(15.0), Mm(15.0), Mm(15.0)),
        ),
        ..LayoutConfig::default()
    };
    let mut record = named("Jane Doe");
    record.personal.summary = numbered("summary", 30);
    record.experiences = vec![Experience {
        title: "Engineer".into(),
        company: "Acme".into(),
        location: "Berlin".into(),
        start_date: "Jan 2020".into(),
        is_current: true,
        description: numbered("detail", 40),
        ..Experience::default()
    }];

    let document = render_with(&record, &config, &StandardMetrics);
    assert_eq!(document.page_count(), 2);

    let first = document.pages[0].texts();
    let tail = &first[first.len() - 13..];
    assert_eq!(tail[..3], ["Engineer | Acme", "Jan 2020 - Present", "Berlin"]);
    let expected_first: Vec<String> = (1..=10).map(|n| format!("detail{n}")).collect();
    assert_eq!(tail[3..], expected_first);

    let second = document.pages[1].texts();
    let expected_second: Vec<String> = (11..=40).map(|n| format!("detail{n}")).collect();
    assert_eq!(second, expected_second);
    let top = document.pages[1].text_spans().next().expect("has text");
    assert_eq!(top.y, Mm(31.0));
}

#[test]
fn missing_end_date_reads_present() {
    let mut record = named("Jane Doe");
    record.experiences = vec![Experience {
        title: "Engineer".into(),
        company: "Acme".into(),
        start_date: "Jan 2020".into(),
        end_date: None,
        is_current: false,
        ..Experience::default()
    }];
    assert!(render(&record).texts().contains(&"Jan 2020 - Present"));
}

#[test]
fn sections_appear_in_order_with_bookmarks() {
    let json = include_str!("../demos/jane-doe.json");
    let record = ResumeRecord::from_json(json).expect("demo record parses");
    let document = render(&record);

    let titles: Vec<&str> = document
        .outline
        .entries
        .iter()
        .map(|entry| entry.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Summary", "Experience", "Education", "Certifications", "Skills"]
    );

    let texts = document.texts();
    assert!(texts.contains(&"jane.doe@example.com | +49 30 1234567 | Berlin, Germany"));
    assert!(texts.contains(&"Credential: https://www.credly.com/badges/example"));
    assert!(texts.contains(&"Mar 2021 - Present"));
    assert!(texts.contains(&"Jun 2017 - Feb 2021"));

    let mut pdf = Vec::new();
    document.write(&mut pdf).expect("can write PDF");
    assert!(pdf.starts_with(b"%PDF-"));
    assert_eq!(record.suggested_file_name(), "Jane_Doe_resume.pdf");
}

#[test]
fn lorem_ipsum_flows_over_several_pages_without_losing_words() {
    let description = lipsum::lipsum(3000);
    let mut record = named("Jane Doe");
    record.education = vec![Education {
        degree: "PhD".into(),
        institution: "Somewhere".into(),
        start_date: "2010".into(),
        end_date: Some("2015".into()),
        description: Some(description.clone()),
        ..Education::default()
    }];
    record.certifications = vec![Certification {
        name: "Lorem Certificate".into(),
        issuer: "Ipsum Board".into(),
        ..Certification::default()
    }];

    let document = render(&record);
    assert!(document.page_count() >= 3);

    let placed: Vec<&str> = document
        .pages
        .iter()
        .flat_map(|page| page.text_spans())
        .filter(|span| {
            span.font_size == 10.0
                && span.style == FontStyle::Normal
                && span.align == HorizontalAlign::Left
        })
        .flat_map(|span| span.content.split(' '))
        .collect();
    let expected: Vec<&str> = description.split_whitespace().collect();
    assert_eq!(placed, expected);
    assert!(document.texts().contains(&"Lorem Certificate"));
}

#[test]
fn layout_is_deterministic() {
    let json = include_str!("../demos/jane-doe.json");
    let record = ResumeRecord::from_json(json).expect("demo record parses");
    assert_eq!(render(&record).pages, render(&record).pages);
}
