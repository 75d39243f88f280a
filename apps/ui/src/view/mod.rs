//! Typed view model for the CV page.
//!
//! `build_page` maps a `CvDocument` onto the fixed section sequence:
//! hero, contact, experience, education, courses, then the joined-string
//! sections (languages, skills, interests) when their key is present.
//! Entries keep document order. Every field of the view structs is always
//! serialized (`None` becomes `null`) so the strict-mode templates never
//! hit a missing key.

pub mod templates;

use serde::Serialize;

use crate::models::cv::{Contact, Course, CvDocument, Education, Experience};

pub const LIST_SEPARATOR: &str = " • ";
pub const TECHNOLOGY_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageView {
    pub title: String,
    pub hero: HeroView,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeroView {
    pub full_name: String,
    pub description: String,
    /// `data:` URI of the embedded profile photo.
    pub photo_src: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SectionView {
    pub title: String,
    pub cards: Vec<CardView>,
}

/// One card. Rows are emitted top to bottom in this order:
/// heading (bold, optional ` – ` suffix), body line, muted dates,
/// labelled fields, free text.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CardView {
    pub heading: Option<String>,
    pub heading_suffix: Option<String>,
    pub body: Option<String>,
    pub dates: Option<String>,
    pub fields: Vec<FieldView>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldView {
    pub label: String,
    pub value: String,
}

impl FieldView {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Builds the page for `doc`. `photo_src` must already be resolved: the
/// photo is loaded before any section exists.
pub fn build_page(doc: &CvDocument, photo_src: String) -> PageView {
    let mut sections = vec![
        SectionView {
            title: "Información".to_string(),
            cards: vec![contact_card(&doc.contact)],
        },
        SectionView {
            title: "Experiencia Laboral".to_string(),
            cards: doc.experience.iter().map(experience_card).collect(),
        },
        SectionView {
            title: "Formación".to_string(),
            cards: doc.education.iter().map(education_card).collect(),
        },
        SectionView {
            title: "Cursos y Capacitaciones".to_string(),
            cards: doc.courses.iter().map(course_card).collect(),
        },
    ];

    let joined = [
        ("Idiomas", &doc.languages),
        ("Skills", &doc.skills),
        ("Intereses", &doc.interests),
    ];
    sections.extend(joined.into_iter().filter_map(|(title, items)| {
        items.as_deref().map(|items| joined_section(title, items))
    }));

    PageView {
        title: "Curriculum Vitae".to_string(),
        hero: HeroView {
            full_name: doc.header.full_name(),
            description: doc.header.description.clone(),
            photo_src,
        },
        sections,
    }
}

fn contact_card(contact: &Contact) -> CardView {
    CardView {
        fields: vec![
            FieldView::new("Fecha de nacimiento", &contact.birthdate),
            FieldView::new("Email", &contact.email),
            FieldView::new("Teléfono", &contact.phone),
            FieldView::new("Dirección", &contact.address),
            FieldView::new("LinkedIn", &contact.linkedin),
            FieldView::new("GitHub", &contact.github),
        ],
        ..CardView::default()
    }
}

fn experience_card(exp: &Experience) -> CardView {
    CardView {
        heading: Some(exp.position.clone()),
        heading_suffix: Some(exp.company.clone()),
        dates: Some(format!("{} - {}", exp.from, exp.to)),
        fields: vec![FieldView::new(
            "Tecnologías",
            &exp.technologies.join(TECHNOLOGY_SEPARATOR),
        )],
        ..CardView::default()
    }
}

fn education_card(edu: &Education) -> CardView {
    CardView {
        heading: Some(edu.title.clone()),
        body: Some(format!("{} – {}", edu.institution, edu.degree)),
        dates: Some(edu.date.clone()),
        ..CardView::default()
    }
}

fn course_card(course: &Course) -> CardView {
    CardView {
        heading: Some(course.name.clone()),
        body: Some(course.institution.clone()),
        dates: Some(course.date.clone()),
        ..CardView::default()
    }
}

fn joined_section(title: &str, items: &[String]) -> SectionView {
    SectionView {
        title: title.to_string(),
        cards: vec![CardView {
            text: Some(items.join(LIST_SEPARATOR)),
            ..CardView::default()
        }],
    }
}
