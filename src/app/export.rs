//! PDF export of the paper. The document is rebuilt from the resume model
//! rather than rasterized from the screen, but it keeps the same page
//! contract: US-letter portrait, zero page margin (the paper carries its
//! own padding), fixed output name.

use std::path::{Path, PathBuf};

use genpdf::{
    Alignment, Document, Element as _, PaperSize, SimplePageDecorator, elements, fonts, style,
};

use super::error::{AppError, Result};
use super::resume::Resume;
use super::typography::PaperMetrics;

pub const EXPORT_FILE_NAME: &str = "Resume_Shiwen_Jiang.pdf";

/// Directories tried in order for a usable serif family. The first entry
/// lets a bundled copy override the system fonts.
const FONT_SEARCH: &[(&str, &str)] = &[
    ("assets/fonts", "LiberationSerif"),
    ("/usr/share/fonts/truetype/liberation", "LiberationSerif"),
    ("/usr/share/fonts/truetype/liberation2", "LiberationSerif"),
    ("/usr/share/fonts/liberation", "LiberationSerif"),
    ("/usr/local/share/fonts/liberation", "LiberationSerif"),
];

fn load_font_family() -> Result<fonts::FontFamily<fonts::FontData>> {
    for (dir, name) in FONT_SEARCH {
        let path = Path::new(dir);
        if !path.is_dir() {
            continue;
        }
        if let Ok(family) = fonts::from_files(path, name, None) {
            return Ok(family);
        }
    }
    Err(AppError::Export(
        "no serif font family found; install the Liberation fonts or place them under assets/fonts"
            .to_string(),
    ))
}

/// Where the exported file lands: the user's download directory, falling
/// back to the working directory.
pub fn export_path() -> PathBuf {
    dirs::download_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(EXPORT_FILE_NAME)
}

fn contact_line(resume: &Resume) -> String {
    resume.contact.join("  |  ")
}

fn bullet_line(text: &str) -> String {
    format!("\u{2022}  {}", text)
}

/// Collapse the hard-wrapped summary into one run; the PDF wraps on its own.
fn flow_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn heading(text: &str, size: u8) -> impl genpdf::Element {
    elements::Paragraph::new(text).styled(style::Style::new().bold().with_font_size(size))
}

fn build_document(resume: &Resume) -> Result<Document> {
    let family = load_font_family()?;
    let m = PaperMetrics::BASE;

    let mut doc = Document::new(family);
    doc.set_title(format!("{} - Resume", resume.name));
    doc.set_paper_size(PaperSize::Letter);
    doc.set_font_size(m.body_size as u8);
    doc.set_line_spacing(1.25);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(0);
    doc.set_page_decorator(decorator);

    let mut content = elements::LinearLayout::vertical();

    content.push(
        elements::Paragraph::new(resume.name)
            .aligned(Alignment::Center)
            .styled(style::Style::new().bold().with_font_size(m.name_size as u8)),
    );
    content.push(
        elements::Paragraph::new(resume.role)
            .aligned(Alignment::Center)
            .styled(style::Style::new().with_font_size(m.role_size as u8)),
    );
    content.push(
        elements::Paragraph::new(contact_line(resume))
            .aligned(Alignment::Center)
            .styled(style::Style::new().with_font_size(m.contact_size as u8)),
    );
    content.push(elements::Break::new(1.5));

    content.push(heading("SUMMARY", m.section_title_size as u8));
    content.push(elements::Paragraph::new(flow_text(resume.summary)));
    content.push(elements::Break::new(1.0));

    content.push(heading("EXPERIENCE", m.section_title_size as u8));
    for item in &resume.experience {
        content.push(
            elements::Paragraph::new(format!("{}  ({})", item.company, item.period)).styled(
                style::Style::new()
                    .bold()
                    .with_font_size(m.company_size as u8),
            ),
        );
        content.push(
            elements::Paragraph::new(item.title)
                .styled(style::Style::new().italic().with_font_size(m.detail_size as u8)),
        );
        for bullet in item.bullets {
            content.push(elements::Paragraph::new(bullet_line(bullet)));
        }
        content.push(elements::Break::new(0.5));
    }

    content.push(heading("EDUCATION", m.section_title_size as u8));
    for item in &resume.education {
        content.push(
            elements::Paragraph::new(format!("{}  ({})", item.school, item.period)).styled(
                style::Style::new()
                    .bold()
                    .with_font_size(m.company_size as u8),
            ),
        );
        content.push(
            elements::Paragraph::new(item.degree)
                .styled(style::Style::new().italic().with_font_size(m.detail_size as u8)),
        );
        content.push(elements::Paragraph::new(item.note));
        content.push(elements::Break::new(0.5));
    }

    content.push(heading("SKILLS", m.section_title_size as u8));
    content.push(elements::Paragraph::new(resume.skills.join(", ")));

    doc.push(content.padded(15));

    Ok(doc)
}

/// Render the resume to `Resume_Shiwen_Jiang.pdf`. Returns the output path.
pub fn export_resume(resume: &Resume) -> Result<PathBuf> {
    let doc = build_document(resume)?;
    let path = export_path();
    doc.render_to_file(&path)
        .map_err(|e| AppError::Export(e.to_string()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_path_has_fixed_file_name() {
        let path = export_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(EXPORT_FILE_NAME)
        );
    }

    #[test]
    fn test_contact_line_joins_all_entries() {
        let resume = Resume::shiwen_jiang();
        let line = contact_line(&resume);
        for entry in resume.contact {
            assert!(line.contains(entry));
        }
    }

    #[test]
    fn test_bullet_line_prefix() {
        assert_eq!(bullet_line("Shipped it"), "\u{2022}  Shipped it");
    }

    #[test]
    fn test_flow_text_collapses_hard_wraps() {
        assert_eq!(flow_text("one\ntwo   three"), "one two three");
    }
}
