//! The paper: a letter-sized surface inside a scroll region. Typography and
//! zoom never touch the widget tree's structure; they re-run the layout
//! pass, which recomputes every position and label size from the scaled
//! metric table.

use fltk::{
    app::Sender,
    enums::{Align, Color, Event, Font, FrameType},
    frame::Frame,
    group::{Group, Scroll, ScrollType},
    prelude::*,
};

use crate::app::messages::Message;
use crate::app::resume::Resume;
use crate::app::selection::SectionId;
use crate::app::typography::{DocumentStyle, FontChoice, PaperMetrics};
use crate::app::zoom::ZoomLevel;

/// US letter at 96 dpi, at 100% zoom.
pub const PAGE_WIDTH: i32 = 816;
pub const PAGE_HEIGHT: i32 = 1056;
const PAGE_TOP_GAP: i32 = 24;

fn paper_color() -> Color {
    Color::from_rgb(255, 255, 255)
}

fn rule_color() -> Color {
    Color::from_rgb(214, 214, 214)
}

fn selection_tint() -> Color {
    Color::from_rgb(226, 238, 252)
}

/// One interactive resume block: the summary, an experience entry, or an
/// education entry.
pub struct BlockWidgets {
    pub id: SectionId,
    pub group: Group,
    pub kicker: Option<Frame>,
    pub primary: Option<Frame>,
    pub meta: Option<Frame>,
    pub body: Frame,
    pub body_lines: i32,
}

/// Non-interactive sidebar block (contact, skills).
pub struct SidebarBlock {
    pub title: Frame,
    pub body: Frame,
    pub body_lines: i32,
}

pub struct PaperWidgets {
    pub scroll: Scroll,
    pub surface: Group,
    pub name: Frame,
    pub role: Frame,
    pub rule: Frame,
    pub contact: SidebarBlock,
    pub skills: SidebarBlock,
    pub summary: BlockWidgets,
    pub exp_heading: Frame,
    pub experience: Vec<BlockWidgets>,
    pub edu_heading: Frame,
    pub education: Vec<BlockWidgets>,
}

impl PaperWidgets {
    pub fn blocks_mut(&mut self) -> Vec<&mut BlockWidgets> {
        let mut blocks = vec![&mut self.summary];
        blocks.extend(self.experience.iter_mut());
        blocks.extend(self.education.iter_mut());
        blocks
    }
}

pub fn face(family: FontChoice) -> Font {
    match family {
        FontChoice::Serif => Font::Times,
        FontChoice::Sans => Font::Helvetica,
        FontChoice::Typewriter => Font::Courier,
        FontChoice::Screen => Font::Screen,
    }
}

pub fn face_bold(family: FontChoice) -> Font {
    match family {
        FontChoice::Serif => Font::TimesBold,
        FontChoice::Sans => Font::HelveticaBold,
        FontChoice::Typewriter => Font::CourierBold,
        FontChoice::Screen => Font::ScreenBold,
    }
}

fn text_frame(label: &str) -> Frame {
    let mut frame = Frame::new(0, 0, 0, 0, None);
    frame.set_label(label);
    frame.set_align(Align::Inside | Align::Left | Align::Top);
    frame
}

fn line_count(text: &str) -> i32 {
    text.lines().count().max(1) as i32
}

/// Height of a single text line at the given label size.
fn text_h(size: i32) -> i32 {
    size + size / 2
}

fn build_block(
    id: SectionId,
    kicker: Option<&str>,
    primary: Option<&str>,
    meta: Option<&str>,
    body_text: &str,
    sender: &Sender<Message>,
) -> BlockWidgets {
    let mut group = Group::new(0, 0, 0, 0, None);
    let kicker = kicker.map(text_frame);
    let primary = primary.map(text_frame);
    let meta = meta.map(text_frame);
    let body = text_frame(body_text);
    group.end();

    group.set_frame(FrameType::FlatBox);
    group.set_color(paper_color());
    group.handle({
        let s = *sender;
        move |_, ev| {
            if ev == Event::Push {
                s.send(Message::SelectSection(id));
                return true;
            }
            false
        }
    });

    BlockWidgets {
        id,
        group,
        kicker,
        primary,
        meta,
        body_lines: line_count(body_text),
        body,
    }
}

fn build_sidebar_block(title: &str, body_text: &str) -> SidebarBlock {
    let title = text_frame(title);
    let body = text_frame(body_text);
    SidebarBlock {
        title,
        body_lines: line_count(body_text),
        body,
    }
}

fn bullet_text(bullets: &[&str]) -> String {
    bullets
        .iter()
        .map(|b| format!("\u{2022}  {}", b))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the paper widget tree inside the current group (the scroll).
/// Geometry is all zero until the first layout pass.
pub fn build_paper(resume: &Resume, sender: &Sender<Message>) -> PaperWidgets {
    let mut scroll = Scroll::new(0, 0, 0, 0, None);
    scroll.set_type(ScrollType::Both);
    scroll.set_scrollbar_size(14);
    scroll.handle({
        let s = *sender;
        move |_, ev| {
            if ev == Event::Push {
                // Clicks that no block claims clear the selection.
                s.send(Message::PaperClicked);
            }
            false
        }
    });

    let mut surface = Group::new(0, 0, 0, 0, None);

    let name = text_frame(resume.name);
    let role = text_frame(resume.role);

    let mut rule = Frame::new(0, 0, 0, 0, None);
    rule.set_frame(FrameType::FlatBox);
    rule.set_color(rule_color());

    let contact = build_sidebar_block("CONTACT", &resume.contact.join("\n"));
    let skills = build_sidebar_block("SKILLS", &resume.skills.join("\n"));

    let summary = build_block(
        resume.summary_id,
        Some("SUMMARY"),
        None,
        None,
        resume.summary,
        sender,
    );

    let exp_heading = text_frame("EXPERIENCE");
    let experience = resume
        .experience
        .iter()
        .map(|item| {
            build_block(
                item.id,
                None,
                Some(item.company),
                Some(&format!("{}  |  {}", item.title, item.period)),
                &bullet_text(item.bullets),
                sender,
            )
        })
        .collect();

    let edu_heading = text_frame("EDUCATION");
    let education = resume
        .education
        .iter()
        .map(|item| {
            build_block(
                item.id,
                None,
                Some(item.school),
                Some(&format!("{}  |  {}", item.degree, item.period)),
                item.note,
                sender,
            )
        })
        .collect();

    surface.end();
    surface.set_frame(FrameType::BorderBox);
    surface.set_color(paper_color());

    scroll.end();

    PaperWidgets {
        scroll,
        surface,
        name,
        role,
        rule,
        contact,
        skills,
        summary,
        exp_heading,
        experience,
        edu_heading,
        education,
    }
}

struct BlockFonts {
    body: Font,
    bold: Font,
    ink: Color,
}

/// Measured block height; placement uses the same formulas, so the two
/// always agree.
fn block_height(block: &BlockWidgets, m: &PaperMetrics, px: &dyn Fn(i32) -> i32) -> i32 {
    let mut h = 2 * px(m.block_pad);
    if block.kicker.is_some() {
        h += text_h(px(m.section_title_size)) + px(m.heading_gap);
    }
    if block.primary.is_some() {
        h += text_h(px(m.company_size));
    }
    if block.meta.is_some() {
        h += text_h(px(m.detail_size)) + px(m.heading_gap) / 2;
    }
    h + block.body_lines * px(m.line_height)
}

fn sidebar_height(block: &SidebarBlock, m: &PaperMetrics, px: &dyn Fn(i32) -> i32) -> i32 {
    text_h(px(m.section_title_size)) + px(m.heading_gap) + block.body_lines * px(m.line_height)
}

fn place_text(frame: &mut Frame, x: i32, y: i32, w: i32, size: i32, font: Font, color: Color) -> i32 {
    let h = text_h(size);
    frame.resize(x, y, w, h);
    frame.set_label_size(size);
    frame.set_label_font(font);
    frame.set_label_color(color);
    h
}

/// Place one block. The group is resized before its children so the
/// children's explicit geometry is final.
fn place_block(
    block: &mut BlockWidgets,
    x: i32,
    y: i32,
    w: i32,
    m: &PaperMetrics,
    px: &dyn Fn(i32) -> i32,
    fonts: &BlockFonts,
) -> i32 {
    let total = block_height(block, m, px);
    block.group.resize(x, y, w, total);

    let pad = px(m.block_pad);
    let inner_x = x + pad;
    let inner_w = w - 2 * pad;
    let mut cy = y + pad;

    if let Some(kicker) = block.kicker.as_mut() {
        cy += place_text(kicker, inner_x, cy, inner_w, px(m.section_title_size), fonts.bold, fonts.ink);
        cy += px(m.heading_gap);
    }
    if let Some(primary) = block.primary.as_mut() {
        cy += place_text(primary, inner_x, cy, inner_w, px(m.company_size), fonts.bold, fonts.ink);
    }
    if let Some(meta) = block.meta.as_mut() {
        cy += place_text(meta, inner_x, cy, inner_w, px(m.detail_size), fonts.body, fonts.ink);
        cy += px(m.heading_gap) / 2;
    }

    let body_h = block.body_lines * px(m.line_height);
    block.body.resize(inner_x, cy, inner_w, body_h);
    block.body.set_label_size(px(m.body_size));
    block.body.set_label_font(fonts.body);
    block.body.set_label_color(fonts.ink);

    total
}

fn place_sidebar_block(
    block: &mut SidebarBlock,
    x: i32,
    y: i32,
    w: i32,
    m: &PaperMetrics,
    px: &dyn Fn(i32) -> i32,
    fonts: &BlockFonts,
) -> i32 {
    let mut cy = y;
    cy += place_text(&mut block.title, x, cy, w, px(m.section_title_size), fonts.bold, fonts.ink);
    cy += px(m.heading_gap);

    let body_h = block.body_lines * px(m.line_height);
    block.body.resize(x, cy, w, body_h);
    block.body.set_label_size(px(m.skill_size));
    block.body.set_label_font(fonts.body);
    block.body.set_label_color(fonts.ink);
    cy += body_h;

    cy - y
}

/// Re-place every paper widget from the scaled metric table. `style` scales
/// the table (proportional sizing), `zoom` scales the whole surface on top
/// of it, anchored top-center in the scroll region.
pub fn layout_paper(paper: &mut PaperWidgets, style: &DocumentStyle, zoom: ZoomLevel) {
    let m = PaperMetrics::BASE.scaled(style.scale_factor());
    let z = zoom.scale();
    let px = move |v: i32| -> i32 { ((f64::from(v) * z).round() as i32).max(1) };

    let fonts = BlockFonts {
        body: face(style.family),
        bold: face_bold(style.family),
        ink: {
            let (r, g, b) = style.color.rgb();
            Color::from_rgb(r, g, b)
        },
    };

    let page_w = px(PAGE_WIDTH);
    let x0 = paper.scroll.x() + ((paper.scroll.w() - page_w) / 2).max(0);
    let y0 = paper.scroll.y() + PAGE_TOP_GAP;

    let margin = px(m.page_margin);
    let sidebar_w = px(m.sidebar_width);
    let col_gap = px(m.column_gap);
    let main_x = x0 + margin;
    let main_w = page_w - 2 * margin - sidebar_w - col_gap;
    let side_x = x0 + page_w - margin - sidebar_w + px(m.sidebar_padding) / 2;
    let side_w = sidebar_w - px(m.sidebar_padding);

    // Measure pass: the surface must take its final size before any child
    // is placed, because a group resize repositions its children.
    let header_h = text_h(px(m.name_size)) + text_h(px(m.role_size)) + px(m.header_gap);
    let mut main_h = block_height(&paper.summary, &m, &px) + px(m.section_gap);
    main_h += text_h(px(m.section_title_size)) + px(m.heading_gap);
    for block in &paper.experience {
        main_h += block_height(block, &m, &px) + px(m.entry_gap);
    }
    main_h += px(m.section_gap) - px(m.entry_gap);
    main_h += text_h(px(m.section_title_size)) + px(m.heading_gap);
    for block in &paper.education {
        main_h += block_height(block, &m, &px) + px(m.entry_gap);
    }
    let side_h = sidebar_height(&paper.contact, &m, &px)
        + px(m.section_gap)
        + sidebar_height(&paper.skills, &m, &px);

    let content_h = main_h.max(side_h);
    let page_h = px(PAGE_HEIGHT).max(margin + header_h + content_h + margin);
    paper.surface.resize(x0, y0, page_w, page_h);

    // Placement pass.
    let mut cy = y0 + margin;
    cy += place_text(&mut paper.name, main_x, cy, page_w - 2 * margin, px(m.name_size), fonts.bold, fonts.ink);
    cy += place_text(&mut paper.role, main_x, cy, page_w - 2 * margin, px(m.role_size), fonts.body, fonts.ink);
    cy += px(m.header_gap);
    let content_top = cy;

    let mut my = content_top;
    my += place_block(&mut paper.summary, main_x, my, main_w, &m, &px, &fonts);
    my += px(m.section_gap);

    my += place_text(&mut paper.exp_heading, main_x, my, main_w, px(m.section_title_size), fonts.bold, fonts.ink);
    my += px(m.heading_gap);
    for block in &mut paper.experience {
        my += place_block(block, main_x, my, main_w, &m, &px, &fonts);
        my += px(m.entry_gap);
    }
    my += px(m.section_gap) - px(m.entry_gap);

    my += place_text(&mut paper.edu_heading, main_x, my, main_w, px(m.section_title_size), fonts.bold, fonts.ink);
    my += px(m.heading_gap);
    for block in &mut paper.education {
        my += place_block(block, main_x, my, main_w, &m, &px, &fonts);
        my += px(m.entry_gap);
    }

    let mut sy = content_top;
    sy += place_sidebar_block(&mut paper.contact, side_x, sy, side_w, &m, &px, &fonts);
    sy += px(m.section_gap);
    place_sidebar_block(&mut paper.skills, side_x, sy, side_w, &m, &px, &fonts);

    let rule_x = side_x - col_gap / 2 - px(m.sidebar_padding) / 2;
    paper.rule.resize(rule_x, content_top, px(m.sidebar_rule), content_h);

    paper.scroll.scroll_to(0, 0);
    paper.scroll.redraw();
}

/// Mark the selected block, if any, and reset the rest to plain paper.
pub fn apply_selection(paper: &mut PaperWidgets, selected: Option<SectionId>) {
    for block in paper.blocks_mut() {
        if selected == Some(block.id) {
            block.group.set_frame(FrameType::BorderBox);
            block.group.set_color(selection_tint());
        } else {
            block.group.set_frame(FrameType::FlatBox);
            block.group.set_color(paper_color());
        }
    }
    paper.surface.redraw();
}
