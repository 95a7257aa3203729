use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::{Flex, FlexType, Group},
    prelude::*,
    valuator::HorNiceSlider,
    window::Window,
};

use crate::app::dropdowns::MenuId;
use crate::app::messages::Message;
use crate::app::resume::Resume;
use crate::app::settings::ThemePreference;
use crate::app::typography::{FontChoice, InkColor, SIZE_CHOICES};
use crate::app::zoom::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::ui::paper::{self, PaperWidgets};

pub const WINDOW_WIDTH: i32 = 1180;
pub const WINDOW_HEIGHT: i32 = 900;

const RIBBON_HEIGHT: i32 = 34;
const TOOLBAR_HEIGHT: i32 = 46;
const STATUS_HEIGHT: i32 = 28;

const RIBBON_TABS: [&str; 5] = ["Home", "Insert", "Layout", "Review", "View"];

// Toolbar geometry. Panel positions are derived from the trigger layout:
// margins of 8, a pad of 6, and the fixed widths below.
const FONT_TRIGGER_X: i32 = 8;
const SIZE_TRIGGER_X: i32 = 198;
const COLOR_TRIGGER_X: i32 = 294;
const THEME_TRIGGER_X: i32 = 364;
const PANEL_Y: i32 = RIBBON_HEIGHT + TOOLBAR_HEIGHT + 2;
const PANEL_ITEM_H: i32 = 28;

pub struct MenuPanels {
    pub font: Group,
    pub size: Group,
    pub color: Group,
    pub theme: Group,
    pub plain_items: Vec<Button>,
    pub swatch_items: Vec<Button>,
}

impl MenuPanels {
    pub fn group_mut(&mut self, id: MenuId) -> &mut Group {
        match id {
            MenuId::Font => &mut self.font,
            MenuId::Size => &mut self.size,
            MenuId::Color => &mut self.color,
            MenuId::Theme => &mut self.theme,
        }
    }

    pub fn hide_all(&mut self) {
        for id in MenuId::ALL {
            self.group_mut(id).hide();
        }
    }

    pub fn show_only(&mut self, id: MenuId) {
        self.hide_all();
        self.group_mut(id).show();
    }
}

pub struct MainWidgets {
    pub window: Window,
    pub ribbon: Flex,
    pub ribbon_tabs: Vec<Button>,
    pub toolbar: Flex,
    pub font_trigger: Button,
    pub size_down: Button,
    pub size_trigger: Button,
    pub size_up: Button,
    pub color_trigger: Button,
    pub theme_trigger: Button,
    pub refresh_btn: Button,
    pub download_btn: Button,
    pub status: Flex,
    pub word_count: Frame,
    pub selection_note: Frame,
    pub weather: Frame,
    pub zoom_out: Button,
    pub zoom_slider: HorNiceSlider,
    pub zoom_in: Button,
    pub zoom_fit: Button,
    pub zoom_value: Frame,
    pub menus: MenuPanels,
    pub paper: PaperWidgets,
}

fn tool_button(label: &str, sender: &Sender<Message>, msg: Message) -> Button {
    let mut button = Button::new(0, 0, 0, 0, None);
    button.set_label(label);
    button.set_frame(FrameType::FlatBox);
    button.set_callback({
        let s = *sender;
        move |_| s.send(msg.clone())
    });
    button
}

fn readout_frame(label: &str) -> Frame {
    let mut frame = Frame::new(0, 0, 0, 0, None);
    frame.set_label(label);
    frame.set_align(Align::Inside | Align::Left);
    frame.set_label_size(12);
    frame
}

fn panel_item(x: i32, y: i32, w: i32, label: &str, sender: &Sender<Message>, msg: Message) -> Button {
    let mut button = Button::new(x, y, w, PANEL_ITEM_H - 2, None);
    button.set_label(label);
    button.set_frame(FrameType::FlatBox);
    button.set_align(Align::Inside | Align::Left);
    button.set_callback({
        let s = *sender;
        move |_| s.send(msg.clone())
    });
    button
}

fn build_panel(x: i32, w: i32, rows: i32) -> Group {
    let mut panel = Group::new(x, PANEL_Y, w, rows * PANEL_ITEM_H + 10, None);
    panel.set_frame(FrameType::BorderBox);
    panel
}

fn build_menu_panels(sender: &Sender<Message>) -> MenuPanels {
    let mut plain_items = Vec::new();
    let mut swatch_items = Vec::new();

    let mut font = build_panel(FONT_TRIGGER_X, 190, FontChoice::ALL.len() as i32);
    for (i, family) in FontChoice::ALL.into_iter().enumerate() {
        plain_items.push(panel_item(
            FONT_TRIGGER_X + 4,
            PANEL_Y + 5 + i as i32 * PANEL_ITEM_H,
            182,
            family.label(),
            sender,
            Message::SetFontFamily(family),
        ));
    }
    font.end();
    font.hide();

    let mut size = build_panel(SIZE_TRIGGER_X, 100, SIZE_CHOICES.len() as i32);
    for (i, choice) in SIZE_CHOICES.into_iter().enumerate() {
        plain_items.push(panel_item(
            SIZE_TRIGGER_X + 4,
            PANEL_Y + 5 + i as i32 * PANEL_ITEM_H,
            92,
            &choice.to_string(),
            sender,
            Message::SetFontSize(choice),
        ));
    }
    size.end();
    size.hide();

    let mut color = build_panel(COLOR_TRIGGER_X, 160, InkColor::ALL.len() as i32);
    for (i, ink) in InkColor::ALL.into_iter().enumerate() {
        let mut swatch = panel_item(
            COLOR_TRIGGER_X + 4,
            PANEL_Y + 5 + i as i32 * PANEL_ITEM_H,
            152,
            ink.label(),
            sender,
            Message::SetInkColor(ink),
        );
        let (r, g, b) = ink.rgb();
        swatch.set_color(Color::from_rgb(r, g, b));
        swatch.set_label_color(Color::from_rgb(245, 245, 245));
        swatch_items.push(swatch);
    }
    color.end();
    color.hide();

    let mut theme = build_panel(THEME_TRIGGER_X, 170, ThemePreference::ALL.len() as i32);
    for (i, pref) in ThemePreference::ALL.into_iter().enumerate() {
        plain_items.push(panel_item(
            THEME_TRIGGER_X + 4,
            PANEL_Y + 5 + i as i32 * PANEL_ITEM_H,
            162,
            &format!("{} {}", pref.icon(), pref.label()),
            sender,
            Message::SetTheme(pref),
        ));
    }
    theme.end();
    theme.hide();

    MenuPanels {
        font,
        size,
        color,
        theme,
        plain_items,
        swatch_items,
    }
}

/// Build the whole window. Colors come later from `theme::apply_theme`;
/// paper geometry comes from the first layout pass.
pub fn build_main_window(resume: &Resume, sender: &Sender<Message>) -> MainWidgets {
    let mut window = Window::new(
        100,
        100,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        "Shiwen Jiang - Resume \u{2022} ResumePad",
    );
    window.set_xclass("ResumePad");

    let mut flex = Flex::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, None);
    flex.set_type(FlexType::Column);
    flex.set_pad(0);

    // Ribbon tab strip.
    let mut ribbon = Flex::new(0, 0, 0, 0, None);
    ribbon.set_type(FlexType::Row);
    ribbon.set_margins(8, 4, 8, 0);
    ribbon.set_pad(2);
    let mut ribbon_tabs = Vec::new();
    for (i, label) in RIBBON_TABS.into_iter().enumerate() {
        let tab = tool_button(label, sender, Message::SelectTab(i));
        ribbon.fixed(&tab, 86);
        ribbon_tabs.push(tab);
    }
    let _ribbon_spacer = Frame::new(0, 0, 0, 0, None);
    ribbon.end();
    flex.fixed(&ribbon, RIBBON_HEIGHT);

    // Formatting toolbar.
    let mut toolbar = Flex::new(0, 0, 0, 0, None);
    toolbar.set_type(FlexType::Row);
    toolbar.set_margins(8, 5, 8, 5);
    toolbar.set_pad(6);

    let font_trigger = tool_button("Serif \u{25be}", sender, Message::ToggleMenu(MenuId::Font));
    toolbar.fixed(&font_trigger, 150);
    let size_down = tool_button("\u{2212}", sender, Message::FontSizeDown);
    toolbar.fixed(&size_down, 28);
    let size_trigger = tool_button("11 \u{25be}", sender, Message::ToggleMenu(MenuId::Size));
    toolbar.fixed(&size_trigger, 56);
    let size_up = tool_button("+", sender, Message::FontSizeUp);
    toolbar.fixed(&size_up, 28);
    let color_trigger = tool_button("A \u{25be}", sender, Message::ToggleMenu(MenuId::Color));
    toolbar.fixed(&color_trigger, 64);
    let theme_trigger = tool_button("Theme \u{25be}", sender, Message::ToggleMenu(MenuId::Theme));
    toolbar.fixed(&theme_trigger, 120);

    let _toolbar_spacer = Frame::new(0, 0, 0, 0, None);

    let refresh_btn = tool_button("Refresh", sender, Message::Refresh);
    toolbar.fixed(&refresh_btn, 96);
    let download_btn = tool_button("Download PDF", sender, Message::DownloadPdf);
    toolbar.fixed(&download_btn, 150);

    toolbar.end();
    flex.fixed(&toolbar, TOOLBAR_HEIGHT);

    // Paper area.
    let paper = paper::build_paper(resume, sender);

    // Status bar: counters left, weather and zoom right.
    let mut status = Flex::new(0, 0, 0, 0, None);
    status.set_type(FlexType::Row);
    status.set_margins(12, 3, 12, 3);
    status.set_pad(8);

    let word_count = readout_frame("");
    status.fixed(&word_count, 110);
    let selection_note = readout_frame("");
    let weather = readout_frame("");
    status.fixed(&weather, 150);

    let zoom_out = tool_button("\u{2212}", sender, Message::ZoomOut);
    status.fixed(&zoom_out, 26);
    let mut zoom_slider = HorNiceSlider::new(0, 0, 0, 0, None);
    zoom_slider.set_bounds(f64::from(MIN_ZOOM), f64::from(MAX_ZOOM));
    zoom_slider.set_step(1.0, 1);
    zoom_slider.set_value(f64::from(DEFAULT_ZOOM));
    zoom_slider.set_callback({
        let s = *sender;
        move |slider| s.send(Message::ZoomTo(slider.value().round() as i32))
    });
    status.fixed(&zoom_slider, 150);
    let zoom_in = tool_button("+", sender, Message::ZoomIn);
    status.fixed(&zoom_in, 26);
    let zoom_fit = tool_button("Fit", sender, Message::ZoomFit);
    status.fixed(&zoom_fit, 54);
    let mut zoom_value = readout_frame("100%");
    zoom_value.set_align(Align::Inside | Align::Right);
    status.fixed(&zoom_value, 56);

    status.end();
    flex.fixed(&status, STATUS_HEIGHT);

    flex.end();

    // Dropdown panels sit above the flex children in draw order.
    let menus = build_menu_panels(sender);

    window.end();
    window.resizable(&flex);

    MainWidgets {
        window,
        ribbon,
        ribbon_tabs,
        toolbar,
        font_trigger,
        size_down,
        size_trigger,
        size_up,
        color_trigger,
        theme_trigger,
        refresh_btn,
        download_btn,
        status,
        word_count,
        selection_note,
        weather,
        zoom_out,
        zoom_slider,
        zoom_in,
        zoom_fit,
        zoom_value,
        menus,
        paper,
    }
}
