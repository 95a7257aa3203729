use fltk::{button::Button, enums::Color, prelude::*};

use crate::app::settings::ThemePreference;
use crate::ui::main_window::MainWidgets;

pub struct Palette {
    pub window_bg: Color,
    pub chrome_bg: Color,
    pub chrome_text: Color,
    pub accent: Color,
    pub accent_text: Color,
    pub panel_bg: Color,
    pub canvas_bg: Color,
}

pub fn palette(theme: ThemePreference) -> Palette {
    match theme {
        ThemePreference::Light => Palette {
            window_bg: Color::from_rgb(240, 240, 240),
            chrome_bg: Color::from_rgb(240, 240, 240),
            chrome_text: Color::from_rgb(30, 30, 30),
            accent: Color::from_rgb(199, 221, 247),
            accent_text: Color::from_rgb(18, 40, 80),
            panel_bg: Color::from_rgb(250, 250, 250),
            canvas_bg: Color::from_rgb(205, 208, 212),
        },
        ThemePreference::Dark => Palette {
            window_bg: Color::from_rgb(25, 25, 25),
            chrome_bg: Color::from_rgb(35, 35, 35),
            chrome_text: Color::from_rgb(220, 220, 220),
            accent: Color::from_rgb(70, 90, 150),
            accent_text: Color::from_rgb(235, 240, 250),
            panel_bg: Color::from_rgb(45, 45, 48),
            canvas_bg: Color::from_rgb(55, 55, 58),
        },
        ThemePreference::Retro => Palette {
            window_bg: Color::from_rgb(192, 192, 192),
            chrome_bg: Color::from_rgb(192, 192, 192),
            chrome_text: Color::from_rgb(0, 0, 0),
            accent: Color::from_rgb(0, 0, 128),
            accent_text: Color::from_rgb(255, 255, 255),
            panel_bg: Color::from_rgb(236, 233, 216),
            canvas_bg: Color::from_rgb(0, 128, 128),
        },
    }
}

/// Restyle the ribbon tab row for the active tab.
pub fn style_tabs(tabs: &mut [Button], theme: ThemePreference, active: usize) {
    let p = palette(theme);
    for (i, tab) in tabs.iter_mut().enumerate() {
        if i == active {
            tab.set_color(p.accent);
            tab.set_label_color(p.accent_text);
        } else {
            tab.set_color(p.chrome_bg);
            tab.set_label_color(p.chrome_text);
        }
        tab.redraw();
    }
}

/// Recolor the whole chrome for the chosen theme. The paper itself stays
/// paper-white; only the surroundings change.
pub fn apply_theme(w: &mut MainWidgets, theme: ThemePreference, active_tab: usize) {
    let p = palette(theme);

    w.window.set_color(p.window_bg);

    for bar in [&mut w.ribbon, &mut w.toolbar, &mut w.status] {
        bar.set_frame(fltk::enums::FrameType::FlatBox);
        bar.set_color(p.chrome_bg);
    }

    let buttons = [
        &mut w.font_trigger,
        &mut w.size_down,
        &mut w.size_trigger,
        &mut w.size_up,
        &mut w.color_trigger,
        &mut w.theme_trigger,
        &mut w.refresh_btn,
        &mut w.download_btn,
        &mut w.zoom_out,
        &mut w.zoom_in,
        &mut w.zoom_fit,
    ];
    for button in buttons {
        button.set_color(p.chrome_bg);
        button.set_label_color(p.chrome_text);
        button.set_selection_color(p.accent);
    }

    for readout in [
        &mut w.word_count,
        &mut w.selection_note,
        &mut w.weather,
        &mut w.zoom_value,
    ] {
        readout.set_label_color(p.chrome_text);
    }

    w.zoom_slider.set_color(p.chrome_bg);
    w.zoom_slider.set_selection_color(p.accent);

    for panel in [
        &mut w.menus.font,
        &mut w.menus.size,
        &mut w.menus.color,
        &mut w.menus.theme,
    ] {
        panel.set_color(p.panel_bg);
    }
    for item in &mut w.menus.plain_items {
        item.set_color(p.panel_bg);
        item.set_label_color(p.chrome_text);
        item.set_selection_color(p.accent);
    }
    for swatch in &mut w.menus.swatch_items {
        // Swatches keep their ink color as background.
        swatch.set_selection_color(p.accent);
    }

    w.paper.scroll.set_color(p.canvas_bg);

    style_tabs(&mut w.ribbon_tabs, theme, active_tab);

    w.window.redraw();
}
