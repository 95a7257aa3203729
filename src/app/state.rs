use fltk::{app::Sender, dialog, enums::Color, prelude::*};

use super::dropdowns::{DropdownState, MenuId};
use super::export;
use super::messages::Message;
use super::resume::Resume;
use super::selection::{SectionId, SelectionState};
use super::settings::{AppSettings, ThemePreference};
use super::typography::{DocumentStyle, FontChoice, InkColor};
use super::weather::{self, WeatherReport};
use super::wordcount;
use super::zoom::ZoomLevel;
use crate::ui::main_window::MainWidgets;
use crate::ui::paper;
use crate::ui::theme;

/// Main application coordinator. Owns every piece of view state; the
/// dispatch loop in main calls one method per message.
pub struct AppState {
    pub widgets: MainWidgets,
    pub settings: AppSettings,
    pub resume: Resume,
    pub zoom: ZoomLevel,
    pub style: DocumentStyle,
    pub dropdowns: DropdownState,
    pub selection: SelectionState,
    pub active_tab: usize,
    sender: Sender<Message>,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        settings: AppSettings,
        resume: Resume,
        sender: Sender<Message>,
    ) -> Self {
        Self {
            widgets,
            settings,
            resume,
            zoom: ZoomLevel::default(),
            style: DocumentStyle::default(),
            dropdowns: DropdownState::default(),
            selection: SelectionState::default(),
            active_tab: 0,
            sender,
        }
    }

    /// First paint: theme, paper layout, readouts, control labels.
    pub fn initialize(&mut self) {
        theme::apply_theme(&mut self.widgets, self.settings.theme, self.active_tab);
        self.relayout();
        self.update_word_count();
        self.sync_toolbar();
        self.sync_zoom_controls();
    }

    fn relayout(&mut self) {
        paper::layout_paper(&mut self.widgets.paper, &self.style, self.zoom);
    }

    // --- Theme ---

    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.settings.theme = theme;
        if let Err(e) = self.settings.save() {
            log::warn!("failed to persist theme preference: {}", e);
        }
        theme::apply_theme(&mut self.widgets, theme, self.active_tab);
        self.sync_toolbar();
    }

    // --- Zoom ---

    fn set_zoom(&mut self, zoom: ZoomLevel) {
        if zoom != self.zoom {
            self.zoom = zoom;
            self.relayout();
        }
        self.sync_zoom_controls();
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom.zoom_in());
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom.zoom_out());
    }

    pub fn zoom_fit(&mut self) {
        self.set_zoom(ZoomLevel::fit());
    }

    pub fn zoom_to(&mut self, requested: i32) {
        self.set_zoom(ZoomLevel::new(requested));
    }

    fn sync_zoom_controls(&mut self) {
        self.widgets.zoom_value.set_label(&self.zoom.label());
        self.widgets
            .zoom_slider
            .set_value(f64::from(self.zoom.percent()));
        self.widgets.zoom_slider.redraw();
    }

    // --- Dropdown menus ---

    pub fn toggle_menu(&mut self, menu: MenuId) {
        if self.dropdowns.toggle(menu) {
            self.widgets.menus.show_only(menu);
        } else {
            self.widgets.menus.hide_all();
        }
        self.widgets.window.redraw();
    }

    pub fn close_menus(&mut self) {
        if self.dropdowns.open_menu().is_some() {
            self.dropdowns.close_all();
            self.widgets.menus.hide_all();
            self.widgets.window.redraw();
        }
    }

    // --- Typography ---

    pub fn set_font_family(&mut self, family: FontChoice) {
        if self.style.family != family {
            self.style.family = family;
            self.relayout();
        }
        self.sync_toolbar();
    }

    pub fn set_font_size(&mut self, size: i32) {
        let before = self.style.size;
        self.style.set_size(size);
        if self.style.size != before {
            self.relayout();
        }
        self.sync_toolbar();
    }

    pub fn font_size_up(&mut self) {
        if self.style.bump_size(1) {
            self.relayout();
        }
        self.sync_toolbar();
    }

    pub fn font_size_down(&mut self) {
        if self.style.bump_size(-1) {
            self.relayout();
        }
        self.sync_toolbar();
    }

    pub fn set_ink_color(&mut self, color: InkColor) {
        if self.style.color != color {
            self.style.color = color;
            self.relayout();
        }
        self.sync_toolbar();
    }

    /// Keep trigger labels and bound-sensitive buttons in step with state.
    fn sync_toolbar(&mut self) {
        let w = &mut self.widgets;

        w.font_trigger
            .set_label(&format!("{} \u{25be}", self.style.family.label()));
        w.size_trigger
            .set_label(&format!("{} \u{25be}", self.style.size));

        let (r, g, b) = self.style.color.rgb();
        w.color_trigger.set_label_color(Color::from_rgb(r, g, b));
        w.color_trigger.redraw();

        w.theme_trigger.set_label(&self.settings.theme.trigger_label());

        // The size nudge buttons go dead at the bounds.
        if self.style.at_max_size() {
            w.size_up.deactivate();
        } else {
            w.size_up.activate();
        }
        if self.style.at_min_size() {
            w.size_down.deactivate();
        } else {
            w.size_down.activate();
        }
    }

    // --- Ribbon tabs ---

    pub fn select_tab(&mut self, index: usize) {
        if index >= self.widgets.ribbon_tabs.len() {
            return;
        }
        self.active_tab = index;
        theme::style_tabs(&mut self.widgets.ribbon_tabs, self.settings.theme, index);
    }

    // --- Section selection ---

    pub fn select_section(&mut self, id: SectionId) {
        if self.selection.select(id) {
            paper::apply_selection(&mut self.widgets.paper, self.selection.selected());
            self.notify_selection();
        }
    }

    pub fn clear_selection(&mut self) {
        if self.selection.clear() {
            paper::apply_selection(&mut self.widgets.paper, None);
            self.notify_selection();
        }
    }

    /// The comment panel's seat in this build is the status-bar readout; it
    /// receives every selection change with the block's identifier.
    fn notify_selection(&mut self) {
        let label = match self.selection.selected() {
            Some(id) => match self.resume.section_title(id) {
                Some(title) => format!("Selected: {}", title),
                None => format!("Selected: {}", id),
            },
            None => String::new(),
        };
        self.widgets.selection_note.set_label(&label);
        self.widgets.selection_note.redraw();
    }

    // --- Status readouts ---

    pub fn update_word_count(&mut self) {
        let count = wordcount::count_words(&self.resume.plain_text());
        self.widgets
            .word_count
            .set_label(&wordcount::word_count_label(count));
    }

    /// Weather outcome from the background fetch. Failures are logged and
    /// the readout stays blank.
    pub fn apply_weather(&mut self, outcome: Result<WeatherReport, String>) {
        match outcome {
            Ok(report) => {
                self.widgets.weather.set_label(&report.readout());
                self.widgets.weather.redraw();
            }
            Err(e) => log::warn!("weather fetch failed: {}", e),
        }
    }

    // --- Actions ---

    pub fn download_pdf(&mut self) {
        match export::export_resume(&self.resume) {
            Ok(path) => {
                log::info!("exported resume to {}", path.display());
                dialog::message_default(&format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::warn!("export failed: {}", e);
                dialog::alert_default(&format!("Could not export PDF: {}", e));
            }
        }
    }

    /// Start over as a fresh page load would: every in-memory control
    /// resets, the persisted theme survives, and the weather is re-fetched.
    pub fn refresh(&mut self) {
        self.zoom = ZoomLevel::default();
        self.style = DocumentStyle::default();
        self.dropdowns.close_all();
        self.selection = SelectionState::default();
        self.active_tab = 0;

        self.widgets.menus.hide_all();
        self.widgets.weather.set_label("");
        paper::apply_selection(&mut self.widgets.paper, None);
        self.notify_selection();

        self.initialize();
        weather::spawn_fetch(self.sender);
    }
}
