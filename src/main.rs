use fltk::app;
use fltk::prelude::*;

use resume_pad::app::messages::Message;
use resume_pad::app::resume::Resume;
use resume_pad::app::settings::AppSettings;
use resume_pad::app::state::AppState;
use resume_pad::app::weather;
use resume_pad::ui::main_window::build_main_window;

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    env_logger::init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let resume = Resume::shiwen_jiang();
    let widgets = build_main_window(&resume, &sender);

    let mut state = AppState::new(widgets, settings, resume, sender);
    state.initialize();
    state.widgets.window.show();

    // One-shot fetch; the result arrives as a WeatherFetched message.
    weather::spawn_fetch(sender);

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            // Any interaction other than a trigger click closes the menus,
            // so a click landing anywhere else never leaves one open.
            if !matches!(msg, Message::ToggleMenu(_)) {
                state.close_menus();
            }

            match msg {
                Message::SetTheme(theme) => state.set_theme(theme),

                Message::ZoomIn => state.zoom_in(),
                Message::ZoomOut => state.zoom_out(),
                Message::ZoomFit => state.zoom_fit(),
                Message::ZoomTo(value) => state.zoom_to(value),

                Message::ToggleMenu(menu) => state.toggle_menu(menu),

                Message::SetFontFamily(family) => state.set_font_family(family),
                Message::SetFontSize(size) => state.set_font_size(size),
                Message::FontSizeUp => state.font_size_up(),
                Message::FontSizeDown => state.font_size_down(),
                Message::SetInkColor(color) => state.set_ink_color(color),

                Message::SelectTab(index) => state.select_tab(index),

                Message::SelectSection(id) => state.select_section(id),
                Message::PaperClicked => state.clear_selection(),

                Message::WeatherFetched(outcome) => state.apply_weather(outcome),

                Message::DownloadPdf => state.download_pdf(),
                Message::Refresh => state.refresh(),
            }
        }
    }
}
