use super::dropdowns::MenuId;
use super::selection::SectionId;
use super::settings::ThemePreference;
use super::typography::{FontChoice, InkColor};
use super::weather::WeatherReport;

/// All messages that can be sent through the FLTK channel.
/// Each control callback sends one of these; the dispatch loop in main
/// handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Theme
    SetTheme(ThemePreference),

    // Zoom
    ZoomIn,
    ZoomOut,
    ZoomFit,
    ZoomTo(i32),

    // Dropdown menus
    ToggleMenu(MenuId),

    // Typography
    SetFontFamily(FontChoice),
    SetFontSize(i32),
    FontSizeUp,
    FontSizeDown,
    SetInkColor(InkColor),

    // Ribbon tabs
    SelectTab(usize),

    // Section selection
    SelectSection(SectionId),
    PaperClicked,

    // Background weather fetch
    WeatherFetched(Result<WeatherReport, String>),

    // Actions
    DownloadPdf,
    Refresh,
}
