pub mod bar_chart;
mod confirm_cleanup;
mod error_view;
mod file_list;
mod footer;
mod header;
mod help;
mod layout;
mod loading;
mod status_bar;
mod theme;

pub use confirm_cleanup::ConfirmCleanupView;
pub use error_view::ErrorView;
pub use file_list::FileListView;
pub use footer::Footer;
pub use header::Header;
pub use help::HelpView;
pub use layout::AppLayout;
pub use loading::LoadingView;
pub use status_bar::StatusBar;
pub use theme::Theme;
