mod app;
mod tui;
mod ui;

use std::io::{self, stdout};

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, style::Style, widgets::Widget};
use reclaim_core::{ApiClient, Phase};

use app::{Action, AppMode, AppState, ViewMode};
use tui::{AppEvent, EventHandler, handle_key};
use ui::{
    AppLayout, ConfirmCleanupView, ErrorView, FileListView, Footer, Header, HelpView, LoadingView,
    StatusBar, Theme,
};

/// RECLAIM - Interactive disk cleanup dashboard
#[derive(Parser, Debug)]
#[command(name = "reclaim")]
#[command(about = "An interactive terminal dashboard for inspecting and cleaning up disk storage")]
#[command(version)]
struct Args {
    /// Base URL of the cleanup backend
    #[arg(default_value = "http://localhost:8080")]
    backend: String,

    /// Minimum file size in MB for the large-files view
    #[arg(short, long, default_value_t = 100)]
    min_size_mb: u64,

    /// Backend category for the temp-files view
    #[arg(short, long, default_value = "temp")]
    category: String,

    /// Maximum number of files per fetch
    #[arg(short, long, default_value_t = 50)]
    limit: usize,
}

fn main() -> Result<()> {
    // Logs go to stderr, controlled by RUST_LOG
    env_logger::init();
    color_eyre::install()?;

    let args = Args::parse();
    let client = ApiClient::new(&args.backend)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run app
    let result = run_app(&mut terminal, client, &args);

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: ApiClient,
    args: &Args,
) -> Result<()> {
    let theme = Theme::default();
    let mut state = AppState::new(
        client,
        args.min_size_mb * 1_000_000,
        args.category.clone(),
        args.limit,
    );
    let event_handler = EventHandler::new(50); // 50ms tick rate

    // Initial fetch for the starting view
    state.start_fetch(ViewMode::LargeFiles);

    loop {
        // Apply completed backend work
        state.poll_fetch();
        state.poll_cleanup();
        state.ensure_views_computed();

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();
            let layout = AppLayout::new(area);

            // Background
            frame
                .buffer_mut()
                .set_style(area, Style::default().bg(theme.bg));

            // Update visible height for scrolling
            state.visible_height = layout.list.height as usize;

            Header::new(&state, &theme).render(layout.header, frame.buffer_mut());
            StatusBar::new(&state, &theme).render(layout.status_bar, frame.buffer_mut());

            // Main content
            let pane = state.pane();
            match &pane.session.phase {
                Phase::Loading => {
                    LoadingView::new(state.spinner_frame, "Scanning backend catalog...", &theme)
                        .render(layout.list, frame.buffer_mut());
                }
                Phase::Error(message) => {
                    ErrorView::new(message, &theme).render(layout.list, frame.buffer_mut());
                }
                Phase::Ready | Phase::Scanning => {
                    FileListView::new(
                        &pane.computed.rows,
                        state.view_mode,
                        pane.computed.totals.total_bytes,
                        pane.cursor.selected_index,
                        pane.cursor.scroll_offset,
                        &pane.session.selection,
                        &theme,
                    )
                    .render(layout.list, frame.buffer_mut());
                }
            }

            // Overlays
            if state.mode == AppMode::Help {
                HelpView::new(&theme).render(area, frame.buffer_mut());
            }
            if state.mode == AppMode::ConfirmCleanup
                && let Some(items) = &state.pending_cleanup
            {
                ConfirmCleanupView::new(items, &theme).render(area, frame.buffer_mut());
            }

            Footer::new(state.mode, state.view_mode, &theme, &state.session_stats)
                .render(layout.footer, frame.buffer_mut());
        })?;

        // Handle events
        match event_handler.next()? {
            AppEvent::Key(key) => {
                let action = handle_key(key, state.mode);
                handle_action(&mut state, action);
            }
            AppEvent::Resize => {
                // Terminal will redraw on next loop
            }
            AppEvent::Tick => {
                state.tick_spinner();
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(state: &mut AppState, action: Action) {
    match action {
        Action::MoveUp => state.move_up(),
        Action::MoveDown => state.move_down(),
        Action::PageUp => state.page_up(),
        Action::PageDown => state.page_down(),
        Action::GoToFirst => state.go_to_first(),
        Action::GoToLast => state.go_to_last(),
        Action::NextView => state.next_view(),
        Action::PrevView => state.prev_view(),
        Action::ToggleSelect => state.toggle_select(),
        Action::SelectAllFiltered => state.select_all_filtered(),
        Action::ClearSelection => state.clear_selection(),
        Action::RequestCleanup => state.request_cleanup(),
        Action::ConfirmCleanup => state.confirm_cleanup(),
        Action::CancelCleanup => state.cancel_cleanup(),
        Action::Refresh => state.refresh(),
        Action::CycleSortKey => state.cycle_sort_key(),
        Action::ToggleSortOrder => state.toggle_sort_order(),
        Action::CycleKindFilter => state.cycle_kind_filter(),
        Action::StartSearch => state.start_search(),
        Action::SearchChar(c) => state.search_push(c),
        Action::SearchBackspace => state.search_pop(),
        Action::CommitSearch => state.commit_search(),
        Action::CancelSearch => state.cancel_search(),
        Action::ShowHelp => state.show_help(),
        Action::HideHelp => state.hide_help(),
        Action::Quit => state.quit(),
        Action::Tick => {}
    }
}
