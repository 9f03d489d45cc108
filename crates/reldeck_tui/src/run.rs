//! TUI run loop: terminal setup, event handling, draw.
//!
//! Key events are read in a dedicated thread so the main loop never blocks on
//! terminal input; this keeps the UI responsive while a query is in flight.

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use reldeck_core::ChatEvent;
use tokio::sync::mpsc as tokio_mpsc;

use crate::runtime_events::apply_chat_event;
use crate::state::{ChatState, Screen};
use crate::view;

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Run the TUI: receive [ChatEvent]s on `event_rx`, send user queries on Enter
/// via `query_tx`. If `log_rx` is provided, tracing log lines are pushed to the
/// debug traces screen (Ctrl+D).
pub fn run_tui(
    mut event_rx: tokio_mpsc::Receiver<ChatEvent>,
    query_tx: tokio_mpsc::Sender<String>,
    log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = ChatState::new();
    state.push_trace_line("[log] TUI started. Runtime logs (Ctrl+D) show tracing output.".to_string());
    let result = run_loop(&mut terminal, &mut state, &mut event_rx, &query_tx, log_rx);

    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

fn submit_query(state: &mut ChatState, query_tx: &tokio_mpsc::Sender<String>, query: String) {
    let timestamp = Some(Local::now().format("%H:%M").to_string());
    state.push_user(query.clone(), timestamp);
    state.begin_loading();
    let _ = query_tx.try_send(query);
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut ChatState,
    event_rx: &mut tokio_mpsc::Receiver<ChatEvent>,
    query_tx: &tokio_mpsc::Sender<String>,
    mut log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    let (key_tx, key_rx) = mpsc::channel();
    let _reader = std::thread::spawn(move || {
        loop {
            if event::poll(Duration::from_millis(50)).unwrap_or(false)
                && let Ok(ev) = event::read()
            {
                let _ = key_tx.send(ev);
            }
        }
    });

    loop {
        // Drain tracing log lines into debug traces (multi-line logs split up)
        if let Some(ref mut rx) = log_rx {
            while let Ok(line) = rx.try_recv() {
                for l in line.split('\n') {
                    state.push_trace_line(l.to_string());
                }
            }
        }
        // Drain query events from the background task
        while let Ok(event) = event_rx.try_recv() {
            apply_chat_event(state, event);
        }
        if state.auto_scroll {
            state.scroll = 0;
        }

        // Status timeout: clear transient status after 5s
        if !state.status_permanent
            && let Some(set_at) = state.status_set_at
            && set_at.elapsed() > STATUS_TIMEOUT
        {
            state.status.clear();
            state.status_set_at = None;
            state.needs_redraw = true;
        }

        // While loading, redraw every tick so the thinking indicator animates.
        let should_draw = state.needs_redraw || state.is_loading;
        if should_draw {
            state.frame_count = state.frame_count.wrapping_add(1);
            terminal.draw(|f| view::draw(f, state, f.area()))?;
            state.needs_redraw = false;
        }

        if let Ok(ev) = key_rx.try_recv() {
            match ev {
                Event::Key(e) => {
                    if e.kind != KeyEventKind::Press {
                        continue;
                    }
                    match e.code {
                        KeyCode::Char('d') if e.modifiers.contains(KeyModifiers::CONTROL) => {
                            state.screen = match state.screen {
                                Screen::Main => Screen::DebugTraces,
                                Screen::DebugTraces => Screen::Main,
                            };
                            state.needs_redraw = true;
                        }
                        KeyCode::Char('c') if e.modifiers.contains(KeyModifiers::CONTROL) => break,
                        KeyCode::Char('q') if state.input_buffer.is_empty() => break,
                        KeyCode::Esc if state.screen == Screen::DebugTraces => {
                            state.screen = Screen::Main;
                            state.needs_redraw = true;
                        }
                        KeyCode::Up if state.screen == Screen::DebugTraces => {
                            state.trace_scroll_up(1)
                        }
                        KeyCode::Down if state.screen == Screen::DebugTraces => {
                            state.trace_scroll_down(1)
                        }
                        KeyCode::PageUp if state.screen == Screen::DebugTraces => {
                            state.trace_scroll_up(10)
                        }
                        KeyCode::PageDown if state.screen == Screen::DebugTraces => {
                            state.trace_scroll_down(10)
                        }
                        KeyCode::Up if state.screen == Screen::Main => state.scroll_up(1),
                        KeyCode::Down if state.screen == Screen::Main => state.scroll_down(1),
                        KeyCode::PageUp if state.screen == Screen::Main => state.scroll_up(5),
                        KeyCode::PageDown if state.screen == Screen::Main => state.scroll_down(5),
                        KeyCode::Enter if state.screen == Screen::Main => {
                            let line = state.input_take();
                            let trimmed = line.trim();
                            if !trimmed.is_empty() && !state.is_loading {
                                submit_query(state, query_tx, trimmed.to_string());
                            }
                        }
                        KeyCode::Backspace if state.screen == Screen::Main => {
                            state.input_backspace()
                        }
                        KeyCode::Char('u')
                            if e.modifiers.contains(KeyModifiers::CONTROL)
                                && state.screen == Screen::Main =>
                        {
                            state.input_clear_line()
                        }
                        KeyCode::Char('k')
                            if e.modifiers.contains(KeyModifiers::CONTROL)
                                && state.screen == Screen::Main =>
                        {
                            state.input_kill_to_end()
                        }
                        KeyCode::Char('t')
                            if state.input_buffer.is_empty() && state.screen == Screen::Main =>
                        {
                            state.toggle_latest_thought()
                        }
                        KeyCode::Char(c @ '1'..='9')
                            if state.input_buffer.is_empty()
                                && state.screen == Screen::Main
                                && !state.is_loading =>
                        {
                            let digit = (c as u8 - b'0') as usize;
                            if let Some(query) = state.prompt_for_digit(digit) {
                                submit_query(state, query_tx, query);
                            } else {
                                // No prompt for this digit; it starts a typed
                                // query instead.
                                state.input_insert(c);
                            }
                        }
                        KeyCode::Char(c) if state.screen == Screen::Main => state.input_insert(c),
                        KeyCode::Left if state.screen == Screen::Main => state.input_cursor_left(),
                        KeyCode::Right if state.screen == Screen::Main => {
                            state.input_cursor_right()
                        }
                        KeyCode::Home if state.screen == Screen::Main => state.input_cursor_home(),
                        KeyCode::End if state.screen == Screen::Main => state.input_cursor_end(),
                        KeyCode::Delete if state.screen == Screen::Main => state.input_delete(),
                        _ => {}
                    }
                }
                Event::Resize(_, _) => {
                    state.cache_dirty = true;
                    state.needs_redraw = true;
                }
                Event::Mouse(me) => match me.kind {
                    MouseEventKind::ScrollUp => {
                        if state.screen == Screen::DebugTraces {
                            state.trace_scroll_up(3);
                        } else {
                            state.scroll_up(3);
                        }
                        state.needs_redraw = true;
                    }
                    MouseEventKind::ScrollDown => {
                        if state.screen == Screen::DebugTraces {
                            state.trace_scroll_down(3);
                        } else {
                            state.scroll_down(3);
                        }
                        state.needs_redraw = true;
                    }
                    _ => {}
                },
                _ => {}
            }
        } else {
            std::thread::sleep(Duration::from_millis(50));
        }
    }
    Ok(())
}
