//! Runtime: unified event loop for the page player.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop that handles input and animation ticks.
//! - Route keys to the page view and execute returned `Effect`s.
//! - Render only when `App` marks itself dirty.
//!
//! Event Loop Strategy
//! - A dedicated input thread blocks on `crossterm::event::read()` and
//!   forwards events over a channel, keeping `poll()` and `read()` on one
//!   OS thread for reliable delivery across terminals.
//! - Smart ticking: a frame-rate interval (33 ms) only while something is
//!   animating; a long interval (1 s) when idle. `App::update(Msg::Tick)`
//!   marks dirty only on visible changes.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use std::time::Duration;
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

use marquee_types::{Effect, Msg, PageSpec};

use crate::app::App;
use crate::ui::components::{Component, PageView};

/// Spawn a dedicated input thread that blocks on terminal input and
/// forwards `crossterm` events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(100);
    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    tracing::warn!("failed to read terminal event: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Renders a frame by delegating to the page view.
fn render(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    page_view: &mut PageView,
) -> Result<()> {
    terminal.draw(|frame| page_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the input
/// thread, runs the event loop, and cleans up on exit.
pub async fn run_app(page: PageSpec, reduced_motion: bool) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut page_view = PageView;
    let mut app = App::new(page, reduced_motion);
    let mut terminal = setup_terminal()?;

    // Seed viewport geometry and initial visibility before the first frame;
    // sections already in view at launch animate without any scrolling.
    if let Ok((width, height)) = crossterm::terminal::size() {
        app.update(&Msg::Resize(width, height));
    }

    // Ticking strategy: frame rate while animating, slow when idle.
    let fast_interval = Duration::from_millis(33);
    let idle_interval = Duration::from_millis(1000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut page_view)?;

    loop {
        let target_interval = if app.is_animating() { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut effects: Vec<Effect> = Vec::new();
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                match maybe_event {
                    Some(Event::Key(key_event)) => {
                        if key_event.code == KeyCode::Char('c')
                            && key_event.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            break;
                        }
                        effects.extend(page_view.handle_key_events(&mut app, key_event));
                    }
                    Some(Event::Resize(width, height)) => {
                        effects.extend(app.update(&Msg::Resize(width, height)));
                    }
                    Some(_) => {}
                    None => {
                        // Input channel closed; shut down cleanly.
                        break;
                    }
                }
            }

            _ = ticker.tick() => {
                effects.extend(app.update(&Msg::Tick));
            }

            _ = signal::ctrl_c() => { break; }
        }

        if effects.contains(&Effect::Quit) {
            break;
        }

        if app.take_dirty() {
            render(&mut terminal, &mut app, &mut page_view)?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}
