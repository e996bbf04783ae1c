use std::io;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use engine_logging::{engine_info, engine_warn};
use picker_core::{update, AppState, Character, FinishOutcome, Msg};
use picker_engine::{EngineEvent, EngineHandle};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::config::AppConfig;
use super::effects::{map_characters, EffectRunner};
use super::{logging, ui};

/// Dispatch id reserved for the load that seeds the list before the UI starts.
const INITIAL_LOAD_DISPATCH: u64 = 0;
const INPUT_POLL: Duration = Duration::from_millis(50);
const TOAST_TTL: Duration = Duration::from_secs(4);

pub fn run_app() -> anyhow::Result<FinishOutcome> {
    let config = AppConfig::load();
    logging::initialize(config.log_destination, &config.log_path);
    for warning in &config.warnings {
        engine_warn!("{}", warning);
    }
    engine_info!(
        "picker starting: catalog={} debounce={:?}",
        config.search.base_url,
        config.debounce
    );

    let engine = EngineHandle::new(config.search.clone()).context("failed to build http client")?;
    let seed = initial_load(&engine, config.search.request_timeout + Duration::from_secs(1))?;
    engine_info!("initial load returned {} characters", seed.len());

    let mut state = AppState::new(seed, config.debounce);
    let mut runner = EffectRunner::new(engine);
    let mut terminal = TerminalSession::new().context("failed to set up terminal")?;
    event_loop(&mut terminal, &mut state, &mut runner)
}

fn initial_load(engine: &EngineHandle, timeout: Duration) -> anyhow::Result<Vec<Character>> {
    engine.search(INITIAL_LOAD_DISPATCH, None);
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            bail!("initial character load timed out after {:?}", timeout);
        }
        match engine.recv_timeout(remaining) {
            Some(EngineEvent::SearchCompleted { dispatch, result })
                if dispatch == INITIAL_LOAD_DISPATCH =>
            {
                let records = result.context("initial character load failed")?;
                return Ok(map_characters(records));
            }
            Some(EngineEvent::SearchCompleted { dispatch, .. }) => {
                engine_warn!("ignoring dispatch {} during initial load", dispatch);
            }
            None => bail!("initial character load timed out after {:?}", timeout),
        }
    }
}

struct ToastClock {
    id: u64,
    expires_at: Instant,
}

fn event_loop(
    terminal: &mut TerminalSession,
    state: &mut AppState,
    runner: &mut EffectRunner,
) -> anyhow::Result<FinishOutcome> {
    let mut toast: Option<ToastClock> = None;
    let mut force_redraw = true;

    loop {
        let now = Instant::now();
        for msg in runner.poll(now) {
            dispatch(state, runner, msg);
        }

        match (state.notification().map(|n| n.id), &toast) {
            (Some(id), Some(clock)) if clock.id == id => {
                if clock.expires_at <= now {
                    toast = None;
                    dispatch(state, runner, Msg::NotificationDismissed);
                }
            }
            (Some(id), _) => {
                toast = Some(ToastClock {
                    id,
                    expires_at: now + TOAST_TTL,
                });
            }
            (None, _) => toast = None,
        }

        if let Some(outcome) = runner.take_finish() {
            return Ok(outcome);
        }

        if state.consume_dirty() || force_redraw {
            force_redraw = false;
            let view = state.view();
            terminal.draw(|frame| ui::render::draw(frame, &view))?;
        }

        let timeout = runner
            .next_timeout(Instant::now())
            .map_or(INPUT_POLL, |next| next.min(INPUT_POLL));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let view = state.view();
                    if let Some(msg) = ui::keys::map_key(key, &view) {
                        dispatch(state, runner, msg);
                    }
                }
                Event::Resize(_, _) => force_redraw = true,
                _ => {}
            }
        }
    }
}

fn dispatch(state: &mut AppState, runner: &mut EffectRunner, msg: Msg) {
    let current = std::mem::take(state);
    let (next, effects) = update(current, msg);
    *state = next;
    runner.enqueue(effects, Instant::now());
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut ratatui::Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
