//! Breakout entry point
//!
//! Opens the window, initialises the renderer and runs the game loop:
//! poll events, tick the simulation, draw.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::monitor::MonitorHandle;
use winit::window::{Window, WindowId};

use breakout::platform::{FrameClock, KeyboardState};
use breakout::renderer::{RenderState, SurfaceAction, shapes, surface_action};
use breakout::sim::{GameEvent, GameState, tick};
use breakout::{InitError, RunError, Settings, Tuning, ui};

/// Window, GPU state and everything needed to run frames
struct Game {
    window: Arc<Window>,
    render_state: RenderState,
    state: GameState,
    keys: KeyboardState,
    clock: FrameClock,
}

struct App {
    settings: Settings,
    /// Starting state, waiting for the window to exist
    pending: Option<GameState>,
    game: Option<Game>,
    error: Option<RunError>,
}

impl App {
    fn new(settings: Settings, state: GameState) -> Self {
        Self {
            settings,
            pending: Some(state),
            game: None,
            error: None,
        }
    }

    fn create_game(
        &self,
        event_loop: &ActiveEventLoop,
        state: GameState,
    ) -> Result<Game, InitError> {
        let (width, height) = (state.tuning.window_width, state.tuning.window_height);
        let size = LogicalSize::new(width, height);
        let mut attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(size)
            .with_resizable(false);
        if let Some(monitor) = event_loop.primary_monitor() {
            attributes = attributes.with_position(centered_position(&monitor, size));
        }

        let window = Arc::new(event_loop.create_window(attributes)?);
        log::info!("Window created: {width}x{height}");

        let render_state = pollster::block_on(RenderState::new(
            window.clone(),
            &self.settings,
            (width, height),
        ))?;

        log::info!("Game initialized with {} blocks", state.blocks.len());

        Ok(Game {
            window,
            render_state,
            state,
            keys: KeyboardState::new(),
            clock: FrameClock::new(),
        })
    }

    /// One frame: tick, report the end of the game if it came, draw
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        let dt = game.clock.tick();
        tick(&mut game.state, &game.keys.snapshot(), dt);

        let terminal: Vec<GameEvent> = game
            .state
            .drain_events()
            .into_iter()
            .filter(GameEvent::is_terminal)
            .collect();
        if !terminal.is_empty() {
            finish(&game.state, &terminal, self.settings.wait_for_enter);
            event_loop.exit();
            return;
        }

        let vertices = shapes::scene(&game.state);
        if let Err(e) = game.render_state.render(&vertices) {
            match surface_action(&e) {
                SurfaceAction::Reconfigure => game.render_state.reconfigure(),
                SurfaceAction::Skip => log::warn!("Render error: {:?}", e),
                SurfaceAction::Fatal => {
                    log::error!("Out of memory!");
                    self.error = Some(RunError::OutOfMemory);
                    event_loop.exit();
                }
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = self.pending.take() else {
            return;
        };
        match self.create_game(event_loop, state) {
            Ok(mut game) => {
                game.clock.reset();
                self.game = Some(game);
                log::info!("Breakout running!");
            }
            Err(err) => {
                self.error = Some(err.into());
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(game) = &self.game {
            game.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                game.state.quit();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                game.render_state.resize(size.width, size.height);
            }
            WindowEvent::Focused(false) => game.keys.release_all(),
            WindowEvent::KeyboardInput { event, .. } => {
                game.keys.on_key(event.physical_key, event.state);
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }
}

/// Top-left position that centers a window of `size` on `monitor`
fn centered_position(monitor: &MonitorHandle, size: LogicalSize<f32>) -> PhysicalPosition<i32> {
    let window = size.to_physical::<i32>(monitor.scale_factor());
    let screen = monitor.size();
    let origin = monitor.position();
    PhysicalPosition::new(
        origin.x + (screen.width as i32 - window.width) / 2,
        origin.y + (screen.height as i32 - window.height) / 2,
    )
}

/// Report the end of the game on the console
fn finish(state: &GameState, events: &[GameEvent], wait_for_enter: bool) {
    log::info!(
        "Game ended ({:?}) after {} frames, {} blocks left",
        state.phase,
        state.frame,
        state.blocks.remaining()
    );
    match serde_json::to_string(state) {
        Ok(json) => log::debug!("Final state: {json}"),
        Err(e) => log::debug!("Could not serialize final state: {e}"),
    }

    let stdout = io::stdout();
    let stdin = io::stdin();
    let (mut out, mut input) = (stdout.lock(), stdin.lock());
    for event in events {
        if let Err(e) = ui::announce(event, &mut out, &mut input, wait_for_enter) {
            log::warn!("Console prompt failed: {e}");
        }
    }
}

fn run() -> Result<(), RunError> {
    let state = GameState::try_new(Tuning::default())?;

    let event_loop = EventLoop::new().map_err(InitError::from)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(Settings::load(), state);
    event_loop.run_app(&mut app).map_err(InitError::from)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Breakout starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
