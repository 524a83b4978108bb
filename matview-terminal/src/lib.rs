/// Terminal host for the matrix showcase
use crossterm::{
    cursor,
    event,
    execute,
    terminal::{self, SetTitle},
};
use matview_core::{print_showcase, ConfigError, ShowcaseConfig};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod input;
pub mod screen;

pub use input::{KeyboardState, KEY_ESCAPE};
pub use screen::ScreenText;

/// Errors that end the application
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Main application struct for the terminal matrix display
pub struct MatViewApp {
    config: ShowcaseConfig,
    screen: ScreenText,
    keyboard: KeyboardState,
    running: bool,
}

impl MatViewApp {
    pub fn new(config: ShowcaseConfig) -> Self {
        Self {
            screen: ScreenText::new(&config.screen),
            keyboard: KeyboardState::new(),
            running: true,
            config,
        }
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            SetTitle(&self.config.title)
        )?;

        let result = self.main_loop();

        // Cleanup runs every step even if one fails
        let raw_mode = terminal::disable_raw_mode();
        let screen = execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show);

        first_error(result, [raw_mode, screen])
    }

    fn main_loop(&mut self) -> Result<(), AppError> {
        let fps = u64::from(self.config.screen.target_fps.max(1));
        let target_frame_time = Duration::from_millis(1000 / fps);
        log::info!("starting frame loop at {} fps", fps);

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            self.keyboard.begin_frame();
            while event::poll(Duration::from_millis(0))? {
                let event = event::read()?;
                self.keyboard.handle_event(&event);
            }

            // Render
            self.render()?;

            if self.keyboard.is_triggered(KEY_ESCAPE) {
                log::info!("escape pressed, leaving frame loop");
                self.running = false;
            }

            // Frame timing
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }
        }

        Ok(())
    }

    /// Draw one frame of the showcase into `writer`.
    pub fn render_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.screen.clear();
        print_showcase(&mut self.screen, &self.config);
        log::trace!("drawing {} lines", self.screen.len());

        self.screen.draw(writer)?;
        writer.flush()
    }

    fn render(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        self.render_to(&mut stdout)
    }
}

/// The loop's own error wins; otherwise the first failed restore step.
fn first_error(
    result: Result<(), AppError>,
    restore: [io::Result<()>; 2],
) -> Result<(), AppError> {
    result?;
    for step in restore {
        step?;
    }
    Ok(())
}
