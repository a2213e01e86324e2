/// Terminal host for the spinning wireframe cube
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use spincube_core::{FrameDriver, Mesh, Pipeline, Projection};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod surface;

pub use surface::CharSurface;

/// Main application struct for the terminal host.
///
/// Owns the frame driver and the character surface, and plays the frame
/// scheduler role: one driver tick per loop iteration at a fixed FPS target.
pub struct TerminalApp {
    driver: FrameDriver,
    surface: CharSurface,
    running: bool,
    paused: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        // Leave the top row for the status line.
        let height = height.saturating_sub(1).max(1);

        let projection = Projection::new(width as f32, height as f32, 90.0, 0.1, 1000.0);

        Ok(Self {
            driver: FrameDriver::new(mesh, Pipeline::new(&projection)),
            surface: CharSurface::new(width as usize, height as usize),
            running: true,
            paused: false,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Tick the driver; a degenerate projection drops the frame but
            // never the schedule.
            if !self.paused {
                if let Err(err) = self.driver.tick(&mut self.surface) {
                    log::warn!("frame dropped: {}", err);
                }
            }

            self.present()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                KeyCode::Char('t') => {
                    let trails = self.driver.clear_each_frame();
                    self.driver.set_clear_each_frame(!trails);
                }
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.driver.set_step(self.driver.step() + 0.005);
                }
                KeyCode::Char('-') => {
                    self.driver.set_step((self.driver.step() - 0.005).max(0.0));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 1))?;

        self.surface.draw(&mut stdout)?;

        // Status line overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Spincube | FPS: {:.1} | theta: {:.2} | Space=Pause T=Trails +/-=Speed Q=Quit",
                self.fps,
                self.driver.theta()
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
