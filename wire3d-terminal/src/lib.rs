/// Terminal front end for the wire3d scene viewer
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use nalgebra::Vector3;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wire3d_core::{
    render_scene, Camera, Edge, Rasterizer, Scene, ScreenPoint, Shape, ROTATION_STEP,
    TRANSLATION_STEP,
};
use wire3d_core::{Axis, Color as ShapeColor};

pub mod renderer;

pub use renderer::CellRenderer;

/// Default world position for freshly authored shapes
const AUTHORED_POSITION: [f64; 3] = [0.0, 0.0, 7.0];

/// Which input surface is live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Rotate/translate the active shape
    View,
    /// Author a new flat shape from mouse clicks
    Draw,
}

/// Main application struct for the terminal viewer
pub struct TerminalApp {
    scene: Scene,
    camera: Camera,
    renderer: CellRenderer,
    mode: Mode,
    draw_points: Vec<(i32, i32)>,
    draw_edges: Vec<Edge>,
    custom_count: usize,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(scene: Scene) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            scene,
            camera: Camera::new(width as u32, height as u32),
            renderer: CellRenderer::new(width as usize, height as usize),
            mode: Mode::View,
            draw_points: Vec::new(),
            draw_edges: Vec::new(),
            custom_count: 0,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 60); // 60 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update();

            // Render
            self.render()?;

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
        match event::read()? {
            Event::Key(KeyEvent { code, .. }) => match self.mode {
                Mode::View => self.handle_view_key(code),
                Mode::Draw => self.handle_draw_key(code),
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) if self.mode == Mode::Draw => {
                self.draw_points.push((column as i32, row as i32));
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_view_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Tab => {
                self.scene.select_next();
            }
            KeyCode::Char('m') => {
                self.mode = Mode::Draw;
                self.draw_points.clear();
                self.draw_edges.clear();
            }
            // Rotation
            KeyCode::Up => self.scene.rotate_active(Axis::X, -ROTATION_STEP),
            KeyCode::Down => self.scene.rotate_active(Axis::X, ROTATION_STEP),
            KeyCode::Left => self.scene.rotate_active(Axis::Y, -ROTATION_STEP),
            KeyCode::Right => self.scene.rotate_active(Axis::Y, ROTATION_STEP),
            KeyCode::Char('q') => self.scene.rotate_active(Axis::Z, -ROTATION_STEP),
            KeyCode::Char('e') => self.scene.rotate_active(Axis::Z, ROTATION_STEP),
            // Translation
            KeyCode::Char('a') => self.scene.translate_active(Axis::X, -TRANSLATION_STEP),
            KeyCode::Char('d') => self.scene.translate_active(Axis::X, TRANSLATION_STEP),
            KeyCode::Char('r') => self.scene.translate_active(Axis::Y, TRANSLATION_STEP),
            KeyCode::Char('f') => self.scene.translate_active(Axis::Y, -TRANSLATION_STEP),
            KeyCode::Char('w') => self.scene.translate_active(Axis::Z, TRANSLATION_STEP),
            KeyCode::Char('s') => self.scene.translate_active(Axis::Z, -TRANSLATION_STEP),
            _ => {}
        }
    }

    fn handle_draw_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Char('m') => {
                // Abandon the pending outline
                self.mode = Mode::View;
            }
            KeyCode::Char('c') => {
                if self.draw_points.len() >= 2 {
                    let end = self.draw_points.len() - 1;
                    self.draw_edges.push((end - 1, end));
                }
            }
            KeyCode::Char('d') => self.finish_drawing(),
            _ => {}
        }
    }

    /// Turn the pending clicks into a shape; fewer than 3 clicks is a no-op
    fn finish_drawing(&mut self) {
        let name = format!("Custom {}", self.custom_count + 1);
        let Some(mut shape) = Shape::from_screen_outline(
            name,
            &self.draw_points,
            &self.draw_edges,
            self.camera.width,
            self.camera.height,
            ShapeColor::RED,
        ) else {
            return;
        };

        shape.pose.position =
            Vector3::new(AUTHORED_POSITION[0], AUTHORED_POSITION[1], AUTHORED_POSITION[2]);
        self.scene.push(shape); // becomes the active shape
        self.custom_count += 1;
        self.draw_points.clear();
        self.draw_edges.clear();
        self.mode = Mode::View;
    }

    fn update(&mut self) {
        if self.mode == Mode::View {
            self.scene.apply_spin();
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();

        match self.mode {
            Mode::View => render_scene(&self.scene, &self.camera, &mut self.renderer),
            Mode::Draw => self.render_pending_outline(),
        }

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut stdout)?;

        self.draw_hud(&mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    /// Draw the in-progress outline in plain 2D: markers for clicks, lines
    /// for explicitly connected pairs
    fn render_pending_outline(&mut self) {
        for &(a, b) in &self.draw_edges {
            let start = self.draw_points[a];
            let end = self.draw_points[b];
            self.renderer.draw_line(
                ScreenPoint::new(start.0, start.1),
                ScreenPoint::new(end.0, end.1),
                ShapeColor::BLUE,
            );
        }
        for &(x, y) in &self.draw_points {
            self.renderer
                .draw_marker(ScreenPoint::new(x, y), ShapeColor::RED);
        }
    }

    fn draw_hud<W: Write>(&self, stdout: &mut W) -> io::Result<()> {
        let status = match self.mode {
            Mode::View => {
                let active = match (self.scene.active_name(), self.scene.active_index()) {
                    (Some(name), Some(index)) => {
                        format!("{} ({}/{})", name, index + 1, self.scene.len())
                    }
                    _ => "none".to_string(),
                };
                format!(
                    "wire3d | FPS: {:.1} | Active: {} | Mode: VIEW | Tab=Switch M=Draw Esc=Quit",
                    self.fps, active
                )
            }
            Mode::Draw => format!(
                "wire3d | Mode: DRAW ({} points) | Click=Add Point C=Connect D=Done M=Back Esc=Quit",
                self.draw_points.len()
            ),
        };

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(status),
            ResetColor
        )?;
        Ok(())
    }
}
