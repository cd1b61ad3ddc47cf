/// wire3d Terminal Viewer
///
/// Interactive wireframe scene: a cube and a self-spinning pyramid, plus a
/// draw mode for authoring flat shapes from mouse clicks.
/// Controls (view mode):
///   - Arrow Keys: Rotate X/Y | Q/E: Rotate Z
///   - A/D: Move X | R/F: Move Y | W/S: Move Z
///   - Tab: Switch active shape | M: Draw mode | Esc: Quit

use nalgebra::Vector3;
use std::io;
use wire3d_core::{Color, Scene, Shape};
use wire3d_terminal::TerminalApp;

fn main() -> io::Result<()> {
    let mut scene = Scene::new();

    let mut cube = Shape::cube(Color::BLUE);
    cube.pose.position = Vector3::new(-2.5, 0.0, 7.0);
    scene.push(cube);

    let mut pyramid = Shape::pyramid(Color::GREEN);
    pyramid.pose.position = Vector3::new(2.5, 0.0, 7.0);
    scene.push(pyramid);
    scene.spin_last();

    // Start with the cube under control, leaving the pyramid spinning
    scene.select_next();

    let mut app = TerminalApp::new(scene)?;
    app.run()
}
